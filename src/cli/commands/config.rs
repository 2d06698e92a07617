//! `planner config` subcommand.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const FALLBACK_EDITOR: &str = "vi";

/// Run the config command.
pub fn run_config(action: &ConfigAction, settings: Settings, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Settings::default_config_path);

    match action {
        ConfigAction::Show => println!("{}", settings_as_toml(&settings)?),
        ConfigAction::Path => println!("{}", config_path.display()),
        ConfigAction::Edit => {
            if !config_path.exists() {
                settings.save_to(&config_path)?;
                Output::info(&format!("Wrote default settings to {}", config_path.display()));
            }
            edit_file(&config_path);
        }
    }

    Ok(())
}

/// Settings as printable TOML, with the API key hidden.
fn settings_as_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(&settings.redacted()).context("Failed to serialize settings")
}

fn editor_from(var: Option<String>) -> String {
    var.filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Open `path` in `$EDITOR` and report how it went.
fn edit_file(path: &Path) {
    let editor = editor_from(std::env::var("EDITOR").ok());
    Output::info(&format!("Editing {} with {}", path.display(), editor));

    match std::process::Command::new(&editor).arg(path).status() {
        Ok(status) if status.success() => Output::success("Settings updated."),
        Ok(status) => Output::warning(&format!("{} exited with {}", editor, status)),
        Err(e) => {
            Output::error(&format!("Could not start {}: {}", editor, e));
            Output::kv("Settings file", &path.display().to_string());
        }
    }
}
