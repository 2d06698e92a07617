//! CLI module for the study planner.

pub mod commands;
pub mod input;
mod output;
pub mod preflight;

pub use input::{InputProvider, ScriptedInput, TerminalInput};
pub use output::Output;

use clap::{Parser, Subcommand};

/// Study Planner
///
/// Builds a weekly study timetable as a PDF, or writes AI study notes as
/// text, speech or an image. Run without a subcommand to start.
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["planner"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_config_subcommand_with_globals() {
        let cli = Cli::try_parse_from(["planner", "config", "path", "-vv", "-c", "my.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Path
            })
        ));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("my.toml"));
    }
}
