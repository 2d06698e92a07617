//! Configuration settings for the study planner.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the rendered timetable.
pub const TIMETABLE_FILE: &str = "timetable.pdf";
/// File name of spoken notes.
pub const SPEECH_FILE: &str = "spoken_notes.mp3";
/// File name of notes rendered as an image.
pub const IMAGE_FILE: &str = "image_notes.png";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub openai: OpenAISettings,
    pub notes: NotesSettings,
    pub speech: SpeechSettings,
    pub image: ImageSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory the timetable, audio and image files are written to.
    pub output_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

/// OpenAI connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAISettings {
    /// API key. Falls back to `OPENAI_API_KEY` when unset.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OpenAISettings {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout_secs: 300,
        }
    }
}

impl OpenAISettings {
    /// The configured key, or the `OPENAI_API_KEY` environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Notes generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesSettings {
    /// Chat model used to write notes.
    pub model: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    pub temperature: f32,
    /// Prefix for YouTube searches (e.g. the exam level).
    pub video_search_prefix: String,
}

impl Default for NotesSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 4000,
            temperature: 0.7,
            video_search_prefix: "GCSE".to_string(),
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub model: String,
    /// Voice name (alloy, echo, fable, onyx, nova, shimmer).
    pub voice: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            model: "tts-1".to_string(),
            voice: "alloy".to_string(),
        }
    }
}

/// Image notes layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,
    /// Vertical distance between text lines in pixels.
    pub line_height: u32,
    /// Distance of the first line from the top-left corner.
    pub margin: u32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            line_height: 20,
            margin: 10,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PromptSettings {
    /// Path to a TOML file overriding the default prompts.
    pub custom_file: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// A copy safe to print: a configured API key is replaced by a marker.
    pub fn redacted(&self) -> Settings {
        let mut shown = self.clone();
        if shown.openai.api_key.is_some() {
            shown.openai.api_key = Some("<redacted>".to_string());
        }
        shown
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::PlannerError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("planner")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded output directory.
    pub fn output_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.output_dir)
    }

    pub fn timetable_path(&self) -> PathBuf {
        self.output_dir().join(TIMETABLE_FILE)
    }

    pub fn speech_path(&self) -> PathBuf {
        self.output_dir().join(SPEECH_FILE)
    }

    pub fn image_path(&self) -> PathBuf {
        self.output_dir().join(IMAGE_FILE)
    }
}
