//! Error types for the study planner.

use thiserror::Error;

/// Library-level error type for planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Notes generation failed: {0}")]
    Notes(String),

    #[error("Speech synthesis failed: {0}")]
    Speech(String),

    #[error("Image rendering failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("Could not open browser: {0}")]
    Browser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
