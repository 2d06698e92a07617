//! Study notes: generation, speech, image rendering and video links.
//!
//! Generated notes can be delivered three ways:
//!
//! - **Text**: printed to the terminal.
//! - **Speech**: synthesized to an MP3 file.
//! - **Image**: drawn onto a PNG with a bitmap font.

mod generator;
mod picture;
mod speech;
mod youtube;

pub use generator::OpenAINotesGenerator;
pub use picture::{wrap_lines, ImageRenderer};
pub use speech::{split_for_speech, OpenAISpeech, SPEECH_INPUT_LIMIT};
pub use youtube::{open_in_browser, youtube_search_url};

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Trait for services that write study notes.
#[async_trait]
pub trait NotesGenerator: Send + Sync {
    /// Generate notes for one chapter of a subject.
    async fn generate_notes(&self, subject: &str, chapter: &str) -> Result<String>;
}

/// Trait for text-to-speech services.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak `text` into an audio file at `path`, returning the path written.
    async fn to_speech(&self, text: &str, path: &Path) -> Result<PathBuf>;
}

/// How the user wants to receive their notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesFormat {
    Text,
    Speech,
    Image,
}

impl NotesFormat {
    pub const ALL: [NotesFormat; 3] = [NotesFormat::Text, NotesFormat::Speech, NotesFormat::Image];

    pub fn label(&self) -> &'static str {
        match self {
            NotesFormat::Text => "Text",
            NotesFormat::Speech => "Speech",
            NotesFormat::Image => "Image",
        }
    }
}

impl std::fmt::Display for NotesFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
