//! Configuration module for the study planner.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{NotesPrompts, Prompts};
pub use settings::{
    GeneralSettings, ImageSettings, NotesSettings, OpenAISettings, PromptSettings, Settings,
    SpeechSettings, IMAGE_FILE, SPEECH_FILE, TIMETABLE_FILE,
};
