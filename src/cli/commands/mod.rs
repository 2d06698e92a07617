//! CLI command implementations.

mod config;
mod menu;
mod notes;
mod schedule;

pub use config::run_config;
pub use menu::{greet_and_choose, run_interactive, MenuChoice};
pub use notes::{run_notes, run_notes_with, NotesOutcome, NotesServices};
pub use schedule::{
    collect_start_time, collect_study_times, collect_subjects, prompt_time, run_schedule,
};
