//! Study Planner - timetables and AI study notes
//!
//! An interactive CLI for planning a week of study and revising a chapter.
//!
//! # Overview
//!
//! The planner lets you:
//! - Enter subjects for each weekday and how long to study each one
//! - Lay the sessions out back to back from a start time and save them as a PDF
//! - Generate notes for a subject chapter as text, speech or an image
//! - Open a YouTube search for videos on the same chapter
//!
//! # Architecture
//!
//! - `schedule` - `hh:mm` arithmetic and timetable assembly
//! - `render` - timetable rows and PDF output
//! - `notes` - notes generation, speech, image rendering and video links
//! - `config` - Settings and prompt templates
//! - `cli` - Interactive prompts and command flows
//!
//! # Example
//!
//! ```rust
//! use chrono::Weekday;
//! use planner::schedule::{build_timetable, DaySubjects, StudyTimeTable};
//!
//! let mut subjects = DaySubjects::new();
//! subjects.insert(Weekday::Mon, DaySubjects::parse_entry("Math, English"));
//!
//! let mut durations = StudyTimeTable::new();
//! durations.record(Weekday::Mon, "Math", "01:00".parse().unwrap());
//! durations.record(Weekday::Mon, "English", "00:30".parse().unwrap());
//!
//! let timetable = build_timetable(&subjects, &durations, "09:00".parse().unwrap());
//! let monday = timetable.get(Weekday::Mon).unwrap();
//! assert_eq!(monday.end_time().unwrap().to_string(), "10:30");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod notes;
pub mod openai;
pub mod render;
pub mod schedule;

pub use error::{PlannerError, Result};
