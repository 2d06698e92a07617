//! CLI output formatting utilities.

use crate::schedule::{weekday_name, DaySchedule};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a welcome banner.
    pub fn banner(msg: &str) {
        println!("{}", style(msg).green().bold());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print one day's sessions and when they finish.
    pub fn day_schedule(schedule: &DaySchedule) {
        println!("  {}", style(weekday_name(schedule.day)).bold());
        for (time, subject) in schedule.sessions() {
            println!("    {} {}", style(time).cyan(), subject);
        }
        if let Some(end) = schedule.end_time() {
            println!("    {} {}", style(end).dim(), style("End").dim());
        }
    }

    /// Print generated notes under a heading.
    pub fn notes(text: &str) {
        println!("{}", style("Generated Notes:").green().bold());
        println!("{}", text);
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
