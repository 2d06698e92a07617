//! Interactive entry point: greeting and the top-level menu.

use super::{run_notes, run_schedule};
use crate::cli::input::InputProvider;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StudySchedule,
    Notes,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 2] = [MenuChoice::StudySchedule, MenuChoice::Notes];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::StudySchedule => "Study Schedule Generator",
            MenuChoice::Notes => "Notes Generator",
        }
    }
}

/// Greet the user and ask which generator to run.
pub fn greet_and_choose(input: &mut dyn InputProvider) -> Result<MenuChoice> {
    Output::banner("Welcome to the Study Planner!");

    let name = input.text("Please enter your name:")?;
    let name = name.trim();
    if name.is_empty() {
        println!("Hello!");
    } else {
        println!("Hello, {}!", name);
    }

    let labels = MenuChoice::ALL.map(|c| c.label());
    let idx = input.select("Please choose an option:", &labels)?;
    Ok(MenuChoice::ALL[idx])
}

/// Run the interactive study planner.
pub async fn run_interactive(input: &mut dyn InputProvider, settings: &Settings) -> Result<()> {
    match greet_and_choose(input)? {
        MenuChoice::StudySchedule => {
            run_schedule(input, settings)?;
        }
        MenuChoice::Notes => {
            run_notes(input, settings).await?;
        }
    }
    Ok(())
}
