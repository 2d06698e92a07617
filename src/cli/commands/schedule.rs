//! Study schedule generator flow.

use crate::cli::input::InputProvider;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::Result;
use crate::render::{table_blocks, write_pdf};
use crate::schedule::{
    build_timetable, weekday_name, ClockTime, DaySubjects, StudyTimeTable, TimeError, WEEKDAYS,
};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

const INVALID_TIME: &str = "Invalid input format. Please enter time in hh:mm format.";

/// Ask for each weekday's comma-separated subjects.
pub fn collect_subjects(input: &mut dyn InputProvider) -> Result<DaySubjects> {
    let mut subjects = DaySubjects::new();
    for day in WEEKDAYS {
        let entry = input.text(&format!("Enter subjects for {}:", weekday_name(day)))?;
        subjects.insert(day, DaySubjects::parse_entry(&entry));
    }
    Ok(subjects)
}

/// Ask until the answer is a valid `hh:mm` value.
pub fn prompt_time<T>(input: &mut dyn InputProvider, prompt: &str) -> Result<T>
where
    T: FromStr<Err = TimeError>,
{
    loop {
        let answer = input.text(prompt)?;
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("Rejected time input: {}", e);
                Output::warning(INVALID_TIME);
            }
        }
    }
}

/// Ask how long to study each subject on each day.
pub fn collect_study_times(
    input: &mut dyn InputProvider,
    subjects: &DaySubjects,
) -> Result<StudyTimeTable> {
    let mut table = StudyTimeTable::new();
    for (day, day_subjects) in subjects.iter() {
        for subject in day_subjects {
            let prompt = format!(
                "How much time do you want to study {} on {}? (hh:mm):",
                subject,
                weekday_name(day)
            );
            let duration = prompt_time(input, &prompt)?;
            table.record(day, subject.clone(), duration);
        }
    }
    Ok(table)
}

/// Ask for the time each day's study starts.
pub fn collect_start_time(input: &mut dyn InputProvider) -> Result<ClockTime> {
    prompt_time(input, "Enter start time for studying (hh:mm):")
}

/// Run the schedule flow, returning the PDF path or `None` if nothing was entered.
pub fn run_schedule(input: &mut dyn InputProvider, settings: &Settings) -> anyhow::Result<Option<PathBuf>> {
    if let Err(e) = preflight::check(Operation::Schedule, settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    Output::info("Starting Study Schedule Generator...");

    let subjects = collect_subjects(input)?;
    if subjects.is_empty() {
        Output::error("No subjects entered. Exiting program.");
        return Ok(None);
    }

    let study_times = collect_study_times(input, &subjects)?;
    let start = collect_start_time(input)?;

    let timetable = build_timetable(&subjects, &study_times, start);
    info!("Built timetable for {} day(s)", timetable.days.len());

    let path = settings.timetable_path();
    let rendered = write_pdf(&table_blocks(&timetable), &path)?;

    Output::header("Your week");
    for day in &timetable.days {
        Output::day_schedule(day);
    }
    println!();
    Output::success(&format!(
        "Timetable generated and saved as {} ({} page{})",
        path.display(),
        rendered.pages,
        if rendered.pages == 1 { "" } else { "s" }
    ));

    Ok(Some(path))
}
