//! Flatten a timetable into table rows.

use crate::schedule::{weekday_name, Timetable};
use chrono::Weekday;

/// Column headings of every timetable block.
pub const HEADER: [&str; 3] = ["Day", "Time", "Subject"];

/// One day's table: a header plus one row per study session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub day: Weekday,
    pub rows: Vec<[String; 3]>,
}

impl TableBlock {
    /// Header followed by body rows, as drawn.
    pub fn all_rows(&self) -> Vec<[String; 3]> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(HEADER.map(str::to_string));
        rows.extend(self.rows.iter().cloned());
        rows
    }
}

/// One block per scheduled day, Monday first.
///
/// The `End` marker never becomes a row. Days missing from the timetable or
/// with no entries at all produce no block.
pub fn table_blocks(timetable: &Timetable) -> Vec<TableBlock> {
    timetable
        .days
        .iter()
        .filter(|schedule| !schedule.entries.is_empty())
        .map(|schedule| {
            let day = weekday_name(schedule.day);
            let rows = schedule
                .sessions()
                .map(|(time, subject)| [day.to_string(), time.to_string(), subject.to_string()])
                .collect();
            TableBlock {
                day: schedule.day,
                rows,
            }
        })
        .collect()
}
