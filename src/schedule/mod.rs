//! Weekly study schedule construction.
//!
//! - `clock` - `hh:mm` parsing, validation and addition
//! - `builder` - per-day subject lists, durations and the assembled timetable

mod builder;
mod clock;

pub use builder::{
    build_timetable, DaySchedule, DaySubjects, EntryLabel, PlannedSubject, ScheduleEntry,
    StudyTimeTable, Timetable,
};
pub use clock::{validate, ClockTime, Duration, TimeError};

use chrono::Weekday;

/// The seven days prompted for, in display order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday, as shown in prompts and the timetable.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekdays_start_on_monday() {
        let names: Vec<_> = WEEKDAYS.iter().map(|d| weekday_name(*d)).collect();
        assert_eq!(names.first(), Some(&"Monday"));
        assert_eq!(names.last(), Some(&"Sunday"));
        assert_eq!(names.len(), 7);
    }
}
