//! Per-day subject lists, study durations and timetable assembly.

use super::{ClockTime, Duration};
use chrono::Weekday;
use tracing::debug;

/// Subjects entered for each day, in the order they were typed.
///
/// Days without subjects are not stored. Duplicate subjects on a day are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySubjects {
    days: Vec<(Weekday, Vec<String>)>,
}

impl DaySubjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a comma-separated entry into trimmed subject names, dropping blanks.
    pub fn parse_entry(entry: &str) -> Vec<String> {
        entry
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Set the subjects for a day. An empty list leaves the day out.
    pub fn insert(&mut self, day: Weekday, subjects: Vec<String>) {
        self.days.retain(|(d, _)| *d != day);
        if subjects.is_empty() {
            return;
        }
        self.days.push((day, subjects));
        self.days.sort_by_key(|(d, _)| d.num_days_from_monday());
    }

    /// Subjects for a day, if any were entered.
    pub fn get(&self, day: Weekday) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, subjects)| subjects.as_slice())
    }

    /// Days with subjects, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.days.iter().map(|(d, s)| (*d, s.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }
}

/// Study duration recorded for each subject on each day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyTimeTable {
    days: Vec<(Weekday, Vec<(String, Duration)>)>,
}

/// A subject joined with its duration, if one was recorded.
///
/// Subjects without a duration are not scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSubject {
    pub subject: String,
    pub duration: Option<Duration>,
}

impl StudyTimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a duration for a subject on a day.
    pub fn record(&mut self, day: Weekday, subject: impl Into<String>, duration: Duration) {
        let entry = (subject.into(), duration);
        match self.days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, durations)) => durations.push(entry),
            None => self.days.push((day, vec![entry])),
        }
    }

    /// Recorded (subject, duration) pairs for a day, in entry order.
    pub fn durations(&self, day: Weekday) -> &[(String, Duration)] {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, durations)| durations.as_slice())
            .unwrap_or(&[])
    }

    /// Pair each subject of a day with its recorded duration.
    ///
    /// The nth occurrence of a subject name takes the nth duration recorded
    /// under that name for the day.
    pub fn plan_day(&self, day: Weekday, subjects: &[String]) -> Vec<PlannedSubject> {
        let recorded = self.durations(day);
        let mut planned = Vec::with_capacity(subjects.len());

        for (idx, subject) in subjects.iter().enumerate() {
            let occurrence = subjects[..idx].iter().filter(|s| *s == subject).count();
            let duration = recorded
                .iter()
                .filter(|(name, _)| name == subject)
                .nth(occurrence)
                .map(|(_, duration)| *duration);

            planned.push(PlannedSubject {
                subject: subject.clone(),
                duration,
            });
        }

        planned
    }
}

/// What a schedule row refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryLabel {
    Subject(String),
    /// Marks when the day's last session finishes.
    End,
}

/// A start time and what happens then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub time: ClockTime,
    pub label: EntryLabel,
}

impl ScheduleEntry {
    pub fn subject(time: ClockTime, subject: impl Into<String>) -> Self {
        Self {
            time,
            label: EntryLabel::Subject(subject.into()),
        }
    }

    pub fn end(time: ClockTime) -> Self {
        Self {
            time,
            label: EntryLabel::End,
        }
    }

    pub fn is_end(&self) -> bool {
        self.label == EntryLabel::End
    }
}

/// Ordered sessions for one day, closed by exactly one `End` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub entries: Vec<ScheduleEntry>,
}

impl DaySchedule {
    /// Entries that name a subject, skipping the `End` marker.
    pub fn sessions(&self) -> impl Iterator<Item = (&ClockTime, &str)> {
        self.entries.iter().filter_map(|e| match &e.label {
            EntryLabel::Subject(name) => Some((&e.time, name.as_str())),
            EntryLabel::End => None,
        })
    }

    /// When the last session finishes.
    pub fn end_time(&self) -> Option<ClockTime> {
        self.entries.iter().rev().find(|e| e.is_end()).map(|e| e.time)
    }
}

/// The assembled week, Monday first. Days without subjects are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    pub days: Vec<DaySchedule>,
}

impl Timetable {
    pub fn get(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Lay out each day's subjects back to back from `start`.
///
/// Every day begins at the same start time. Subjects with no recorded
/// duration get no row and take no time.
pub fn build_timetable(
    subjects: &DaySubjects,
    durations: &StudyTimeTable,
    start: ClockTime,
) -> Timetable {
    let mut days = Vec::with_capacity(subjects.len());

    for (day, day_subjects) in subjects.iter() {
        if day_subjects.is_empty() {
            continue;
        }

        let mut current = start;
        let mut entries = Vec::with_capacity(day_subjects.len() + 1);

        for planned in durations.plan_day(day, day_subjects) {
            let Some(duration) = planned.duration else {
                debug!("No duration for {} on {}, skipping", planned.subject, day);
                continue;
            };
            entries.push(ScheduleEntry::subject(current, planned.subject));
            current = current + duration;
        }

        entries.push(ScheduleEntry::end(current));
        days.push(DaySchedule { day, entries });
    }

    Timetable { days }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn d(s: &str) -> Duration {
        s.parse().unwrap()
    }

    fn subjects(day: Weekday, names: &[&str]) -> DaySubjects {
        let mut subjects = DaySubjects::new();
        subjects.insert(day, names.iter().map(|s| s.to_string()).collect());
        subjects
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            DaySubjects::parse_entry(" Math , English,,  "),
            vec!["Math".to_string(), "English".to_string()]
        );
        assert!(DaySubjects::parse_entry("").is_empty());
        assert!(DaySubjects::parse_entry(" , ").is_empty());
    }

    #[test]
    fn test_insert_skips_empty_and_orders_days() {
        let mut subjects = DaySubjects::new();
        subjects.insert(Weekday::Wed, vec!["Physics".to_string()]);
        subjects.insert(Weekday::Tue, Vec::new());
        subjects.insert(Weekday::Mon, vec!["Math".to_string()]);

        let days: Vec<_> = subjects.iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed]);
        assert!(subjects.get(Weekday::Tue).is_none());
    }

    #[test]
    fn test_monday_schedule() {
        let subjects = subjects(Weekday::Mon, &["Math", "English"]);
        let mut durations = StudyTimeTable::new();
        durations.record(Weekday::Mon, "Math", d("01:00"));
        durations.record(Weekday::Mon, "English", d("00:30"));

        let timetable = build_timetable(&subjects, &durations, t("09:00"));

        let monday = timetable.get(Weekday::Mon).unwrap();
        assert_eq!(
            monday.entries,
            vec![
                ScheduleEntry::subject(t("09:00"), "Math"),
                ScheduleEntry::subject(t("10:00"), "English"),
                ScheduleEntry::end(t("10:30")),
            ]
        );
        assert_eq!(timetable.days.len(), 1);
    }

    #[test]
    fn test_subjects_without_durations_only_end() {
        let subjects = subjects(Weekday::Fri, &["Art", "Music"]);
        let timetable = build_timetable(&subjects, &StudyTimeTable::new(), t("14:15"));

        let friday = timetable.get(Weekday::Fri).unwrap();
        assert_eq!(friday.entries, vec![ScheduleEntry::end(t("14:15"))]);
        assert_eq!(friday.sessions().count(), 0);
    }

    #[test]
    fn test_missing_duration_skips_without_advancing() {
        let subjects = subjects(Weekday::Mon, &["Math", "Art", "English"]);
        let mut durations = StudyTimeTable::new();
        durations.record(Weekday::Mon, "Math", d("00:45"));
        durations.record(Weekday::Mon, "English", d("00:45"));

        let timetable = build_timetable(&subjects, &durations, t("09:30"));
        let monday = timetable.get(Weekday::Mon).unwrap();

        let sessions: Vec<_> = monday.sessions().map(|(t, s)| (t.to_string(), s)).collect();
        assert_eq!(
            sessions,
            vec![("09:30".to_string(), "Math"), ("10:15".to_string(), "English")]
        );
        assert_eq!(monday.end_time(), Some(t("11:00")));
    }

    #[test]
    fn test_durations_on_other_days_are_ignored() {
        let subjects = subjects(Weekday::Mon, &["Math"]);
        let mut durations = StudyTimeTable::new();
        durations.record(Weekday::Tue, "Math", d("02:00"));

        let timetable = build_timetable(&subjects, &durations, t("09:00"));
        assert_eq!(
            timetable.get(Weekday::Mon).unwrap().entries,
            vec![ScheduleEntry::end(t("09:00"))]
        );
    }

    #[test]
    fn test_duplicate_subjects_keep_their_own_durations() {
        let subjects = subjects(Weekday::Sat, &["Math", "Chemistry", "Math"]);
        let mut durations = StudyTimeTable::new();
        durations.record(Weekday::Sat, "Math", d("01:00"));
        durations.record(Weekday::Sat, "Chemistry", d("00:20"));
        durations.record(Weekday::Sat, "Math", d("00:10"));

        let planned = durations.plan_day(Weekday::Sat, subjects.get(Weekday::Sat).unwrap());
        let minutes: Vec<_> = planned
            .iter()
            .map(|p| p.duration.map(|d| d.as_minutes()))
            .collect();
        assert_eq!(minutes, vec![Some(60), Some(20), Some(10)]);

        let timetable = build_timetable(&subjects, &durations, t("08:00"));
        assert_eq!(timetable.get(Weekday::Sat).unwrap().end_time(), Some(t("09:30")));
    }

    #[test]
    fn test_every_day_starts_at_start_time() {
        let mut subjects = DaySubjects::new();
        subjects.insert(Weekday::Mon, vec!["Math".to_string()]);
        subjects.insert(Weekday::Sun, vec!["Biology".to_string()]);
        let mut durations = StudyTimeTable::new();
        durations.record(Weekday::Mon, "Math", d("03:00"));
        durations.record(Weekday::Sun, "Biology", d("01:00"));

        let timetable = build_timetable(&subjects, &durations, t("10:00"));
        let firsts: Vec<_> = timetable.days.iter().map(|d| d.entries[0].time).collect();
        assert_eq!(firsts, vec![t("10:00"), t("10:00")]);
    }

    #[test]
    fn test_times_are_non_decreasing_past_midnight() {
        let subjects = subjects(Weekday::Thu, &["History", "Geography", "French"]);
        let mut durations = StudyTimeTable::new();
        durations.record(Weekday::Thu, "History", d("00:00"));
        durations.record(Weekday::Thu, "Geography", d("01:45"));
        durations.record(Weekday::Thu, "French", d("00:30"));

        let timetable = build_timetable(&subjects, &durations, t("22:30"));
        let times: Vec<_> = timetable.days[0].entries.iter().map(|e| e.time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(times.last().unwrap().to_string(), "24:45");
    }

    #[test]
    fn test_empty_subjects_give_empty_timetable() {
        let timetable = build_timetable(&DaySubjects::new(), &StudyTimeTable::new(), t("09:00"));
        assert!(timetable.is_empty());
    }
}
