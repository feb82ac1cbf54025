//! Timetable data model and display grouping.
//!
//! An entry is one scheduled class occurrence. The `time` field is a
//! free-form string; "HH:MM-HH:MM" is the convention shown in the UI but it
//! is never parsed into a structured range.

use std::fmt;
use std::str::FromStr;

/// Weekdays a class can be scheduled on, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Day {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All days in canonical order. Grouping and the add-entry form both
    /// iterate this, so the order here is the order everywhere.
    pub fn all() -> [Day; 6] {
        [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
            Day::Saturday,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// The next day in form-cycling order, wrapping after Saturday.
    pub fn next(&self) -> Day {
        match self {
            Day::Monday => Day::Tuesday,
            Day::Tuesday => Day::Wednesday,
            Day::Wednesday => Day::Thursday,
            Day::Thursday => Day::Friday,
            Day::Friday => Day::Saturday,
            Day::Saturday => Day::Monday,
        }
    }

    /// The previous day in form-cycling order, wrapping before Monday.
    pub fn prev(&self) -> Day {
        match self {
            Day::Monday => Day::Saturday,
            Day::Tuesday => Day::Monday,
            Day::Wednesday => Day::Tuesday,
            Day::Thursday => Day::Wednesday,
            Day::Friday => Day::Thursday,
            Day::Saturday => Day::Friday,
        }
    }

    /// Map a chrono weekday to a timetable day. Sunday has no slot.
    pub fn from_weekday(weekday: chrono::Weekday) -> Option<Day> {
        match weekday {
            chrono::Weekday::Mon => Some(Day::Monday),
            chrono::Weekday::Tue => Some(Day::Tuesday),
            chrono::Weekday::Wed => Some(Day::Wednesday),
            chrono::Weekday::Thu => Some(Day::Thursday),
            chrono::Weekday::Fri => Some(Day::Friday),
            chrono::Weekday::Sat => Some(Day::Saturday),
            chrono::Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Day::Monday),
            "tuesday" => Ok(Day::Tuesday),
            "wednesday" => Ok(Day::Wednesday),
            "thursday" => Ok(Day::Thursday),
            "friday" => Ok(Day::Friday),
            "saturday" => Ok(Day::Saturday),
            _ => Err(()),
        }
    }
}

/// Kind of session. Only used to pick a display color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryType {
    #[default]
    Lecture,
    Lab,
    Practical,
}

impl EntryType {
    pub fn all() -> [EntryType; 3] {
        [EntryType::Lecture, EntryType::Lab, EntryType::Practical]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntryType::Lecture => "lecture",
            EntryType::Lab => "lab",
            EntryType::Practical => "practical",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EntryType::Lecture => "\u{1F4D6}", // 📖
            EntryType::Lab | EntryType::Practical => "\u{2697}", // ⚗
        }
    }

    pub fn next(&self) -> EntryType {
        match self {
            EntryType::Lecture => EntryType::Lab,
            EntryType::Lab => EntryType::Practical,
            EntryType::Practical => EntryType::Lecture,
        }
    }

    pub fn prev(&self) -> EntryType {
        match self {
            EntryType::Lecture => EntryType::Practical,
            EntryType::Lab => EntryType::Lecture,
            EntryType::Practical => EntryType::Lab,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableEntry {
    /// Unique within the store; minted by the store, never by callers.
    pub id: String,
    pub day: Day,
    /// Opaque text, by convention "HH:MM-HH:MM". Never parsed.
    pub time: String,
    pub subject: String,
    pub room: String,
    pub kind: EntryType,
}

/// A not-yet-accepted entry as typed into the add form. Day and kind always
/// hold a valid value, so only the three text fields can be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub day: Day,
    pub time: String,
    pub subject: String,
    pub room: String,
    pub kind: EntryType,
}

impl EntryDraft {
    /// The presence check guarding entry creation. Whitespace-only fields
    /// count as empty.
    pub fn is_complete(&self) -> bool {
        !self.time.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.room.trim().is_empty()
    }

    /// Materialize the draft with a store-minted id.
    pub fn into_entry(self, id: String) -> TimetableEntry {
        TimetableEntry {
            id,
            day: self.day,
            time: self.time,
            subject: self.subject,
            room: self.room,
            kind: self.kind,
        }
    }
}

/// The canned dataset substituted by the simulated import. The import never
/// inspects the selected file, it always produces exactly this.
pub fn sample_timetable() -> Vec<TimetableEntry> {
    fn entry(
        id: &str,
        day: Day,
        time: &str,
        subject: &str,
        room: &str,
        kind: EntryType,
    ) -> TimetableEntry {
        TimetableEntry {
            id: id.to_string(),
            day,
            time: time.to_string(),
            subject: subject.to_string(),
            room: room.to_string(),
            kind,
        }
    }

    vec![
        entry("1", Day::Monday, "09:00-10:00", "Data Structures", "CS-201", EntryType::Lecture),
        entry("2", Day::Monday, "14:00-17:00", "Data Structures Lab", "CS-Lab-1", EntryType::Lab),
        entry("3", Day::Tuesday, "10:00-11:00", "Database Systems", "CS-203", EntryType::Lecture),
        entry("4", Day::Wednesday, "11:00-14:00", "DBMS Lab", "CS-Lab-2", EntryType::Lab),
        entry("5", Day::Thursday, "09:00-10:00", "Operating Systems", "CS-202", EntryType::Lecture),
        entry("6", Day::Friday, "14:00-17:00", "OS Lab", "CS-Lab-1", EntryType::Practical),
    ]
}

/// Group entries by day for display.
///
/// Always yields exactly six groups in canonical day order; days with no
/// classes produce an empty group rather than being omitted. Within a group
/// entries are sorted by plain string comparison of `time`. That is correct
/// for zero-padded "HH:MM-HH:MM" values and wrong for unpadded ones like
/// "9:00-10:00"; the misordering is inherited behavior and kept as-is.
pub fn grouped_by_day(entries: &[TimetableEntry]) -> Vec<(Day, Vec<&TimetableEntry>)> {
    Day::all()
        .into_iter()
        .map(|day| {
            let mut group: Vec<&TimetableEntry> =
                entries.iter().filter(|e| e.day == day).collect();
            group.sort_by(|a, b| a.time.cmp(&b.time));
            (day, group)
        })
        .collect()
}
