//! The shared student-state store.
//!
//! One `StudentStore` is owned by the `App` and handed to screens by
//! reference, so there is exactly one writer per event by construction. All
//! of its contents live for the session only; nothing here touches disk.

use crate::labs::{sample_lab_records, LabRecord};
use crate::timetable::{EntryDraft, TimetableEntry};
use tracing::{debug, info};

/// Session-lifetime holder of the timetable and other student data.
#[derive(Debug)]
pub struct StudentStore {
    timetable: Vec<TimetableEntry>,
    lab_records: Vec<LabRecord>,
    /// Roll number captured at login, if any.
    roll_number: Option<String>,
    /// Next id to mint. Monotonic so that rapid adds cannot collide, unlike
    /// a timestamp-derived id.
    next_id: u64,
}

impl Default for StudentStore {
    fn default() -> Self {
        Self {
            timetable: Vec::new(),
            lab_records: sample_lab_records(),
            roll_number: None,
            next_id: 1,
        }
    }
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current timetable, in insertion order as last set.
    pub fn timetable(&self) -> &[TimetableEntry] {
        &self.timetable
    }

    /// Replace the whole timetable. No merge, no validation; cannot fail.
    ///
    /// The id counter is re-seeded past any numeric id in the new list so
    /// entries added manually afterwards never collide with imported ids.
    pub fn set_timetable(&mut self, entries: Vec<TimetableEntry>) {
        let max_numeric = entries
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max_numeric + 1);
        info!(count = entries.len(), "timetable replaced");
        self.timetable = entries;
    }

    /// Validate and append one entry.
    ///
    /// Accepted only if time, subject, and room are all non-empty; otherwise
    /// this is a silent no-op returning `false`. On success the entry goes to
    /// the end of the list, keeping insertion order rather than day order.
    pub fn add_entry(&mut self, draft: EntryDraft) -> bool {
        if !draft.is_complete() {
            debug!("entry rejected: missing required fields");
            return false;
        }
        let id = self.mint_id();
        info!(%id, subject = %draft.subject, "entry added");
        self.timetable.push(draft.into_entry(id));
        true
    }

    /// Remove the entry with the given id. Unknown ids are an idempotent
    /// no-op, not an error.
    pub fn remove_entry(&mut self, id: &str) {
        let before = self.timetable.len();
        self.timetable.retain(|e| e.id != id);
        if self.timetable.len() < before {
            info!(%id, "entry removed");
        }
    }

    pub fn lab_records(&self) -> &[LabRecord] {
        &self.lab_records
    }

    pub fn roll_number(&self) -> Option<&str> {
        self.roll_number.as_deref()
    }

    /// Record whatever was typed at login. An empty field clears the stored
    /// value; login itself never validates.
    pub fn set_roll_number(&mut self, roll_number: &str) {
        self.roll_number = Some(roll_number.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
    }

    fn mint_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}
