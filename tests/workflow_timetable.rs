//! Integration tests for the timetable workflows.
//!
//! These drive the store API end to end the way the screens do: manual adds,
//! removal, and the simulated upload that substitutes the sample dataset.

use campusmate::timetable::{grouped_by_day, sample_timetable, Day, EntryDraft, EntryType};
use campusmate::StudentStore;

fn draft(day: Day, time: &str, subject: &str, room: &str) -> EntryDraft {
    EntryDraft {
        day,
        time: time.to_string(),
        subject: subject.to_string(),
        room: room.to_string(),
        kind: EntryType::Lecture,
    }
}

#[test]
fn test_import_then_add_then_remove() {
    let mut store = StudentStore::new();

    // Simulated upload: any chosen file yields the canned dataset
    store.set_timetable(sample_timetable());
    assert_eq!(store.timetable().len(), 6);

    // Manual add on top of the import
    assert!(store.add_entry(draft(Day::Saturday, "09:00-10:00", "Seminar", "A-101")));
    assert_eq!(store.timetable().len(), 7);

    // The minted id must not collide with any imported id
    let added_id = store.timetable().last().unwrap().id.clone();
    assert!(sample_timetable().iter().all(|e| e.id != added_id));

    store.remove_entry(&added_id);
    assert_eq!(store.timetable().len(), 6);
}

#[test]
fn test_reimport_discards_manual_entries() {
    let mut store = StudentStore::new();
    store.add_entry(draft(Day::Monday, "08:00-09:00", "Maths", "M-101"));
    store.add_entry(draft(Day::Friday, "10:00-11:00", "Physics", "P-204"));

    store.set_timetable(sample_timetable());

    assert_eq!(store.timetable().len(), 6);
    assert!(store.timetable().iter().all(|e| e.subject != "Maths"));
}

#[test]
fn test_sample_dataset_shape() {
    let sample = sample_timetable();
    let groups = grouped_by_day(&sample);

    // Monday through Saturday, always all six groups
    assert_eq!(groups.len(), 6);
    assert_eq!(groups[0].0, Day::Monday);
    assert_eq!(groups[5].0, Day::Saturday);

    assert_eq!(groups[0].1.len(), 2, "two Monday entries");
    assert!(groups[5].1.is_empty(), "Saturday is free");

    // Monday is time-ordered: lecture before the afternoon lab
    assert_eq!(groups[0].1[0].time, "09:00-10:00");
    assert_eq!(groups[0].1[1].time, "14:00-17:00");
}

#[test]
fn test_grouping_orders_within_day_lexicographically() {
    let mut store = StudentStore::new();
    store.add_entry(draft(Day::Tuesday, "14:00-15:00", "Late", "R1"));
    store.add_entry(draft(Day::Tuesday, "09:00-10:00", "Early", "R2"));

    let groups = grouped_by_day(store.timetable());
    let tuesday = &groups[1].1;
    assert_eq!(tuesday[0].subject, "Early");
    assert_eq!(tuesday[1].subject, "Late");
}

#[test]
fn test_incomplete_drafts_never_land_in_store() {
    let mut store = StudentStore::new();

    assert!(!store.add_entry(draft(Day::Monday, "", "DS", "CS-201")));
    assert!(!store.add_entry(draft(Day::Monday, "09:00", "", "CS-201")));
    assert!(!store.add_entry(draft(Day::Monday, "09:00", "DS", "   ")));

    assert!(store.timetable().is_empty());
}
