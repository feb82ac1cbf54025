//! Lab record model.
//!
//! Lab records are read-only session data: there is no form to edit them and
//! no link to the timetable. The store seeds a canned set at construction.

use std::fmt;

/// Submission status of one lab experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabStatus {
    Completed,
    Submitted,
    Pending,
}

impl LabStatus {
    pub fn name(&self) -> &'static str {
        match self {
            LabStatus::Completed => "completed",
            LabStatus::Submitted => "submitted",
            LabStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lab experiment row shown on the Lab Records screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabRecord {
    pub subject: String,
    pub experiment: String,
    /// Display date, free-form text like the timetable `time` field.
    pub date: String,
    pub status: LabStatus,
}

/// Canned lab records shown until something real backs this screen.
pub fn sample_lab_records() -> Vec<LabRecord> {
    fn record(subject: &str, experiment: &str, date: &str, status: LabStatus) -> LabRecord {
        LabRecord {
            subject: subject.to_string(),
            experiment: experiment.to_string(),
            date: date.to_string(),
            status,
        }
    }

    vec![
        record(
            "Data Structures Lab",
            "Implement a binary search tree",
            "2025-07-14",
            LabStatus::Completed,
        ),
        record(
            "Data Structures Lab",
            "Graph traversal (BFS/DFS)",
            "2025-07-21",
            LabStatus::Submitted,
        ),
        record(
            "DBMS Lab",
            "ER modelling and normalization",
            "2025-07-23",
            LabStatus::Completed,
        ),
        record(
            "DBMS Lab",
            "SQL joins and subqueries",
            "2025-07-30",
            LabStatus::Pending,
        ),
        record(
            "OS Lab",
            "Process scheduling simulation",
            "2025-08-01",
            LabStatus::Pending,
        ),
    ]
}
