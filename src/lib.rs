//! CampusMate - a terminal companion for students
//!
//! This library provides the screens, shared student store, and navigation
//! state machine behind the `campusmate` binary: timetable management with a
//! simulated upload, lab records, and preferences.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod labs;
pub mod screens;
pub mod state;
pub mod styles;
pub mod timetable;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use state::{ScreenEvent, ScreenId, StudentStore};
pub use timetable::{Day, EntryType, TimetableEntry};
