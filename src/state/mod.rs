//! Shared application state.
//!
//! Split into two halves: the student data store (timetable, lab records,
//! identity) and the screen state machine driving navigation. The store is
//! owned by the `App` and borrowed by screens, never global.

pub mod screen;
pub mod store;

pub use screen::{transition, ScreenEvent, ScreenId};
pub use store::StudentStore;
