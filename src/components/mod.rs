//! Shared chrome rendered around screens.

pub mod header;
pub mod nav_bar;

pub use header::Header;
pub use nav_bar::NavBar;
