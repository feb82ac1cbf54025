//! Reusable render-only widgets.

pub mod logo;

pub use logo::CampusLogo;
