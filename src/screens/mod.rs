//! Screen controllers.
//!
//! One controller per screen in the navigation state machine. Controllers own
//! their view state (selection, form fields) and borrow the student store
//! through the context objects; they never own shared data.

pub mod home;
pub mod labs;
pub mod login;
pub mod screen_trait;
pub mod settings;
pub mod splash;
pub mod timetable;

pub use home::HomeScreen;
pub use labs::LabRecordsScreen;
pub use login::LoginScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use settings::SettingsScreen;
pub use splash::SplashScreen;
pub use timetable::TimetableScreen;
