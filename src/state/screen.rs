//! Screen navigation state machine.
//!
//! Navigation is a fixed finite-state machine over six screens rather than an
//! open-ended identifier: Splash flows one way into Login, Login one way into
//! Home, and the four tab screens are freely reachable from each other. Events
//! with no defined transition leave the state unchanged.

use std::fmt;

/// One full-page view. `Splash` is the initial state; there is no terminal
/// state, the machine runs for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenId {
    #[default]
    Splash,
    Login,
    Home,
    Timetable,
    Labs,
    Settings,
}

impl ScreenId {
    /// The bottom navigation bar is shown exactly on the four screens behind
    /// login.
    pub fn shows_nav_bar(&self) -> bool {
        !matches!(self, ScreenId::Splash | ScreenId::Login)
    }

    /// Tab screens in nav-bar order.
    pub fn nav_tabs() -> [ScreenId; 4] {
        [
            ScreenId::Home,
            ScreenId::Timetable,
            ScreenId::Labs,
            ScreenId::Settings,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Splash => "CampusMate",
            ScreenId::Login => "Sign In",
            ScreenId::Home => "Home",
            ScreenId::Timetable => "My Timetable",
            ScreenId::Labs => "Lab Records",
            ScreenId::Settings => "Settings",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Something that can request a screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Splash timer elapsed or was skipped.
    SplashComplete,
    /// Login form submitted. Always succeeds; there is no auth.
    LoginSubmit,
    /// A nav-bar tab was selected.
    NavigateTo(ScreenId),
}

/// The transition function. Pure: undefined (state, event) pairs return the
/// current state.
pub fn transition(current: ScreenId, event: ScreenEvent) -> ScreenId {
    match (current, event) {
        (ScreenId::Splash, ScreenEvent::SplashComplete) => ScreenId::Login,
        (ScreenId::Login, ScreenEvent::LoginSubmit) => ScreenId::Home,
        (from, ScreenEvent::NavigateTo(to))
            if from.shows_nav_bar() && to.shows_nav_bar() =>
        {
            to
        }
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_splash() {
        assert_eq!(ScreenId::default(), ScreenId::Splash);
    }

    #[test]
    fn test_splash_advances_only_to_login() {
        assert_eq!(
            transition(ScreenId::Splash, ScreenEvent::SplashComplete),
            ScreenId::Login
        );
        // No path back
        assert_eq!(
            transition(ScreenId::Login, ScreenEvent::SplashComplete),
            ScreenId::Login
        );
        assert_eq!(
            transition(ScreenId::Home, ScreenEvent::SplashComplete),
            ScreenId::Home
        );
    }

    #[test]
    fn test_login_submit_goes_home() {
        assert_eq!(
            transition(ScreenId::Login, ScreenEvent::LoginSubmit),
            ScreenId::Home
        );
        // Submit means nothing anywhere else
        assert_eq!(
            transition(ScreenId::Timetable, ScreenEvent::LoginSubmit),
            ScreenId::Timetable
        );
    }

    #[test]
    fn test_nav_screens_fully_connected() {
        for from in ScreenId::nav_tabs() {
            for to in ScreenId::nav_tabs() {
                assert_eq!(transition(from, ScreenEvent::NavigateTo(to)), to);
            }
        }
    }

    #[test]
    fn test_nav_unavailable_before_login() {
        assert_eq!(
            transition(ScreenId::Splash, ScreenEvent::NavigateTo(ScreenId::Home)),
            ScreenId::Splash
        );
        assert_eq!(
            transition(ScreenId::Login, ScreenEvent::NavigateTo(ScreenId::Labs)),
            ScreenId::Login
        );
    }

    #[test]
    fn test_cannot_navigate_back_to_splash_or_login() {
        assert_eq!(
            transition(ScreenId::Home, ScreenEvent::NavigateTo(ScreenId::Splash)),
            ScreenId::Home
        );
        assert_eq!(
            transition(ScreenId::Home, ScreenEvent::NavigateTo(ScreenId::Login)),
            ScreenId::Home
        );
    }

    #[test]
    fn test_nav_bar_visibility() {
        assert!(!ScreenId::Splash.shows_nav_bar());
        assert!(!ScreenId::Login.shows_nav_bar());
        for tab in ScreenId::nav_tabs() {
            assert!(tab.shows_nav_bar());
        }
    }
}
