//! Integration tests for screen navigation.
//!
//! Walks the navigation state machine along the paths a session actually
//! takes: splash to login to home, then around the four tab screens.

use campusmate::state::{transition, ScreenEvent, ScreenId};

#[test]
fn test_full_session_walk() {
    let mut screen = ScreenId::default();
    assert_eq!(screen, ScreenId::Splash);

    screen = transition(screen, ScreenEvent::SplashComplete);
    assert_eq!(screen, ScreenId::Login);

    screen = transition(screen, ScreenEvent::LoginSubmit);
    assert_eq!(screen, ScreenId::Home);

    // A lap around the tabs
    for tab in [
        ScreenId::Timetable,
        ScreenId::Labs,
        ScreenId::Settings,
        ScreenId::Home,
    ] {
        screen = transition(screen, ScreenEvent::NavigateTo(tab));
        assert_eq!(screen, tab);
    }
}

#[test]
fn test_undefined_events_leave_state_unchanged() {
    // Replaying the startup events later in the session does nothing
    let mut screen = ScreenId::Settings;
    screen = transition(screen, ScreenEvent::SplashComplete);
    assert_eq!(screen, ScreenId::Settings);
    screen = transition(screen, ScreenEvent::LoginSubmit);
    assert_eq!(screen, ScreenId::Settings);
}

#[test]
fn test_login_flow_is_one_way() {
    for from in ScreenId::nav_tabs() {
        assert_eq!(
            transition(from, ScreenEvent::NavigateTo(ScreenId::Splash)),
            from
        );
        assert_eq!(
            transition(from, ScreenEvent::NavigateTo(ScreenId::Login)),
            from
        );
    }
}

#[test]
fn test_self_navigation_is_a_no_op_transition() {
    for tab in ScreenId::nav_tabs() {
        assert_eq!(transition(tab, ScreenEvent::NavigateTo(tab)), tab);
    }
}
