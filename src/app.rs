//! Application shell.
//!
//! Owns the terminal, the config, the store, and one instance of every
//! screen. Runs the draw/poll loop, routes events to the active screen, and
//! applies screen transitions through the `state::transition` table.

use crate::config::Config;
use crate::screens::{
    HomeScreen, LabRecordsScreen, LoginScreen, RenderContext, Screen, ScreenAction, ScreenContext,
    SettingsScreen, SplashScreen, TimetableScreen,
};
use crate::state::{transition, ScreenEvent, ScreenId, StudentStore};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    config: Config,
    config_path: PathBuf,
    store: StudentStore,
    current: ScreenId,
    should_quit: bool,

    splash: SplashScreen,
    login: LoginScreen,
    home: HomeScreen,
    timetable: TimetableScreen,
    labs: LabRecordsScreen,
    settings: SettingsScreen,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let splash = SplashScreen::new(Duration::from_millis(config.splash_millis));
        Self {
            config,
            config_path,
            store: StudentStore::new(),
            current: ScreenId::default(),
            should_quit: false,
            splash,
            login: LoginScreen::new(),
            home: HomeScreen::new(),
            timetable: TimetableScreen::new(),
            labs: LabRecordsScreen::new(),
            settings: SettingsScreen::new(),
        }
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        info!("app started");
        while !self.should_quit {
            self.draw(tui)?;
            match tui.poll_event(POLL_INTERVAL)? {
                Some(event) => self.handle_event(&event)?,
                None => self.on_tick(),
            }
        }
        info!("app exiting");
        Ok(())
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            config: &self.config,
            store: &self.store,
        };
        let current = self.current;
        // Split borrows: the screen fields and the context never alias.
        let (splash, login, home, timetable, labs, settings) = (
            &mut self.splash,
            &mut self.login,
            &mut self.home,
            &mut self.timetable,
            &mut self.labs,
            &mut self.settings,
        );
        let mut render_err = Ok(());
        tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            let (screen_area, nav_area) = if current.shows_nav_bar() {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(4),
                        Constraint::Length(crate::components::NavBar::HEIGHT),
                    ])
                    .split(area);
                (chunks[0], Some(chunks[1]))
            } else {
                (area, None)
            };

            let screen: &mut dyn Screen = match current {
                ScreenId::Splash => splash,
                ScreenId::Login => login,
                ScreenId::Home => home,
                ScreenId::Timetable => timetable,
                ScreenId::Labs => labs,
                ScreenId::Settings => settings,
            };
            render_err = screen.render(frame, screen_area, &ctx);

            if let Some(nav_area) = nav_area {
                if render_err.is_ok() {
                    render_err = crate::components::NavBar::render(frame, nav_area, current);
                }
            }
        })?;
        render_err
    }

    fn active_screen_mut(&mut self) -> &mut dyn Screen {
        match self.current {
            ScreenId::Splash => &mut self.splash,
            ScreenId::Login => &mut self.login,
            ScreenId::Home => &mut self.home,
            ScreenId::Timetable => &mut self.timetable,
            ScreenId::Labs => &mut self.labs,
            ScreenId::Settings => &mut self.settings,
        }
    }

    fn handle_event(&mut self, event: &Event) -> Result<()> {
        if let Some(action) = self.handle_global_key(event) {
            self.apply(action);
            return Ok(());
        }

        let mut ctx = ScreenContext {
            config: &mut self.config,
            config_path: &self.config_path,
            store: &mut self.store,
        };
        let action = match self.current {
            ScreenId::Splash => self.splash.handle_event(event, &mut ctx)?,
            ScreenId::Login => self.login.handle_event(event, &mut ctx)?,
            ScreenId::Home => self.home.handle_event(event, &mut ctx)?,
            ScreenId::Timetable => self.timetable.handle_event(event, &mut ctx)?,
            ScreenId::Labs => self.labs.handle_event(event, &mut ctx)?,
            ScreenId::Settings => self.settings.handle_event(event, &mut ctx)?,
        };
        self.apply(action);
        Ok(())
    }

    /// Shell-level keys: quit, and tab navigation while the nav bar is
    /// visible and no text input has focus.
    fn handle_global_key(&mut self, event: &Event) -> Option<ScreenAction> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Ctrl+C always quits, even mid-input
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(ScreenAction::Quit);
        }

        if !self.current.shows_nav_bar() || self.active_screen_mut().is_input_focused() {
            return None;
        }

        let tabs = ScreenId::nav_tabs();
        match key.code {
            KeyCode::Char('q') => Some(ScreenAction::Quit),
            KeyCode::Char('1') => Some(ScreenAction::Advance(ScreenEvent::NavigateTo(tabs[0]))),
            KeyCode::Char('2') => Some(ScreenAction::Advance(ScreenEvent::NavigateTo(tabs[1]))),
            KeyCode::Char('3') => Some(ScreenAction::Advance(ScreenEvent::NavigateTo(tabs[2]))),
            KeyCode::Char('4') => Some(ScreenAction::Advance(ScreenEvent::NavigateTo(tabs[3]))),
            KeyCode::Tab => {
                let pos = tabs.iter().position(|&t| t == self.current).unwrap_or(0);
                let next = tabs[(pos + 1) % tabs.len()];
                Some(ScreenAction::Advance(ScreenEvent::NavigateTo(next)))
            }
            _ => None,
        }
    }

    fn on_tick(&mut self) {
        let action = self.active_screen_mut().on_tick();
        self.apply(action);
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => {
                self.should_quit = true;
            }
            ScreenAction::Advance(event) => {
                let next = transition(self.current, event);
                if next != self.current {
                    debug!(from = ?self.current, to = ?next, "screen transition");
                    self.current = next;
                    let mut ctx = ScreenContext {
                        config: &mut self.config,
                        config_path: &self.config_path,
                        store: &mut self.store,
                    };
                    let screen: &mut dyn Screen = match next {
                        ScreenId::Splash => &mut self.splash,
                        ScreenId::Login => &mut self.login,
                        ScreenId::Home => &mut self.home,
                        ScreenId::Timetable => &mut self.timetable,
                        ScreenId::Labs => &mut self.labs,
                        ScreenId::Settings => &mut self.settings,
                    };
                    if let Err(err) = screen.on_enter(&mut ctx) {
                        tracing::warn!(error = %err, "screen on_enter failed");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn app() -> App {
        App::new(Config::default(), PathBuf::from("/dev/null"))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn to_home(app: &mut App) {
        app.apply(ScreenAction::Advance(ScreenEvent::SplashComplete));
        app.apply(ScreenAction::Advance(ScreenEvent::LoginSubmit));
        assert_eq!(app.current, ScreenId::Home);
    }

    #[test]
    fn test_number_keys_navigate_between_tabs() {
        let mut app = app();
        to_home(&mut app);

        app.handle_event(&key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.current, ScreenId::Timetable);
        app.handle_event(&key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.current, ScreenId::Labs);
        app.handle_event(&key(KeyCode::Char('4'))).unwrap();
        assert_eq!(app.current, ScreenId::Settings);
        app.handle_event(&key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.current, ScreenId::Home);
    }

    #[test]
    fn test_tab_cycles_through_tabs() {
        let mut app = app();
        to_home(&mut app);

        app.handle_event(&key(KeyCode::Tab)).unwrap();
        assert_eq!(app.current, ScreenId::Timetable);
        for _ in 0..3 {
            app.handle_event(&key(KeyCode::Tab)).unwrap();
        }
        assert_eq!(app.current, ScreenId::Home);
    }

    #[test]
    fn test_no_tab_navigation_before_login() {
        let mut app = app();
        assert_eq!(app.current, ScreenId::Splash);

        // '2' is just a keypress on the splash, which skips it to login
        app.handle_event(&key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.current, ScreenId::Login);

        // On login, digits go into the focused text field
        app.handle_event(&key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.current, ScreenId::Login);
    }

    #[test]
    fn test_q_quits_from_tab_screens_only() {
        let mut app = app();
        to_home(&mut app);
        app.handle_event(&key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_into_login_instead_of_quitting() {
        let mut app = app();
        app.apply(ScreenAction::Advance(ScreenEvent::SplashComplete));
        app.handle_event(&key(KeyCode::Char('q'))).unwrap();
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app();
        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_nav_keys_ignored_while_timetable_form_open() {
        let mut app = app();
        to_home(&mut app);
        app.handle_event(&key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.current, ScreenId::Timetable);

        app.handle_event(&key(KeyCode::Char('a'))).unwrap(); // open add form
        app.handle_event(&key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.current, ScreenId::Timetable, "digit goes to the form");
    }
}
