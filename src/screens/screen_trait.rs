//! Screen trait and associated types.
//!
//! Screens own their view state and signal navigation through actions rather
//! than mutating the app directly. Shared data (config, student store) is
//! borrowed through context objects, giving the store a single writer per
//! event by construction.

use crate::config::Config;
use crate::state::{ScreenEvent, StudentStore};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::Path;

/// Read-only context for rendering.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub store: &'a StudentStore,
}

/// Mutable context for event handling.
///
/// `config_path` is carried so the settings screen can persist preference
/// changes; student data in the store is never written to disk.
pub struct ScreenContext<'a> {
    pub config: &'a mut Config,
    pub config_path: &'a Path,
    pub store: &'a mut StudentStore,
}

/// What the app should do after a screen handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Feed an event into the navigation state machine.
    Advance(ScreenEvent),
    /// Quit the application.
    Quit,
}

/// Trait for screen controllers.
pub trait Screen {
    /// Render the screen into `area` (the region above the nav bar, when one
    /// is shown).
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and return the resulting action.
    fn handle_event(&mut self, event: &Event, ctx: &mut ScreenContext) -> Result<ScreenAction>;

    /// Whether a text input currently has focus. While true the app keeps
    /// its global tab-switching keys out of the way.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen becomes active.
    fn on_enter(&mut self, _ctx: &mut ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called on poll timeout when this screen is active. Only the splash
    /// screen does anything here.
    fn on_tick(&mut self) -> ScreenAction {
        ScreenAction::None
    }
}
