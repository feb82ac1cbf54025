//! Splash screen.
//!
//! Shows the logo for a configurable moment, then advances to login. The
//! transition is one-way; there is no path back here.

use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenEvent;
use crate::styles::theme;
use crate::widgets::CampusLogo;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::{Duration, Instant};

pub struct SplashScreen {
    shown_since: Instant,
    duration: Duration,
}

impl SplashScreen {
    pub fn new(duration: Duration) -> Self {
        Self {
            shown_since: Instant::now(),
            duration,
        }
    }

    fn elapsed(&self) -> bool {
        self.shown_since.elapsed() >= self.duration
    }
}

impl Screen for SplashScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let logo_height = CampusLogo::height();
        let top = area.height.saturating_sub(logo_height + 3) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(top),
                Constraint::Length(logo_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(CampusLogo, chunks[1]);
        frame.render_widget(
            Paragraph::new("Your campus day, in one place")
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[3],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, _ctx: &mut ScreenContext) -> Result<ScreenAction> {
        // Any key skips the timer
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                return Ok(ScreenAction::Advance(ScreenEvent::SplashComplete));
            }
        }
        Ok(ScreenAction::None)
    }

    fn on_tick(&mut self) -> ScreenAction {
        if self.elapsed() {
            ScreenAction::Advance(ScreenEvent::SplashComplete)
        } else {
            ScreenAction::None
        }
    }
}
