//! Login screen.
//!
//! Two fields and a submit. There is no authentication: Enter always moves on
//! to the home screen, recording whatever identity was typed into the store.

use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenEvent;
use crate::styles::theme;
use crate::utils::TextInput;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoginField {
    #[default]
    RollNumber,
    Password,
}

#[derive(Default)]
pub struct LoginScreen {
    roll_number: TextInput,
    password: TextInput,
    focused: LoginField,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            LoginField::RollNumber => &mut self.roll_number,
            LoginField::Password => &mut self.password,
        }
    }

    fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            LoginField::RollNumber => LoginField::Password,
            LoginField::Password => LoginField::RollNumber,
        };
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        let t = theme();
        let border = if focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", label));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(value).style(t.text_style()), inner);
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let form_width = 44.min(area.width.saturating_sub(4));
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(form_width),
                Constraint::Min(0),
            ])
            .split(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(13) / 2),
                Constraint::Length(2), // title
                Constraint::Length(3), // roll number
                Constraint::Length(3), // password
                Constraint::Length(1),
                Constraint::Length(1), // hint
                Constraint::Min(0),
            ])
            .split(horizontal[1]);

        frame.render_widget(
            Paragraph::new("Welcome back")
                .style(t.title_style())
                .alignment(Alignment::Center),
            chunks[1],
        );

        self.render_field(
            frame,
            chunks[2],
            "Roll Number",
            self.roll_number.text(),
            self.focused == LoginField::RollNumber,
        );
        let masked: String = "*".repeat(self.password.text().chars().count());
        self.render_field(
            frame,
            chunks[3],
            "Password",
            &masked,
            self.focused == LoginField::Password,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Tab", t.emphasis_style()),
                Span::styled(" switch field  ", t.muted_style()),
                Span::styled("Enter", t.emphasis_style()),
                Span::styled(" sign in", t.muted_style()),
            ]))
            .alignment(Alignment::Center),
            chunks[5],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        match key.code {
            KeyCode::Enter => {
                // No auth; submit is an unconditional transition
                ctx.store.set_roll_number(self.roll_number.text());
                self.password.clear();
                Ok(ScreenAction::Advance(ScreenEvent::LoginSubmit))
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.toggle_focus();
                Ok(ScreenAction::None)
            }
            code => {
                self.focused_input_mut().handle_key(code);
                Ok(ScreenAction::None)
            }
        }
    }

    fn is_input_focused(&self) -> bool {
        true
    }
}
