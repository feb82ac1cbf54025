//! Settings screen.
//!
//! Theme selection and the lab-reminder toggle. Changes apply immediately and
//! are persisted to the config file straight away.

use crate::components::Header;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{init_theme, theme, ThemeType};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SettingsItem {
    #[default]
    Theme,
    Reminders,
}

impl SettingsItem {
    fn all() -> [SettingsItem; 2] {
        [SettingsItem::Theme, SettingsItem::Reminders]
    }

    fn label(self) -> &'static str {
        match self {
            SettingsItem::Theme => "Theme",
            SettingsItem::Reminders => "Lab Reminders",
        }
    }

    fn explanation(self) -> &'static str {
        match self {
            SettingsItem::Theme => {
                "Color scheme for the whole app. \
                 \"nocolor\" keeps the layout but drops all styling, for \
                 terminals without color support."
            }
            SettingsItem::Reminders => {
                "When enabled, upcoming lab sessions from your timetable are \
                 surfaced as reminders."
            }
        }
    }
}

#[derive(Default)]
pub struct SettingsScreen {
    selected: SettingsItem,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn cycle_theme(&self, ctx: &mut ScreenContext, forward: bool) {
        let current = ThemeType::from_name(&ctx.config.theme);
        let next = if forward { current.next() } else { current.prev() };
        init_theme(next);
        ctx.config.theme = next.config_value().to_string();
        self.persist(ctx);
    }

    fn toggle_reminders(&self, ctx: &mut ScreenContext) {
        ctx.config.reminders_enabled = !ctx.config.reminders_enabled;
        self.persist(ctx);
    }

    fn persist(&self, ctx: &ScreenContext) {
        // Settings remain applied for the session even if the write fails
        if let Err(err) = ctx.config.save(ctx.config_path) {
            warn!(error = %err, "failed to persist config");
        }
    }
}

impl Screen for SettingsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(SettingsItem::all().len() as u16 + 2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Header::render(frame, chunks[0], "Settings", "Preferences")?;

        let items_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style());
        let inner = items_block.inner(chunks[1]);
        frame.render_widget(items_block, chunks[1]);

        let mut lines = Vec::new();
        for item in SettingsItem::all() {
            let focused = item == self.selected;
            let marker = if focused { "» " } else { "  " };
            let value = match item {
                SettingsItem::Theme => {
                    format!("< {} >", ThemeType::from_name(&ctx.config.theme).name())
                }
                SettingsItem::Reminders => {
                    if ctx.config.reminders_enabled {
                        "[x] enabled".to_string()
                    } else {
                        "[ ] disabled".to_string()
                    }
                }
            };
            lines.push(Line::from(vec![
                Span::styled(marker, t.emphasis_style()),
                Span::styled(format!("{:<16}", item.label()), t.text_style()),
                if focused {
                    Span::styled(value, t.highlight_style())
                } else {
                    Span::styled(value, t.muted_style())
                },
            ]));
        }
        frame.render_widget(Paragraph::new(lines), inner);

        let explanation_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(" About this setting ")
            .title_style(t.muted_style());
        let explanation_inner = explanation_block.inner(chunks[2]);
        frame.render_widget(explanation_block, chunks[2]);
        frame.render_widget(
            Paragraph::new(self.selected.explanation())
                .style(t.text_style())
                .wrap(Wrap { trim: true }),
            explanation_inner,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("↑/↓", t.emphasis_style()),
                Span::styled(" select  ", t.muted_style()),
                Span::styled("←/→/Enter", t.emphasis_style()),
                Span::styled(" change", t.muted_style()),
            ]))
            .alignment(ratatui::layout::Alignment::Center),
            chunks[3],
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
            KeyCode::Up | KeyCode::Down => {
                self.selected = match self.selected {
                    SettingsItem::Theme => SettingsItem::Reminders,
                    SettingsItem::Reminders => SettingsItem::Theme,
                };
            }
            KeyCode::Left => match self.selected {
                SettingsItem::Theme => self.cycle_theme(ctx, false),
                SettingsItem::Reminders => self.toggle_reminders(ctx),
            },
            KeyCode::Right | KeyCode::Enter => match self.selected {
                SettingsItem::Theme => self.cycle_theme(ctx, true),
                SettingsItem::Reminders => self.toggle_reminders(ctx),
            },
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::StudentStore;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_theme_cycles_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut config = Config::default();
        let mut store = StudentStore::new();
        let mut screen = SettingsScreen::new();

        let mut ctx = ScreenContext {
            config: &mut config,
            config_path: &config_path,
            store: &mut store,
        };
        screen.handle_event(&key(KeyCode::Right), &mut ctx).unwrap();

        assert_eq!(config.theme, "light");
        let reloaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(reloaded.theme, "light");
    }

    #[test]
    fn test_reminder_toggle_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut config = Config::default();
        let mut store = StudentStore::new();
        let mut screen = SettingsScreen::new();

        assert!(config.reminders_enabled);
        let mut ctx = ScreenContext {
            config: &mut config,
            config_path: &config_path,
            store: &mut store,
        };
        screen.handle_event(&key(KeyCode::Down), &mut ctx).unwrap();
        screen.handle_event(&key(KeyCode::Enter), &mut ctx).unwrap();

        assert!(!config.reminders_enabled);
        let reloaded = Config::load_or_create(&config_path).unwrap();
        assert!(!reloaded.reminders_enabled);
    }
}
