//! Lab records screen.
//!
//! Read-only scrollable list of lab experiment records with their submission
//! status. The records are the canned set seeded into the store.

use crate::components::Header;
use crate::labs::LabStatus;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

pub struct LabRecordsScreen {
    list_state: ListState,
}

impl Default for LabRecordsScreen {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

impl LabRecordsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = current
            .saturating_add_signed(delta)
            .min(len - 1);
        self.list_state.select(Some(next));
    }
}

fn status_label(status: LabStatus) -> &'static str {
    match status {
        LabStatus::Completed => "✓ Completed",
        LabStatus::Submitted => "↑ Submitted",
        LabStatus::Pending => "○ Pending",
    }
}

impl Screen for LabRecordsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)])
            .split(area);

        Header::render(frame, chunks[0], "Lab Records", "Experiment submissions")?;

        let items: Vec<ListItem> = ctx
            .store
            .lab_records()
            .iter()
            .map(|record| {
                let status_style = match record.status {
                    LabStatus::Completed => t.success_style(),
                    LabStatus::Submitted => t.emphasis_style(),
                    LabStatus::Pending => t.warning_style(),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{:<14}", status_label(record.status)), status_style),
                        Span::styled(record.experiment.clone(), t.text_style()),
                    ]),
                    Line::from(vec![
                        Span::styled("              ", t.muted_style()),
                        Span::styled(
                            format!("{}  ·  {}", record.subject, record.date),
                            t.muted_style(),
                        ),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        let len = ctx.store.lab_records().len();
        match key.code {
            KeyCode::Up => self.move_selection(-1, len),
            KeyCode::Down => self.move_selection(1, len),
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut screen = LabRecordsScreen::new();
        screen.move_selection(-1, 5);
        assert_eq!(screen.list_state.selected(), Some(0));

        for _ in 0..20 {
            screen.move_selection(1, 5);
        }
        assert_eq!(screen.list_state.selected(), Some(4));
    }

    #[test]
    fn test_empty_list_keeps_selection() {
        let mut screen = LabRecordsScreen::new();
        screen.move_selection(1, 0);
        assert_eq!(screen.list_state.selected(), Some(0));
    }
}
