//! Home dashboard.
//!
//! Read-only overview: greeting, today's classes pulled from the timetable
//! grouping, and a couple of quick counts. All data comes from the store.

use crate::components::Header;
use crate::labs::LabStatus;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::timetable::{grouped_by_day, Day, EntryType};
use anyhow::Result;
use chrono::{Datelike, Local, Timelike};
use crossterm::event::Event;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

#[derive(Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    fn greeting() -> &'static str {
        match Local::now().hour() {
            5..=11 => "Good morning",
            12..=16 => "Good afternoon",
            _ => "Good evening",
        }
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let now = Local::now();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(4),
            ])
            .split(area);

        let subtitle = now.format("%A, %-d %B %Y").to_string();
        Header::render(frame, chunks[0], "Home", &subtitle)?;

        // Greeting and quick stats
        let greeting = match ctx.store.roll_number() {
            Some(roll) => format!("{}, {}!", Self::greeting(), roll),
            None => format!("{}!", Self::greeting()),
        };
        let classes = ctx.store.timetable().len();
        let lab_sessions = ctx
            .store
            .timetable()
            .iter()
            .filter(|e| e.kind != EntryType::Lecture)
            .count();
        let pending_labs = ctx
            .store
            .lab_records()
            .iter()
            .filter(|r| r.status == LabStatus::Pending)
            .count();

        let stats = vec![
            Line::from(Span::styled(greeting, t.title_style())),
            Line::from(vec![
                Span::styled(format!("{} classes", classes), t.text_style()),
                Span::styled("  ·  ", t.muted_style()),
                Span::styled(format!("{} lab sessions", lab_sessions), t.text_style()),
                Span::styled("  ·  ", t.muted_style()),
                Span::styled(format!("{} labs pending", pending_labs), t.warning_style()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(stats).block(Block::default().borders(Borders::NONE)),
            chunks[1].inner(ratatui::layout::Margin::new(2, 1)),
        );

        // Today's classes
        let today_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(" Today ")
            .title_style(t.title_style());
        let inner = today_block.inner(chunks[2]);
        frame.render_widget(today_block, chunks[2]);

        let mut lines = Vec::new();
        match Day::from_weekday(now.weekday()) {
            Some(today) => {
                let groups = grouped_by_day(ctx.store.timetable());
                let todays = groups
                    .iter()
                    .find(|(day, _)| *day == today)
                    .map(|(_, entries)| entries.as_slice())
                    .unwrap_or(&[]);
                if todays.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("No classes scheduled for {}", today),
                        t.muted_style(),
                    )));
                } else {
                    for entry in todays {
                        lines.push(Line::from(vec![
                            Span::styled(
                                format!("{} ", entry.kind.icon()),
                                t.entry_type_style(entry.kind),
                            ),
                            Span::styled(format!("{}  ", entry.time), t.emphasis_style()),
                            Span::styled(entry.subject.clone(), t.text_style()),
                            Span::styled(format!("  {}", entry.room), t.muted_style()),
                        ]));
                    }
                }
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "It's Sunday. No classes today.",
                    t.muted_style(),
                )));
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);
        Ok(())
    }

    fn handle_event(&mut self, _event: &Event, _ctx: &mut ScreenContext) -> Result<ScreenAction> {
        // Dashboard is read-only; navigation keys are handled by the shell
        Ok(ScreenAction::None)
    }
}
