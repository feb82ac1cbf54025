//! Timetable screen.
//!
//! Day-by-day listing of the shared timetable with three interactions: a
//! manual add-entry form, per-entry removal, and the simulated file import.
//! The import deliberately never reads the chosen file; it substitutes the
//! canned sample dataset (see `timetable::sample_timetable`).

use crate::components::Header;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::timetable::{grouped_by_day, sample_timetable, Day, EntryDraft, EntryType};
use crate::utils::TextInput;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::info;

/// What the screen is currently showing on top of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Browse,
    /// Manual add-entry form.
    AddForm,
    /// Simulated upload prompt.
    Import,
}

/// Fields of the add-entry form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FormField {
    #[default]
    Day,
    Time,
    Subject,
    Room,
    Kind,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Day => FormField::Time,
            FormField::Time => FormField::Subject,
            FormField::Subject => FormField::Room,
            FormField::Room => FormField::Kind,
            FormField::Kind => FormField::Day,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Day => FormField::Kind,
            FormField::Time => FormField::Day,
            FormField::Subject => FormField::Time,
            FormField::Room => FormField::Subject,
            FormField::Kind => FormField::Room,
        }
    }
}

/// Add-entry form state. Day and kind always hold a valid value; the draft
/// survives cancel and is reset only after a successful add, matching the
/// store's creation contract.
#[derive(Default)]
struct AddForm {
    day: Day,
    time: TextInput,
    subject: TextInput,
    room: TextInput,
    kind: EntryType,
    focused: FormField,
}

impl AddForm {
    fn draft(&self) -> EntryDraft {
        EntryDraft {
            day: self.day,
            time: self.time.text().trim().to_string(),
            subject: self.subject.text().trim().to_string(),
            room: self.room.text().trim().to_string(),
            kind: self.kind,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Default)]
pub struct TimetableScreen {
    mode: Mode,
    form: AddForm,
    import_path: TextInput,
    /// Index into the flattened grouped order (day order, time-sorted).
    selected: usize,
    status: Option<String>,
}

impl TimetableScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry ids in the order they are displayed: grouped by day, sorted by
    /// time within the day. Selection indexes into this.
    fn displayed_ids(store: &crate::state::StudentStore) -> Vec<String> {
        grouped_by_day(store.timetable())
            .into_iter()
            .flat_map(|(_, group)| group.into_iter().map(|e| e.id.clone()))
            .collect()
    }

    fn handle_browse_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext) -> ScreenAction {
        let count = ctx.store.timetable().len();
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.status = None;
                self.mode = Mode::AddForm;
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.status = None;
                self.import_path.clear();
                self.mode = Mode::Import;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                let ids = Self::displayed_ids(ctx.store);
                if let Some(id) = ids.get(self.selected) {
                    ctx.store.remove_entry(id);
                    self.status = Some("Entry removed".to_string());
                    let remaining = ctx.store.timetable().len();
                    if remaining > 0 {
                        self.selected = self.selected.min(remaining - 1);
                    } else {
                        self.selected = 0;
                    }
                }
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn handle_form_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext) -> ScreenAction {
        match key.code {
            KeyCode::Esc => {
                // Cancel keeps the draft, as the form did originally
                self.mode = Mode::Browse;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focused = self.form.focused.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focused = self.form.focused.prev();
            }
            KeyCode::Enter => {
                // Rejected submits stay silent: the form simply remains open
                if ctx.store.add_entry(self.form.draft()) {
                    self.form.reset();
                    self.status = Some("Entry added".to_string());
                    self.mode = Mode::Browse;
                }
            }
            KeyCode::Left if self.form.focused == FormField::Day => {
                self.form.day = self.form.day.prev();
            }
            KeyCode::Right if self.form.focused == FormField::Day => {
                self.form.day = self.form.day.next();
            }
            KeyCode::Left if self.form.focused == FormField::Kind => {
                self.form.kind = self.form.kind.prev();
            }
            KeyCode::Right if self.form.focused == FormField::Kind => {
                self.form.kind = self.form.kind.next();
            }
            code => {
                if let Some(input) = self.focused_text_mut() {
                    input.handle_key(code);
                }
            }
        }
        ScreenAction::None
    }

    fn handle_import_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext) -> ScreenAction {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                // Simulated processing: the file is never opened. A selected
                // path substitutes the sample dataset; no selection is a
                // silent no-op.
                if !self.import_path.is_empty() {
                    info!(path = %self.import_path.text(), "simulated timetable import");
                    ctx.store.set_timetable(sample_timetable());
                    self.selected = 0;
                    self.status = Some("Timetable imported (6 entries)".to_string());
                }
                self.mode = Mode::Browse;
            }
            code => {
                self.import_path.handle_key(code);
            }
        }
        ScreenAction::None
    }

    fn focused_text_mut(&mut self) -> Option<&mut TextInput> {
        match self.form.focused {
            FormField::Time => Some(&mut self.form.time),
            FormField::Subject => Some(&mut self.form.subject),
            FormField::Room => Some(&mut self.form.room),
            FormField::Day | FormField::Kind => None,
        }
    }

    fn render_listing(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();

        if ctx.store.timetable().is_empty() {
            let placeholder = vec![
                Line::from(""),
                Line::from(Span::styled("No Timetable Found", t.title_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Upload your timetable or add entries manually to get started",
                    t.text_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Once uploaded, the app will automatically remind you about lab sessions!",
                    t.warning_style(),
                )),
            ];
            frame.render_widget(
                Paragraph::new(placeholder)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                area,
            );
            return;
        }

        // Day headers and entry rows interleave in one list; only entry rows
        // are selectable.
        let mut items: Vec<ListItem> = Vec::new();
        let mut selected_item_index = None;
        let mut entry_index = 0usize;

        for (day, group) in grouped_by_day(ctx.store.timetable()) {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("── {} ", day),
                t.title_style(),
            ))));
            if group.is_empty() {
                items.push(ListItem::new(Line::from(Span::styled(
                    format!("   No classes scheduled for {}", day),
                    t.muted_style(),
                ))));
                continue;
            }
            for entry in group {
                if entry_index == self.selected {
                    selected_item_index = Some(items.len());
                }
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} [{}] ", entry.kind.icon(), entry.kind),
                        t.entry_type_style(entry.kind),
                    ),
                    Span::styled(format!("{}  ", entry.time), t.emphasis_style()),
                    Span::styled(entry.subject.clone(), t.text_style()),
                    Span::styled(format!("  {}", entry.room), t.muted_style()),
                ])));
                entry_index += 1;
            }
        }

        let mut list_state = ListState::default();
        list_state.select(selected_item_index);

        let list = List::new(items)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_form_popup(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let popup = centered_rect(46, 13, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(" Add New Entry ")
            .title_style(t.title_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let field_line = |label: &str, value: String, field: FormField| {
            let marker = if self.form.focused == field { "» " } else { "  " };
            Line::from(vec![
                Span::styled(marker, t.emphasis_style()),
                Span::styled(format!("{:<9}", label), t.muted_style()),
                if self.form.focused == field {
                    Span::styled(value, t.highlight_style())
                } else {
                    Span::styled(value, t.text_style())
                },
            ])
        };

        let lines = vec![
            field_line("Day", format!("< {} >", self.form.day), FormField::Day),
            field_line(
                "Time",
                placeholder_or(self.form.time.text(), "09:00-10:00"),
                FormField::Time,
            ),
            field_line(
                "Subject",
                placeholder_or(self.form.subject.text(), "Data Structures"),
                FormField::Subject,
            ),
            field_line(
                "Room",
                placeholder_or(self.form.room.text(), "CS-201"),
                FormField::Room,
            ),
            field_line("Type", format!("< {} >", self.form.kind), FormField::Kind),
            Line::from(""),
            Line::from(vec![
                Span::styled("Tab", t.emphasis_style()),
                Span::styled(" next  ", t.muted_style()),
                Span::styled("←/→", t.emphasis_style()),
                Span::styled(" cycle  ", t.muted_style()),
                Span::styled("Enter", t.emphasis_style()),
                Span::styled(" add  ", t.muted_style()),
                Span::styled("Esc", t.emphasis_style()),
                Span::styled(" cancel", t.muted_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_import_popup(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let popup = centered_rect(56, 8, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(" Upload Timetable ")
            .title_style(t.title_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines = vec![
            Line::from(Span::styled(
                "Timetable file (.csv, .pdf, .png, .jpg, .jpeg):",
                t.text_style(),
            )),
            Line::from(Span::styled(
                format!("> {}", self.import_path.text()),
                t.emphasis_style(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", t.emphasis_style()),
                Span::styled(" upload  ", t.muted_style()),
                Span::styled("Esc", t.emphasis_style()),
                Span::styled(" cancel", t.muted_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Fixed-size popup centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn placeholder_or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("({})", placeholder)
    } else {
        value.to_string()
    }
}

impl Screen for TimetableScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);

        Header::render(
            frame,
            chunks[0],
            "My Timetable",
            "Upload or manage your class schedule",
        )?;

        self.render_listing(frame, chunks[1], ctx);

        let t = theme();
        let hint = match &self.status {
            Some(status) => Line::from(Span::styled(status.clone(), t.success_style())),
            None => Line::from(vec![
                Span::styled("a", t.emphasis_style()),
                Span::styled(" add  ", t.muted_style()),
                Span::styled("u", t.emphasis_style()),
                Span::styled(" upload  ", t.muted_style()),
                Span::styled("d", t.emphasis_style()),
                Span::styled(" remove  ", t.muted_style()),
                Span::styled("↑/↓", t.emphasis_style()),
                Span::styled(" select", t.muted_style()),
            ]),
        };
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[2]);

        match self.mode {
            Mode::Browse => {}
            Mode::AddForm => self.render_form_popup(frame, area),
            Mode::Import => self.render_import_popup(frame, area),
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        let action = match self.mode {
            Mode::Browse => self.handle_browse_key(*key, ctx),
            Mode::AddForm => self.handle_form_key(*key, ctx),
            Mode::Import => self.handle_import_key(*key, ctx),
        };
        Ok(action)
    }

    fn is_input_focused(&self) -> bool {
        self.mode != Mode::Browse
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

    fn type_str(screen: &mut TimetableScreen, ctx: &mut ScreenContext, s: &str) {
        for c in s.chars() {
            screen.handle_event(&key(KeyCode::Char(c)), ctx).unwrap();
        }
    }

    struct Fixture {
        config: Config,
        store: StudentStore,
        config_path: std::path::PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                config: Config::default(),
                store: StudentStore::new(),
                config_path: std::path::PathBuf::from("/dev/null"),
            }
        }

        fn ctx(&mut self) -> ScreenContext<'_> {
            ScreenContext {
                config: &mut self.config,
                config_path: &self.config_path,
                store: &mut self.store,
            }
        }
    }

    #[test]
    fn test_add_form_submits_complete_entry() {
        let mut fx = Fixture::new();
        let mut screen = TimetableScreen::new();

        let mut ctx = fx.ctx();
        screen.handle_event(&key(KeyCode::Char('a')), &mut ctx).unwrap();
        // Day field: cycle to Tuesday
        screen.handle_event(&key(KeyCode::Right), &mut ctx).unwrap();
        screen.handle_event(&key(KeyCode::Tab), &mut ctx).unwrap();
        type_str(&mut screen, &mut ctx, "10:00-11:00");
        screen.handle_event(&key(KeyCode::Tab), &mut ctx).unwrap();
        type_str(&mut screen, &mut ctx, "DB");
        screen.handle_event(&key(KeyCode::Tab), &mut ctx).unwrap();
        type_str(&mut screen, &mut ctx, "CS-203");
        screen.handle_event(&key(KeyCode::Enter), &mut ctx).unwrap();

        assert_eq!(fx.store.timetable().len(), 1);
        let entry = &fx.store.timetable()[0];
        assert_eq!(entry.day, Day::Tuesday);
        assert_eq!(entry.subject, "DB");
        assert!(!screen.is_input_focused(), "form should close on success");
    }

    #[test]
    fn test_incomplete_form_stays_open_and_adds_nothing() {
        let mut fx = Fixture::new();
        let mut screen = TimetableScreen::new();

        let mut ctx = fx.ctx();
        screen.handle_event(&key(KeyCode::Char('a')), &mut ctx).unwrap();
        screen.handle_event(&key(KeyCode::Tab), &mut ctx).unwrap();
        type_str(&mut screen, &mut ctx, "10:00-11:00");
        // Subject and room left empty
        screen.handle_event(&key(KeyCode::Enter), &mut ctx).unwrap();

        assert!(fx.store.timetable().is_empty());
        assert!(screen.is_input_focused(), "form remains open");
    }

    #[test]
    fn test_cancel_keeps_draft_for_next_open() {
        let mut fx = Fixture::new();
        let mut screen = TimetableScreen::new();

        let mut ctx = fx.ctx();
        screen.handle_event(&key(KeyCode::Char('a')), &mut ctx).unwrap();
        screen.handle_event(&key(KeyCode::Tab), &mut ctx).unwrap();
        type_str(&mut screen, &mut ctx, "09:00");
        screen.handle_event(&key(KeyCode::Esc), &mut ctx).unwrap();

        assert_eq!(screen.form.time.text(), "09:00");
    }

    #[test]
    fn test_import_with_path_substitutes_sample_set() {
        let mut fx = Fixture::new();
        let mut screen = TimetableScreen::new();

        let mut ctx = fx.ctx();
        screen.handle_event(&key(KeyCode::Char('u')), &mut ctx).unwrap();
        type_str(&mut screen, &mut ctx, "semester.csv");
        screen.handle_event(&key(KeyCode::Enter), &mut ctx).unwrap();

        assert_eq!(fx.store.timetable().len(), 6);
        assert_eq!(fx.store.timetable(), sample_timetable().as_slice());
    }

    #[test]
    fn test_import_without_path_is_silent_no_op() {
        let mut fx = Fixture::new();
        fx.store.set_timetable(sample_timetable());
        let mut screen = TimetableScreen::new();

        let mut ctx = fx.ctx();
        screen.handle_event(&key(KeyCode::Char('u')), &mut ctx).unwrap();
        screen.handle_event(&key(KeyCode::Enter), &mut ctx).unwrap();

        assert_eq!(fx.store.timetable().len(), 6);
        assert!(!screen.is_input_focused());
    }

    #[test]
    fn test_import_replaces_prior_entries() {
        let mut fx = Fixture::new();
        let mut screen = TimetableScreen::new();

        {
            let mut ctx = fx.ctx();
            screen.handle_event(&key(KeyCode::Char('a')), &mut ctx).unwrap();
            screen.handle_event(&key(KeyCode::Tab), &mut ctx).unwrap();
            type_str(&mut screen, &mut ctx, "08:00-09:00");
            screen.handle_event(&key(KeyCode::Tab), &mut ctx).unwrap();
            type_str(&mut screen, &mut ctx, "Maths");
            screen.handle_event(&key(KeyCode::Tab), &mut ctx).unwrap();
            type_str(&mut screen, &mut ctx, "M-101");
            screen.handle_event(&key(KeyCode::Enter), &mut ctx).unwrap();
        }
        assert_eq!(fx.store.timetable().len(), 1);

        let mut ctx = fx.ctx();
        screen.handle_event(&key(KeyCode::Char('u')), &mut ctx).unwrap();
        type_str(&mut screen, &mut ctx, "t.pdf");
        screen.handle_event(&key(KeyCode::Enter), &mut ctx).unwrap();

        assert_eq!(fx.store.timetable().len(), 6);
        assert!(fx.store.timetable().iter().all(|e| e.subject != "Maths"));
    }

    #[test]
    fn test_remove_selected_entry() {
        let mut fx = Fixture::new();
        fx.store.set_timetable(sample_timetable());
        let mut screen = TimetableScreen::new();

        // Selection 0 is Monday 09:00 Data Structures in display order
        let mut ctx = fx.ctx();
        screen.handle_event(&key(KeyCode::Char('d')), &mut ctx).unwrap();

        assert_eq!(fx.store.timetable().len(), 5);
        assert!(fx.store.timetable().iter().all(|e| e.subject != "Data Structures"
            || e.kind != EntryType::Lecture));
    }

    #[test]
    fn test_remove_on_empty_store_does_nothing() {
        let mut fx = Fixture::new();
        let mut screen = TimetableScreen::new();

        let mut ctx = fx.ctx();
        screen.handle_event(&key(KeyCode::Char('d')), &mut ctx).unwrap();
        assert!(fx.store.timetable().is_empty());
    }

    #[test]
    fn test_selection_stays_in_bounds_after_removal() {
        let mut fx = Fixture::new();
        fx.store.set_timetable(sample_timetable());
        let mut screen = TimetableScreen::new();

        let mut ctx = fx.ctx();
        for _ in 0..10 {
            screen.handle_event(&key(KeyCode::Down), &mut ctx).unwrap();
        }
        assert_eq!(screen.selected, 5);
        screen.handle_event(&key(KeyCode::Char('d')), &mut ctx).unwrap();
        assert_eq!(screen.selected, 4);
    }
}
