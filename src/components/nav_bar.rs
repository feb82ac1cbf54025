use crate::state::ScreenId;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bottom navigation bar.
///
/// Shown only on the four tab screens; the splash and login screens render
/// without it. Each tab shows its number key so the binding is discoverable.
pub struct NavBar;

impl NavBar {
    /// Height the bar occupies (border line + tab line).
    pub const HEIGHT: u16 = 2;

    pub fn render(frame: &mut Frame, area: Rect, active: ScreenId) -> Result<()> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, tab) in ScreenId::nav_tabs().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  |  ", t.muted_style()));
            }
            let label = format!("[{}] {}", i + 1, tab.title());
            if tab == active {
                spans.push(Span::styled(label, t.title_style()));
            } else {
                spans.push(Span::styled(label, t.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style());
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );
        Ok(())
    }
}
