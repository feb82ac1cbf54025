use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render a bordered header with a centered title and a subtitle line.
    ///
    /// Returns the height used so screens can lay out below it.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let subtitle_para = Paragraph::new(subtitle)
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(subtitle_para, inner);

        Ok(area.height)
    }
}
