//! ASCII logo shown on the splash screen.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Paragraph, Widget};

const LOGO: &str = r"
   ___                              __  __      _
  / __|__ _ _ __  _ __ _  _ ___   |  \/  |__ _| |_ ___
 | (__/ _` | '  \| '_ \ || (_-<   | |\/| / _` |  _/ -_)
  \___\__,_|_|_|_| .__/\_,_/__/   |_|  |_\__,_|\__\___|
                 |_|
";

/// Centered logo widget.
pub struct CampusLogo;

impl CampusLogo {
    /// Logo height in terminal rows, for layout math.
    pub fn height() -> u16 {
        LOGO.lines().count() as u16
    }
}

impl Widget for CampusLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        Paragraph::new(LOGO)
            .style(t.title_style())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
