//! Theme and style system for CampusMate.
//!
//! Provides consistent styling across the screens, including the per-type
//! badge colors used by the timetable (lecture/lab/practical).

use crate::timetable::EntryType;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// List selection indicator shown next to the selected item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates from the Settings screen)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::Magenta,
    secondary: Color::Cyan,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Yellow,
    border: Color::DarkGray,
    border_focused: Color::Magenta,
    highlight_bg: Color::DarkGray,
    lecture: Color::Blue,
    lab: Color::Green,
    practical: Color::Rgb(255, 150, 60),
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl ThemeType {
    pub fn all() -> [ThemeType; 3] {
        [ThemeType::Dark, ThemeType::Light, ThemeType::NoColor]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
            ThemeType::NoColor => "No Color",
        }
    }

    /// Parse a config value, falling back to the default theme for anything
    /// unrecognized.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn next(self) -> Self {
        match self {
            ThemeType::Dark => ThemeType::Light,
            ThemeType::Light => ThemeType::NoColor,
            ThemeType::NoColor => ThemeType::Dark,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ThemeType::Dark => ThemeType::NoColor,
            ThemeType::Light => ThemeType::Dark,
            ThemeType::NoColor => ThemeType::Light,
        }
    }

    /// The string stored in config.toml for this theme.
    pub fn config_value(&self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
            ThemeType::NoColor => "nocolor",
        }
    }
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Main accent color (borders, titles, key UI elements). CampusMate
    /// brands itself violet, so this leans magenta/purple.
    pub primary: Color,
    /// Secondary accent
    pub secondary: Color,

    /// Success states (completed labs, saved settings)
    pub success: Color,
    /// Warning states (pending labs)
    pub warning: Color,
    /// Error states
    pub error: Color,

    /// Main text color
    pub text: Color,
    /// Muted/secondary text
    pub text_muted: Color,
    /// Emphasized text (key hints, highlights)
    pub text_emphasis: Color,

    /// Default border color
    pub border: Color,
    /// Focused/active border color
    pub border_focused: Color,
    /// Selection highlight background
    pub highlight_bg: Color,

    /// Badge color for lecture entries
    pub lecture: Color,
    /// Badge color for lab entries
    pub lab: Color,
    /// Badge color for practical entries
    pub practical: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Magenta,
            secondary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Magenta,
            highlight_bg: Color::DarkGray,
            lecture: Color::Blue,
            lab: Color::Green,
            practical: Color::Rgb(255, 150, 60),
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Rgb(110, 40, 180),
            secondary: Color::Blue,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            border_focused: Color::Rgb(110, 40, 180),
            highlight_bg: Color::Gray,
            lecture: Color::Blue,
            lab: Color::Rgb(0, 130, 60),
            practical: Color::Rgb(190, 95, 0),
        }
    }

    /// No-color theme - style helpers fall back to modifiers only so no
    /// color codes are emitted.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            lecture: Color::Reset,
            lab: Color::Reset,
            practical: Color::Reset,
        }
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (key hints)
    pub fn emphasis_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    /// Style for success states
    pub fn success_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    /// Style for warning states
    pub fn warning_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.warning)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for list item highlight (selected row)
    pub fn highlight_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge color for a timetable entry type.
    pub fn entry_type_color(&self, kind: EntryType) -> Color {
        match kind {
            EntryType::Lecture => self.lecture,
            EntryType::Lab => self.lab,
            EntryType::Practical => self.practical,
        }
    }

    /// Badge style for a timetable entry type.
    pub fn entry_type_style(&self, kind: EntryType) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.entry_type_color(kind))
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("nocolor".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
    }

    #[test]
    fn test_config_value_round_trips() {
        for t in ThemeType::all() {
            assert_eq!(t.config_value().parse::<ThemeType>().unwrap(), t);
        }
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        let s = t.highlight_style();
        // In no-color mode we rely on modifiers only, not fg/bg.
        assert!(s.fg.is_none());
        assert!(s.bg.is_none());
    }

    #[test]
    fn test_entry_types_have_distinct_colors() {
        let t = Theme::dark();
        assert_ne!(t.entry_type_color(EntryType::Lecture), t.entry_type_color(EntryType::Lab));
        assert_ne!(t.entry_type_color(EntryType::Lab), t.entry_type_color(EntryType::Practical));
    }
}
