//! Command-line options.
//!
//! CampusMate is a pure TUI; the CLI only carries startup overrides for the
//! config file.

use clap::Parser;

/// A terminal companion for students: timetable, lab records, and more
#[derive(Debug, Parser)]
#[command(name = "campusmate", version, about)]
pub struct Cli {
    /// UI theme override: dark, light, or nocolor
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Disable all UI colors (same as --theme nocolor)
    #[arg(long)]
    pub no_colors: bool,

    /// Splash screen duration override in milliseconds (0 skips straight to
    /// the login screen timer-wise; any key still skips it too)
    #[arg(long, value_name = "MILLIS")]
    pub splash_millis: Option<u64>,
}

impl Cli {
    /// The effective theme string after flags are reconciled, if any override
    /// was given.
    pub fn theme_override(&self) -> Option<&str> {
        if self.no_colors {
            Some("nocolor")
        } else {
            self.theme.as_deref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colors_wins_over_theme() {
        let cli = Cli::parse_from(["campusmate", "--theme", "light", "--no-colors"]);
        assert_eq!(cli.theme_override(), Some("nocolor"));
    }

    #[test]
    fn test_theme_passthrough() {
        let cli = Cli::parse_from(["campusmate", "--theme", "light"]);
        assert_eq!(cli.theme_override(), Some("light"));
    }

    #[test]
    fn test_no_flags_means_no_override() {
        let cli = Cli::parse_from(["campusmate"]);
        assert_eq!(cli.theme_override(), None);
        assert_eq!(cli.splash_millis, None);
    }
}
