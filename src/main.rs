use anyhow::{Context, Result};
use campusmate::app::App;
use campusmate::cli::Cli;
use campusmate::config::Config;
use campusmate::styles::{init_theme, ThemeType};
use campusmate::tui::Tui;
use campusmate::utils;
use clap::Parser;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore the terminal so the panic message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    // Log to a file; stdout belongs to the TUI
    let log_dir = utils::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "campusmate.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = utils::config_file_path();
    let mut config = Config::load_or_create(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // CLI overrides apply for this session only; they are not written back
    if let Some(theme) = cli.theme_override() {
        config.theme = theme.to_string();
    }
    if let Some(millis) = cli.splash_millis {
        config.splash_millis = millis;
    }
    init_theme(ThemeType::from_name(&config.theme));

    let mut tui = Tui::new()?;
    tui.enter()?;
    let result = App::new(config, config_path).run(&mut tui);
    let exit_result = tui.exit();

    result.and(exit_result)
}
