//! Small shared utilities.

pub mod text_input;

pub use text_input::TextInput;

use std::path::PathBuf;

/// Path of the app config file (`config.toml` under the platform config dir).
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campusmate")
        .join("config.toml")
}

/// Directory log files are written to (platform cache dir).
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campusmate")
}
