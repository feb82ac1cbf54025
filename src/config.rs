//! Application preferences.
//!
//! This covers UI preferences only (theme, splash duration, the reminders
//! toggle). Student data — timetable, lab records, identity — is deliberately
//! never persisted; it lives in the store for the session and is gone on exit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure, stored as `config.toml` under the platform
/// config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light", or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// How long the splash screen shows before advancing to login
    #[serde(default = "default_splash_millis")]
    pub splash_millis: u64,
    /// Lab reminders toggle. Display-only: the UI claims reminders, but no
    /// delivery mechanism exists.
    #[serde(default = "default_reminders_enabled")]
    pub reminders_enabled: bool,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_splash_millis() -> u64 {
    1500
}

fn default_reminders_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            splash_millis: default_splash_millis(),
            reminders_enabled: default_reminders_enabled(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create the file with defaults.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file, creating parent directories as needed.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }
}
