// SPDX-License-Identifier: MPL-2.0
//! Notifier configuration, including loading and saving it to a
//! `settings.toml` file.
//!
//! A [`Config`] is fixed for the lifetime of a notifier. Missing fields take
//! the defaults from [`defaults`], and [`Config::normalized`] replaces values
//! that count as unset (a zero duration, empty class names).
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::notifications::Position;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Adjust and save
//! let config = config.with_position(Position::BottomLeft).with_duration_ms(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::notifications::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

/// Per-notifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Corner the toasts stack in. Unknown names fall back to `top-right`.
    pub position: Position,

    /// Display time in milliseconds, not counting hover pauses.
    pub duration_ms: u64,

    /// Whether to draw the category icon.
    pub show_icon: bool,

    /// Whether to draw a close control.
    pub show_close_button: bool,

    /// Class name of the per-corner container.
    pub container_class_name: String,

    /// Class name of each toast.
    pub toast_class_name: String,

    /// Whether clicking anywhere on a toast dismisses it.
    pub dismiss_on_click: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: Position::default(),
            duration_ms: DEFAULT_DURATION_MS,
            show_icon: true,
            show_close_button: true,
            container_class_name: DEFAULT_CONTAINER_CLASS.to_string(),
            toast_class_name: DEFAULT_TOAST_CLASS.to_string(),
            dismiss_on_click: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    #[must_use]
    pub fn with_show_close_button(mut self, show_close_button: bool) -> Self {
        self.show_close_button = show_close_button;
        self
    }

    #[must_use]
    pub fn with_container_class_name(mut self, name: impl Into<String>) -> Self {
        self.container_class_name = name.into();
        self
    }

    #[must_use]
    pub fn with_toast_class_name(mut self, name: impl Into<String>) -> Self {
        self.toast_class_name = name.into();
        self
    }

    #[must_use]
    pub fn with_dismiss_on_click(mut self, dismiss_on_click: bool) -> Self {
        self.dismiss_on_click = dismiss_on_click;
        self
    }

    /// Replaces unset values with their defaults.
    ///
    /// A zero duration and blank class names count as unset.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.duration_ms == 0 {
            self.duration_ms = DEFAULT_DURATION_MS;
        }
        if self.container_class_name.trim().is_empty() {
            self.container_class_name = DEFAULT_CONTAINER_CLASS.to_string();
        }
        if self.toast_class_name.trim().is_empty() {
            self.toast_class_name = DEFAULT_TOAST_CLASS.to_string();
        }
        self
    }

    /// Returns the display time.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment, then platform default.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable toast config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config.normalized())
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.position, Position::TopRight);
        assert_eq!(config.duration(), Duration::from_millis(3000));
        assert!(config.show_icon);
        assert!(config.show_close_button);
        assert!(!config.dismiss_on_click);
        assert_eq!(config.container_class_name, "infinity-toast-container");
        assert_eq!(config.toast_class_name, "infinity-toast");
    }

    #[test]
    fn normalized_restores_unset_values() {
        let config = Config::default()
            .with_duration_ms(0)
            .with_toast_class_name("")
            .with_container_class_name("  ")
            .normalized();

        assert_eq!(config.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(config.toast_class_name, DEFAULT_TOAST_CLASS);
        assert_eq!(config.container_class_name, DEFAULT_CONTAINER_CLASS);
    }

    #[test]
    fn normalized_keeps_explicit_values() {
        let config = Config::default()
            .with_duration_ms(5000)
            .with_show_icon(false)
            .normalized();
        assert_eq!(config.duration_ms, 5000);
        assert!(!config.show_icon);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config::default()
            .with_position(Position::BottomLeft)
            .with_duration_ms(4500)
            .with_show_close_button(false)
            .with_dismiss_on_click(true);
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn position_is_stored_by_name() {
        let config = Config::default().with_position(Position::BottomRight);
        let content = toml::to_string_pretty(&config).expect("serialize");
        assert!(content.contains("position = \"bottom-right\""), "{content}");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "position = \"top-left\"\nduration_ms = 0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.position, Position::TopLeft);
        assert_eq!(loaded.duration_ms, DEFAULT_DURATION_MS);
        assert!(loaded.show_icon);
    }

    #[test]
    fn unknown_position_loads_as_top_right() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "position = \"center\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.position, Position::TopRight);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "duration_ms = \"soon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep").join("path");
        save_with_override(&Config::default(), Some(dir.clone())).expect("save");
        assert!(dir.join(CONFIG_FILE).exists());
    }
}
