// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::{self, Category};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a toast of this category from the main notifier.
    Show(Category),
    /// Show a neutral toast from the second notifier on the same corner.
    ShowShared,
    /// Show a toast from the notifier on the opposite corner.
    ShowOpposite,
    /// Interaction with a toast, fanned out to every notifier.
    Toast(notifications::Message),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Corner override, e.g. `bottom-left`.
    pub position: Option<String>,
    /// Display time override in milliseconds.
    pub duration_ms: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
