// SPDX-License-Identifier: MPL-2.0
//! Toast categories.
//!
//! The category picks the accent color and icon a presenter uses. Parsing is
//! infallible: names outside the four known ones become [`Category::Neutral`],
//! which presenters draw without a category color or icon.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Semantic classification of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
    /// Something needs attention but nothing failed (orange).
    Warning,
    /// Plain information (blue).
    #[default]
    Info,
    /// Unrecognized category name, drawn with a bare style.
    Neutral,
}

impl Category {
    /// The four categories that carry their own color and icon.
    pub const STYLED: [Category; 4] = [
        Category::Success,
        Category::Error,
        Category::Warning,
        Category::Info,
    ];

    /// Returns the lowercase name used in class lists and config files.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
            Category::Neutral => "neutral",
        }
    }

    /// Returns whether this category has a dedicated color and icon.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        !matches!(self, Category::Neutral)
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "success" => Category::Success,
            "error" => Category::Error,
            "warning" => Category::Warning,
            "info" => Category::Info,
            _ => Category::Neutral,
        })
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
