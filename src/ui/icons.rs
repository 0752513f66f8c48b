// SPDX-License-Identifier: MPL-2.0
//! Toast icons.
//!
//! SVG sources are embedded at compile time via `include_bytes!` and handles
//! are cached using `OnceLock`, so each icon is parsed once per process.
//! Glyphs are drawn in black and tinted by the toast style.

use crate::notifications::Category;
use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(success, "success.svg", "Check mark.");
define_icon!(error, "error.svg", "Circle with a cross.");
define_icon!(warning, "warning.svg", "Triangle with an exclamation mark.");
define_icon!(info, "info.svg", "Circle with an \"i\".");
define_icon!(close, "close.svg", "Cross, used by the close control.");

/// Returns the icon for a category. Neutral toasts have none.
#[must_use]
pub fn for_category(category: Category) -> Option<Svg<'static>> {
    match category {
        Category::Success => Some(success()),
        Category::Error => Some(error()),
        Category::Warning => Some(warning()),
        Category::Info => Some(info()),
        Category::Neutral => None,
    }
}
