// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of toast notifications.
//!
//! - [`scene`] - `Scene`, the retained presenter the lifecycle core draws into
//! - [`toast`] - Toast card widget
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod scene;
pub mod toast;

pub use scene::Scene;
