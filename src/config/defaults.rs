// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Display duration, exit animation, progress frame rate
//! - **Layout**: Corner offsets and toast sizing
//! - **Styling**: Default class names

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a toast stays on screen (in milliseconds), not counting pauses.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Length of the slide-out animation before a toast is unmounted (in milliseconds).
pub const EXIT_ANIMATION_MS: u64 = 300;

/// Interval between progress bar redraws (in milliseconds), about one display frame.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Distance between a toast container and the two screen edges it is anchored to.
pub const SURFACE_OFFSET: f32 = 20.0;

/// Maximum width of a toast container.
pub const CONTAINER_MAX_WIDTH: f32 = 380.0;

/// Vertical gap between stacked toasts.
pub const STACK_GAP: f32 = 10.0;

// ==========================================================================
// Styling Defaults
// ==========================================================================

/// Default class name of the per-corner container.
pub const DEFAULT_CONTAINER_CLASS: &str = "infinity-toast-container";

/// Default class name of each toast.
pub const DEFAULT_TOAST_CLASS: &str = "infinity-toast";
