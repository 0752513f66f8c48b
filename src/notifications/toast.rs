// SPDX-License-Identifier: MPL-2.0
//! The toast entity and its state machine.
//!
//! A toast moves `Pending -> Visible -> (Paused <-> Visible)* -> Dismissing -> Removed`.
//! It never goes back to `Pending`, and `Removed` is terminal: further
//! transition requests are refused without side effects.

use super::category::Category;
use super::registry::Position;
use std::time::Duration;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastState {
    /// Created but not yet mounted.
    Pending,
    /// On screen with its countdown running.
    Visible,
    /// On screen with its countdown frozen (pointer hovering).
    Paused,
    /// Playing the exit animation, waiting for removal.
    Dismissing,
    /// Unmounted. Terminal.
    Removed,
}

impl ToastState {
    /// Returns whether the state machine allows moving from `self` to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: ToastState) -> bool {
        use ToastState::{Dismissing, Paused, Pending, Removed, Visible};
        matches!(
            (self, next),
            (Pending, Visible)
                | (Visible, Paused)
                | (Paused, Visible)
                | (Pending | Visible | Paused, Dismissing)
                | (Dismissing, Removed)
        )
    }

    /// Returns whether the toast is on its way out or already gone.
    #[must_use]
    pub fn is_closing(self) -> bool {
        matches!(self, ToastState::Dismissing | ToastState::Removed)
    }
}

/// Horizontal side a toast slides in from and out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    /// Left-anchored corners animate from the left, all others from the right.
    #[must_use]
    pub fn for_position(position: Position) -> Self {
        if position.is_left() {
            SlideDirection::Left
        } else {
            SlideDirection::Right
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SlideDirection::Left => "left",
            SlideDirection::Right => "right",
        }
    }
}

/// One notification's content and visual state.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    category: Category,
    message: String,
    position: Position,
    duration: Duration,
    state: ToastState,
    /// Fraction of display time left, in `[0, 1]`.
    progress: f32,
}

impl Toast {
    /// Creates a pending toast with a full progress bar.
    pub fn new(
        category: Category,
        message: impl Into<String>,
        position: Position,
        duration: Duration,
    ) -> Self {
        Self {
            id: ToastId::new(),
            category,
            message: message.into(),
            position,
            duration,
            state: ToastState::Pending,
            progress: 1.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.state
    }

    /// Returns the fraction of display time left.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Returns the progress bar width, 0 to 100.
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        self.progress * 100.0
    }

    #[must_use]
    pub fn direction(&self) -> SlideDirection {
        SlideDirection::for_position(self.position)
    }

    /// Moves to `next` if the state machine allows it.
    ///
    /// Returns `false` and leaves the toast untouched otherwise.
    pub(crate) fn transition(&mut self, next: ToastState) -> bool {
        if self.state.can_transition_to(next) {
            self.state = next;
            true
        } else {
            false
        }
    }

    pub(crate) fn set_progress(&mut self, fraction: f32) {
        self.progress = fraction.clamp(0.0, 1.0);
    }
}
