// SPDX-License-Identifier: MPL-2.0
//! Boundary between the lifecycle core and whatever draws the toasts.
//!
//! The core never touches widgets. It asks a [`Presenter`] to mount one
//! stacking region per corner, hands it a [`VisualNode`] per toast, and pushes
//! progress and state updates as they happen. [`crate::ui::Scene`] is the iced
//! implementation; tests and other hosts can supply their own.

use super::category::Category;
use super::registry::{Placement, Position};
use super::toast::{SlideDirection, Toast, ToastId, ToastState};
use crate::config::Config;
use crate::error::Result;

/// Presenter-assigned handle for a mounted stacking region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Per-notifier display flags passed to [`Presenter::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_icon: bool,
    pub show_close_button: bool,
    /// Whether a click anywhere on the toast dismisses it.
    pub dismiss_on_click: bool,
    pub toast_class_name: String,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            show_icon: config.show_icon,
            show_close_button: config.show_close_button,
            dismiss_on_click: config.dismiss_on_click,
            toast_class_name: config.toast_class_name.clone(),
        }
    }
}

/// What a presenter needs to draw one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub id: ToastId,
    pub category: Category,
    pub message: String,
    pub show_icon: bool,
    pub show_close_button: bool,
    pub dismiss_on_click: bool,
    /// Progress bar width, 0 to 100.
    pub progress_percent: f32,
    pub state: ToastState,
    pub direction: SlideDirection,
    pub class_name: String,
}

impl VisualNode {
    /// Builds the node for `toast` with the given display flags.
    #[must_use]
    pub fn from_toast(toast: &Toast, options: &RenderOptions) -> Self {
        Self {
            id: toast.id(),
            category: toast.category(),
            message: toast.message().to_string(),
            show_icon: options.show_icon,
            show_close_button: options.show_close_button,
            dismiss_on_click: options.dismiss_on_click,
            progress_percent: toast.progress_percent(),
            state: toast.state(),
            direction: toast.direction(),
            class_name: options.toast_class_name.clone(),
        }
    }

    /// Returns the icon to draw, if any.
    ///
    /// Neutral toasts have no icon even when icons are enabled.
    #[must_use]
    pub fn icon(&self) -> Option<Category> {
        (self.show_icon && self.category.is_styled()).then_some(self.category)
    }

    /// Returns whether the node is playing its exit animation.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.state.is_closing()
    }

    /// Returns the style class list for the current state.
    ///
    /// ```
    /// use iced_toast::config::Config;
    /// use iced_toast::notifications::{Category, Position, RenderOptions, Toast, VisualNode};
    /// use std::time::Duration;
    ///
    /// let toast = Toast::new(Category::Success, "Saved", Position::TopLeft, Duration::from_secs(3));
    /// let mut node = VisualNode::from_toast(&toast, &RenderOptions::from(&Config::default()));
    /// node.state = iced_toast::notifications::ToastState::Visible;
    /// assert_eq!(node.classes(), ["infinity-toast", "success", "show", "from-left"]);
    /// ```
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec![self.class_name.clone()];
        if self.category.is_styled() {
            classes.push(self.category.name().to_string());
        }
        match self.state {
            ToastState::Pending => {}
            ToastState::Visible | ToastState::Paused => {
                classes.push("show".to_string());
                classes.push(format!("from-{}", self.direction.name()));
            }
            ToastState::Dismissing | ToastState::Removed => {
                classes.push("hide".to_string());
                classes.push(format!("to-{}", self.direction.name()));
            }
        }
        classes
    }
}

/// Host drawing surface.
pub trait Presenter {
    /// Creates the stacking region for one corner.
    ///
    /// `element_id` names the region so hosts can find it again. Failing here
    /// means no toast can be shown at all; the error reaches the caller of
    /// `show`.
    fn mount(
        &mut self,
        position: Position,
        placement: Placement,
        element_id: &str,
    ) -> Result<SurfaceId>;

    /// Builds the visual node for a toast.
    fn render(&mut self, toast: &Toast, options: &RenderOptions) -> Result<VisualNode> {
        Ok(VisualNode::from_toast(toast, options))
    }

    /// Appends a node at the end of a region's stack.
    fn append_child(&mut self, surface: SurfaceId, node: VisualNode) -> Result<()>;

    /// Removes a node from a region. Unknown nodes are ignored.
    fn remove_child(&mut self, surface: SurfaceId, id: ToastId);

    /// Updates a node's progress bar width (0 to 100).
    fn set_progress(&mut self, id: ToastId, percent: f32);

    /// Updates the state a node reads to pick its animation.
    fn set_state(&mut self, id: ToastId, state: ToastState, direction: SlideDirection);
}
