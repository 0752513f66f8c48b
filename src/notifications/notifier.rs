// SPDX-License-Identifier: MPL-2.0
//! Public entry point for showing toasts.

use super::category::Category;
use super::clock::{Clock, SystemClock};
use super::manager::{Manager, Message, ToastHandle};
use super::presenter::Presenter;
use super::registry::{ContainerRegistry, SharedRegistry};
use super::toast::ToastState;
use crate::config::Config;
use crate::error::Result;
use crate::ui::Scene;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Shows toasts with one fixed configuration.
///
/// Several notifiers may share a registry; toasts from notifiers configured
/// for the same corner stack into the same region.
///
/// ```
/// use iced_toast::config::Config;
/// use iced_toast::notifications::{ContainerRegistry, ManualClock, Notifier, ToastState};
/// use iced_toast::ui::Scene;
/// use std::rc::Rc;
///
/// let clock = Rc::new(ManualClock::new());
/// let registry = ContainerRegistry::shared(Scene::new());
/// let mut notifier = Notifier::with_registry(Config::default(), registry, clock.clone());
///
/// let saved = notifier.success("Saved").unwrap();
/// clock.advance_ms(3300);
/// notifier.tick_now();
/// assert_eq!(notifier.state(&saved), ToastState::Removed);
/// ```
pub struct Notifier<P: Presenter = Scene> {
    config: Config,
    manager: Manager<P>,
    clock: Rc<dyn Clock>,
}

impl Notifier<Scene> {
    /// Creates a notifier drawing into the process-wide registry.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, ContainerRegistry::global(), Rc::new(SystemClock))
    }
}

impl Default for Notifier<Scene> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<P: Presenter> Notifier<P> {
    /// Creates a notifier with an explicit registry and time source.
    ///
    /// The configuration is normalized once here.
    pub fn with_registry(config: Config, registry: SharedRegistry<P>, clock: Rc<dyn Clock>) -> Self {
        Self {
            config: config.normalized(),
            manager: Manager::new(registry),
            clock,
        }
    }

    /// Shows a toast.
    ///
    /// `category` accepts a [`Category`] or its name; unknown names show a
    /// neutral toast.
    ///
    /// # Errors
    ///
    /// Fails only when the presenter cannot mount or render toasts.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        category: impl Into<Category>,
    ) -> Result<ToastHandle> {
        let now = self.clock.now();
        self.manager.advance(now);
        self.manager
            .present(now, message, category.into(), &self.config)
    }

    /// Shows a success toast.
    ///
    /// # Errors
    ///
    /// See [`Notifier::show`].
    pub fn success(&mut self, message: impl Into<String>) -> Result<ToastHandle> {
        self.show(message, Category::Success)
    }

    /// Shows an error toast.
    ///
    /// # Errors
    ///
    /// See [`Notifier::show`].
    pub fn error(&mut self, message: impl Into<String>) -> Result<ToastHandle> {
        self.show(message, Category::Error)
    }

    /// Shows a warning toast.
    ///
    /// # Errors
    ///
    /// See [`Notifier::show`].
    pub fn warning(&mut self, message: impl Into<String>) -> Result<ToastHandle> {
        self.show(message, Category::Warning)
    }

    /// Shows an info toast.
    ///
    /// # Errors
    ///
    /// See [`Notifier::show`].
    pub fn info(&mut self, message: impl Into<String>) -> Result<ToastHandle> {
        self.show(message, Category::Info)
    }

    /// Starts the exit animation of a toast. Repeated calls are ignored.
    pub fn dismiss(&mut self, handle: &ToastHandle) -> bool {
        let now = self.clock.now();
        self.manager.advance(now);
        self.manager.dismiss(now, handle.id())
    }

    /// Applies a UI message.
    ///
    /// Every notifier can receive every message; those about toasts owned by
    /// another notifier are ignored.
    pub fn update(&mut self, message: &Message) {
        let now = match message {
            Message::Tick(at) => *at,
            _ => {
                // Settle due work first so the message sees current states.
                let now = self.clock.now();
                self.manager.advance(now);
                now
            }
        };
        self.manager.handle_message(now, message, &self.config);
    }

    /// Runs all work due at or before `now`.
    pub fn tick(&mut self, now: Instant) {
        self.manager.advance(now);
    }

    /// Runs all work due at the clock's current time.
    pub fn tick_now(&mut self) {
        self.tick(self.clock.now());
    }

    #[must_use]
    pub fn state(&self, handle: &ToastHandle) -> ToastState {
        self.manager.state(handle.id())
    }

    /// Returns the fraction of display time left, `None` once removed.
    #[must_use]
    pub fn progress(&self, handle: &ToastHandle) -> Option<f32> {
        self.manager.progress(handle.id())
    }

    /// Returns the display time left right now, `None` once removed.
    #[must_use]
    pub fn remaining(&self, handle: &ToastHandle) -> Option<Duration> {
        self.manager.remaining(self.clock.now(), handle.id())
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.manager.next_deadline()
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        self.manager.has_active()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.manager.active_count()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &SharedRegistry<P> {
        self.manager.registry()
    }
}

impl<P: Presenter> fmt::Debug for Notifier<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("config", &self.config)
            .field("active", &self.manager.active_count())
            .finish()
    }
}
