// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns every toast one notifier presented, from mount through
//! hover pauses to the delayed unmount after the exit animation. All deferred
//! work (progress frames, expiry, removal) goes through its private
//! [`Scheduler`] and runs when the host pumps [`Manager::advance`].

use super::category::Category;
use super::presenter::{Presenter, RenderOptions};
use super::registry::SharedRegistry;
use super::scheduler::Scheduler;
use super::timer::TimingController;
use super::toast::{Toast, ToastId, ToastState};
use crate::config::{Config, EXIT_ANIMATION_MS, FRAME_INTERVAL_MS};
use crate::error::Result;
use std::time::{Duration, Instant};

/// Deferred work scheduled on behalf of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Redraw the progress bar.
    Frame(ToastId),
    /// Display time ran out.
    Expire(ToastId),
    /// Exit animation finished; unmount.
    Remove(ToastId),
}

/// Messages for toast interaction and timing.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer entered a toast: pause its countdown.
    HoverEntered(ToastId),
    /// Pointer left a toast: resume its countdown.
    HoverLeft(ToastId),
    /// The close control was pressed.
    CloseRequested(ToastId),
    /// The toast body was clicked.
    Clicked(ToastId),
    /// Periodic pump for scheduled work.
    Tick(Instant),
}

/// Opaque reference to a presented toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastHandle {
    id: ToastId,
}

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }
}

#[derive(Debug)]
struct Entry {
    toast: Toast,
    timer: TimingController,
}

/// Drives the toasts of one notifier.
#[derive(Debug)]
pub struct Manager<P> {
    registry: SharedRegistry<P>,
    scheduler: Scheduler<Task>,
    /// Active toasts in arrival order.
    entries: Vec<Entry>,
    frame_interval: Duration,
    exit_delay: Duration,
}

impl<P: Presenter> Manager<P> {
    /// Creates a manager drawing into `registry`.
    pub fn new(registry: SharedRegistry<P>) -> Self {
        Self {
            registry,
            scheduler: Scheduler::new(),
            entries: Vec::new(),
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            exit_delay: Duration::from_millis(EXIT_ANIMATION_MS),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &SharedRegistry<P> {
        &self.registry
    }

    /// Mounts a new toast and starts its countdown at `now`.
    ///
    /// # Errors
    ///
    /// Returns the presenter's error when the corner cannot be mounted or the
    /// toast cannot be rendered or appended.
    pub fn present(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        category: Category,
        config: &Config,
    ) -> Result<ToastHandle> {
        let duration = config.duration();
        let mut toast = Toast::new(category, message, config.position, duration);
        let id = toast.id();

        {
            let mut registry = self.registry.borrow_mut();
            registry.get_or_create_surface(config.position, &config.container_class_name)?;
            let node = registry
                .presenter_mut()
                .render(&toast, &RenderOptions::from(config))?;
            registry.append_toast(config.position, node)?;
            toast.transition(ToastState::Visible);
            registry
                .presenter_mut()
                .set_state(id, toast.state(), toast.direction());
        }

        let mut timer = TimingController::new(id, duration, self.frame_interval);
        timer.start(now, &mut self.scheduler);
        tracing::debug!(
            toast = ?id,
            %category,
            position = %config.position,
            duration_ms = duration.as_millis() as u64,
            "toast shown"
        );

        self.entries.push(Entry { toast, timer });
        Ok(ToastHandle { id })
    }

    /// Starts the exit animation of a toast.
    ///
    /// Cancels its countdown and schedules the unmount after the exit delay.
    /// Returns `false` if the toast is unknown or already leaving.
    pub fn dismiss(&mut self, now: Instant, id: ToastId) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.toast.id() == id) else {
            return false;
        };
        if !entry.toast.transition(ToastState::Dismissing) {
            return false;
        }
        entry.timer.cancel(now, &mut self.scheduler);
        self.scheduler
            .schedule_after(now, self.exit_delay, Task::Remove(id));
        self.registry
            .borrow_mut()
            .presenter_mut()
            .set_state(id, entry.toast.state(), entry.toast.direction());
        tracing::debug!(toast = ?id, "toast dismissing");
        true
    }

    /// Pauses a visible toast.
    pub fn hover_enter(&mut self, now: Instant, id: ToastId) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.toast.id() == id) else {
            return false;
        };
        if entry.toast.state() != ToastState::Visible {
            return false;
        }
        entry.timer.pause(now, &mut self.scheduler);
        entry.toast.transition(ToastState::Paused);
        self.registry
            .borrow_mut()
            .presenter_mut()
            .set_state(id, entry.toast.state(), entry.toast.direction());
        tracing::trace!(
            toast = ?id,
            remaining_ms = entry.timer.state().remaining.as_millis() as u64,
            "toast paused"
        );
        true
    }

    /// Resumes a paused toast.
    pub fn hover_leave(&mut self, now: Instant, id: ToastId) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.toast.id() == id) else {
            return false;
        };
        if entry.toast.state() != ToastState::Paused {
            return false;
        }
        entry.timer.resume(now, &mut self.scheduler);
        entry.toast.transition(ToastState::Visible);
        self.registry
            .borrow_mut()
            .presenter_mut()
            .set_state(id, entry.toast.state(), entry.toast.direction());
        tracing::trace!(toast = ?id, "toast resumed");
        true
    }

    /// Handles the close control, whatever the countdown is doing.
    pub fn close(&mut self, now: Instant, id: ToastId) -> bool {
        self.dismiss(now, id)
    }

    /// Handles a click on the toast body.
    ///
    /// Only dismisses when the notifier enables click-to-dismiss.
    pub fn click(&mut self, now: Instant, id: ToastId, config: &Config) -> bool {
        config.dismiss_on_click && self.dismiss(now, id)
    }

    /// Runs every task due at or before `now`.
    ///
    /// Frames redraw the current moment; expiry and removal take effect at
    /// their own deadlines so a late pump does not stretch the lifecycle.
    pub fn advance(&mut self, now: Instant) {
        while let Some((deadline, task)) = self.scheduler.pop_due(now) {
            match task {
                Task::Frame(id) => self.run_frame(now, id),
                Task::Expire(id) => self.run_expire(deadline, id),
                Task::Remove(id) => self.run_remove(id),
            }
        }
    }

    /// Dispatches a message. Messages about other notifiers' toasts are ignored.
    pub fn handle_message(&mut self, now: Instant, message: &Message, config: &Config) {
        match message {
            Message::HoverEntered(id) => {
                self.hover_enter(now, *id);
            }
            Message::HoverLeft(id) => {
                self.hover_leave(now, *id);
            }
            Message::CloseRequested(id) => {
                self.close(now, *id);
            }
            Message::Clicked(id) => {
                self.click(now, *id, config);
            }
            Message::Tick(at) => self.advance(*at),
        }
    }

    /// Returns the state of a toast.
    ///
    /// Toasts this manager no longer tracks report [`ToastState::Removed`].
    #[must_use]
    pub fn state(&self, id: ToastId) -> ToastState {
        self.toast(id)
            .map_or(ToastState::Removed, Toast::state)
    }

    /// Returns the fraction of display time left for an active toast.
    #[must_use]
    pub fn progress(&self, id: ToastId) -> Option<f32> {
        self.toast(id).map(Toast::progress)
    }

    /// Returns the display time left at `now` for an active toast.
    #[must_use]
    pub fn remaining(&self, now: Instant, id: ToastId) -> Option<Duration> {
        self.entries
            .iter()
            .find(|e| e.toast.id() == id)
            .map(|e| e.timer.remaining(now))
    }

    #[must_use]
    pub fn toast(&self, id: ToastId) -> Option<&Toast> {
        self.entries
            .iter()
            .map(|e| &e.toast)
            .find(|toast| toast.id() == id)
    }

    /// Returns when the next scheduled task becomes due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.entries.is_empty()
    }

    fn run_frame(&mut self, now: Instant, id: ToastId) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.toast.id() == id) else {
            return;
        };
        if let Some(fraction) = entry.timer.on_frame(now, &mut self.scheduler) {
            entry.toast.set_progress(fraction);
            self.registry
                .borrow_mut()
                .presenter_mut()
                .set_progress(id, entry.toast.progress_percent());
        }
    }

    fn run_expire(&mut self, at: Instant, id: ToastId) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.toast.id() == id) else {
            return;
        };
        if !entry.timer.on_expire(&mut self.scheduler) {
            return;
        }
        entry.toast.set_progress(0.0);
        self.registry
            .borrow_mut()
            .presenter_mut()
            .set_progress(id, 0.0);
        tracing::debug!(toast = ?id, "toast expired");
        self.dismiss(at, id);
    }

    fn run_remove(&mut self, id: ToastId) {
        let Some(index) = self.entries.iter().position(|e| e.toast.id() == id) else {
            return;
        };
        let position = self.entries[index].toast.position();
        if !self.registry.borrow_mut().remove_toast(position, id) {
            tracing::trace!(toast = ?id, "toast already detached");
        }
        let mut entry = self.entries.remove(index);
        entry.toast.transition(ToastState::Removed);
        tracing::debug!(toast = ?id, "toast removed");
    }
}
