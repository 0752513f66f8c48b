// SPDX-License-Identifier: MPL-2.0
//! Cooperative deferred-task queue.
//!
//! Work that the browser-style model would hand to `setTimeout` or an
//! animation-frame callback is stored here instead, keyed by deadline. Each
//! scheduled task returns a [`TaskHandle`] that can cancel it, so pausing or
//! dismissing a toast deterministically drops its outstanding work. Nothing
//! runs on its own: the owner pumps due tasks with [`Scheduler::pop_due`].

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Cancellable token for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// Deadline-ordered queue of pending tasks.
///
/// Tasks sharing a deadline run in the order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BTreeMap<(Instant, u64), T>,
    deadlines: HashMap<u64, Instant>,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Schedules `task` to become due at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, task: T) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((deadline, seq), task);
        self.deadlines.insert(seq, deadline);
        TaskHandle(seq)
    }

    /// Schedules `task` to become due `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) -> TaskHandle {
        self.schedule_at(now + delay, task)
    }

    /// Cancels a pending task.
    ///
    /// Returns `false` if the task already ran or was cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.queue.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    /// Removes and returns the earliest task whose deadline is at or before `now`,
    /// together with that deadline.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        let (&(deadline, seq), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.deadlines.remove(&seq);
        self.queue
            .remove(&(deadline, seq))
            .map(|task| (deadline, task))
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
