// SPDX-License-Identifier: MPL-2.0
//! Per-toast countdown.
//!
//! A [`TimingController`] runs two scheduled mechanisms side by side: a
//! one-shot expiry task and a recurring frame task that reports how much of
//! the display time is left. Pausing cancels both and freezes the remaining
//! time; resuming re-anchors at the resume instant and reschedules both for
//! what was left. Time only counts while running, so any number of
//! pause/resume cycles leaves the total running time until expiry equal to the
//! configured duration.

use super::manager::Task;
use super::scheduler::{Scheduler, TaskHandle};
use super::toast::ToastId;
use std::time::{Duration, Instant};

/// Snapshot of a controller's time accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingState {
    /// Start of the current running interval, `None` while paused or finished.
    pub anchor: Option<Instant>,
    /// Time left as of `anchor` (or frozen time left while paused).
    pub remaining: Duration,
    pub running: bool,
}

/// Countdown for one toast.
#[derive(Debug)]
pub struct TimingController {
    toast: ToastId,
    duration: Duration,
    frame_interval: Duration,
    state: TimingState,
    /// Running time spent in intervals that already ended.
    consumed: Duration,
    expiry: Option<TaskHandle>,
    frame: Option<TaskHandle>,
    started: bool,
    finished: bool,
}

impl TimingController {
    /// Creates an idle controller for `toast`.
    #[must_use]
    pub fn new(toast: ToastId, duration: Duration, frame_interval: Duration) -> Self {
        Self {
            toast,
            duration,
            frame_interval,
            state: TimingState {
                anchor: None,
                remaining: duration,
                running: false,
            },
            consumed: Duration::ZERO,
            expiry: None,
            frame: None,
            started: false,
            finished: false,
        }
    }

    /// Starts the countdown at `now`.
    ///
    /// Only the first call has an effect.
    pub fn start(&mut self, now: Instant, scheduler: &mut Scheduler<Task>) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.run_from(now, scheduler);
        true
    }

    /// Freezes the countdown and cancels outstanding work.
    ///
    /// Returns `false` if the controller was not running.
    pub fn pause(&mut self, now: Instant, scheduler: &mut Scheduler<Task>) -> bool {
        if !self.state.running {
            return false;
        }
        self.freeze(now);
        self.cancel_pending(scheduler);
        true
    }

    /// Continues a paused countdown from `now` with the frozen remaining time.
    ///
    /// Returns `false` if already running, never started, or finished.
    pub fn resume(&mut self, now: Instant, scheduler: &mut Scheduler<Task>) -> bool {
        if self.state.running || !self.started || self.finished {
            return false;
        }
        self.run_from(now, scheduler);
        true
    }

    /// Handles a due frame task.
    ///
    /// Returns the fraction of display time left, or `None` when the frame is
    /// stale (controller paused or finished). Re-arms the next frame while
    /// time remains.
    pub fn on_frame(&mut self, now: Instant, scheduler: &mut Scheduler<Task>) -> Option<f32> {
        self.frame = None;
        if !self.state.running {
            return None;
        }
        let fraction = self.fraction_remaining(now);
        if fraction > 0.0 {
            self.frame =
                Some(scheduler.schedule_after(now, self.frame_interval, Task::Frame(self.toast)));
        }
        Some(fraction)
    }

    /// Handles the due expiry task.
    ///
    /// Returns `true` exactly once per controller, the first time a running
    /// countdown reaches its deadline.
    pub fn on_expire(&mut self, scheduler: &mut Scheduler<Task>) -> bool {
        self.expiry = None;
        if !self.state.running || self.finished {
            return false;
        }
        self.consumed += self.state.remaining;
        self.state = TimingState {
            anchor: None,
            remaining: Duration::ZERO,
            running: false,
        };
        self.finished = true;
        self.cancel_pending(scheduler);
        true
    }

    /// Stops the countdown for good without expiring.
    pub fn cancel(&mut self, now: Instant, scheduler: &mut Scheduler<Task>) {
        if self.state.running {
            self.freeze(now);
        }
        self.cancel_pending(scheduler);
        self.finished = true;
    }

    /// Returns the time left at `now`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.state.remaining - self.running_for(now)
    }

    /// Returns the running time spent so far at `now`.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.consumed + self.running_for(now)
    }

    /// Returns `remaining / duration`, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction_remaining(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let fraction = self.remaining(now).as_secs_f32() / self.duration.as_secs_f32();
        fraction.clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Returns whether the controller expired or was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn state(&self) -> TimingState {
        self.state
    }

    fn run_from(&mut self, now: Instant, scheduler: &mut Scheduler<Task>) {
        self.state.anchor = Some(now);
        self.state.running = true;
        self.expiry =
            Some(scheduler.schedule_after(now, self.state.remaining, Task::Expire(self.toast)));
        self.frame =
            Some(scheduler.schedule_after(now, self.frame_interval, Task::Frame(self.toast)));
    }

    fn freeze(&mut self, now: Instant) {
        let ran = self.running_for(now);
        self.consumed += ran;
        self.state = TimingState {
            anchor: None,
            remaining: self.state.remaining - ran,
            running: false,
        };
    }

    fn running_for(&self, now: Instant) -> Duration {
        match (self.state.running, self.state.anchor) {
            (true, Some(anchor)) => now
                .saturating_duration_since(anchor)
                .min(self.state.remaining),
            _ => Duration::ZERO,
        }
    }

    fn cancel_pending(&mut self, scheduler: &mut Scheduler<Task>) {
        if let Some(handle) = self.expiry.take() {
            scheduler.cancel(handle);
        }
        if let Some(handle) = self.frame.take() {
            scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn controller(duration_ms: u64) -> (TimingController, Scheduler<Task>) {
        (
            TimingController::new(ToastId::new(), ms(duration_ms), FRAME),
            Scheduler::new(),
        )
    }

    /// Runs every due task up to `now`, returning whether the expiry fired.
    fn pump(timer: &mut TimingController, scheduler: &mut Scheduler<Task>, now: Instant) -> bool {
        let mut expired = false;
        while let Some((_, task)) = scheduler.pop_due(now) {
            match task {
                Task::Frame(_) => {
                    timer.on_frame(now, scheduler);
                }
                Task::Expire(_) => expired |= timer.on_expire(scheduler),
                Task::Remove(_) => {}
            }
        }
        expired
    }

    #[test]
    fn start_schedules_expiry_and_frame() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();

        assert!(timer.start(t0, &mut scheduler));
        assert!(timer.is_running());
        assert_eq!(scheduler.len(), 2);
        assert_eq!(scheduler.next_deadline(), Some(t0 + FRAME));
    }

    #[test]
    fn start_is_only_honoured_once() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);

        assert!(!timer.start(t0 + ms(100), &mut scheduler));
        assert_eq!(scheduler.len(), 2);
    }

    #[test]
    fn paused_snapshot_freezes_remaining_time() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);
        timer.pause(t0 + ms(1000), &mut scheduler);

        assert_eq!(
            timer.state(),
            TimingState {
                anchor: None,
                remaining: ms(2000),
                running: false,
            }
        );

        timer.resume(t0 + ms(9000), &mut scheduler);
        let state = timer.state();
        assert_eq!(state.anchor, Some(t0 + ms(9000)));
        assert_eq!(state.remaining, ms(2000));
        assert!(state.running);
    }

    #[test]
    fn fraction_is_half_at_midpoint() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);

        let fraction = timer.fraction_remaining(t0 + ms(1500));
        assert!((fraction - 0.5).abs() < 1e-4, "fraction was {fraction}");
    }

    #[test]
    fn expires_once_after_full_duration() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);

        assert!(!pump(&mut timer, &mut scheduler, t0 + ms(2999)));
        assert!(pump(&mut timer, &mut scheduler, t0 + ms(3000)));
        assert!(timer.is_finished());
        assert!(scheduler.is_empty());
        assert!(!pump(&mut timer, &mut scheduler, t0 + ms(10_000)));
    }

    #[test]
    fn pause_freezes_remaining_time() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);

        assert!(timer.pause(t0 + ms(1000), &mut scheduler));
        assert!(scheduler.is_empty());
        assert_eq!(timer.remaining(t0 + ms(1000)), ms(2000));
        assert_eq!(timer.remaining(t0 + ms(9000)), ms(2000));
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);

        assert!(!timer.resume(t0 + ms(10), &mut scheduler));
        assert!(timer.pause(t0 + ms(500), &mut scheduler));
        assert!(!timer.pause(t0 + ms(600), &mut scheduler));
        assert_eq!(timer.remaining(t0 + ms(600)), ms(2500));
        assert!(timer.resume(t0 + ms(700), &mut scheduler));
        assert!(!timer.resume(t0 + ms(800), &mut scheduler));
        assert_eq!(scheduler.len(), 2);
    }

    #[test]
    fn resume_reschedules_expiry_for_remaining_time() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);
        pump(&mut timer, &mut scheduler, t0 + ms(1000));
        timer.pause(t0 + ms(1000), &mut scheduler);
        timer.resume(t0 + ms(6000), &mut scheduler);

        assert!(!pump(&mut timer, &mut scheduler, t0 + ms(7999)));
        assert!(pump(&mut timer, &mut scheduler, t0 + ms(8000)));
    }

    #[test]
    fn running_time_until_expiry_ignores_pause_gaps() {
        let (mut timer, mut scheduler) = controller(2000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);

        // Three pauses of wildly different lengths.
        let mut now = t0;
        for (run, gap) in [(300, 50), (400, 10_000), (200, 1)] {
            now += ms(run);
            pump(&mut timer, &mut scheduler, now);
            timer.pause(now, &mut scheduler);
            now += ms(gap);
            timer.resume(now, &mut scheduler);
        }

        // 900ms have run; 1100ms are left.
        assert_eq!(timer.remaining(now), ms(1100));
        assert!(!pump(&mut timer, &mut scheduler, now + ms(1099)));
        assert!(pump(&mut timer, &mut scheduler, now + ms(1100)));
        assert_eq!(timer.elapsed(now + ms(1100)), ms(2000));
    }

    #[test]
    fn elapsed_plus_remaining_equals_duration() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);

        let checkpoints = [0, 250, 1000, 1700, 2600, 3000, 4000];
        timer.pause(t0 + ms(1000), &mut scheduler);
        timer.resume(t0 + ms(1600), &mut scheduler);
        for at in checkpoints {
            let now = t0 + ms(at);
            assert_eq!(
                timer.elapsed(now) + timer.remaining(now),
                ms(3000),
                "accounting drifted at {at}ms"
            );
        }
    }

    #[test]
    fn frames_report_non_increasing_fractions() {
        let (mut timer, mut scheduler) = controller(1000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);

        let mut last = 1.0_f32;
        let mut now = t0;
        while let Some(deadline) = scheduler.next_deadline() {
            now = now.max(deadline);
            let Some((_, task)) = scheduler.pop_due(now) else {
                break;
            };
            match task {
                Task::Frame(_) => {
                    if let Some(fraction) = timer.on_frame(now, &mut scheduler) {
                        assert!(fraction <= last, "{fraction} > {last}");
                        last = fraction;
                    }
                }
                Task::Expire(_) => {
                    assert!(timer.on_expire(&mut scheduler));
                }
                Task::Remove(_) => {}
            }
        }
        assert!(timer.is_finished());
        assert!(last < 0.05);
    }

    #[test]
    fn stale_frame_after_pause_reports_nothing() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);
        timer.pause(t0 + ms(5), &mut scheduler);

        assert_eq!(timer.on_frame(t0 + ms(16), &mut scheduler), None);
    }

    #[test]
    fn cancel_prevents_expiry_and_resume() {
        let (mut timer, mut scheduler) = controller(3000);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);
        timer.cancel(t0 + ms(500), &mut scheduler);

        assert!(scheduler.is_empty());
        assert!(!timer.resume(t0 + ms(600), &mut scheduler));
        assert!(!timer.on_expire(&mut scheduler));
        assert_eq!(timer.remaining(t0 + ms(5000)), ms(2500));
    }

    #[test]
    fn pause_after_expiry_is_a_no_op() {
        let (mut timer, mut scheduler) = controller(100);
        let t0 = Instant::now();
        timer.start(t0, &mut scheduler);
        pump(&mut timer, &mut scheduler, t0 + ms(100));

        assert!(!timer.pause(t0 + ms(150), &mut scheduler));
        assert!(!timer.resume(t0 + ms(200), &mut scheduler));
        assert!(scheduler.is_empty());
    }
}
