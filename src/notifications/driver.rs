// SPDX-License-Identifier: MPL-2.0
//! Headless driver for hosts without a UI tick.
//!
//! Iced applications pump notifiers from a `time::every` subscription. Other
//! hosts (tests, CLI tools mirroring toasts into a log) can instead await
//! [`run_until_idle`], which sleeps until the next scheduled deadline and
//! pumps until nothing is left.

use super::clock::Clock;
use super::notifier::Notifier;
use super::presenter::Presenter;
use std::time::Instant;

/// Clock backed by tokio's timer, so paused-time tests advance it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Pumps `notifier` at each scheduled deadline until no work is pending.
///
/// The notifier should use a clock that agrees with tokio's timer, such as
/// [`TokioClock`] or the system clock.
pub async fn run_until_idle<P: Presenter>(notifier: &mut Notifier<P>) {
    while let Some(deadline) = notifier.next_deadline() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        notifier.tick_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::notifications::registry::ContainerRegistry;
    use crate::notifications::toast::ToastState;
    use crate::ui::Scene;
    use std::rc::Rc;
    use std::time::Duration;

    fn notifier(config: Config) -> Notifier<Scene> {
        Notifier::with_registry(
            config,
            ContainerRegistry::shared(Scene::new()),
            Rc::new(TokioClock),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn runs_toast_to_removal() {
        let mut notifier = notifier(Config::default());
        let start = tokio::time::Instant::now();
        let handle = notifier.success("Saved").expect("show");

        run_until_idle(&mut notifier).await;

        assert_eq!(notifier.state(&handle), ToastState::Removed);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3300), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(3400), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn idle_notifier_returns_immediately() {
        let mut notifier = notifier(Config::default());
        let start = tokio::time::Instant::now();

        run_until_idle(&mut notifier).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn staggered_toasts_all_finish() {
        let mut notifier = notifier(Config::default().with_duration_ms(500));
        let first = notifier.info("first").expect("show");
        tokio::time::sleep(Duration::from_millis(200)).await;
        let second = notifier.info("second").expect("show");

        run_until_idle(&mut notifier).await;

        assert_eq!(notifier.state(&first), ToastState::Removed);
        assert_eq!(notifier.state(&second), ToastState::Removed);
        assert!(!notifier.has_active());
    }
}
