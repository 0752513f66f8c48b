// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the tick subscription that pumps toast timers.
///
/// Ticks only while at least one toast is on screen.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
