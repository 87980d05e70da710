// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.
//!
//! Both timers are derived from state on every pass: stopping the slideshow
//! drops its subscription, and any tick already queued is ignored by the
//! state machine.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use crate::domain::gallery::SlideshowInterval;
use iced::{time, Subscription};
use std::time::Duration;

/// Period of the tick that only expires toasts.
const NOTIFICATION_TICK_MS: u64 = 100;

/// Repeating slideshow timer, alive while the slideshow runs.
pub fn create_slideshow_subscription(
    active: bool,
    interval: SlideshowInterval,
) -> Subscription<Message> {
    if active {
        time::every(interval.as_duration()).map(Message::SlideshowTick)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for crossfade frames and notification auto-dismiss.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    match tick_period(animating, has_notifications) {
        Some(period) => time::every(period).map(Message::Tick),
        None => Subscription::none(),
    }
}

/// Frame rate while a crossfade runs; a slower tick is enough for toasts.
fn tick_period(animating: bool, has_notifications: bool) -> Option<Duration> {
    if animating {
        Some(Duration::from_millis(ANIMATION_TICK_MS))
    } else if has_notifications {
        Some(Duration::from_millis(NOTIFICATION_TICK_MS))
    } else {
        None
    }
}
