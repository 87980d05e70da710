// SPDX-License-Identifier: MPL-2.0
//! Toast payload: an i18n key, its arguments and a severity.
//!
//! Text is resolved only when the toast is drawn.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Identifies a toast for dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// How loudly a toast is shown, and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Slideshow started/stopped.
    Info,
    /// A recoverable failure (missing image, unreadable settings).
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// Time on screen before the toast dismisses itself.
    #[must_use]
    pub fn display_duration(self) -> Duration {
        match self {
            Severity::Info => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the toast has been on screen for its full duration at `now`.
    #[must_use]
    pub fn should_auto_dismiss(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.severity.display_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::info("test");
        let n2 = Notification::info("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Info.color(), Severity::Warning.color());
    }

    #[test]
    fn warnings_stay_longer_than_notices() {
        assert!(Severity::Warning.display_duration() > Severity::Info.display_duration());
    }

    #[test]
    fn warning_carries_its_arguments() {
        let notification = Notification::warning("error-resource-not-found")
            .with_arg("image", "images/image4.jpeg");

        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.message_key(), "error-resource-not-found");
        assert_eq!(
            notification.message_args(),
            &[("image".to_string(), "images/image4.jpeg".to_string())]
        );
    }

    #[test]
    fn info_notifications_expire_after_three_seconds() {
        let before = Instant::now();
        let notification = Notification::info("notification-slideshow-started");
        let after = Instant::now();

        assert!(!notification.should_auto_dismiss(before + Duration::from_millis(2999)));
        assert!(notification.should_auto_dismiss(after + Duration::from_secs(3)));
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
    }
}
