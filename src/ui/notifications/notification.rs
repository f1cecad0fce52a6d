// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` value owned by a screen, the
//! `Severity` enum, and the `VisibleDuration` newtype controlling how long a
//! toast stays on screen.

use crate::config::{DEFAULT_TOAST_VISIBLE_MS, MIN_TOAST_VISIBLE_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Severity level determines the toast background.
///
/// Anything that is not explicitly a success is shown as an error, which is
/// also the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Something the user must fix (red).
    #[default]
    Error,
}

impl Severity {
    /// Returns the toast background color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The message is an i18n key resolved at render time. Two notifications with
/// the same message are the same notification as far as the toast is
/// concerned; the message is its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Returns the message key.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns whether this notification carries a message worth showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

/// How long a toast stays up before its exit animation starts, in
/// milliseconds.
///
/// The value is always positive; construction raises zero to the minimum.
/// There is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VisibleDuration(u64);

impl VisibleDuration {
    /// Creates a new duration, raising it to the minimum if needed.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.max(MIN_TOAST_VISIBLE_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for VisibleDuration {
    fn default() -> Self {
        Self(DEFAULT_TOAST_VISIBLE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Error.color());
    }

    #[test]
    fn default_severity_is_error_styled() {
        assert_eq!(Severity::default(), Severity::Error);
        assert_eq!(Severity::default().color(), palette::ERROR_500);
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("a").severity(), Severity::Success);
        assert_eq!(Notification::error("a").severity(), Severity::Error);
    }

    #[test]
    fn empty_message_is_detected() {
        assert!(Notification::error("").is_empty());
        assert!(!Notification::error("x").is_empty());
    }

    #[test]
    fn visible_duration_defaults_to_three_seconds() {
        assert_eq!(
            VisibleDuration::default().as_duration(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn visible_duration_is_never_zero() {
        assert_eq!(VisibleDuration::new(0).millis(), MIN_TOAST_VISIBLE_MS);
        assert!(VisibleDuration::new(0).millis() > 0);
        assert_eq!(VisibleDuration::new(1200).millis(), 1200);
    }

    #[test]
    fn long_visible_duration_is_kept() {
        assert_eq!(VisibleDuration::new(120_000).millis(), 120_000);
        assert_eq!(VisibleDuration::new(u64::MAX).millis(), u64::MAX);
    }
}
