// SPDX-License-Identifier: MPL-2.0
//! Notification ownership on behalf of a screen.
//!
//! The `Manager` holds the screen's single optional notification and mounts
//! at most one [`Toast`] for it, keyed by message. A different message tears
//! the old toast down and mounts a fresh one; the same message keeps the
//! running timeline. When the toast reports [`Event::Cleared`] the manager
//! drops the notification, which is the only write the toast makes to its
//! owner's state.

use super::notification::{Notification, VisibleDuration};
use super::toast::{Event, Toast};
use crate::i18n::fluent::I18n;
use iced::Element;
use std::time::Instant;

/// Owns one screen's current notification and its toast.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Notification>,
    toast: Option<Toast>,
    visible_duration: VisibleDuration,
}

impl Manager {
    /// Creates an empty manager using the default visible duration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager whose toasts stay up for `visible_duration`.
    #[must_use]
    pub fn with_visible_duration(visible_duration: VisibleDuration) -> Self {
        Self {
            visible_duration,
            ..Self::default()
        }
    }

    /// Replaces the current notification and reconciles the mounted toast.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some(notification);
        self.reconcile(now);
    }

    /// Advances the mounted toast and applies its clear signal.
    pub fn tick(&mut self, now: Instant) {
        let Some(toast) = self.toast.as_mut() else {
            return;
        };

        if let Some(Event::Cleared) = toast.tick(now) {
            self.current = None;
            self.toast = None;
        }
    }

    fn reconcile(&mut self, now: Instant) {
        let Some(notification) = self.current.clone().filter(|n| !n.is_empty()) else {
            self.unmount();
            return;
        };

        let same_message = self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.notification().message() == notification.message());

        if same_message {
            if let Some(toast) = self.toast.as_mut() {
                toast.set_notification(notification);
            }
        } else {
            self.unmount();
            self.toast = Some(Toast::new(notification, self.visible_duration, now));
        }
    }

    fn unmount(&mut self) {
        if let Some(mut toast) = self.toast.take() {
            toast.cancel();
        }
    }

    /// The notification the screen currently holds.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// The mounted toast, if any.
    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Whether a toast is mounted and needs ticks.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.toast.is_some()
    }

    #[must_use]
    pub fn visible_duration(&self) -> VisibleDuration {
        self.visible_duration
    }

    /// Renders the toast overlay, if one is showing.
    pub fn overlay<'a, Message: 'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.toast.as_ref().and_then(|toast| toast.view(i18n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::toast::Phase;
    use crate::ui::notifications::Severity;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.current().is_none());
        assert!(!manager.is_active());
    }

    #[test]
    fn empty_message_mounts_nothing() {
        let mut manager = Manager::new();
        manager.show(Notification::error(""), Instant::now());

        assert!(manager.toast().is_none());
        assert!(!manager.is_active());
    }

    #[test]
    fn natural_lifecycle_clears_current() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show(Notification::success("notification-login-success"), start);

        manager.tick(start + ms(400));
        assert!(manager.toast().is_some_and(Toast::is_visible));
        manager.tick(start + ms(3000));
        assert!(manager.current().is_some());
        manager.tick(start + ms(3499));
        assert!(manager.current().is_some());
        manager.tick(start + ms(3500));

        assert!(manager.current().is_none());
        assert!(!manager.is_active());
    }

    #[test]
    fn new_message_replaces_running_toast() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show(Notification::error("a"), start);
        manager.show(Notification::error("b"), start + ms(100));

        let toast = manager.toast().expect("toast for b");
        assert_eq!(toast.notification().message(), "b");
        assert_eq!(toast.created_at(), start + ms(100));

        // A's deadline passes without clearing anything.
        manager.tick(start + ms(3000));
        assert_eq!(manager.current().map(Notification::message), Some("b"));
        assert_eq!(manager.toast().map(Toast::phase), Some(Phase::Visible));

        // B runs its own full timeline.
        manager.tick(start + ms(3100));
        manager.tick(start + ms(3599));
        assert!(manager.current().is_some());
        manager.tick(start + ms(3600));
        assert!(manager.current().is_none());
    }

    #[test]
    fn same_message_does_not_restart_timeline() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show(Notification::error("a"), start);
        manager.tick(start + ms(1000));
        manager.show(Notification::success("a"), start + ms(1000));

        let toast = manager.toast().expect("toast");
        assert_eq!(toast.created_at(), start);
        assert_eq!(toast.notification().severity(), Severity::Success);

        manager.tick(start + ms(3000));
        manager.tick(start + ms(3500));
        assert!(manager.current().is_none());
    }

    #[test]
    fn replacing_during_exit_never_clears_the_new_message() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show(Notification::error("a"), start);
        manager.tick(start + ms(3200));
        assert_eq!(manager.toast().map(Toast::phase), Some(Phase::Exiting));

        manager.show(Notification::error("b"), start + ms(3300));
        manager.tick(start + ms(3900));

        assert_eq!(manager.current().map(Notification::message), Some("b"));
        assert_eq!(manager.toast().map(Toast::phase), Some(Phase::Visible));
    }

    #[test]
    fn empty_message_destroys_running_toast_without_clear() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show(Notification::success("a"), start);
        manager.show(Notification::success(""), start + ms(100));

        assert!(manager.toast().is_none());
        manager.tick(start + ms(10_000));
        assert!(manager.current().is_some_and(Notification::is_empty));
        assert!(!manager.is_active());
    }

    #[test]
    fn remount_after_clear_starts_fresh() {
        let start = Instant::now();
        let mut manager = Manager::with_visible_duration(VisibleDuration::new(1000));
        manager.show(Notification::error("a"), start);
        manager.tick(start + ms(1000));
        manager.tick(start + ms(1500));
        assert!(manager.current().is_none());

        manager.show(Notification::error("a"), start + ms(2000));
        let toast = manager.toast().expect("fresh toast");
        assert_eq!(toast.created_at(), start + ms(2000));
        assert_eq!(toast.phase(), Phase::Entering);
    }
}
