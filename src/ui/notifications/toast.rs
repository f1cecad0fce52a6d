// SPDX-License-Identifier: MPL-2.0
//! The toast notifier: one notification's timed slide-in, hold and slide-out.
//!
//! A [`Toast`] is constructed when its owner mounts a notification and is
//! advanced with [`Toast::tick`]. The timeline is
//!
//! ```text
//! t = 0              entrance starts (offset -100 -> 0, ease-out, 500 ms)
//!                    dismiss timer armed for `visible_duration`
//! t = d              dismiss fires: exit starts (offset -> -100, ease-in, 500 ms)
//!                    hide timer armed for 500 ms
//! t >= d + 500 ms    hide fires: overlay hidden, `Event::Cleared` emitted once
//! ```
//!
//! Dropping or cancelling a toast disarms both timers, so a destroyed toast
//! never emits `Cleared`.

use super::animation::{Easing, Timer, Tween};
use super::notification::{Notification, VisibleDuration};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{container, float, Container, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme, Vector};
use std::time::{Duration, Instant};

/// Duration of the slide-in animation.
pub const ENTER_DURATION: Duration = Duration::from_millis(500);

/// Duration of the slide-out animation, and of the hide timer.
pub const EXIT_DURATION: Duration = Duration::from_millis(500);

/// Offset of a toast parked above the visible area.
pub const HIDDEN_OFFSET: f32 = -100.0;

/// Offset of a toast at rest.
pub const RESTING_OFFSET: f32 = 0.0;

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
    Dismissed,
}

/// Signals emitted to the toast's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The notification's natural lifetime ended; the owner should drop it.
    Cleared,
}

/// State machine for a single notification on screen.
#[derive(Debug)]
pub struct Toast {
    notification: Notification,
    created_at: Instant,
    /// Last instant observed through `new` or `tick`.
    now: Instant,
    phase: Phase,
    visible: bool,
    offset: Tween,
    dismiss_timer: Option<Timer>,
    hide_timer: Option<Timer>,
}

impl Toast {
    /// Mounts a toast and starts its show sequence at `now`.
    #[must_use]
    pub fn new(notification: Notification, visible_duration: VisibleDuration, now: Instant) -> Self {
        tracing::debug!(
            message = notification.message(),
            severity = ?notification.severity(),
            visible_ms = visible_duration.millis(),
            "toast mounted"
        );

        Self {
            notification,
            created_at: now,
            now,
            phase: Phase::Entering,
            visible: true,
            offset: Tween::new(
                HIDDEN_OFFSET,
                RESTING_OFFSET,
                now,
                ENTER_DURATION,
                Easing::EaseOut,
            ),
            dismiss_timer: Some(Timer::start(now, visible_duration.as_duration())),
            hide_timer: None,
        }
    }

    /// Advances the timeline to `now`.
    ///
    /// Returns [`Event::Cleared`] exactly once, on the tick where the hide
    /// timer fires. Instants earlier than the last observed one are ignored.
    pub fn tick(&mut self, now: Instant) -> Option<Event> {
        if self.phase == Phase::Dismissed {
            return None;
        }
        if now > self.now {
            self.now = now;
        }
        let now = self.now;

        if self.phase == Phase::Entering && self.offset.is_finished(now) {
            self.phase = Phase::Visible;
        }

        if self.dismiss_timer.is_some_and(|timer| timer.is_due(now)) {
            self.dismiss_timer = None;
            self.start_exit(now);
        }

        if self.hide_timer.is_some_and(|timer| timer.is_due(now)) {
            self.hide_timer = None;
            self.visible = false;
            self.phase = Phase::Dismissed;
            tracing::debug!(message = self.notification.message(), "toast cleared");
            return Some(Event::Cleared);
        }

        None
    }

    fn start_exit(&mut self, now: Instant) {
        let from = self.offset.value_at(now);
        self.offset = Tween::new(from, HIDDEN_OFFSET, now, EXIT_DURATION, Easing::EaseIn);
        self.hide_timer = Some(Timer::start(now, EXIT_DURATION));
        self.phase = Phase::Exiting;
    }

    /// Destroys the toast without notifying the owner.
    ///
    /// Both the dismiss and the hide timer are disarmed.
    pub fn cancel(&mut self) {
        if self.has_pending_timers() {
            tracing::debug!(
                message = self.notification.message(),
                phase = ?self.phase,
                "toast cancelled"
            );
        }
        self.dismiss_timer = None;
        self.hide_timer = None;
        self.visible = false;
        self.offset = Tween::still(HIDDEN_OFFSET, self.now);
        self.phase = Phase::Dismissed;
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Restyles the toast when the owner changes severity for the same message.
    pub(super) fn set_notification(&mut self, notification: Notification) {
        self.notification = notification;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the overlay should be rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.dismiss_timer.is_some() || self.hide_timer.is_some()
    }

    /// Vertical offset at the last observed instant.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset.value_at(self.now)
    }

    /// Vertical offset at an arbitrary instant, without advancing the timeline.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        self.offset.value_at(now)
    }

    /// Renders the toast banner, or `None` once it is no longer visible.
    ///
    /// The banner rests `TOAST_TOP` below the top edge and is translated
    /// vertically by the full current offset, so at the hidden offset it sits
    /// entirely above the window.
    pub fn view<'a, Message: 'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        if !self.visible {
            return None;
        }

        let translation = banner_translation(self.offset());
        let background = self.notification.severity().color();

        let message = Text::new(i18n.tr(self.notification.message()))
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .center()
            .color(palette::WHITE);

        let banner = Container::new(message)
            .width(Length::Fill)
            .padding(spacing::TOAST_PADDING)
            .align_x(alignment::Horizontal::Center)
            .style(move |theme: &Theme| toast_container_style(theme, background));

        Some(
            Container::new(float(banner).translate(move |_, _| translation))
                .width(Length::Fill)
                .height(Length::Shrink)
                .padding(Padding {
                    top: sizing::TOAST_TOP,
                    right: spacing::LG,
                    bottom: 0.0,
                    left: spacing::LG,
                })
                .into(),
        )
    }
}

/// Translation applied to the resting banner for a given offset.
fn banner_translation(offset: f32) -> Vector {
    Vector::new(0.0, offset)
}

impl Drop for Toast {
    fn drop(&mut self) {
        if self.has_pending_timers() {
            self.cancel();
        }
    }
}

/// Style function for the toast banner.
fn toast_container_style(_theme: &Theme, background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
