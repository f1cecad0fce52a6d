// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events feed navigation, and a frame tick runs only while a toast
//! is mounted on some screen.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Maps an unhandled Escape press to [`Message::Back`].
///
/// Escape captured by a focused widget is left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Back),
            _ => None,
        }
    })
}

/// Frame tick for toast animations, idle when nothing is animating.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
