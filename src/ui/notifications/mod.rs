// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for form feedback.
//!
//! A screen owns at most one notification at a time. The toast slides in from
//! the top edge, stays for its visible duration, slides back out and then
//! tells its owner to drop the notification.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and `VisibleDuration`
//! - [`animation`] - Easing curves, tweens and deadline timers
//! - [`toast`] - The `Toast` state machine and its overlay rendering
//! - [`manager`] - `Manager`, the owning-screen side of the contract
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.show(Notification::success("notification-login-success"), Instant::now());
//!
//! // On every tick while `manager.is_active()`:
//! manager.tick(now);
//!
//! // In the view, layer the overlay on top of the screen:
//! if let Some(overlay) = manager.overlay(i18n) { /* stack it */ }
//! ```

pub mod animation;
mod manager;
mod notification;
pub mod toast;

pub use manager::Manager;
pub use notification::{Notification, Severity, VisibleDuration};
pub use toast::{Event as ToastEvent, Phase, Toast};
