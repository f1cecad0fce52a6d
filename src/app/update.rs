// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens report [`Event`](crate::ui::login::Event)s; the handlers here turn
//! them into navigation and persistence. Whenever a screen leaves the
//! navigation stack its state is rebuilt, which also destroys its toast.

use super::navigation::Navigator;
use super::persisted_state::AppState;
use super::Screen;
use crate::ui::notifications::VisibleDuration;
use crate::ui::{login, signup, welcome};
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub navigator: &'a mut Navigator,
    pub login: &'a mut login::State,
    pub signup: &'a mut signup::State,
    pub app_state: &'a mut AppState,
    pub visible_duration: VisibleDuration,
    /// Explicit state directory, `None` for the resolved default.
    pub data_dir: Option<PathBuf>,
}

impl UpdateContext<'_> {
    /// Fresh login state, pre-filled from the remembered email.
    fn fresh_login(&self) -> login::State {
        login::State::new(self.visible_duration)
            .with_remembered_email(self.app_state.remembered_email.as_deref())
    }

    fn unmount(&mut self, screens: impl IntoIterator<Item = Screen>) {
        for screen in screens {
            tracing::debug!(?screen, "unmounting screen");
            match screen {
                Screen::Welcome => {}
                Screen::Login => *self.login = self.fresh_login(),
                Screen::Signup => *self.signup = signup::State::new(self.visible_duration),
            }
        }
    }

    fn navigate(&mut self, screen: Screen) {
        let popped = self.navigator.navigate(screen);
        self.unmount(popped);
    }

    fn remember_email(&mut self, email: &str) {
        self.app_state.remember_email(email);
        if let Some(key) = self.app_state.save_to(self.data_dir.clone()) {
            tracing::warn!(warning = %key, "remembered email was not saved");
        }
    }
}

/// Handles welcome screen messages.
pub fn handle_welcome_message(ctx: &mut UpdateContext<'_>, message: &welcome::Message) {
    match welcome::update(message) {
        welcome::Event::None => {}
        welcome::Event::NavigateToLogin => ctx.navigate(Screen::Login),
    }
}

/// Handles login screen messages.
pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message, now: Instant) {
    match ctx.login.update(message, now) {
        login::Event::None => {}
        login::Event::RememberEmail(email) => ctx.remember_email(&email),
        login::Event::NavigateToSignup => ctx.navigate(Screen::Signup),
    }
}

/// Handles signup screen messages.
pub fn handle_signup_message(ctx: &mut UpdateContext<'_>, message: signup::Message, now: Instant) {
    match ctx.signup.update(message, now) {
        signup::Event::None => {}
        signup::Event::BackToLogin => ctx.navigate(Screen::Login),
    }
}

/// Leaves the current screen, unless it is the root.
pub fn handle_back(ctx: &mut UpdateContext<'_>) {
    if let Some(screen) = ctx.navigator.back() {
        ctx.unmount([screen]);
    }
}

/// Advances the toasts of every mounted screen.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    if ctx.navigator.is_mounted(Screen::Login) {
        ctx.login.tick(now);
    }
    if ctx.navigator.is_mounted(Screen::Signup) {
        ctx.signup.tick(now);
    }
}
