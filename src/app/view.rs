// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with that screen's toast layered on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::Manager;
use crate::ui::{login, signup, welcome};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub login: &'a login::State,
    pub signup: &'a signup::State,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let (current_view, notifications): (Element<'_, Message>, Option<&Manager>) = match ctx.screen
    {
        Screen::Welcome => (
            welcome::view(welcome::ViewContext { i18n }).map(Message::Welcome),
            None,
        ),
        Screen::Login => (
            ctx.login
                .view(login::ViewContext { i18n })
                .map(Message::Login),
            Some(ctx.login.notifications()),
        ),
        Screen::Signup => (
            ctx.signup
                .view(signup::ViewContext { i18n })
                .map(Message::Signup),
            Some(ctx.signup.notifications()),
        ),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .push(base)
        .width(Length::Fill)
        .height(Length::Fill);
    if let Some(toast) = notifications.and_then(|manager| manager.overlay(i18n)) {
        stack = stack.push(toast);
    }

    stack.into()
}
