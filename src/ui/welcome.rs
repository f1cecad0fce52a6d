// SPDX-License-Identifier: MPL-2.0
//! Welcome screen: the root of the navigation stack.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the welcome screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the welcome screen.
#[derive(Debug, Clone)]
pub enum Message {
    LoginPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    NavigateToLogin,
}

/// Process a welcome screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::LoginPressed => Event::NavigateToLogin,
    }
}

/// Render the welcome screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("welcome-title")).size(typography::TITLE_LG);

    let login_button = button(
        Text::new(ctx.i18n.tr("welcome-login-button"))
            .size(typography::BODY_LG)
            .center(),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH / 2.0))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(button_styles::primary)
    .on_press(Message::LoginPressed);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(title)
        .push(login_button);

    Container::new(content).center(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element = view(ctx);
    }

    #[test]
    fn login_button_navigates_to_login() {
        assert_eq!(update(&Message::LoginPressed), Event::NavigateToLogin);
    }
}
