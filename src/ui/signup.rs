// SPDX-License-Identifier: MPL-2.0
//! Signup screen: account form with a live password strength meter.
//!
//! The last rejection is kept next to the form as an inline message in
//! addition to the toast, and is reset by a successful submission.

use crate::domain::credentials::{FormError, SignupForm};
use crate::i18n::fluent::I18n;
use crate::ui::components::form_field::FormField;
use crate::ui::components::password_strength::PasswordStrengthMeter;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{Manager, Notification, VisibleDuration};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Text},
    Element, Length, Theme,
};
use std::time::Instant;

/// Contextual data needed to render the signup screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the signup screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    Submit,
    LoginPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToLogin,
}

/// Signup screen state. Dropping it destroys any live toast.
#[derive(Debug, Default)]
pub struct State {
    form: SignupForm,
    error: Option<FormError>,
    notifications: Manager,
}

impl State {
    #[must_use]
    pub fn new(visible_duration: VisibleDuration) -> Self {
        Self {
            notifications: Manager::with_visible_duration(visible_duration),
            ..Self::default()
        }
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::NameChanged(name) => self.form.name = name,
            Message::EmailChanged(email) => self.form.email = email,
            Message::PasswordChanged(password) => self.form.password = password,
            Message::ConfirmPasswordChanged(confirm) => self.form.confirm_password = confirm,
            Message::Submit => self.submit(now),
            Message::LoginPressed => return Event::BackToLogin,
        }
        Event::None
    }

    fn submit(&mut self, now: Instant) {
        match self.form.validate() {
            Ok(()) => {
                self.error = None;
                self.notifications
                    .show(Notification::success("notification-signup-success"), now);
            }
            Err(error) => {
                tracing::debug!(%error, "signup form rejected");
                self.error = Some(error);
                self.notifications
                    .show(Notification::error(error.i18n_key()), now);
            }
        }
    }

    /// Advances the screen's toast.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
    }

    #[must_use]
    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// The last rejection, shown inline under the title.
    #[must_use]
    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    /// Whether the strength meter is shown.
    #[must_use]
    pub fn shows_strength(&self) -> bool {
        !self.form.password.is_empty()
    }

    /// Render the signup form.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let mut form = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("signup-title")).size(typography::TITLE_LG));

        if let Some(error) = self.error {
            form = form.push(
                Text::new(i18n.tr(error.i18n_key()))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        form = form
            .push(
                FormField::new(
                    i18n.tr("signup-name-label"),
                    i18n.tr("signup-name-placeholder"),
                    &self.form.name,
                    Message::NameChanged,
                )
                .view(),
            )
            .push(
                FormField::new(
                    i18n.tr("signup-email-label"),
                    i18n.tr("signup-email-placeholder"),
                    &self.form.email,
                    Message::EmailChanged,
                )
                .view(),
            )
            .push(
                FormField::new(
                    i18n.tr("signup-password-label"),
                    i18n.tr("signup-password-placeholder"),
                    &self.form.password,
                    Message::PasswordChanged,
                )
                .secure(true)
                .view(),
            );

        if self.shows_strength() {
            form = form.push(PasswordStrengthMeter::new(&self.form.password).view());
        }

        let submit = button(
            Text::new(i18n.tr("signup-submit-button"))
                .size(typography::BODY_LG)
                .center(),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button_styles::primary)
        .on_press(Message::Submit);

        let login_link = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("signup-have-account")).size(typography::BODY))
            .push(
                button(Text::new(i18n.tr("signup-login-link")).size(typography::BODY))
                    .padding(0)
                    .style(button_styles::link)
                    .on_press(Message::LoginPressed),
            );

        form = form
            .push(
                FormField::new(
                    i18n.tr("signup-confirm-password-label"),
                    i18n.tr("signup-confirm-password-placeholder"),
                    &self.form.confirm_password,
                    Message::ConfirmPasswordChanged,
                )
                .secure(true)
                .on_submit(Message::Submit)
                .view(),
            )
            .push(submit)
            .push(login_link);

        let card = Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(container_styles::card);

        Container::new(card).center(Length::Fill).into()
    }
}
