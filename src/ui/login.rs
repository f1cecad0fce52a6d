// SPDX-License-Identifier: MPL-2.0
//! Login screen: email and password form with an optional remembered email.
//!
//! Submitting runs [`LoginForm::validate`] and reports the outcome through the
//! screen's own notification [`Manager`]. A valid submission with "Remember
//! Me" checked asks the application to persist the email.

use crate::domain::credentials::LoginForm;
use crate::i18n::fluent::I18n;
use crate::ui::components::form_field::FormField;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Manager, Notification, VisibleDuration};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, checkbox, Column, Container, Row, Text},
    Element, Length,
};
use std::time::Instant;

/// Contextual data needed to render the login screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the login screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    RememberMeToggled(bool),
    Submit,
    SignupPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The form was accepted with "Remember Me" checked.
    RememberEmail(String),
    NavigateToSignup,
}

/// Login screen state. Dropping it destroys any live toast.
#[derive(Debug, Default)]
pub struct State {
    form: LoginForm,
    remember_me: bool,
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

    /// Pre-fills the email field and checks "Remember Me" when an email was
    /// saved by a previous session.
    #[must_use]
    pub fn with_remembered_email(mut self, email: Option<&str>) -> Self {
        if let Some(email) = email.filter(|email| !email.is_empty()) {
            self.form.email = email.to_string();
            self.remember_me = true;
        }
        self
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::EmailChanged(email) => {
                self.form.email = email;
                Event::None
            }
            Message::PasswordChanged(password) => {
                self.form.password = password;
                Event::None
            }
            Message::RememberMeToggled(checked) => {
                self.remember_me = checked;
                Event::None
            }
            Message::Submit => self.submit(now),
            Message::SignupPressed => Event::NavigateToSignup,
        }
    }

    fn submit(&mut self, now: Instant) -> Event {
        if let Err(error) = self.form.validate() {
            tracing::debug!(%error, "login form rejected");
            self.notifications
                .show(Notification::error(error.i18n_key()), now);
            return Event::None;
        }

        self.notifications
            .show(Notification::success("notification-login-success"), now);
        if self.remember_me {
            Event::RememberEmail(self.form.email.clone())
        } else {
            Event::None
        }
    }

    /// Advances the screen's toast.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
    }

    #[must_use]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    #[must_use]
    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    /// Render the login form.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_LG);

        let email = FormField::new(
            i18n.tr("login-email-label"),
            i18n.tr("login-email-placeholder"),
            &self.form.email,
            Message::EmailChanged,
        )
        .view();

        let password = FormField::new(
            i18n.tr("login-password-label"),
            i18n.tr("login-password-placeholder"),
            &self.form.password,
            Message::PasswordChanged,
        )
        .secure(true)
        .on_submit(Message::Submit)
        .view();

        let remember = checkbox(self.remember_me)
            .label(i18n.tr("login-remember-me"))
            .on_toggle(Message::RememberMeToggled);

        let submit = button(
            Text::new(i18n.tr("login-submit-button"))
                .size(typography::BODY_LG)
                .center(),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button_styles::primary)
        .on_press(Message::Submit);

        let signup_link = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("login-no-account")).size(typography::BODY))
            .push(
                button(Text::new(i18n.tr("login-signup-link")).size(typography::BODY))
                    .padding(0)
                    .style(button_styles::link)
                    .on_press(Message::SignupPressed),
            );

        let form = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(title)
            .push(email)
            .push(password)
            .push(
                Container::new(remember)
                    .width(Length::Fill)
                    .align_x(Horizontal::Left),
            )
            .push(submit)
            .push(signup_link);

        let card = Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(container_styles::card);

        Container::new(card).center(Length::Fill).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    fn filled(email: &str, password: &str) -> State {
        let mut state = State::new(VisibleDuration::default());
        let now = Instant::now();
        state.update(Message::EmailChanged(email.into()), now);
        state.update(Message::PasswordChanged(password.into()), now);
        state
    }

    fn shown(state: &State) -> Option<(&str, Severity)> {
        state
            .notifications()
            .current()
            .map(|n| (n.message(), n.severity()))
    }

    #[test]
    fn empty_submit_reports_missing_fields() {
        let mut state = State::new(VisibleDuration::default());
        let event = state.update(Message::Submit, Instant::now());

        assert_eq!(event, Event::None);
        assert_eq!(
            shown(&state),
            Some(("notification-fields-required", Severity::Error))
        );
        assert!(state.notifications().is_active());
    }

    #[test]
    fn malformed_email_reports_invalid_email() {
        let mut state = filled("jane", "secret");
        state.update(Message::Submit, Instant::now());
        assert_eq!(
            shown(&state),
            Some(("notification-invalid-email", Severity::Error))
        );
    }

    #[test]
    fn valid_submit_without_remember_me_only_notifies() {
        let mut state = filled("jane@example.com", "secret");
        let event = state.update(Message::Submit, Instant::now());

        assert_eq!(event, Event::None);
        assert_eq!(
            shown(&state),
            Some(("notification-login-success", Severity::Success))
        );
    }

    #[test]
    fn valid_submit_with_remember_me_requests_persistence() {
        let mut state = filled("jane@example.com", "secret");
        state.update(Message::RememberMeToggled(true), Instant::now());

        let event = state.update(Message::Submit, Instant::now());

        assert_eq!(event, Event::RememberEmail("jane@example.com".into()));
    }

    #[test]
    fn invalid_submit_never_requests_persistence() {
        let mut state = filled("jane", "secret");
        state.update(Message::RememberMeToggled(true), Instant::now());
        assert_eq!(state.update(Message::Submit, Instant::now()), Event::None);
    }

    #[test]
    fn remembered_email_prefills_form() {
        let state =
            State::new(VisibleDuration::default()).with_remembered_email(Some("jane@example.com"));
        assert_eq!(state.form().email, "jane@example.com");
        assert!(state.remember_me());

        let blank = State::new(VisibleDuration::default()).with_remembered_email(Some(""));
        assert!(!blank.remember_me());
    }

    #[test]
    fn signup_link_navigates() {
        let mut state = State::default();
        assert_eq!(
            state.update(Message::SignupPressed, Instant::now()),
            Event::NavigateToSignup
        );
    }

    #[test]
    fn toast_clears_after_its_timeline() {
        let start = Instant::now();
        let mut state = State::new(VisibleDuration::new(1000));
        state.update(Message::Submit, start);

        state.tick(start + std::time::Duration::from_millis(1000));
        assert!(state.notifications().current().is_some());
        state.tick(start + std::time::Duration::from_millis(1500));
        assert!(state.notifications().current().is_none());
        assert!(!state.notifications().is_active());
    }

    #[test]
    fn login_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
