// SPDX-License-Identifier: MPL-2.0
//! Labeled text input used by the login and signup forms.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{text, text_input, Column};
use iced::{Element, Length};

/// A label above a single-line input.
pub struct FormField<'a, Message> {
    label: String,
    placeholder: String,
    value: &'a str,
    secure: bool,
    on_input: Box<dyn Fn(String) -> Message + 'a>,
    on_submit: Option<Message>,
}

impl<'a, Message: Clone + 'a> FormField<'a, Message> {
    pub fn new(
        label: impl Into<String>,
        placeholder: impl Into<String>,
        value: &'a str,
        on_input: impl Fn(String) -> Message + 'a,
    ) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            value,
            secure: false,
            on_input: Box::new(on_input),
            on_submit: None,
        }
    }

    /// Masks the typed characters.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Message emitted when Enter is pressed inside the input.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.on_submit = Some(message);
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let mut input = text_input(self.placeholder.as_str(), self.value)
            .on_input(self.on_input)
            .secure(self.secure)
            .padding(spacing::SM)
            .size(typography::BODY_LG)
            .width(Length::Fill);
        if let Some(message) = self.on_submit {
            input = input.on_submit(message);
        }

        Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(text(self.label).size(typography::BODY))
            .push(input)
            .into()
    }
}
