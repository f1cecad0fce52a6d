// SPDX-License-Identifier: MPL-2.0
//! Password strength meter.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::password_strength::PasswordStrengthMeter;
//!
//! PasswordStrengthMeter::new(&state.form.password).view()
//! ```

use crate::domain::credentials::PasswordStrength;
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::styles::container as container_styles;
use iced::widget::{Container, Row, Space};
use iced::{Color, Element, Length};

/// Meter showing one lit segment per satisfied strength rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrengthMeter {
    strength: PasswordStrength,
}

impl PasswordStrengthMeter {
    /// Scores `password` for display.
    pub fn new(password: &str) -> Self {
        Self {
            strength: PasswordStrength::evaluate(password),
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Fill color of segment `index`.
    pub fn segment_color(&self, index: u8) -> Color {
        if self.strength.lights(index) {
            palette::BRAND_500
        } else {
            palette::GRAY_200
        }
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        (0..PasswordStrength::MAX)
            .fold(Row::new().spacing(spacing::XXS), |row, index| {
                let segment = Container::new(Space::new())
                    .width(Length::FillPortion(1))
                    .height(Length::Fixed(sizing::STRENGTH_SEGMENT_HEIGHT))
                    .style(container_styles::strength_segment(
                        self.segment_color(index),
                    ));
                row.push(segment)
            })
            .width(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_lights_nothing() {
        let meter = PasswordStrengthMeter::new("");
        for index in 0..PasswordStrength::MAX {
            assert_eq!(meter.segment_color(index), palette::GRAY_200);
        }
    }

    #[test]
    fn segments_light_from_the_left() {
        let meter = PasswordStrengthMeter::new("abcDEF");
        assert_eq!(meter.strength().value(), 2);
        assert_eq!(meter.segment_color(0), palette::BRAND_500);
        assert_eq!(meter.segment_color(1), palette::BRAND_500);
        assert_eq!(meter.segment_color(2), palette::GRAY_200);
    }

    #[test]
    fn strong_password_lights_every_segment() {
        let meter = PasswordStrengthMeter::new("Secr3t!pass");
        for index in 0..PasswordStrength::MAX {
            assert_eq!(meter.segment_color(index), palette::BRAND_500);
        }
        let _element: Element<'_, ()> = meter.view();
    }
}
