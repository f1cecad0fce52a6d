// SPDX-License-Identifier: MPL-2.0
//! `iced_onboard` is a small onboarding flow built with the Iced GUI framework.
//!
//! It provides welcome, login and signup screens whose form feedback is shown
//! by an animated, self-dismissing toast notifier, with Fluent localization,
//! a `settings.toml` config file and a remembered login email.

#![doc(html_root_url = "https://docs.rs/iced_onboard/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
