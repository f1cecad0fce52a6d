// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{login, signup, welcome};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Welcome(welcome::Message),
    Login(login::Message),
    Signup(signup::Message),
    /// Frame tick driving toast animations and timers.
    Tick(Instant),
    /// Leave the current screen (Escape).
    Back,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ICED_ONBOARD_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_ONBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
