// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the onboarding screens.
//!
//! The `App` struct wires together localization, navigation, the per-screen
//! states and the remembered email, and translates screen events into
//! navigation and persistence.

mod message;
pub mod navigation;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::VisibleDuration;
use crate::ui::theming::ThemeMode;
use crate::ui::{login, signup};
use iced::{window, Element, Subscription, Task, Theme};
use navigation::Navigator;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    theme_mode: ThemeMode,
    visible_duration: VisibleDuration,
    /// Persisted application state (remembered email).
    app_state: persisted_state::AppState,
    /// State directory used for saves; `None` resolves the default.
    data_dir: Option<PathBuf>,
    login: login::State,
    signup: signup::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.navigator.current())
            .field("depth", &self.navigator.depth())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let visible_duration = VisibleDuration::default();
        Self {
            i18n: I18n::default(),
            navigator: Navigator::new(),
            theme_mode: ThemeMode::System,
            visible_duration,
            app_state: persisted_state::AppState::default(),
            data_dir: None,
            login: login::State::new(visible_duration),
            signup: signup::State::new(visible_duration),
        }
    }
}

impl App {
    /// Initializes application state from the config file, the persisted
    /// state and the launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(warning = %key, "using default configuration");
        }

        let (app_state, state_warning) = persisted_state::AppState::load();
        if let Some(key) = state_warning {
            tracing::warn!(warning = %key, "starting without remembered email");
        }

        let app = Self::with_state(I18n::new(flags.lang, &config), &config, app_state, None);
        tracing::info!(
            locale = %app.i18n.current_locale(),
            visible_ms = app.visible_duration.millis(),
            "application started"
        );
        (app, Task::none())
    }

    /// Builds the application from already-loaded inputs.
    fn with_state(
        i18n: I18n,
        config: &config::Config,
        app_state: persisted_state::AppState,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let visible_duration = config
            .notifications
            .visible_duration_ms
            .map_or_else(VisibleDuration::default, VisibleDuration::new);
        let login = login::State::new(visible_duration)
            .with_remembered_email(app_state.remembered_email.as_deref());

        Self {
            i18n,
            navigator: Navigator::new(),
            theme_mode: config.general.theme_mode,
            visible_duration,
            app_state,
            data_dir,
            login,
            signup: signup::State::new(visible_duration),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Whether any mounted screen has a toast that needs ticks.
    fn has_notifications(&self) -> bool {
        (self.navigator.is_mounted(Screen::Login) && self.login.notifications().is_active())
            || (self.navigator.is_mounted(Screen::Signup)
                && self.signup.notifications().is_active())
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            navigator: &mut self.navigator,
            login: &mut self.login,
            signup: &mut self.signup,
            app_state: &mut self.app_state,
            visible_duration: self.visible_duration,
            data_dir: self.data_dir.clone(),
        };

        match message {
            Message::Welcome(message) => update::handle_welcome_message(&mut ctx, &message),
            Message::Login(message) => {
                update::handle_login_message(&mut ctx, message, Instant::now());
            }
            Message::Signup(message) => {
                update::handle_signup_message(&mut ctx, message, Instant::now());
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::Back => update::handle_back(&mut ctx),
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.navigator.current(),
            login: &self.login,
            signup: &self.signup,
        })
    }
}
