// SPDX-License-Identifier: MPL-2.0
use iced_onboard::app::persisted_state::AppState;
use iced_onboard::config::{self, Config};
use iced_onboard::domain::credentials::{FormError, LoginForm};
use iced_onboard::i18n::fluent::I18n;
use iced_onboard::ui::notifications::{
    Manager, Notification, Phase, Severity, Toast, ToastEvent, VisibleDuration,
};
use iced_onboard::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const FRAME: Duration = Duration::from_millis(16);

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Ticks `toast` every frame from `start` until `end`, returning the
/// elapsed time of each clear signal.
fn run_frames(toast: &mut Toast, start: Instant, end: Duration) -> Vec<Duration> {
    let mut cleared = Vec::new();
    let mut elapsed = Duration::ZERO;
    while elapsed <= end {
        if let Some(ToastEvent::Cleared) = toast.tick(start + elapsed) {
            cleared.push(elapsed);
        }
        elapsed += FRAME;
    }
    cleared
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("welcome-title"), "Welcome");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_config_sections_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    cfg.notifications.visible_duration_ms = Some(4500);
    config::save_with_override(&cfg, Some(dir.path().to_path_buf())).expect("save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, cfg);
}

#[test]
fn test_remembered_email_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut state = AppState::default();
    state.remember_email("jane@example.com");
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (restored, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(restored.remembered_email.as_deref(), Some("jane@example.com"));
}

#[test]
fn test_login_success_toast_timeline() {
    let start = Instant::now();
    let mut toast = Toast::new(
        Notification::new(Severity::Success, "notification-login-success"),
        VisibleDuration::new(3000),
        start,
    );

    toast.tick(start + ms(496));
    toast.tick(start + ms(512));
    assert_eq!(toast.phase(), Phase::Visible);

    toast.tick(start + ms(2992));
    assert_eq!(toast.phase(), Phase::Visible);

    let cleared = run_frames(&mut toast, start, ms(4000));
    assert_eq!(cleared.len(), 1);
    assert!(cleared[0] >= ms(3500));
    assert!(cleared[0] < ms(3500) + FRAME * 2);
    assert!(!toast.is_visible());
}

#[test]
fn test_clear_fires_once_for_various_durations() {
    for visible in [1, 250, 1000, 5000] {
        let start = Instant::now();
        let mut toast = Toast::new(
            Notification::error("notification-invalid-email"),
            VisibleDuration::new(visible),
            start,
        );

        let cleared = run_frames(&mut toast, start, ms(visible + 2000));

        assert_eq!(cleared.len(), 1, "visible = {visible}");
        assert!(cleared[0] >= ms(visible + 500), "visible = {visible}");
    }
}

#[test]
fn test_destroyed_toast_never_clears() {
    let start = Instant::now();
    let mut toast = Toast::new(
        Notification::error("notification-fields-required"),
        VisibleDuration::default(),
        start,
    );

    toast.tick(start + ms(1000));
    toast.cancel();

    assert!(run_frames(&mut toast, start, ms(5000)).is_empty());
    assert!(!toast.has_pending_timers());
}

#[test]
fn test_unspecified_severity_renders_as_error() {
    let notification = Notification::new(Severity::default(), "notification-fields-required");
    assert_eq!(notification.severity(), Severity::Error);
    assert_eq!(notification.severity().color(), Severity::Error.color());
}

#[test]
fn test_manager_replacement_restarts_the_timeline() {
    let start = Instant::now();
    let mut manager = Manager::new();

    manager.show(Notification::error("notification-fields-required"), start);
    manager.show(
        Notification::error("notification-invalid-email"),
        start + ms(100),
    );

    manager.tick(start + ms(3050));
    assert_eq!(
        manager.toast().map(Toast::phase),
        Some(Phase::Visible),
        "the first toast's dismiss must not apply to the second"
    );

    manager.tick(start + ms(3100));
    manager.tick(start + ms(3599));
    assert!(manager.current().is_some());

    manager.tick(start + ms(3600));
    assert!(manager.current().is_none());
    assert!(!manager.is_active());
}

#[test]
fn test_validation_error_feeds_the_manager() {
    let form = LoginForm {
        email: "jane".into(),
        password: "secret".into(),
    };
    let error = form.validate().expect_err("email is malformed");
    assert_eq!(error, FormError::InvalidEmail);

    let mut manager = Manager::new();
    manager.show(Notification::error(error.i18n_key()), Instant::now());

    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let shown = manager.current().expect("notification held");
    assert_eq!(i18n.tr(shown.message()), "Invalid email");
    assert!(manager.overlay::<()>(&i18n).is_some());
}
