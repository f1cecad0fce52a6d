// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This holds the one value the login screen may remember between sessions:
//! the email entered with "Remember Me" checked. It is kept apart from the
//! user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. `--data-dir` CLI argument or `ICED_ONBOARD_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths::AppDir;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Email saved by the login form when "Remember Me" was checked.
    #[serde(default)]
    pub remembered_email: Option<String>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). A missing file is not an
    /// error; an unreadable one yields defaults plus a warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read_from(&path) {
            Ok(state) => (state, None),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read state");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to `base_dir`, or to the default location.
    ///
    /// Returns an optional warning key if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        match self.write_to(&path) {
            Ok(()) => None,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to write state");
                Some("notification-state-write-error".to_string())
            }
        }
    }

    /// Decodes state from a CBOR file.
    pub fn read_from(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let state = ciborium::from_reader(BufReader::new(file))?;
        Ok(state)
    }

    /// Encodes state into a CBOR file, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        ciborium::into_writer(self, BufWriter::new(file))?;
        Ok(())
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        AppDir::Data.file(base_dir, STATE_FILE)
    }

    /// Records the email to pre-fill on the next launch.
    ///
    /// Blank input is ignored.
    pub fn remember_email(&mut self, email: &str) {
        let email = email.trim();
        if !email.is_empty() {
            self.remembered_email = Some(email.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_remembers_nothing() {
        assert!(AppState::default().remembered_email.is_none());
    }

    #[test]
    fn remember_email_trims_and_ignores_blank() {
        let mut state = AppState::default();
        state.remember_email("   ");
        assert!(state.remembered_email.is_none());

        state.remember_email(" jane@example.com ");
        assert_eq!(state.remembered_email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut state = AppState::default();
        state.remember_email("jane@example.com");

        assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_loads_default_without_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (state, warning) = AppState::load_from(Some(dir.path().join("absent")));

        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupted_file_loads_default_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(STATE_FILE), [0xff, 0x13, 0x37]).expect("write garbage");

        let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-read-error"));
    }

    #[test]
    fn save_creates_nested_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("a").join("b");

        assert!(AppState::default().save_to(Some(nested.clone())).is_none());
        assert!(nested.join(STATE_FILE).exists());
    }
}
