// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` and `state.cbor` live.
//!
//! A directory is taken from the first source that provides one: an explicit
//! `base_dir` argument, the `--config-dir`/`--data-dir` flags recorded by
//! [`init_cli_overrides`], the `ICED_ONBOARD_*` environment variables, then
//! the platform directory from `dirs` with `IcedOnboard` appended.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedOnboard";

pub const ENV_DATA_DIR: &str = "ICED_ONBOARD_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "ICED_ONBOARD_CONFIG_DIR";

#[derive(Debug, Default)]
struct CliDirs {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
}

static CLI_DIRS: OnceLock<CliDirs> = OnceLock::new();

/// Records the directory flags passed on the command line.
///
/// Later calls are ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let dirs = CliDirs {
        data: data_dir.map(PathBuf::from),
        config: config_dir.map(PathBuf::from),
    };
    if CLI_DIRS.set(dirs).is_err() {
        tracing::debug!("directory overrides already recorded");
    }
}

/// Application directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    /// Holds `state.cbor`.
    Data,
    /// Holds `settings.toml`.
    Config,
}

impl AppDir {
    /// Path of `file_name` inside this directory, or `None` when no
    /// directory can be determined.
    pub fn file(self, base_dir: Option<PathBuf>, file_name: &str) -> Option<PathBuf> {
        self.resolve(base_dir).map(|dir| dir.join(file_name))
    }

    fn resolve(self, base_dir: Option<PathBuf>) -> Option<PathBuf> {
        base_dir
            .or_else(|| self.from_cli())
            .or_else(|| self.from_env())
            .or_else(|| self.platform_default())
    }

    fn from_cli(self) -> Option<PathBuf> {
        let dirs = CLI_DIRS.get()?;
        match self {
            AppDir::Data => dirs.data.clone(),
            AppDir::Config => dirs.config.clone(),
        }
    }

    fn from_env(self) -> Option<PathBuf> {
        let var = match self {
            AppDir::Data => ENV_DATA_DIR,
            AppDir::Config => ENV_CONFIG_DIR,
        };
        std::env::var_os(var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    fn platform_default(self) -> Option<PathBuf> {
        let base = match self {
            AppDir::Data => dirs::data_dir(),
            AppDir::Config => dirs::config_dir(),
        };
        base.map(|dir| dir.join(APP_NAME))
    }
}
