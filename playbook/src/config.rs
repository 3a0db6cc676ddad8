//! `playbook.json`: theme, log level, copy feedback and start page.

use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use coreui::theme::ThemeMode;
use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::catalog::PageId;
use crate::paths;

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not determine the home directory")]
    NoHomeDir,
}

/// Playbook settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "named")]
    pub theme: ThemeMode,
    #[serde(deserialize_with = "named")]
    pub log_level: LevelFilter,
    /// How long a code block shows "✓ Copied" after a copy.
    pub copy_feedback_ms: u64,
    /// Page opened at startup, by slug.
    #[serde(deserialize_with = "named")]
    pub start_page: PageId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            log_level: LevelFilter::Info,
            copy_feedback_ms: 2000,
            start_page: PageId::default(),
        }
    }
}

impl Config {
    /// Load from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = paths::config_file().ok_or(ConfigError::NoHomeDir)?;
        Self::load_from(&path)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

/// Deserialize a string field through its `FromStr` impl.
fn named<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}
