//! Configuration
//!
//! TigerStyle: Defaults are constants, the environment overrides them, CLI
//! flags override the environment. `.env` is loaded by the binary before
//! any of this runs.

use std::path::PathBuf;

use crate::constants::{DATA_DIR_DEFAULT, DOWNLOAD_BASE_URL_DEFAULT, VIDEO_FILE_NAME_DEFAULT};

/// Data directory override
pub const DATA_DIR_ENV_VAR: &str = "TESTNINJA_DATA_DIR";

/// Video file override
pub const VIDEO_FILE_ENV_VAR: &str = "TESTNINJA_VIDEO_FILE";

/// Installer base URL override
pub const DOWNLOAD_BASE_URL_ENV_VAR: &str = "TESTNINJA_DOWNLOAD_BASE_URL";

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory for statements and downloaded installers (`~` expanded)
    pub data_dir: PathBuf,
    /// File the video service reads (`~` expanded)
    pub video_file: PathBuf,
    /// Base URL installers are downloaded from, without trailing slash
    pub download_base_url: String,
}

impl Settings {
    /// Settings from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if a value is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns `ConfigError` if a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup(DATA_DIR_ENV_VAR).unwrap_or_else(|| DATA_DIR_DEFAULT.to_string());
        let video_file =
            lookup(VIDEO_FILE_ENV_VAR).unwrap_or_else(|| VIDEO_FILE_NAME_DEFAULT.to_string());
        let download_base_url = lookup(DOWNLOAD_BASE_URL_ENV_VAR)
            .unwrap_or_else(|| DOWNLOAD_BASE_URL_DEFAULT.to_string());

        if data_dir.trim().is_empty() {
            return Err(ConfigError::Empty(DATA_DIR_ENV_VAR));
        }
        if video_file.trim().is_empty() {
            return Err(ConfigError::Empty(VIDEO_FILE_ENV_VAR));
        }
        let is_http =
            download_base_url.starts_with("http://") || download_base_url.starts_with("https://");
        if !is_http {
            return Err(ConfigError::InvalidBaseUrl(download_base_url));
        }

        Ok(Self {
            data_dir: expand(&data_dir),
            video_file: expand(&video_file),
            download_base_url: download_base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("download base URL must be http(s): {0}")]
    InvalidBaseUrl(String),
}
