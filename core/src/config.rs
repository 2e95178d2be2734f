// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use hdaycal_format::{FormatOptions, LineEnding};

/// The name of the application.
pub const APP_NAME: &str = "hdaycal";

/// Errors from loading the configuration.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The path is not valid unicode and cannot be expanded.
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    /// No home directory for the current user.
    #[error("user-specific home directory not found")]
    NoHomeDir,

    /// No configuration directory for the current user.
    #[error("user-specific config directory not found")]
    NoConfigDir,

    /// No hday file was given and none is configured.
    #[error("no hday file given and `core.hday_path` is not set")]
    NoDocument,
}

/// Core configuration, the `[core]` table of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Path to the hday document.
    #[serde(default)]
    pub hday_path: Option<PathBuf>,

    /// Line ending used when writing documents.
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl Config {
    /// Expands `~` and home variables in the configured paths.
    ///
    /// ## Errors
    ///
    /// Fails if a path cannot be expanded.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = &self.hday_path {
            self.hday_path = Some(expand_path(path)?);
        }
        Ok(())
    }

    /// Picks the document to work on: `explicit` if given, else the
    /// configured one.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::NoDocument`] if neither is available.
    pub fn resolve_document(&self, explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.hday_path.clone())
            .ok_or(ConfigError::NoDocument)
    }

    /// Formatter options following this configuration.
    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::default()
            .line_ending(self.line_ending)
            .trailing_newline(true)
    }
}

/// Handles tilde (~) and home variables in the path.
///
/// ## Errors
///
/// Fails on non-unicode paths or when the home directory is unknown.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let s = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_owned()))?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = s.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.to_owned())
}

/// The user configuration directory, `$XDG_CONFIG_HOME` on unix.
///
/// ## Errors
///
/// Returns [`ConfigError::NoConfigDir`] if it cannot be determined.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or(ConfigError::NoConfigDir)
}

fn get_home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::NoHomeDir)
}
