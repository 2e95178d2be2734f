// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use hdaycal_core::{APP_NAME, Config as CoreConfig, get_config_dir};

const HDAYCAL_CONFIG_ENV: &str = "HDAYCAL_CONFIG";

/// Loads the configuration.
///
/// An explicit path (flag or environment) must exist. The default location
/// is optional, a missing file yields the default configuration.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(HDAYCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = match get_config_dir() {
            Ok(dir) => dir.join(APP_NAME).join("config.toml"),
            Err(e) => {
                tracing::debug!(%e, "no config directory, using defaults");
                return Ok(CoreConfig::default());
            }
        };
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?
        .core;
    config.normalize()?;
    Ok(config)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
