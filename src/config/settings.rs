// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_EXECUTION_MODE_KEY, DEFAULT_LOG_FILTER, DEFAULT_TOKEN_KEYS, DEFAULT_TRACKING_URL_KEYS,
    SETTINGS_ENV_VAR,
};
use crate::errors::SettingsError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Runner-side settings that tell the wrapper where to find things in a descriptor.
///
/// Every field is optional in the YAML file and falls back to the built-in
/// defaults, so an absent settings file and an empty one behave the same.
///
/// # Example
/// ```yaml
/// execution_mode_key: load_data_option
/// tracking_url_keys: [userandjobstate_url]
/// token_keys: [token]
/// log_filter: runjob=debug
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunnerSettings {
    /// `config` key overwritten with the standalone-job-run sentinel
    pub execution_mode_key: String,
    /// `config` keys searched, in order, for the tracking service URL
    pub tracking_url_keys: Vec<String>,
    /// `context` keys searched, in order, for the authentication token
    pub token_keys: Vec<String>,
    /// Default tracing filter; `RUST_LOG` still takes precedence
    pub log_filter: String,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            execution_mode_key: DEFAULT_EXECUTION_MODE_KEY.to_string(),
            tracking_url_keys: DEFAULT_TRACKING_URL_KEYS.iter().map(|k| k.to_string()).collect(),
            token_keys: DEFAULT_TOKEN_KEYS.iter().map(|k| k.to_string()).collect(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Load runner settings from a YAML file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<RunnerSettings, SettingsError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty document deserializes to `null`, which `#[serde(default)]` won't accept.
    if content.trim().is_empty() {
        return Ok(RunnerSettings::default());
    }

    serde_yaml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from the file named by `RUNJOB_SETTINGS`, or defaults when unset
pub fn settings_from_env() -> Result<RunnerSettings, SettingsError> {
    match std::env::var_os(SETTINGS_ENV_VAR) {
        Some(path) if !path.is_empty() => load_settings(PathBuf::from(path)),
        _ => Ok(RunnerSettings::default()),
    }
}
