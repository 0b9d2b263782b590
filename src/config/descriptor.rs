// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DESCRIPTOR_FILE_NAME, STANDALONE_JOB_RUN_MODE};
use crate::config::RunnerSettings;
use crate::errors::DescriptorError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One unit of work, as written by the scheduler into `<job dir>/jobdata.json`.
///
/// # Fields
/// * `id` - Job identifier known to the tracking service
/// * `config` - Engine configuration; also carries the tracking service URL
/// * `context` - Caller context; carries the authentication token
///
/// Unknown top-level fields are ignored. `config` and `context` must be
/// JSON objects.
///
/// # Example
/// ```json
/// {
///   "id": "52b317cbe4b0ef8357331c59",
///   "config": { "userandjobstate_url": "https://kbase.us/services/userandjobstate/" },
///   "context": { "token": "un=someone|tokenid=..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub id: String,
    pub config: Map<String, Value>,
    pub context: Map<String, Value>,
}

/// Where, and as whom, a failure report is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingTarget {
    pub url: String,
    pub token: String,
}

impl JobDescriptor {
    /// Overwrite the execution-mode entry of `config` with the standalone-job-run sentinel.
    ///
    /// Any prior value is replaced, whatever its type.
    pub fn force_execution_mode(&mut self, key: &str) {
        self.config.insert(
            key.to_string(),
            Value::String(STANDALONE_JOB_RUN_MODE.to_string()),
        );
    }

    /// Current execution-mode entry of `config`, if it is a string.
    pub fn execution_mode(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(Value::as_str)
    }

    /// Authentication token from `context`, using the first recognized key present.
    pub fn token(&self, settings: &RunnerSettings) -> Option<&str> {
        first_string(&self.context, &settings.token_keys)
    }

    /// Tracking service URL from `config`, using the first recognized key present.
    pub fn tracking_url(&self, settings: &RunnerSettings) -> Option<&str> {
        first_string(&self.config, &settings.tracking_url_keys)
    }

    /// Resolve everything the failure path needs before any work starts.
    pub fn tracking_target(
        &self,
        settings: &RunnerSettings,
    ) -> Result<TrackingTarget, DescriptorError> {
        let url = self
            .tracking_url(settings)
            .ok_or_else(|| DescriptorError::MissingField {
                section: "config",
                keys: settings.tracking_url_keys.clone(),
            })?;
        let token = self
            .token(settings)
            .ok_or_else(|| DescriptorError::MissingField {
                section: "context",
                keys: settings.token_keys.clone(),
            })?;

        Ok(TrackingTarget {
            url: url.to_string(),
            token: token.to_string(),
        })
    }
}

fn first_string<'a>(map: &'a Map<String, Value>, keys: &[String]) -> Option<&'a str> {
    keys.iter().find_map(|key| {
        map.get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    })
}

/// Path of the descriptor file inside a job directory
pub fn descriptor_path<P: AsRef<Path>>(job_dir: P) -> PathBuf {
    job_dir.as_ref().join(DESCRIPTOR_FILE_NAME)
}

/// Load the job descriptor from `<job_dir>/jobdata.json`.
///
/// The file is read in one go and closed before parsing starts.
pub fn load_descriptor<P: AsRef<Path>>(job_dir: P) -> Result<JobDescriptor, DescriptorError> {
    let path = descriptor_path(job_dir);

    let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DescriptorError::NotFound { path: path.clone() },
        _ => DescriptorError::Io {
            path: path.clone(),
            source,
        },
    })?;

    serde_json::from_str(&content).map_err(|source| DescriptorError::Parse { path, source })
}
