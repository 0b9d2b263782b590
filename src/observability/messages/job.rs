// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the job lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Descriptor loading
//! * Execution-mode override and engine invocation
//! * Failure reporting to the tracking service

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

use tracing::Span;

use super::StructuredLog;

/// Job descriptor loaded from disk.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DescriptorLoaded<'a> {
    pub job_id: &'a str,
    pub path: &'a Path,
}

impl Display for DescriptorLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded descriptor for job '{}' from {}",
            self.job_id,
            self.path.display()
        )
    }
}

impl StructuredLog for DescriptorLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            job_id = self.job_id,
            path = %self.path.display(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "job",
            span_name = name,
            job_id = self.job_id,
        )
    }
}

/// Job descriptor could not be loaded; nothing will be reported remotely.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DescriptorLoadFailed<'a> {
    pub job_dir: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for DescriptorLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cannot run job in {}: {}. No failure will be reported to the tracking service",
            self.job_dir.display(),
            self.error
        )
    }
}

impl StructuredLog for DescriptorLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(
            job_dir = %self.job_dir.display(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "descriptor_load_failed",
            span_name = name,
            job_dir = %self.job_dir.display(),
        )
    }
}

/// Execution-mode entry of `config` replaced with the standalone sentinel.
///
/// # Log Level
/// `debug!` - Detail useful when diagnosing engine configuration
pub struct ExecutionModeForced<'a> {
    pub key: &'a str,
    pub previous: Option<&'a serde_json::Value>,
    pub mode: &'a str,
}

impl Display for ExecutionModeForced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.previous {
            Some(previous) => write!(
                f,
                "Overriding config.{} = {} with '{}'",
                self.key, previous, self.mode
            ),
            None => write!(f, "Setting config.{} = '{}'", self.key, self.mode),
        }
    }
}

impl StructuredLog for ExecutionModeForced<'_> {
    fn log(&self) {
        tracing::debug!(
            key = self.key,
            mode = self.mode,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("execution_mode", span_name = name, key = self.key)
    }
}

/// Engine constructed and about to run the job.
///
/// # Log Level
/// `info!` - Important operational event
pub struct EngineInvocationStarted<'a> {
    pub job_id: &'a str,
    pub engine: &'a str,
}

impl Display for EngineInvocationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Running job '{}' on engine '{}'", self.job_id, self.engine)
    }
}

impl StructuredLog for EngineInvocationStarted<'_> {
    fn log(&self) {
        tracing::info!(job_id = self.job_id, engine = self.engine, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "engine_invocation",
            span_name = name,
            job_id = self.job_id,
            engine = self.engine,
        )
    }
}

/// Engine returned normally.
///
/// # Log Level
/// `info!` - Important operational event
pub struct EngineInvocationCompleted<'a> {
    pub job_id: &'a str,
    pub duration: Duration,
}

impl Display for EngineInvocationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Job '{}' completed in {:?}; completion is recorded by the engine",
            self.job_id, self.duration
        )
    }
}

impl StructuredLog for EngineInvocationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            job_id = self.job_id,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("engine_completed", span_name = name, job_id = self.job_id)
    }
}

/// Engine construction or invocation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EngineInvocationFailed<'a> {
    pub job_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for EngineInvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Job '{}' failed: {}", self.job_id, self.error)
    }
}

impl StructuredLog for EngineInvocationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            job_id = self.job_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("engine_failed", span_name = name, job_id = self.job_id)
    }
}

/// Failure recorded with the tracking service.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FailureReportSent<'a> {
    pub job_id: &'a str,
    pub url: &'a str,
}

impl Display for FailureReportSent<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Marked job '{}' as failed at {}",
            self.job_id, self.url
        )
    }
}

impl StructuredLog for FailureReportSent<'_> {
    fn log(&self) {
        tracing::info!(job_id = self.job_id, url = self.url, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("failure_report", span_name = name, job_id = self.job_id)
    }
}

/// Failure could not be recorded with the tracking service.
///
/// # Log Level
/// `error!` - The job failure may remain unrecorded
pub struct FailureReportFailed<'a> {
    pub job_id: &'a str,
    pub url: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FailureReportFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not mark job '{}' as failed at {}: {}",
            self.job_id, self.url, self.error
        )
    }
}

impl StructuredLog for FailureReportFailed<'_> {
    fn log(&self) {
        tracing::error!(
            job_id = self.job_id,
            url = self.url,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "failure_report_failed",
            span_name = name,
            job_id = self.job_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_mode_message_shows_replaced_value() {
        let previous = serde_json::json!("batch");
        let msg = ExecutionModeForced {
            key: "load_data_option",
            previous: Some(&previous),
            mode: "runjob",
        };
        assert_eq!(
            msg.to_string(),
            "Overriding config.load_data_option = \"batch\" with 'runjob'"
        );
    }

    #[test]
    fn descriptor_load_failure_says_nothing_is_reported() {
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "no jobdata.json");
        let msg = DescriptorLoadFailed {
            job_dir: Path::new("/jobs/7"),
            error: &error,
        };
        let text = msg.to_string();
        assert!(text.contains("/jobs/7"));
        assert!(text.contains("No failure will be reported"));
    }
}
