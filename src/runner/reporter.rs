// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::{JobDescriptor, TrackingTarget};
use crate::errors::TrackingError;
use crate::observability::messages::{job::*, StructuredLog};
use crate::tracking::JobStatus;
use crate::traits::TrackerFactory;

/// Tells the tracking service that a job failed.
///
/// Everything the report needs is passed in: the tracker factory here, the
/// resolved [`TrackingTarget`] per call. Nothing is looked up on the failure
/// path itself.
pub struct FailureReporter {
    trackers: Arc<dyn TrackerFactory>,
}

impl FailureReporter {
    pub fn new(trackers: Arc<dyn TrackerFactory>) -> Self {
        Self { trackers }
    }

    /// Write `diagnostic` to `stderr`, then mark the job failed exactly once.
    ///
    /// The local copy is written before the remote call is attempted, so it
    /// survives a reporting failure. Delivery is not retried.
    pub async fn report(
        &self,
        job: &JobDescriptor,
        target: &TrackingTarget,
        diagnostic: &str,
        stderr: &mut dyn Write,
    ) -> Result<(), TrackingError> {
        if let Err(e) = writeln!(stderr, "{}", diagnostic.trim_end()).and_then(|_| stderr.flush()) {
            tracing::warn!(job_id = %job.id, error = %e, "Could not write failure diagnostic to stderr");
        }

        let result = self.send(job, target, diagnostic).await;
        match &result {
            Ok(()) => FailureReportSent {
                job_id: &job.id,
                url: &target.url,
            }
            .log(),
            Err(error) => FailureReportFailed {
                job_id: &job.id,
                url: &target.url,
                error,
            }
            .log(),
        }
        result
    }

    async fn send(
        &self,
        job: &JobDescriptor,
        target: &TrackingTarget,
        diagnostic: &str,
    ) -> Result<(), TrackingError> {
        let tracker = self.trackers.connect(&target.url, &target.token)?;
        let results = Value::Object(Map::new());
        tracker
            .complete_job(&job.id, &target.token, JobStatus::Failed, diagnostic, &results)
            .await
    }
}
