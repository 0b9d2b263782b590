// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::Instrument;

use crate::config::{descriptor_path, load_descriptor, JobDescriptor, RunnerSettings, TrackingTarget};
use crate::errors::{DescriptorError, RunError};
use crate::observability::messages::{job::*, StructuredLog};
use crate::runner::{FailureReporter, JobExecutor, JobOutcome};
use crate::traits::{EngineFactory, TrackerFactory};

/// The descriptor loaded; the job either succeeded or its failure was reported.
pub const EXIT_SUCCESS: u8 = 0;
/// The job failed and the failure report could not be delivered.
pub const EXIT_REPORT_FAILED: u8 = 1;
/// Settings or descriptor could not be loaded; nothing was reported.
pub const EXIT_DESCRIPTOR_FAILED: u8 = 2;

/// How a run that reached the end of the lifecycle finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    Succeeded { job_id: String },
    FailureReported { job_id: String },
}

/// Runs one job directory: load, execute, and report on failure.
pub struct JobRunner {
    settings: RunnerSettings,
    executor: JobExecutor,
    reporter: FailureReporter,
}

impl JobRunner {
    pub fn new(
        settings: RunnerSettings,
        engines: Arc<dyn EngineFactory>,
        trackers: Arc<dyn TrackerFactory>,
    ) -> Self {
        let executor = JobExecutor::new(engines, settings.execution_mode_key.clone());
        Self {
            settings,
            executor,
            reporter: FailureReporter::new(trackers),
        }
    }

    /// Run the job in `job_dir`, writing any failure diagnostic to `stderr`.
    ///
    /// A job failure that was delivered to the tracking service is a normal
    /// result ([`RunSummary::FailureReported`]). Descriptor problems are
    /// returned before the engine is touched and are never reported remotely.
    pub async fn run<P: AsRef<Path>>(
        &self,
        job_dir: P,
        stderr: &mut dyn Write,
    ) -> Result<RunSummary, RunError> {
        let job_dir = job_dir.as_ref();
        let (mut job, target) = match self.load(job_dir) {
            Ok(loaded) => loaded,
            Err(error) => {
                DescriptorLoadFailed {
                    job_dir,
                    error: &error,
                }
                .log();
                return Err(error.into());
            }
        };

        let span = {
            let path = descriptor_path(job_dir);
            let loaded = DescriptorLoaded {
                job_id: &job.id,
                path: &path,
            };
            loaded.log();
            loaded.span("run_job")
        };

        async move {
            let outcome = self.executor.execute(&mut job).await;
            match outcome {
                JobOutcome::Succeeded => Ok(RunSummary::Succeeded { job_id: job.id }),
                JobOutcome::Failed { diagnostic } => {
                    let reported = self.reporter.report(&job, &target, &diagnostic, stderr).await;
                    match reported {
                        Ok(()) => Ok(RunSummary::FailureReported { job_id: job.id }),
                        Err(source) => Err(RunError::Reporting {
                            job_id: job.id,
                            source,
                        }),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    fn load(&self, job_dir: &Path) -> Result<(JobDescriptor, TrackingTarget), DescriptorError> {
        let job = load_descriptor(job_dir)?;
        let target = job.tracking_target(&self.settings)?;
        Ok((job, target))
    }
}

/// Process exit code for a finished run.
///
/// Job success and reported job failure both map to `0`; the tracking
/// service is the only place that distinguishes them.
pub fn exit_code(result: &Result<RunSummary, RunError>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(RunError::Settings(_) | RunError::Descriptor(_)) => EXIT_DESCRIPTOR_FAILED,
        Err(RunError::Reporting { .. }) => EXIT_REPORT_FAILED,
    }
}
