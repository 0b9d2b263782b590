// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use crate::config::consts::STANDALONE_JOB_RUN_MODE;
use crate::config::JobDescriptor;
use crate::errors::EngineError;
use crate::observability::messages::{job::*, StructuredLog};
use crate::traits::EngineFactory;

/// Result of running one job through the computation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The engine returned normally and recorded completion itself.
    Succeeded,
    /// Construction or invocation failed; `diagnostic` is the full cause chain as text.
    Failed { diagnostic: String },
}

/// Runs a job through an engine built by `engines`.
pub struct JobExecutor {
    engines: Arc<dyn EngineFactory>,
    execution_mode_key: String,
}

impl JobExecutor {
    pub fn new(engines: Arc<dyn EngineFactory>, execution_mode_key: impl Into<String>) -> Self {
        Self {
            engines,
            execution_mode_key: execution_mode_key.into(),
        }
    }

    /// Force the execution mode, construct the engine from `config`, and run the job.
    ///
    /// The descriptor is updated in place so the caller sees exactly what the
    /// engine saw. Never returns an error: every engine failure becomes
    /// [`JobOutcome::Failed`].
    pub async fn execute(&self, job: &mut JobDescriptor) -> JobOutcome {
        ExecutionModeForced {
            key: &self.execution_mode_key,
            previous: job.config.get(&self.execution_mode_key),
            mode: STANDALONE_JOB_RUN_MODE,
        }
        .log();
        job.force_execution_mode(&self.execution_mode_key);

        match self.run(job).await {
            Ok(()) => JobOutcome::Succeeded,
            Err(error) => {
                EngineInvocationFailed {
                    job_id: &job.id,
                    error: &error,
                }
                .log();
                JobOutcome::Failed {
                    diagnostic: error.diagnostic(),
                }
            }
        }
    }

    async fn run(&self, job: &JobDescriptor) -> Result<(), EngineError> {
        let engine = self
            .engines
            .create_engine(&job.config)
            .map_err(EngineError::Construction)?;

        EngineInvocationStarted {
            job_id: &job.id,
            engine: engine.name(),
        }
        .log();

        let start_time = Instant::now();
        engine.run_job(job).await.map_err(EngineError::Invocation)?;

        EngineInvocationCompleted {
            job_id: &job.id,
            duration: start_time.elapsed(),
        }
        .log();
        Ok(())
    }
}
