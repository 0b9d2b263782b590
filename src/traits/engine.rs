use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::JobDescriptor;

/// The computation that actually performs a job.
///
/// `run_job` blocks for as long as the computation takes. Returning `Ok`
/// means the job succeeded and the engine has already recorded that with
/// the tracking service itself; any `Err` is treated as a job failure.
#[async_trait]
pub trait ComputationEngine: Send + Sync {
    async fn run_job(&self, job: &JobDescriptor) -> anyhow::Result<()>;

    fn name(&self) -> &'static str;
}

/// Builds a [`ComputationEngine`] from a job's `config`.
///
/// `config` is the only construction input and already carries the
/// forced execution mode.
pub trait EngineFactory: Send + Sync {
    fn create_engine(
        &self,
        config: &Map<String, Value>,
    ) -> anyhow::Result<Box<dyn ComputationEngine>>;
}
