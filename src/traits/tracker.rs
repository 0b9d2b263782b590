use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TrackingError;
use crate::tracking::JobStatus;

/// Client side of the job-tracking service.
#[async_trait]
pub trait JobTracker: Send + Sync {
    /// Mark the remote job record terminal.
    ///
    /// - `job_id`: descriptor `id`
    /// - `token`: authentication token from the descriptor `context`
    /// - `status`: terminal status literal
    /// - `message`: detailed error text (the failure diagnostic)
    /// - `results`: result payload; empty object for failed jobs
    async fn complete_job(
        &self,
        job_id: &str,
        token: &str,
        status: JobStatus,
        message: &str,
        results: &Value,
    ) -> Result<(), TrackingError>;
}

/// Opens a [`JobTracker`] for one service URL and token.
pub trait TrackerFactory: Send + Sync {
    fn connect(&self, url: &str, token: &str) -> Result<Box<dyn JobTracker>, TrackingError>;
}
