// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{DescriptorError, SettingsError, TrackingError};

/// Errors that end a run abnormally.
///
/// Job failures are not in here: a failed job that was reported is a
/// normal run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// The job failed and the tracking service could not be told.
    #[error("Job '{job_id}' failed and the failure could not be reported: {source}")]
    Reporting {
        job_id: String,
        #[source]
        source: TrackingError,
    },
}
