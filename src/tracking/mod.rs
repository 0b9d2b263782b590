// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Job-tracking service integration.
//!
//! The tracking service is the system of record for job status. The wrapper
//! only ever issues one call against it, `complete_job`, when a job fails;
//! successful jobs are recorded by the computation engine itself.

mod client;
mod status;

pub use client::{UserAndJobStateClient, UserAndJobStateFactory, COMPLETE_JOB_METHOD};
pub use status::JobStatus;
