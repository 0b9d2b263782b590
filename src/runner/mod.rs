// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The job lifecycle: load the descriptor, execute, report failure.
//!
//! ```text
//! load_descriptor ──► JobExecutor::execute ──► Succeeded ──► done
//!                                          └─► Failed ─────► FailureReporter::report
//! ```
//!
//! Everything runs sequentially in one task. Job failures are values
//! ([`JobOutcome`]), not errors; only problems that prevent the lifecycle
//! itself from finishing surface as [`RunError`](crate::errors::RunError).

mod executor;
mod pipeline;
mod reporter;


pub use executor::{JobExecutor, JobOutcome};
pub use pipeline::{
    exit_code, JobRunner, RunSummary, EXIT_DESCRIPTOR_FAILED, EXIT_REPORT_FAILED, EXIT_SUCCESS,
};
pub use reporter::FailureReporter;
