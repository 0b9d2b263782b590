// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `runjob` -- run one scheduled job and report its failure.
//!
//! Loads `<job_directory>/jobdata.json`, runs the computation engine named
//! by its `config`, and marks the job `failed` with the tracking service if
//! the engine fails.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `0`  | Job ran; success or a reported failure (check the tracking service) |
//! | `1`  | Job failed and the failure could not be reported |
//! | `2`  | Settings or job descriptor could not be loaded; nothing was reported |
//!
//! # Environment variables
//!
//! | Variable          | Default        | Description                      |
//! |-------------------|----------------|----------------------------------|
//! | `RUNJOB_SETTINGS` | --             | Optional YAML runner settings    |
//! | `RUST_LOG`        | `runjob=info`  | Log filter (logs go to stderr)   |

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use runjob::backends::command::CommandEngineFactory;
use runjob::config::{settings_from_env, RunnerSettings};
use runjob::errors::RunError;
use runjob::runner::{exit_code, JobRunner};
use runjob::tracking::UserAndJobStateFactory;

#[derive(Parser, Debug)]
#[command(name = "runjob")]
#[command(version)]
#[command(about = "Run the job described in a job directory and report failure to the tracking service", long_about = None)]
struct Cli {
    /// Path to job directory for the job
    job_directory: PathBuf,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match settings_from_env() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&RunnerSettings::default().log_filter);
            tracing::error!(error = %e, "Cannot load runner settings");
            return ExitCode::from(exit_code(&Err(RunError::from(e))));
        }
    };
    init_tracing(&settings.log_filter);

    let runner = JobRunner::new(
        settings,
        Arc::new(CommandEngineFactory),
        Arc::new(UserAndJobStateFactory),
    );

    let result = runner.run(&cli.job_directory, &mut std::io::stderr()).await;
    ExitCode::from(exit_code(&result))
}
