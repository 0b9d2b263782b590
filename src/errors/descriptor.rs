// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading a job descriptor.
//!
//! None of these are reported to the tracking service. A descriptor that
//! cannot be loaded leaves the wrapper without a job id or credentials, so
//! the process terminates with a non-zero exit code instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptorError {
    /// The job directory has no descriptor file.
    #[error("Job descriptor not found at '{}'", .path.display())]
    NotFound { path: PathBuf },

    /// The descriptor file exists but could not be read.
    #[error("Failed to read job descriptor '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not a well-formed object with `id`, `config` and `context`.
    #[error("Malformed job descriptor '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field the failure path depends on is absent or not a string.
    #[error("Job descriptor is missing a string in '{section}' under any of: {}", .keys.join(", "))]
    MissingField {
        section: &'static str,
        keys: Vec<String>,
    },
}
