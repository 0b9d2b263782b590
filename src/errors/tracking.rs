// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors from the job-tracking service while delivering a report.
///
/// These are not recovered by the runner: a report that cannot be delivered
/// terminates the process abnormally.
#[derive(Error, Debug)]
pub enum TrackingError {
    /// The service URL taken from the descriptor is not a valid URL.
    #[error("Invalid tracking service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced an HTTP response (DNS, connect, TLS, ...).
    #[error("Tracking service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a JSON-RPC error object.
    #[error("Tracking service rejected {method}: {name}: {message}")]
    Rpc {
        method: String,
        name: String,
        message: String,
    },

    /// The service answered with a non-success status and no decodable error.
    #[error("Tracking service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}
