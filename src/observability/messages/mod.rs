// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `job` - descriptor loading, engine invocation and failure reporting

use tracing::Span;

pub mod job;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level with its structured fields.
    fn log(&self);

    /// A span carrying the same fields, for wrapping the work the message describes.
    fn span(&self, name: &str) -> Span;
}
