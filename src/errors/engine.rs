// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by the computation engine.
//!
//! The engine is an opaque collaborator, so both variants carry an
//! [`anyhow::Error`] with whatever cause chain the engine produced. The
//! executor treats the two stages identically; the variant only labels
//! the diagnostic text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine could not be built from the job `config`.
    #[error("Failed to construct computation engine")]
    Construction(#[source] anyhow::Error),

    /// The engine was built but its job-processing entry point failed.
    #[error("Computation engine failed while running the job")]
    Invocation(#[source] anyhow::Error),
}

impl EngineError {
    /// Render the full cause chain as text.
    ///
    /// Uses `anyhow`'s debug format, which lists every `Caused by:` entry
    /// and appends a backtrace when `RUST_BACKTRACE` is enabled.
    pub fn diagnostic(&self) -> String {
        let cause = match self {
            EngineError::Construction(e) | EngineError::Invocation(e) => e,
        };
        format!("{}\n\n{:?}", self, cause)
    }
}
