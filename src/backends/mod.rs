// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Computation engine backends.
//!
//! The wrapper never knows what a job computes. It builds an engine from the
//! job `config` through an [`EngineFactory`](crate::traits::EngineFactory)
//! and hands it the full descriptor:
//!
//! ```text
//! config → Factory → Engine Instance → run_job(descriptor)
//! ```
//!
//! ## Command Backend
//! Runs an external program named by `config.engine_command`, feeding it the
//! descriptor as JSON on stdin. This is what the `runjob` binary uses.
//!
//! ## Stub Backend (Test-Only)
//! Engines and tracking clients that succeed, fail on demand, and record
//! what they were given. NOT available in production builds.
//!
//! # Example
//! ```rust
//! use runjob::backends::command::CommandEngineFactory;
//! use runjob::traits::EngineFactory;
//! use serde_json::json;
//!
//! let config = json!({"engine_command": ["annotate", "--quiet"]});
//! let engine = CommandEngineFactory.create_engine(config.as_object().unwrap())?;
//! assert_eq!(engine.name(), "command");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod command;
#[cfg(test)]
pub mod stub;
