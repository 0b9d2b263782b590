// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Log messages are structs with a `Display` implementation and a
//! [`StructuredLog`](messages::StructuredLog) implementation, so the text of
//! every operational event lives in one place and each event is emitted with
//! the same structured fields every time.
//!
//! # Usage
//!
//! ```rust
//! use runjob::observability::messages::{job::DescriptorLoaded, StructuredLog};
//!
//! DescriptorLoaded {
//!     job_id: "123",
//!     path: std::path::Path::new("/jobs/123/jobdata.json"),
//! }
//! .log();
//! ```
//!
//! All output goes to stderr; stdout belongs to the computation engine.

pub mod messages;
