// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // computation engine backends
pub mod config;     // descriptor + runner settings
pub mod errors;     // error handling
pub mod observability;
pub mod runner;     // load -> execute -> report
pub mod tracking;   // job-tracking service client
pub mod traits;     // collaborator abstractions
