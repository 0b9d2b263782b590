// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod descriptor;
mod settings;

pub mod consts;

pub use descriptor::{descriptor_path, load_descriptor, JobDescriptor, TrackingTarget};
pub use settings::{load_settings, settings_from_env, RunnerSettings};
