// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod descriptor;
mod engine;
mod run;
mod settings;
mod tracking;

pub use descriptor::DescriptorError;
pub use engine::EngineError;
pub use run::RunError;
pub use settings::SettingsError;
pub use tracking::TrackingError;
