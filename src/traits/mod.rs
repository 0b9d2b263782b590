pub mod engine;
pub mod tracker;

pub use engine::{ComputationEngine, EngineFactory};
pub use tracker::{JobTracker, TrackerFactory};
