//! Core data structures for date resampling.

mod date_set;
mod simulation;
mod window;

pub use date_set::{DateSet, MIN_COVERAGE_DAYS};
pub use simulation::Simulation;
pub use window::{TargetWindow, MAX_WINDOW_DAYS};
