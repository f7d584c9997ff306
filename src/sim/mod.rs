//! Simulation harness: program loading, the run driver, and report output.

/// Program text validation and file loading.
pub mod loader;

/// Time diagram rendering (text and JSON).
pub mod report;

/// Load, schedule and collect results in one call.
pub mod simulator;

pub use simulator::{SimulationResult, Simulator};
