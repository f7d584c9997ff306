//! Pipeline core.
//!
//! Implements the five-stage in-order pipeline model (Fetch, Decode, Execute,
//! Memory, Writeback): the stage alphabet, hazard detection, and the
//! hazard-aware stage scheduler.

/// Five-stage pipeline model and scheduler.
pub mod pipeline;

pub use pipeline::scheduler::Scheduler;
pub use pipeline::stage::Stage;
