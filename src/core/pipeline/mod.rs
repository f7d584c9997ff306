//! Instruction pipeline implementation.
//!
//! This module contains the stage alphabet that schedules are written in,
//! the data hazard detector, and the scheduler that walks each instruction
//! through Fetch, Decode, Execute, Memory and Writeback.

/// Data hazard detection (RAW, WAW, WAR) and Fetch stall computation.
pub mod hazards;

/// Hazard-aware stage scheduler.
pub mod scheduler;

/// Stage symbols written into instruction schedules.
pub mod stage;
