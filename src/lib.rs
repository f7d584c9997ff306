//! Five-Stage Pipeline Scheduler Library.
//!
//! This crate simulates, cycle by cycle, how a sequence of register-register
//! arithmetic instructions flows through a classic in-order pipeline, and
//! produces a time diagram of stage occupancy including stall cycles.
//!
//! # Architecture
//!
//! * **Core**: 5-stage in-order pipeline (Fetch, Decode, Execute, Memory, Writeback)
//!   with RAW/WAW/WAR data hazard stalls and single occupancy per stage.
//! * **ISA**: `add`, `sub`, `mul`, `div` over registers `R0`..`R15`.
//! * **Harness**: program validation, simulation driver, and report rendering.
//!
//! # Modules
//!
//! * `common`: Register identifiers and error types.
//! * `config`: Configuration loading and parsing.
//! * `core`: Stage alphabet, hazard detector, and scheduler.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Program loader, simulation driver, and renderers.
//! * `stats`: Performance statistics collection.

/// Register identifiers and error types.
///
/// Provides the `Register` type shared by the ISA and the loader, and the
/// validation, loading and configuration errors reported around the core.
pub mod common;

/// Configuration system for instruction limits, hazard policy, and report output.
///
/// Loads and parses TOML configuration files; every field has a default.
pub mod config;

/// Pipeline core: stage symbols, hazard detection, and the stage scheduler.
pub mod core;

/// Instruction Set Architecture definitions.
///
/// Opcodes and the decoded instruction entity that carries its schedule.
pub mod isa;

/// Simulation harness, program loader, and report rendering.
pub mod sim;

/// Performance statistics collection and reporting.
///
/// Tracks cycle counts, stall cycles by cause, and data hazard counts.
pub mod stats;
