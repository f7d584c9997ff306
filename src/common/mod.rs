//! Common types used throughout the pipeline simulator.
//!
//! This module provides the register identifier and the error types shared
//! by the input layer, the configuration loader, and the CLI.

/// Error types for validation, loading, and configuration.
pub mod error;

/// Architectural register identifiers.
pub mod reg;

pub use error::{ConfigError, LoadError, ValidationError};
pub use reg::{Register, REG_COUNT};
