//! Error definitions.
//!
//! The scheduler itself cannot fail once it is handed a valid program. Every
//! recoverable failure lives in the layers around it:
//! 1. **Validation:** malformed program text, rejected before scheduling.
//! 2. **Loading:** the program file could not be read.
//! 3. **Configuration:** the TOML configuration could not be read or parsed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A program was rejected by the input layer.
///
/// Line numbers are 1-based and refer to the original source text,
/// including blank and comment lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The program contains no instruction lines.
    #[error("the input file is empty")]
    EmptyInput,

    /// The program exceeds the configured instruction limit.
    #[error("the input has {count} instruction lines, the maximum allowed is {limit}")]
    TooManyInstructions {
        /// Number of instruction lines found.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// The line does not split into an opcode and three operands.
    #[error("line {line}: cannot extract instruction from `{text}`, expected `opcode operand1, operand2, operand3`")]
    MalformedInstruction {
        /// Source line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The opcode is not one of `add`, `sub`, `mul`, `div`.
    #[error("line {line}: unknown opcode `{opcode}`, only add, sub, mul and div are allowed")]
    UnknownOpcode {
        /// Source line number.
        line: usize,
        /// The opcode as written.
        opcode: String,
    },

    /// An operand is not a register in `R0..R15`.
    #[error("line {line}: invalid register `{register}`, only R0 to R15 are allowed")]
    InvalidRegister {
        /// Source line number.
        line: usize,
        /// The operand as written.
        register: String,
    },
}

/// Failure to produce a validated program from a file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read `{}`: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The program text was read but failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config `{}`: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
