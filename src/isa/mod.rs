//! Instruction Set Architecture definitions.
//!
//! The ISA is four register-register arithmetic operations, each with one
//! destination and two source registers. There are no memory-access or
//! control-flow instructions.

/// Decoded instruction entity and its per-cycle schedule.
pub mod instruction;

/// Arithmetic opcodes.
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::Opcode;
