//! Pipeline Stage Symbols.
//!
//! Every cycle of an instruction's schedule holds exactly one of these
//! symbols. The five real stages are entered once each, in order; `Stall`
//! and `Idle` are filler cycles.

use std::fmt;

use serde::{Serialize, Serializer};

/// A stage symbol in an instruction schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Instruction decode and register read.
    Decode,
    /// ALU operation.
    Execute,
    /// Memory access.
    Memory,
    /// Register writeback; the instruction retires here.
    WriteBack,
    /// A bubble: the instruction is in the pipeline but held in place.
    Stall,
    /// A cycle before the instruction entered the pipeline.
    Idle,
}

impl Stage {
    /// The five real stages in pipeline order.
    pub const PIPELINE: [Stage; 5] = [
        Stage::Fetch,
        Stage::Decode,
        Stage::Execute,
        Stage::Memory,
        Stage::WriteBack,
    ];

    /// Returns the one-character symbol used in time diagrams.
    pub fn symbol(self) -> char {
        match self {
            Stage::Fetch => 'F',
            Stage::Decode => 'D',
            Stage::Execute => 'E',
            Stage::Memory => 'M',
            Stage::WriteBack => 'W',
            Stage::Stall => 'S',
            Stage::Idle => '-',
        }
    }

    /// Returns `true` for the five stages that can be occupied.
    ///
    /// `Stall` and `Idle` never count towards stage occupancy.
    pub fn is_pipeline_stage(self) -> bool {
        !matches!(self, Stage::Stall | Stage::Idle)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}
