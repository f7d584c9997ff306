//! Decoded Instruction and its Cycle Schedule.
//!
//! An [`Instruction`] pairs the immutable decoded operands with the schedule
//! the pipeline builds for it. The schedule holds one [`Stage`] per global
//! cycle, starting at cycle 0, and only ever grows at the end: once a cycle
//! has been written it is never revisited.

use std::fmt;

use crate::common::Register;
use crate::core::pipeline::stage::Stage;
use crate::isa::opcode::Opcode;

/// A decoded three-register arithmetic instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Arithmetic operation.
    pub opcode: Opcode,
    /// Destination register.
    pub rd: Register,
    /// First source register.
    pub rs1: Register,
    /// Second source register.
    pub rs2: Register,
    schedule: Vec<Stage>,
}

impl Instruction {
    /// Creates an instruction with an empty schedule.
    pub fn new(opcode: Opcode, rd: Register, rs1: Register, rs2: Register) -> Self {
        Self {
            opcode,
            rd,
            rs1,
            rs2,
            schedule: Vec::new(),
        }
    }

    /// The per-cycle stage occupancy built so far, indexed by global cycle.
    pub fn schedule(&self) -> &[Stage] {
        &self.schedule
    }

    /// Number of cycles scheduled so far, including leading idle cycles.
    pub fn cycles(&self) -> usize {
        self.schedule.len()
    }

    /// Returns the stage held at the given global cycle, if any.
    pub fn stage_at(&self, cycle: usize) -> Option<Stage> {
        self.schedule.get(cycle).copied()
    }

    /// Returns the first cycle at which the instruction holds `stage`.
    pub fn cycle_of(&self, stage: Stage) -> Option<usize> {
        self.schedule.iter().position(|s| *s == stage)
    }

    /// Number of `Stall` cycles in the schedule.
    pub fn stall_count(&self) -> usize {
        self.schedule.iter().filter(|s| **s == Stage::Stall).count()
    }

    /// Returns `true` once the instruction has reached Writeback.
    pub fn is_retired(&self) -> bool {
        self.schedule.last() == Some(&Stage::WriteBack)
    }

    /// Appends one cycle to the schedule.
    pub(crate) fn push(&mut self, stage: Stage) {
        self.schedule.push(stage);
    }

    /// Appends `count` copies of `stage`.
    pub(crate) fn push_n(&mut self, stage: Stage, count: usize) {
        self.schedule.extend(std::iter::repeat(stage).take(count));
    }
}

impl fmt::Display for Instruction {
    /// Canonical form, e.g. `add R1, R2, R3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}, {}", self.opcode, self.rd, self.rs1, self.rs2)
    }
}
