//! Hazard-Aware Stage Scheduler.
//!
//! The scheduler turns a program into a time diagram. Instructions are
//! handled strictly in program order, and each one is walked through Fetch,
//! Decode, Execute, Memory and Writeback before the next is considered.
//! The process per instruction is:
//! 1. **Entry:** one idle cycle per instruction already scheduled, then Fetch.
//! 2. **Data hazards:** stall after Fetch as decided by [`hazards::fetch_stall`].
//! 3. **Remaining stages:** each of Decode, Execute, Memory and Writeback is
//!    entered through [`Scheduler::enter_stage`], which enforces in-order
//!    stage entry and single occupancy of every stage per cycle.
//! 4. **Retire:** the instruction joins the history later instructions are
//!    checked against.

use log::{debug, trace};

use crate::core::pipeline::hazards::{self, HazardPolicy};
use crate::core::pipeline::stage::Stage;
use crate::isa::Instruction;
use crate::stats::SimStats;

/// Stages entered through the occupancy procedure, after Fetch.
const LATER_STAGES: [Stage; 4] = [Stage::Decode, Stage::Execute, Stage::Memory, Stage::WriteBack];

/// Schedules instructions into the five-stage pipeline.
///
/// The scheduler owns the history of fully scheduled instructions. History
/// is append-only and kept in program order; entries are never modified
/// after they are added.
#[derive(Debug, Default)]
pub struct Scheduler {
    policy: HazardPolicy,
    pipelined: Vec<Instruction>,
    stats: SimStats,
}

impl Scheduler {
    /// Creates an empty scheduler using `policy` for Fetch stalls.
    pub fn new(policy: HazardPolicy) -> Self {
        Self {
            policy,
            pipelined: Vec::new(),
            stats: SimStats::default(),
        }
    }

    /// The hazard policy in use.
    pub fn policy(&self) -> HazardPolicy {
        self.policy
    }

    /// Instructions scheduled so far, in program order.
    pub fn pipelined(&self) -> &[Instruction] {
        &self.pipelined
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Consumes the scheduler, returning the scheduled instructions and statistics.
    pub fn into_parts(self) -> (Vec<Instruction>, SimStats) {
        (self.pipelined, self.stats)
    }

    /// Schedules every instruction of `program` in order.
    ///
    /// # Returns
    ///
    /// All instructions scheduled by this scheduler, each with a complete
    /// schedule ending in Writeback.
    pub fn run(&mut self, program: impl IntoIterator<Item = Instruction>) -> &[Instruction] {
        for instr in program {
            self.schedule_next(instr);
        }
        &self.pipelined
    }

    /// Schedules one instruction after everything already in the history.
    pub fn schedule_next(&mut self, mut instr: Instruction) {
        if self.pipelined.is_empty() {
            for stage in Stage::PIPELINE {
                instr.push(stage);
            }
            debug!("Instruction 0 ({instr}) enters an empty pipeline");
            self.retire(instr);
            return;
        }

        let idx = self.pipelined.len();
        instr.push_n(Stage::Idle, idx);
        instr.push(Stage::Fetch);

        for prior in &self.pipelined {
            for kind in hazards::hazard_kinds(&instr, prior) {
                self.stats.record_hazard(kind);
            }
        }

        let stall = hazards::fetch_stall(&instr, &self.pipelined, self.policy);
        if stall > 0 {
            debug!("Instruction {idx} ({instr}) stalls {stall} cycles after Fetch on a data hazard");
            instr.push_n(Stage::Stall, stall);
            self.stats.stalls_hazard += stall as u64;
        }

        for stage in LATER_STAGES {
            let stalls = Self::enter_stage(&mut instr, stage, &self.pipelined);
            if stalls > 0 {
                debug!("Instruction {idx} ({instr}) stalls {stalls} cycles before {stage:?}");
            }
            self.stats.stalls_structural += stalls as u64;
        }

        self.retire(instr);
    }

    /// Advances `instr` into `stage`, stalling as long as required.
    ///
    /// `history` is the set of already scheduled instructions. The last entry
    /// is the immediately preceding instruction in program order, which
    /// gates entry: `instr` may not reach `stage` earlier than that
    /// instruction did. After the gate, `instr` stalls one cycle at a time
    /// while any history entry holds `stage` at the next cycle, then takes
    /// the stage.
    ///
    /// # Returns
    ///
    /// The number of `Stall` cycles appended before `stage`.
    pub fn enter_stage(instr: &mut Instruction, stage: Stage, history: &[Instruction]) -> usize {
        let start = instr.cycles();

        if let Some(gate) = history.last().and_then(|prev| prev.cycle_of(stage)) {
            if instr.cycles() < gate {
                instr.push_n(Stage::Stall, gate - instr.cycles());
            }
        }

        loop {
            let cycle = instr.cycles();
            match history.iter().position(|other| other.stage_at(cycle) == Some(stage)) {
                Some(owner) => {
                    trace!("{stage:?} busy at cycle {cycle} (held by instruction {owner})");
                    instr.push(Stage::Stall);
                }
                None => {
                    instr.push(stage);
                    break;
                }
            }
        }

        instr.cycles() - start - 1
    }

    fn retire(&mut self, instr: Instruction) {
        self.stats.instructions += 1;
        self.stats.cycles = self.stats.cycles.max(instr.cycles() as u64);
        self.pipelined.push(instr);
    }
}

/// Schedules `program` from an empty pipeline.
///
/// Convenience wrapper around [`Scheduler::run`].
pub fn schedule(program: Vec<Instruction>, policy: HazardPolicy) -> Vec<Instruction> {
    let mut scheduler = Scheduler::new(policy);
    scheduler.run(program);
    scheduler.into_parts().0
}
