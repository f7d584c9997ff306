//! Data Hazard Detection.
//!
//! This module decides whether an instruction about to be fetched conflicts
//! with an instruction already in the pipeline, and how many cycles it must
//! stall after Fetch because of it. There is no forwarding: a dependent
//! instruction waits for its producer's schedule to drain instead.
//!
//! It handles all three register-dependency kinds:
//! * **RAW** - the candidate reads the prior instruction's destination.
//! * **WAW** - both instructions write the same destination.
//! * **WAR** - the candidate writes a register the prior instruction reads.

use std::fmt;

use clap::ValueEnum;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::isa::Instruction;

/// Kind of register dependency between two instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HazardKind {
    /// Read-after-write.
    Raw,
    /// Write-after-write.
    Waw,
    /// Write-after-read.
    War,
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HazardKind::Raw => "RAW",
            HazardKind::Waw => "WAW",
            HazardKind::War => "WAR",
        })
    }
}

/// How the Fetch stall is chosen when several prior instructions conflict.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HazardPolicy {
    /// The last conflicting instruction in program order decides the stall,
    /// overwriting any earlier one even if it required more cycles.
    #[default]
    Last,
    /// The largest stall required by any conflicting instruction is applied.
    Max,
}

/// Returns every hazard kind `candidate` has against `prior`.
///
/// Kinds are reported in the fixed order RAW, WAW, WAR.
pub fn hazard_kinds(candidate: &Instruction, prior: &Instruction) -> Vec<HazardKind> {
    let mut kinds = Vec::with_capacity(3);

    if candidate.rs1 == prior.rd || candidate.rs2 == prior.rd {
        kinds.push(HazardKind::Raw);
    }
    if candidate.rd == prior.rd {
        kinds.push(HazardKind::Waw);
    }
    if candidate.rd == prior.rs1 || candidate.rd == prior.rs2 {
        kinds.push(HazardKind::War);
    }

    kinds
}

/// Classifies the hazard between `candidate` and an already scheduled `prior`.
///
/// Only presence matters to the scheduler, so the first kind found (in the
/// order RAW, WAW, WAR) is returned.
///
/// # Returns
///
/// `None` if the two instructions share no register dependency.
pub fn classify(candidate: &Instruction, prior: &Instruction) -> Option<HazardKind> {
    hazard_kinds(candidate, prior).first().copied()
}

/// Cycles `candidate` must wait for `prior`, given their schedules so far.
///
/// This is the difference between the two schedule lengths and may be zero
/// or negative when `prior` has already retired.
pub fn stall_contribution(candidate: &Instruction, prior: &Instruction) -> isize {
    prior.cycles() as isize - candidate.cycles() as isize
}

/// Computes the number of stall cycles to insert right after Fetch.
///
/// `history` is scanned in program order and every hazard-positive entry
/// produces a [`stall_contribution`]. With [`HazardPolicy::Last`] the last
/// such contribution wins outright, so an earlier, larger requirement can be
/// replaced by a smaller or negative one. With [`HazardPolicy::Max`] the
/// largest contribution is kept. The result is clamped at zero.
pub fn fetch_stall(candidate: &Instruction, history: &[Instruction], policy: HazardPolicy) -> usize {
    let mut stall: Option<isize> = None;

    for (idx, prior) in history.iter().enumerate() {
        let Some(kind) = classify(candidate, prior) else {
            continue;
        };
        let contribution = stall_contribution(candidate, prior);
        trace!("{kind} hazard on instruction {idx} ({prior}), contribution {contribution}");

        stall = match (policy, stall) {
            (HazardPolicy::Max, Some(current)) => Some(current.max(contribution)),
            _ => Some(contribution),
        };
    }

    stall.map_or(0, |s| s.max(0) as usize)
}
