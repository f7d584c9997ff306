//! Simulation statistics collection and reporting.
//!
//! Tracks cycle counts, stall cycles split by cause, and how many data
//! hazards of each kind the scheduler observed.

use serde::Serialize;

use crate::core::pipeline::hazards::HazardKind;

/// Simulation statistics structure tracking all performance metrics.
///
/// Collected by the scheduler while it builds schedules; `cycles` is the
/// length of the longest schedule, i.e. the cycle at which the last
/// instruction retires.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    pub cycles: u64,
    pub instructions: u64,

    pub stalls_hazard: u64,
    pub stalls_structural: u64,

    pub hazards_raw: u64,
    pub hazards_waw: u64,
    pub hazards_war: u64,
}

impl SimStats {
    /// Records one hazard-positive instruction pair of the given kind.
    pub fn record_hazard(&mut self, kind: HazardKind) {
        match kind {
            HazardKind::Raw => self.hazards_raw += 1,
            HazardKind::Waw => self.hazards_waw += 1,
            HazardKind::War => self.hazards_war += 1,
        }
    }

    /// Total stall cycles from both causes.
    pub fn stalls_total(&self) -> u64 {
        self.stalls_hazard + self.stalls_structural
    }

    /// Cycles per retired instruction.
    pub fn cpi(&self) -> f64 {
        let instr = if self.instructions == 0 {
            1
        } else {
            self.instructions
        };
        self.cycles as f64 / instr as f64
    }

    /// Prints a formatted summary of all simulation statistics.
    pub fn print(&self) {
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };

        println!("\n==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions);
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("STALLS");
        println!(
            "  stalls.hazard          {} ({:.2}%)",
            self.stalls_hazard,
            (self.stalls_hazard as f64 / cyc as f64) * 100.0
        );
        println!(
            "  stalls.structural      {} ({:.2}%)",
            self.stalls_structural,
            (self.stalls_structural as f64 / cyc as f64) * 100.0
        );
        println!("----------------------------------------------------------");
        println!("DATA HAZARDS");
        println!("  hazards.raw            {}", self.hazards_raw);
        println!("  hazards.waw            {}", self.hazards_waw);
        println!("  hazards.war            {}", self.hazards_war);
        println!("==========================================================");
    }
}
