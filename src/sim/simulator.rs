//! Simulation driver.
//!
//! Ties the pieces together: program text is validated by the loader, the
//! resulting instructions are scheduled, and the outcome is handed back for
//! rendering. Nothing is scheduled unless validation succeeds.

use std::path::Path;

use log::info;

use crate::common::{LoadError, ValidationError};
use crate::config::Config;
use crate::core::pipeline::hazards::HazardPolicy;
use crate::core::Scheduler;
use crate::isa::Instruction;
use crate::sim::loader;
use crate::stats::SimStats;

/// Scheduled instructions together with the statistics gathered for them.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Instructions in program order, each carrying its schedule.
    pub instructions: Vec<Instruction>,
    /// Statistics collected while scheduling.
    pub stats: SimStats,
}

/// Runs programs through the pipeline scheduler with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Simulator {
    max_instructions: usize,
    policy: HazardPolicy,
}

impl Simulator {
    /// Creates a simulator using the limit and hazard policy from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            max_instructions: config.general.max_instructions,
            policy: config.scheduler.hazard_policy,
        }
    }

    /// Validates and schedules program text.
    pub fn run_source(&self, source: &str) -> Result<SimulationResult, ValidationError> {
        let program = loader::parse_program(source, self.max_instructions)?;
        Ok(self.run_program(program))
    }

    /// Reads, validates and schedules a program file.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<SimulationResult, LoadError> {
        let program = loader::load_program(path, self.max_instructions)?;
        Ok(self.run_program(program))
    }

    /// Schedules an already validated program.
    pub fn run_program(&self, program: Vec<Instruction>) -> SimulationResult {
        let mut scheduler = Scheduler::new(self.policy);
        scheduler.run(program);
        let (instructions, stats) = scheduler.into_parts();
        info!(
            "Scheduled {} instructions in {} cycles ({} stall cycles)",
            stats.instructions,
            stats.cycles,
            stats.stalls_total()
        );
        SimulationResult { instructions, stats }
    }
}
