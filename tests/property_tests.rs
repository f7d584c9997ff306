//! Randomised invariant checks over whole programs.

use pipeline_sim::common::Register;
use pipeline_sim::core::pipeline::hazards::{self, HazardPolicy};
use pipeline_sim::core::pipeline::scheduler::Scheduler;
use pipeline_sim::core::Stage;
use pipeline_sim::isa::{Instruction, Opcode};
use proptest::prelude::*;

fn register() -> impl Strategy<Value = Register> {
    (0u8..16).prop_map(|i| Register::new(i).unwrap())
}

fn instruction() -> impl Strategy<Value = Instruction> {
    (
        prop::sample::select(Opcode::ALL.to_vec()),
        register(),
        register(),
        register(),
    )
        .prop_map(|(op, rd, rs1, rs2)| Instruction::new(op, rd, rs1, rs2))
}

fn program() -> impl Strategy<Value = Vec<Instruction>> {
    prop::collection::vec(instruction(), 1..=20)
}

fn hazard_policy() -> impl Strategy<Value = HazardPolicy> {
    prop_oneof![Just(HazardPolicy::Last), Just(HazardPolicy::Max)]
}

proptest! {
    /// Every schedule ends in Writeback and contains each stage once, in order.
    #[test]
    fn prop_stages_in_order(program in program(), policy in hazard_policy()) {
        let mut scheduler = Scheduler::new(policy);
        let out = scheduler.run(program);

        for (idx, instr) in out.iter().enumerate() {
            prop_assert!(instr.is_retired());
            let real: Vec<Stage> = instr
                .schedule()
                .iter()
                .copied()
                .filter(|s| s.is_pipeline_stage())
                .collect();
            prop_assert_eq!(real, Stage::PIPELINE.to_vec());

            let idle = instr.schedule().iter().take_while(|s| **s == Stage::Idle).count();
            prop_assert_eq!(idle, idx);
            prop_assert_eq!(instr.stage_at(idx), Some(Stage::Fetch));
        }
    }

    /// No two instructions hold the same stage in the same cycle.
    #[test]
    fn prop_single_occupancy(program in program(), policy in hazard_policy()) {
        let mut scheduler = Scheduler::new(policy);
        let out = scheduler.run(program);
        let cycles = out.iter().map(Instruction::cycles).max().unwrap_or(0);

        for cycle in 0..cycles {
            for stage in Stage::PIPELINE {
                let holders = out.iter().filter(|i| i.stage_at(cycle) == Some(stage)).count();
                prop_assert!(holders <= 1, "{:?} held by {} instructions at cycle {}", stage, holders, cycle);
            }
        }
    }

    /// Earlier instructions enter every stage before later ones.
    #[test]
    fn prop_program_order_per_stage(program in program(), policy in hazard_policy()) {
        let mut scheduler = Scheduler::new(policy);
        let out = scheduler.run(program);

        for stage in Stage::PIPELINE {
            let cycles: Vec<usize> = out.iter().map(|i| i.cycle_of(stage).unwrap()).collect();
            prop_assert!(cycles.windows(2).all(|w| w[0] < w[1]), "{:?}: {:?}", stage, cycles);
        }
    }

    /// Schedule lengths grow in program order, so the two hazard policies agree.
    #[test]
    fn prop_policies_agree(program in program()) {
        let mut last = Scheduler::new(HazardPolicy::Last);
        last.run(program.clone());
        let mut max = Scheduler::new(HazardPolicy::Max);
        max.run(program);

        let lengths: Vec<usize> = last.pipelined().iter().map(Instruction::cycles).collect();
        prop_assert!(lengths.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(last.pipelined(), max.pipelined());
    }

    /// Stalls after Fetch cover the last conflicting producer's remaining cycles.
    #[test]
    fn prop_fetch_stall_formula(program in program(), candidate in instruction()) {
        let mut scheduler = Scheduler::new(HazardPolicy::Last);
        scheduler.run(program);
        let n = scheduler.pipelined().len();

        let expected = scheduler
            .pipelined()
            .iter()
            .filter(|prior| hazards::classify(&candidate, prior).is_some())
            .last()
            .map_or(0, |prior| prior.cycles().saturating_sub(n + 1));

        let hazard_stalls = scheduler.stats().stalls_hazard;
        scheduler.schedule_next(candidate);
        prop_assert_eq!(scheduler.stats().stalls_hazard - hazard_stalls, expected as u64);

        let scheduled = &scheduler.pipelined()[n];
        let after_fetch = scheduled.schedule()[n + 1..]
            .iter()
            .take_while(|s| **s == Stage::Stall)
            .count();
        prop_assert!(after_fetch >= expected);
    }

    /// Statistics agree with the schedules they describe.
    #[test]
    fn prop_stats_consistent(program in program()) {
        let mut scheduler = Scheduler::new(HazardPolicy::Last);
        scheduler.run(program);
        let stats = scheduler.stats();
        let out = scheduler.pipelined();

        prop_assert_eq!(stats.instructions as usize, out.len());
        prop_assert_eq!(stats.cycles as usize, out.last().unwrap().cycles());
        let stalls: usize = out.iter().map(Instruction::stall_count).sum();
        prop_assert_eq!(stats.stalls_total() as usize, stalls);
    }
}
