//! Time Diagram Rendering.
//!
//! Formats scheduled instructions for output. The text form is one line per
//! instruction, the instruction followed by a tab and its schedule symbols
//! separated by spaces, and a final end-marker line:
//!
//! ```text
//! add R1, R2, R3	F D E M W
//! sub R4, R1, R5	- F S S S D E M W
//! <end>
//! ```

use serde::Serialize;

use crate::core::pipeline::stage::Stage;
use crate::isa::Instruction;
use crate::stats::SimStats;

#[derive(Serialize)]
struct JsonReport<'a> {
    instructions: Vec<JsonRow<'a>>,
    stats: &'a SimStats,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    index: usize,
    instruction: String,
    schedule: &'a [Stage],
    cycles: usize,
}

/// Renders one time diagram row, without a trailing newline.
pub fn render_row(instr: &Instruction) -> String {
    let symbols: Vec<String> = instr.schedule().iter().map(Stage::to_string).collect();
    format!("{instr}\t{}", symbols.join(" "))
}

/// Renders the full text time diagram, ending with `end_marker` on its own line.
pub fn render_text(instructions: &[Instruction], end_marker: &str) -> String {
    let mut diagram = String::new();
    for instr in instructions {
        diagram.push_str(&render_row(instr));
        diagram.push('\n');
    }
    diagram.push_str(end_marker);
    diagram
}

/// Renders the schedules and statistics as pretty-printed JSON.
pub fn render_json(instructions: &[Instruction], stats: &SimStats) -> serde_json::Result<String> {
    let report = JsonReport {
        instructions: instructions
            .iter()
            .enumerate()
            .map(|(index, instr)| JsonRow {
                index,
                instruction: instr.to_string(),
                schedule: instr.schedule(),
                cycles: instr.cycles(),
            })
            .collect(),
        stats,
    };
    serde_json::to_string_pretty(&report)
}
