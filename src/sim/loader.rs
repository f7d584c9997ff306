//! Program Loader and Validation.
//!
//! This module turns program text into a validated list of instructions. It
//! is the only place malformed input is detected: the scheduler assumes
//! every instruction it receives is well-formed and the program is within
//! the instruction limit.
//!
//! Each instruction line has the form `opcode operand1, operand2, operand3`.
//! Commas are treated as whitespace, blank lines are skipped, and anything
//! after `//` on a line is a comment.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::common::{LoadError, Register, ValidationError};
use crate::isa::{Instruction, Opcode};

const LINE_COMMENT: &str = "//";

/// Reads a program file and validates it.
pub fn load_program(path: impl AsRef<Path>, max_instructions: usize) -> Result<Vec<Instruction>, LoadError> {
    let path = path.as_ref();
    info!("Loading program file {}", path.display());
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_program(&source, max_instructions)?)
}

/// Validates program text and decodes it into instructions in program order.
///
/// The instruction count is checked against `max_instructions` before any
/// line is decoded, so an oversized program is rejected as such even if
/// some of its lines are also malformed.
pub fn parse_program(source: &str, max_instructions: usize) -> Result<Vec<Instruction>, ValidationError> {
    let lines: Vec<(usize, &str)> = instruction_lines(source).collect();

    if lines.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if lines.len() > max_instructions {
        return Err(ValidationError::TooManyInstructions {
            count: lines.len(),
            limit: max_instructions,
        });
    }

    lines
        .into_iter()
        .map(|(line_num, text)| parse_instruction(text, line_num))
        .collect()
}

/// Decodes a single instruction line.
///
/// `line_num` is only used for error reporting.
pub fn parse_instruction(text: &str, line_num: usize) -> Result<Instruction, ValidationError> {
    let cleaned = text.replace(',', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let [opcode, rd, rs1, rs2] = tokens[..] else {
        return Err(ValidationError::MalformedInstruction {
            line: line_num,
            text: text.trim().to_string(),
        });
    };

    let opcode = opcode
        .parse::<Opcode>()
        .map_err(|()| ValidationError::UnknownOpcode {
            line: line_num,
            opcode: opcode.to_string(),
        })?;

    let reg = |operand: &str| {
        operand
            .parse::<Register>()
            .map_err(|()| ValidationError::InvalidRegister {
                line: line_num,
                register: operand.to_string(),
            })
    };

    let instr = Instruction::new(opcode, reg(rd)?, reg(rs1)?, reg(rs2)?);
    debug!("Line {line_num}: Parsed `{}` as {instr}", text.trim());
    Ok(instr)
}

/// Yields `(line number, code)` for every line that holds an instruction.
fn instruction_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.lines().enumerate().filter_map(|(i, line)| {
        let code = match line.find(LINE_COMMENT) {
            Some(pos) => &line[..pos],
            None => line,
        };
        let code = code.trim();
        (!code.is_empty()).then_some((i + 1, code))
    })
}
