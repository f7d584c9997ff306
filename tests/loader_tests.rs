//! Tests for program text validation.

use pipeline_sim::common::{Register, ValidationError};
use pipeline_sim::isa::Opcode;
use pipeline_sim::sim::loader::{parse_instruction, parse_program};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Tests that opcodes and registers are normalised.
#[test]
fn test_parse_normalises_case() {
    let instr = parse_instruction("ADD r1, R2, r15", 1).unwrap();
    assert_eq!(instr.opcode, Opcode::Add);
    assert_eq!(instr.rd, Register::new(1).unwrap());
    assert_eq!(instr.rs2, Register::new(15).unwrap());
    assert_eq!(instr.to_string(), "add R1, R2, R15");
    assert!(instr.schedule().is_empty());
}

/// Tests that commas are optional separators.
#[rstest]
#[case("sub R4, R1, R5")]
#[case("sub R4 R1 R5")]
#[case("sub R4,R1,R5")]
#[case("  sub   R4 ,  R1 , R5  ")]
fn test_parse_separators(#[case] text: &str) {
    let instr = parse_instruction(text, 1).unwrap();
    assert_eq!(instr.to_string(), "sub R4, R1, R5");
}

/// Tests lines that do not split into four tokens.
#[rstest]
#[case("add R1, R2")]
#[case("add R1, R2, R3, R4")]
#[case("add")]
fn test_malformed_instruction(#[case] text: &str) {
    assert_eq!(
        parse_instruction(text, 3),
        Err(ValidationError::MalformedInstruction {
            line: 3,
            text: text.to_string(),
        })
    );
}

/// Tests rejection of unsupported opcodes.
#[rstest]
#[case("lw R1, R2, R3", "lw")]
#[case("addi R1, R2, R3", "addi")]
#[case("beq R1, R2, R3", "beq")]
fn test_unknown_opcode(#[case] text: &str, #[case] opcode: &str) {
    assert_eq!(
        parse_instruction(text, 7),
        Err(ValidationError::UnknownOpcode {
            line: 7,
            opcode: opcode.to_string(),
        })
    );
}

/// Tests rejection of registers outside R0-R15 in every operand position.
#[rstest]
#[case("add R16, R2, R3", "R16")]
#[case("add R1, X2, R3", "X2")]
#[case("add R1, R2, R99", "R99")]
#[case("add R1, R2, R01", "R01")]
#[case("add R1, R2, 3", "3")]
fn test_invalid_register(#[case] text: &str, #[case] register: &str) {
    assert_eq!(
        parse_instruction(text, 2),
        Err(ValidationError::InvalidRegister {
            line: 2,
            register: register.to_string(),
        })
    );
}

/// Tests that blank and comment lines are skipped but still numbered.
#[test]
fn test_blank_and_comment_lines() {
    let source = "// header\n\nadd R1, R2, R3\n   \nsub R4, R1, R5 // uses R1\n";
    let program = parse_program(source, 20).unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program[1].to_string(), "sub R4, R1, R5");

    let err = parse_program("// header\n\nadd R1, R2\n", 20).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MalformedInstruction {
            line: 3,
            text: "add R1, R2".to_string(),
        }
    );
}

/// Tests that a program without instructions is rejected.
#[rstest]
#[case("")]
#[case("\n\n  \n")]
#[case("// nothing here\n")]
fn test_empty_input(#[case] source: &str) {
    assert_eq!(parse_program(source, 20), Err(ValidationError::EmptyInput));
}

/// Tests the instruction limit at and above the boundary.
#[test]
fn test_instruction_limit() {
    let line = "add R1, R2, R3\n";
    assert_eq!(parse_program(&line.repeat(20), 20).unwrap().len(), 20);

    assert_eq!(
        parse_program(&line.repeat(21), 20),
        Err(ValidationError::TooManyInstructions {
            count: 21,
            limit: 20,
        })
    );
}

/// Tests that the limit is checked before individual lines.
#[test]
fn test_limit_checked_before_lines() {
    let source = "bogus\n".repeat(4);
    assert_eq!(
        parse_program(&source, 3),
        Err(ValidationError::TooManyInstructions { count: 4, limit: 3 })
    );
}

/// Tests error messages.
#[test]
fn test_error_display() {
    let err = ValidationError::InvalidRegister {
        line: 4,
        register: "R16".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("line 4"));
    assert!(msg.contains("R16"));

    let err = ValidationError::TooManyInstructions { count: 21, limit: 20 };
    assert!(err.to_string().contains("21"));
    assert!(err.to_string().contains("20"));
}
