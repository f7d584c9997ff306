//! Arithmetic opcodes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The four register-register arithmetic operations of the ISA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opcode {
    /// `add rd, rs1, rs2`
    Add,
    /// `sub rd, rs1, rs2`
    Sub,
    /// `mul rd, rs1, rs2`
    Mul,
    /// `div rd, rs1, rs2`
    Div,
}

impl Opcode {
    /// All opcodes in encoding order.
    pub const ALL: [Opcode; 4] = [Opcode::Add, Opcode::Sub, Opcode::Mul, Opcode::Div];

    /// Returns the lowercase mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
        }
    }
}

impl FromStr for Opcode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
