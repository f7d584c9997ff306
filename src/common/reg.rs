//! Architectural Register Identifiers.
//!
//! The simulated machine exposes sixteen general-purpose registers, `R0`
//! through `R15`. Registers carry no values here: the scheduler only needs
//! their identity to detect dependencies between instructions.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of general-purpose registers.
pub const REG_COUNT: u8 = 16;

const REGISTER_REGEX: &str = r"^[rR](1[0-5]|[0-9])$";

/// A general-purpose register identifier in the range `R0..=R15`.
///
/// Parsing is case-insensitive (`r3` and `R3` name the same register), so
/// comparing two `Register` values is the case-insensitive register-name
/// comparison the hazard detector relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    /// Creates a register from its index.
    ///
    /// # Returns
    ///
    /// `None` if `idx` is not below [`REG_COUNT`].
    pub fn new(idx: u8) -> Option<Self> {
        (idx < REG_COUNT).then_some(Self(idx))
    }

    /// Returns the register index (0-15).
    pub fn index(self) -> u8 {
        self.0
    }
}

impl FromStr for Register {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static REGISTER: Lazy<Regex> = Lazy::new(|| Regex::new(REGISTER_REGEX).unwrap());
        let caps = REGISTER.captures(s).ok_or(())?;
        let idx = caps[1].parse::<u8>().map_err(|_| ())?;
        Register::new(idx).ok_or(())
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
