//! Halt conditions.
//!
//! A halted CPU records why it stopped. The reason is a plain value returned from
//! [`super::Cpu::run`], so callers and tests never have to scrape diagnostic output.

use std::fmt;

use crate::common::error::Fault;

/// Why the fetch-execute loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// An EBREAK instruction executed at `pc`.
    Breakpoint {
        /// Address of the EBREAK instruction.
        pc: u32,
    },
    /// The word at `pc` carried an opcode outside the instruction table.
    IllegalOpcode {
        /// The 7-bit opcode field.
        opcode: u8,
        /// Address of the offending instruction.
        pc: u32,
    },
}

impl HaltReason {
    /// Address of the instruction that stopped the CPU.
    pub const fn pc(&self) -> u32 {
        match *self {
            Self::Breakpoint { pc } | Self::IllegalOpcode { pc, .. } => pc,
        }
    }

    /// The decode fault behind this halt, if it was not a clean EBREAK.
    pub const fn fault(&self) -> Option<Fault> {
        match *self {
            Self::Breakpoint { .. } => None,
            Self::IllegalOpcode { opcode, pc } => Some(Fault::IllegalOpcode { opcode, pc }),
        }
    }
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakpoint { pc } => write!(f, "EBREAK at {pc:#010x}"),
            Self::IllegalOpcode { opcode, pc } => {
                write!(f, "illegal opcode {opcode:#04x} at {pc:#010x}")
            }
        }
    }
}
