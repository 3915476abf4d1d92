//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the Mini-RISC opcode table, field extraction, decoding, and disassembly.

/// Instruction decoding for every defined opcode.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded instruction type.
pub mod instruction;

/// Opcode constants and the closed opcode enum.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits};
pub use opcodes::Opcode;
