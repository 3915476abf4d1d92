//! Instruction Disassembler for Mini-RISC.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use minirisc_core::isa::disasm::disassemble;
//! let text = disassemble(0x0380_a513); // ADDI x10, x10, 56
//! assert_eq!(text, "addi x10, x10, 56");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Disassembles a 32-bit instruction word.
///
/// Registers are printed by index (`x0`-`x31`). Upper immediates are shown shifted down by 12,
/// branch and jump offsets as signed byte offsets, and unknown encodings as `unknown 0x..`.
pub fn disassemble(inst: u32) -> String {
    format_instruction(&decode(inst))
}

/// Formats an already decoded instruction.
pub fn format_instruction(inst: &Instruction) -> String {
    match *inst {
        Instruction::Lui { rd, imm } => format!("lui x{rd}, {:#x}", imm >> 12),
        Instruction::Auipc { rd, imm } => format!("auipc x{rd}, {:#x}", imm >> 12),
        Instruction::Jal { rd, offset } => format!("jal x{rd}, {offset}"),
        Instruction::Jalr { rd, rs1, imm } => format!("jalr x{rd}, {imm}(x{rs1})"),
        Instruction::Beq { rs1, rs2, offset } => format!("beq x{rs1}, x{rs2}, {offset}"),
        Instruction::Lbu { rd, rs1, imm } => format!("lbu x{rd}, {imm}(x{rs1})"),
        Instruction::Sb { rs1, rs2, imm } => format!("sb x{rs2}, {imm}(x{rs1})"),
        Instruction::Addi { rd, rs1, imm } => format!("addi x{rd}, x{rs1}, {imm}"),
        Instruction::Ebreak => "ebreak".to_string(),
        Instruction::Illegal { opcode } => format!("unknown {opcode:#04x}"),
    }
}
