//! Mini-RISC Instruction Decoder.
//!
//! Turns a raw 32-bit word into an [`Instruction`]. Immediate extraction is opcode-specific:
//!
//! | Opcode | Immediate rule                          |
//! |--------|-----------------------------------------|
//! | LUI, AUIPC | bits 12-31 in place                 |
//! | JAL    | bits 12-31, sign-extended, times 2      |
//! | BEQ    | bits 20-31, sign-extended, times 2      |
//! | JALR, LBU, SB, ADDI | bits 20-31, sign-extended  |
//!
//! SB takes its immediate from bits 20-31 as well, not split around the register fields.

use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes::Opcode;

/// Decodes a 32-bit instruction word.
///
/// Never fails: unknown opcodes decode to [`Instruction::Illegal`].
pub fn decode(inst: u32) -> Instruction {
    match Opcode::from_bits(inst.opcode()) {
        Opcode::Lui => Instruction::Lui {
            rd: inst.rd(),
            imm: inst.imm_u(),
        },
        Opcode::Auipc => Instruction::Auipc {
            rd: inst.rd(),
            imm: inst.imm_u(),
        },
        Opcode::Jal => Instruction::Jal {
            rd: inst.rd(),
            offset: inst.imm_j(),
        },
        Opcode::Jalr => Instruction::Jalr {
            rd: inst.rd(),
            rs1: inst.rs1(),
            imm: inst.imm_i(),
        },
        Opcode::Branch => Instruction::Beq {
            rs1: inst.rs1(),
            rs2: inst.rd(),
            offset: inst.imm_b(),
        },
        Opcode::Load => Instruction::Lbu {
            rd: inst.rd(),
            rs1: inst.rs1(),
            imm: inst.imm_i(),
        },
        Opcode::Store => Instruction::Sb {
            rs1: inst.rs1(),
            rs2: inst.rd(),
            imm: inst.imm_i(),
        },
        Opcode::OpImm => Instruction::Addi {
            rd: inst.rd(),
            rs1: inst.rs1(),
            imm: inst.imm_i(),
        },
        Opcode::System => Instruction::Ebreak,
        Opcode::Unknown(opcode) => Instruction::Illegal { opcode },
    }
}
