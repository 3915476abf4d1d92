//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the Mini-RISC field layout and the decoded
//! [`Instruction`] type consumed by the execute stage.
//!
//! Field layout (bit 0 = least significant):
//!
//! | Field  | Bits  |
//! |--------|-------|
//! | opcode | 0-6   |
//! | rd     | 7-11  |
//! | rs1    | 12-16 |
//! | rs2    | 17-21 |
//!
//! Store and branch instructions read their second source register from the `rd` slot.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register index.
pub const REG_MASK: u32 = 0x1F;
/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u32 = 12;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u32 = 17;
/// Bit mask for the upper-immediate pattern used by LUI and AUIPC (bits 12-31).
pub const U_IMM_MASK: u32 = 0xFFFF_F000;
/// Bit position of the 12-bit immediate (bits 20-31).
pub const I_IMM_SHIFT: u32 = 20;
/// Bit position of the 20-bit jump immediate (bits 12-31).
pub const J_IMM_SHIFT: u32 = 12;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Store and branch instructions reuse this slot as their second source register.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 12-16).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 17-21).
    fn rs2(&self) -> usize;

    /// Upper immediate: bits 12-31 in place, low 12 bits zero.
    fn imm_u(&self) -> u32;

    /// Bits 20-31, sign-extended.
    fn imm_i(&self) -> i32;

    /// Bits 12-31, sign-extended and scaled by 2.
    fn imm_j(&self) -> i32;

    /// Bits 20-31, sign-extended and scaled by 2.
    fn imm_b(&self) -> i32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm_u(&self) -> u32 {
        self & U_IMM_MASK
    }

    /// Arithmetic shift of the signed word moves bit 31 into every vacated position.
    #[inline(always)]
    fn imm_i(&self) -> i32 {
        (*self as i32) >> I_IMM_SHIFT
    }

    #[inline(always)]
    fn imm_j(&self) -> i32 {
        ((*self as i32) >> J_IMM_SHIFT).wrapping_mul(2)
    }

    #[inline(always)]
    fn imm_b(&self) -> i32 {
        ((*self as i32) >> I_IMM_SHIFT).wrapping_mul(2)
    }
}

/// A decoded instruction.
///
/// One variant per defined operation plus [`Instruction::Illegal`], so the execute stage is an
/// exhaustive `match`. Immediates are already extracted with the opcode-specific rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `rd = imm`
    Lui {
        /// Destination register.
        rd: usize,
        /// Upper immediate, low 12 bits zero.
        imm: u32,
    },
    /// `rd = pc + imm`
    Auipc {
        /// Destination register.
        rd: usize,
        /// Upper immediate, low 12 bits zero.
        imm: u32,
    },
    /// `rd = pc + 4; pc += offset`
    Jal {
        /// Link register.
        rd: usize,
        /// Signed byte offset from the current PC.
        offset: i32,
    },
    /// `rd = pc + 4; pc = (rs1 + imm) & !1`
    Jalr {
        /// Link register.
        rd: usize,
        /// Base register.
        rs1: usize,
        /// Signed displacement.
        imm: i32,
    },
    /// `if rs1 == rs2 { pc += offset }`
    Beq {
        /// First compared register.
        rs1: usize,
        /// Second compared register (encoded in the `rd` slot).
        rs2: usize,
        /// Signed byte offset from the current PC.
        offset: i32,
    },
    /// `rd = zext(mem8[rs1 + imm])`
    Lbu {
        /// Destination register.
        rd: usize,
        /// Base register.
        rs1: usize,
        /// Signed displacement.
        imm: i32,
    },
    /// `mem8[rs1 + imm] = rs2`
    Sb {
        /// Base register.
        rs1: usize,
        /// Source register (encoded in the `rd` slot).
        rs2: usize,
        /// Signed displacement.
        imm: i32,
    },
    /// `rd = rs1 + imm`
    Addi {
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Signed immediate.
        imm: i32,
    },
    /// Halt.
    Ebreak,
    /// Opcode outside the instruction table.
    Illegal {
        /// The 7-bit opcode field.
        opcode: u8,
    },
}

impl Instruction {
    /// Returns `true` if executing this instruction stops the CPU.
    pub const fn halts(&self) -> bool {
        matches!(self, Self::Ebreak | Self::Illegal { .. })
    }
}
