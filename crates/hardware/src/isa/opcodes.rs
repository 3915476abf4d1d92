//! Mini-RISC opcode table.
//!
//! Opcodes occupy bits 0-6 of every instruction word. Only nine values are defined; every other
//! value decodes to [`Opcode::Unknown`].

/// Load Upper Immediate.
pub const OP_LUI: u32 = 0x01;
/// Add Upper Immediate to PC.
pub const OP_AUIPC: u32 = 0x02;
/// Jump And Link.
pub const OP_JAL: u32 = 0x03;
/// Jump And Link Register.
pub const OP_JALR: u32 = 0x04;
/// Branch if equal.
pub const OP_BRANCH: u32 = 0x05;
/// Load byte, zero-extended.
pub const OP_LOAD: u32 = 0x0E;
/// Store byte.
pub const OP_STORE: u32 = 0x10;
/// Add immediate.
pub const OP_IMM: u32 = 0x13;
/// Breakpoint / halt.
pub const OP_SYSTEM: u32 = 0x27;

/// The opcode space as a closed set: one variant per defined opcode plus `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `0x01`
    Lui,
    /// `0x02`
    Auipc,
    /// `0x03`
    Jal,
    /// `0x04`
    Jalr,
    /// `0x05`
    Branch,
    /// `0x0E`
    Load,
    /// `0x10`
    Store,
    /// `0x13`
    OpImm,
    /// `0x27`
    System,
    /// Any other 7-bit value.
    Unknown(u8),
}

impl Opcode {
    /// Classifies a 7-bit opcode value. Bits above bit 6 are ignored.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0x7F {
            OP_LUI => Self::Lui,
            OP_AUIPC => Self::Auipc,
            OP_JAL => Self::Jal,
            OP_JALR => Self::Jalr,
            OP_BRANCH => Self::Branch,
            OP_LOAD => Self::Load,
            OP_STORE => Self::Store,
            OP_IMM => Self::OpImm,
            OP_SYSTEM => Self::System,
            other => Self::Unknown(other as u8),
        }
    }

    /// Returns the 7-bit encoding of this opcode.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Lui => OP_LUI as u8,
            Self::Auipc => OP_AUIPC as u8,
            Self::Jal => OP_JAL as u8,
            Self::Jalr => OP_JALR as u8,
            Self::Branch => OP_BRANCH as u8,
            Self::Load => OP_LOAD as u8,
            Self::Store => OP_STORE as u8,
            Self::OpImm => OP_IMM as u8,
            Self::System => OP_SYSTEM as u8,
            Self::Unknown(bits) => bits,
        }
    }
}
