//! Instruction Decode Properties.
//!
//! Verifies that `decode()` applies the opcode-specific immediate rule for every defined opcode,
//! routes the second source register through the `rd` slot for BEQ and SB, and classifies every
//! other opcode as illegal.

use minirisc_core::isa::decode::decode;
use minirisc_core::isa::instruction::{Instruction, InstructionBits};
use minirisc_core::isa::opcodes::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::*;

const DEFINED: [u32; 9] = [
    OP_LUI, OP_AUIPC, OP_JAL, OP_JALR, OP_BRANCH, OP_LOAD, OP_STORE, OP_IMM, OP_SYSTEM,
];

// ──────────────────────────────────────────────────────────
// Defined opcodes
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(lui(12, 0x1000_0000), Instruction::Lui { rd: 12, imm: 0x1000_0000 })]
#[case(lui(1, 0xFFFF_F000), Instruction::Lui { rd: 1, imm: 0xFFFF_F000 })]
#[case(auipc(3, 0x0000_1000), Instruction::Auipc { rd: 3, imm: 0x1000 })]
#[case(jal(1, 10), Instruction::Jal { rd: 1, offset: 20 })]
#[case(jal(0, -2), Instruction::Jal { rd: 0, offset: -4 })]
#[case(jalr(0, 1, 0), Instruction::Jalr { rd: 0, rs1: 1, imm: 0 })]
#[case(jalr(5, 6, -8), Instruction::Jalr { rd: 5, rs1: 6, imm: -8 })]
#[case(beq(1, 0, 8), Instruction::Beq { rs1: 1, rs2: 0, offset: 16 })]
#[case(beq(2, 3, -4), Instruction::Beq { rs1: 2, rs2: 3, offset: -8 })]
#[case(lbu(8, 6, 3), Instruction::Lbu { rd: 8, rs1: 6, imm: 3 })]
#[case(sb(7, 6, -1), Instruction::Sb { rs1: 6, rs2: 7, imm: -1 })]
#[case(addi(10, 1, 56), Instruction::Addi { rd: 10, rs1: 1, imm: 56 })]
#[case(addi(1, 0, -2048), Instruction::Addi { rd: 1, rs1: 0, imm: -2048 })]
#[case(ebreak(), Instruction::Ebreak)]
fn decodes_defined_opcodes(#[case] word: u32, #[case] expected: Instruction) {
    assert_eq!(decode(word), expected);
}

#[test]
fn ebreak_ignores_upper_bits() {
    assert_eq!(decode(0xFFFF_FF80 | OP_SYSTEM), Instruction::Ebreak);
}

/// SB's displacement lives at bits 20-31, like every other 12-bit immediate.
#[test]
fn store_immediate_comes_from_top_bits() {
    // Bits 7-11 (the rs2 slot) and bits 12-16 carry registers, so a split-field layout would
    // produce a different displacement.
    let word = 0x7FF0_0000 | 4 << 12 | 9 << 7 | OP_STORE;
    assert_eq!(
        decode(word),
        Instruction::Sb {
            rs1: 4,
            rs2: 9,
            imm: 2047
        }
    );
}

#[test]
fn store_immediate_is_sign_extended() {
    let word = 0x8000_0000 | 1 << 12 | 2 << 7 | OP_STORE;
    assert_eq!(
        decode(word),
        Instruction::Sb {
            rs1: 1,
            rs2: 2,
            imm: -2048
        }
    );
}

// ──────────────────────────────────────────────────────────
// Illegal opcodes
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(0x00)]
#[case(0x33)]
#[case(0x6F)]
#[case(0x7F)]
fn undefined_opcodes_are_illegal(#[case] opcode: u32) {
    assert_eq!(
        decode(0xABCD_E000 | opcode),
        Instruction::Illegal {
            opcode: opcode as u8
        }
    );
}

#[test]
fn opcode_enum_round_trips_every_value() {
    for bits in 0..128u32 {
        let op = Opcode::from_bits(bits);
        assert_eq!(u32::from(op.bits()), bits);
        assert_eq!(
            matches!(op, Opcode::Unknown(_)),
            !DEFINED.contains(&bits),
            "opcode {bits:#04x}"
        );
    }
}

#[test]
fn only_ebreak_and_illegal_halt() {
    assert!(decode(ebreak()).halts());
    assert!(decode(0x7F).halts());
    assert!(!decode(addi(1, 1, 1)).halts());
    assert!(!decode(jal(0, 0)).halts());
}

// ──────────────────────────────────────────────────────────
// Field extraction properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn upper_immediate_low_bits_always_zero(word in any::<u32>()) {
        prop_assert_eq!(word.imm_u() & 0xFFF, 0);
        prop_assert_eq!(word.imm_u() >> 12, word >> 12);
    }

    #[test]
    fn i_immediate_sign_extends_bit_31(word in any::<u32>()) {
        let imm = word.imm_i();
        prop_assert!((-2048..=2047).contains(&imm));
        prop_assert_eq!(imm < 0, word >> 31 == 1);
        prop_assert_eq!((imm as u32) & 0xFFF, word >> 20);
    }

    #[test]
    fn jump_and_branch_offsets_are_even(word in any::<u32>()) {
        prop_assert_eq!(word.imm_j() % 2, 0);
        prop_assert_eq!(word.imm_b() % 2, 0);
        prop_assert_eq!(word.imm_b(), word.imm_i() * 2);
    }

    #[test]
    fn register_fields_in_range(word in any::<u32>()) {
        prop_assert!(word.rd() < 32);
        prop_assert!(word.rs1() < 32);
        prop_assert!(word.rs2() < 32);
        prop_assert_eq!(word.opcode(), word & 0x7F);
    }

    #[test]
    fn decode_never_panics_and_illegal_matches_table(word in any::<u32>()) {
        let illegal = matches!(decode(word), Instruction::Illegal { .. });
        prop_assert_eq!(illegal, !DEFINED.contains(&(word & 0x7F)));
    }
}
