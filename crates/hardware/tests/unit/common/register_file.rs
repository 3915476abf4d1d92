//! Register File Tests.

use minirisc_core::common::RegisterFile;
use proptest::prelude::*;

#[test]
fn new_register_file_is_zeroed() {
    let regs = RegisterFile::new();
    assert!(regs.as_array().iter().all(|&r| r == 0));
}

#[test]
fn write_then_read() {
    let mut regs = RegisterFile::new();
    regs.write(5, 0xDEAD_BEEF);
    regs.write(31, 7);
    assert_eq!(regs.read(5), 0xDEAD_BEEF);
    assert_eq!(regs.read(31), 7);
}

#[test]
fn x0_write_is_discarded() {
    let mut regs = RegisterFile::new();
    regs.write(0, 0xFFFF_FFFF);
    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.as_array()[0], 0);
}

#[test]
fn clear_zero_keeps_other_registers() {
    let mut regs = RegisterFile::new();
    regs.write(1, 1);
    regs.clear_zero();
    assert_eq!(regs.read(1), 1);
    assert_eq!(regs.read(0), 0);
}

proptest! {
    #[test]
    fn nonzero_registers_hold_any_value(idx in 1usize..32, val in any::<u32>()) {
        let mut regs = RegisterFile::new();
        regs.write(idx, val);
        prop_assert_eq!(regs.read(idx), val);
    }

    #[test]
    fn x0_reads_zero_after_any_write(val in any::<u32>()) {
        let mut regs = RegisterFile::new();
        regs.write(0, val);
        prop_assert_eq!(regs.read(0), 0);
    }
}
