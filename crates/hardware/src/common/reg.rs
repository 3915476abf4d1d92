//! General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 unsigned 32-bit registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use super::constants::NUM_REGS;

/// Integer register file.
///
/// Register `x0` always reads as zero; writes to it are discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Forces `x0` back to zero.
    #[inline]
    pub fn clear_zero(&mut self) {
        self.regs[0] = 0;
    }

    /// Returns the raw register array, including the backing slot for `x0`.
    pub const fn as_array(&self) -> &[u32; NUM_REGS] {
        &self.regs
    }

    /// Dumps the contents of all registers to stdout, two per line.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
