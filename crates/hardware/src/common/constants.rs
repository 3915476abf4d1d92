//! Global System Constants.
//!
//! This module defines system-wide constants used across the emulator. It includes:
//! 1. **Memory Map:** Default RAM and output-port placement.
//! 2. **Instruction Constants:** Instruction width and register count.

/// Default base address of main RAM.
pub const RAM_BASE: u32 = 0x8000_0000;

/// Default size of main RAM (32 MiB).
pub const RAM_SIZE: usize = 32 * 1024 * 1024;

/// Default base address of the character output port.
pub const CHAROUT_BASE: u32 = 0x1000_0000;

/// Size of the character output port window in bytes (three 32-bit registers).
pub const CHAROUT_SIZE: u32 = 12;

/// Size of one instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;
