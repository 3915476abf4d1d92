//! Character output port.
//!
//! A write-only device with three 32-bit registers:
//!
//! | Offset | Register | Effect of a write                                  |
//! |--------|----------|----------------------------------------------------|
//! | `0x0`  | CHAR     | low byte is written out as a raw character         |
//! | `0x4`  | INT      | value is printed as a signed decimal               |
//! | `0x8`  | HEX      | value is printed as lowercase hex, no leading zeros |
//!
//! Every write is flushed before it returns, so program output stays ordered with respect to
//! diagnostics on the other stream even if the program stops right afterwards.
//!
//! A byte write to CHAR prints that byte; other byte writes and word writes to other offsets are
//! accepted and ignored. Halfword writes and all reads are refused.

use std::fmt;
use std::io::{self, Write};

use crate::common::constants::CHAROUT_SIZE;
use crate::common::error::AccessDenied;
use crate::soc::traits::{Device, DeviceResult};

/// Offset of the character register.
pub const REG_CHAR: u32 = 0x0;
/// Offset of the signed decimal register.
pub const REG_INT: u32 = 0x4;
/// Offset of the hexadecimal register.
pub const REG_HEX: u32 = 0x8;

/// Memory-mapped character output device.
pub struct CharOut {
    base_addr: u32,
    out: Box<dyn Write + Send>,
}

impl CharOut {
    /// Creates a port at `base_addr` writing to stdout.
    pub fn new(base_addr: u32) -> Self {
        Self::with_writer(base_addr, Box::new(io::stdout()))
    }

    /// Creates a port at `base_addr` writing to an arbitrary sink.
    pub fn with_writer(base_addr: u32, out: Box<dyn Write + Send>) -> Self {
        Self { base_addr, out }
    }

    fn emit(&mut self, bytes: &[u8]) {
        if let Err(e) = self.out.write_all(bytes).and_then(|()| self.out.flush()) {
            tracing::error!("output port write failed: {e}");
        }
    }
}

impl fmt::Debug for CharOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharOut")
            .field("base_addr", &format_args!("{:#010x}", self.base_addr))
            .finish_non_exhaustive()
    }
}

impl Device for CharOut {
    fn name(&self) -> &str {
        "CHAROUT"
    }

    fn address_range(&self) -> (u32, u32) {
        (self.base_addr, CHAROUT_SIZE)
    }

    fn read_u8(&mut self, _offset: u32) -> DeviceResult<u8> {
        Err(AccessDenied)
    }

    fn read_u16(&mut self, _offset: u32) -> DeviceResult<u16> {
        Err(AccessDenied)
    }

    fn read_u32(&mut self, _offset: u32) -> DeviceResult<u32> {
        Err(AccessDenied)
    }

    fn write_u8(&mut self, offset: u32, val: u8) -> DeviceResult<()> {
        if offset == REG_CHAR {
            self.emit(&[val]);
        }
        Ok(())
    }

    fn write_u16(&mut self, _offset: u32, _val: u16) -> DeviceResult<()> {
        Err(AccessDenied)
    }

    fn write_u32(&mut self, offset: u32, val: u32) -> DeviceResult<()> {
        match offset {
            REG_CHAR => self.emit(&[val as u8]),
            REG_INT => self.emit((val as i32).to_string().as_bytes()),
            REG_HEX => self.emit(format!("{val:x}").as_bytes()),
            _ => {}
        }
        Ok(())
    }
}
