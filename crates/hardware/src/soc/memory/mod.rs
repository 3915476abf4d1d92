//! Physical System Memory (DRAM).
//!
//! This module implements the main system memory device. It provides:
//! 1. **Buffer:** Zero-initialized backing storage (`DramBuffer`) for RAM contents.
//! 2. **Memory:** Device implementation that maps the buffer at a physical base address.
//!
//! Multi-byte accesses are little-endian and may be unaligned. An access whose last byte falls
//! past the end of RAM is refused as a whole; RAM is never updated partially.

/// DRAM buffer implementation for raw byte storage.
pub mod buffer;

use self::buffer::DramBuffer;
use crate::common::error::{AccessDenied, Result};
use crate::soc::traits::{Device, DeviceResult};

/// System Memory structure.
#[derive(Debug)]
pub struct Memory {
    /// Backing storage.
    buffer: DramBuffer,
    /// The base physical address where this memory is mapped.
    base_addr: u32,
}

impl Memory {
    /// Creates a new Memory instance over an existing buffer.
    ///
    /// # Arguments
    ///
    /// * `buffer` - DRAM buffer.
    /// * `base_addr` - Starting physical address.
    pub const fn new(buffer: DramBuffer, base_addr: u32) -> Self {
        Self { buffer, base_addr }
    }

    /// Allocates `size` bytes of zeroed RAM at `base_addr`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::Error::RamAllocation`] if the buffer cannot be allocated.
    pub fn with_size(size: usize, base_addr: u32) -> Result<Self> {
        Ok(Self::new(DramBuffer::new(size)?, base_addr))
    }

    /// Copies as much of `data` as fits into memory starting at `offset`.
    ///
    /// Bytes past the end of RAM are dropped. Returns the number of bytes written.
    pub fn load(&mut self, data: &[u8], offset: usize) -> usize {
        let room = self.buffer.len().saturating_sub(offset);
        let count = data.len().min(room);
        if count == 0 {
            return 0;
        }
        match self.buffer.write_slice(offset, &data[..count]) {
            Some(()) => count,
            None => 0,
        }
    }

    /// Returns the RAM contents.
    pub fn as_slice(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    fn read_array<const N: usize>(&self, offset: u32) -> DeviceResult<[u8; N]> {
        self.buffer
            .read_slice(offset as usize, N)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(AccessDenied)
    }
}

impl Device for Memory {
    fn name(&self) -> &str {
        "DRAM"
    }

    fn address_range(&self) -> (u32, u32) {
        (self.base_addr, self.buffer.len() as u32)
    }

    fn read_u8(&mut self, offset: u32) -> DeviceResult<u8> {
        self.buffer.read_u8(offset as usize).ok_or(AccessDenied)
    }

    fn read_u16(&mut self, offset: u32) -> DeviceResult<u16> {
        self.read_array(offset).map(u16::from_le_bytes)
    }

    fn read_u32(&mut self, offset: u32) -> DeviceResult<u32> {
        self.read_array(offset).map(u32::from_le_bytes)
    }

    fn write_u8(&mut self, offset: u32, val: u8) -> DeviceResult<()> {
        self.buffer.write_u8(offset as usize, val).ok_or(AccessDenied)
    }

    fn write_u16(&mut self, offset: u32, val: u16) -> DeviceResult<()> {
        self.buffer
            .write_slice(offset as usize, &val.to_le_bytes())
            .ok_or(AccessDenied)
    }

    fn write_u32(&mut self, offset: u32, val: u32) -> DeviceResult<()> {
        self.buffer
            .write_slice(offset as usize, &val.to_le_bytes())
            .ok_or(AccessDenied)
    }

    fn as_memory_mut(&mut self) -> Option<&mut Memory> {
        Some(self)
    }
}
