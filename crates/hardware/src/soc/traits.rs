//! Bus-facing traits.
//!
//! This module defines the two seams of the memory system:
//! 1. **`Device`:** Implemented by every component attached to the interconnect (RAM, output port).
//!    Offsets are device-relative; a device that cannot serve an access returns [`AccessDenied`]
//!    and the interconnect turns that into a reported fault.
//! 2. **`MemoryBus`:** The capability the CPU depends on. Any backend (the real interconnect, a
//!    mock, a tracing wrapper) can drive the CPU without touching its logic.

use crate::common::diag::log_fault;
use crate::common::error::{AccessDenied, Fault};
use crate::soc::memory::Memory;

/// Result of a device access.
pub type DeviceResult<T> = Result<T, AccessDenied>;

/// Trait for memory-mapped devices attached to the system bus.
pub trait Device: Send {
    /// Returns a short name for this device (e.g., `"DRAM"`, `"CHAROUT"`).
    fn name(&self) -> &str;
    /// Returns (base_address, size_in_bytes) for this device's region.
    fn address_range(&self) -> (u32, u32);
    /// Reads one byte at the given device-relative offset.
    fn read_u8(&mut self, offset: u32) -> DeviceResult<u8>;
    /// Reads two bytes (little-endian) at the given offset.
    fn read_u16(&mut self, offset: u32) -> DeviceResult<u16>;
    /// Reads four bytes (little-endian) at the given offset.
    fn read_u32(&mut self, offset: u32) -> DeviceResult<u32>;
    /// Writes one byte at the given offset.
    fn write_u8(&mut self, offset: u32, val: u8) -> DeviceResult<()>;
    /// Writes two bytes (little-endian) at the given offset.
    fn write_u16(&mut self, offset: u32, val: u16) -> DeviceResult<()>;
    /// Writes four bytes (little-endian) at the given offset.
    fn write_u32(&mut self, offset: u32, val: u32) -> DeviceResult<()>;

    /// Returns `true` if `addr` lies inside this device's region.
    fn contains(&self, addr: u32) -> bool {
        let (base, size) = self.address_range();
        addr >= base && u64::from(addr) < u64::from(base) + u64::from(size)
    }

    /// Returns a mutable reference as `Memory` if this device is RAM; otherwise `None`.
    fn as_memory_mut(&mut self) -> Option<&mut Memory> {
        None
    }
}

/// Byte-addressed little-endian memory as seen by the CPU.
///
/// Accesses never fail from the caller's point of view: implementations report faults on their
/// own and return zero for failed reads. Faults the CPU raises itself go through
/// [`MemoryBus::report_fault`] so they reach the same destination.
pub trait MemoryBus {
    /// Reads one byte.
    fn read_u8(&mut self, addr: u32) -> u8;
    /// Reads a little-endian halfword; alignment is not required.
    fn read_u16(&mut self, addr: u32) -> u16;
    /// Reads a little-endian word; alignment is not required.
    fn read_u32(&mut self, addr: u32) -> u32;
    /// Writes one byte.
    fn write_u8(&mut self, addr: u32, val: u8);
    /// Writes a little-endian halfword.
    fn write_u16(&mut self, addr: u32, val: u16);
    /// Writes a little-endian word.
    fn write_u32(&mut self, addr: u32, val: u32);

    /// Reports a fault raised outside the bus, such as an illegal opcode.
    fn report_fault(&mut self, fault: Fault) {
        log_fault(&fault);
    }
}

impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn read_u8(&mut self, addr: u32) -> u8 {
        (**self).read_u8(addr)
    }
    fn read_u16(&mut self, addr: u32) -> u16 {
        (**self).read_u16(addr)
    }
    fn read_u32(&mut self, addr: u32) -> u32 {
        (**self).read_u32(addr)
    }
    fn write_u8(&mut self, addr: u32, val: u8) {
        (**self).write_u8(addr, val);
    }
    fn write_u16(&mut self, addr: u32, val: u16) {
        (**self).write_u16(addr, val);
    }
    fn write_u32(&mut self, addr: u32, val: u32) {
        (**self).write_u32(addr, val);
    }
    fn report_fault(&mut self, fault: Fault) {
        (**self).report_fault(fault);
    }
}
