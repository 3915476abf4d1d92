//! System interconnect (bus) for memory and MMIO access.
//!
//! This module implements the bus that routes address accesses to devices. It provides:
//! 1. **Device registration:** Devices are added by address range.
//! 2. **Access routing:** RAM is checked first, then every other device in registration order.
//! 3. **Fault reporting:** Unclaimed or refused accesses are reported to the injected
//!    [`FaultSink`]; reads then return 0 and writes are dropped. Emulation continues. Decode
//!    faults from the CPU reach the same sink but are not counted as bus faults.
//! 4. **Program loading:** Direct copy of an image into RAM.

use crate::common::data::AccessWidth;
use crate::common::diag::{FaultSink, TracingSink};
use crate::common::error::{AccessDenied, Fault};
use crate::soc::devices::Device;
use crate::soc::traits::{DeviceResult, MemoryBus};

/// System bus connecting the CPU and devices; routes accesses by address.
pub struct Bus {
    /// Registered memory and MMIO devices.
    devices: Vec<Box<dyn Device>>,
    ram_idx: Option<usize>,
    sink: Box<dyn FaultSink>,
    fault_count: u64,
}

impl Bus {
    /// Creates an empty bus that reports faults to `sink`.
    pub fn new(sink: Box<dyn FaultSink>) -> Self {
        Self {
            devices: Vec::new(),
            ram_idx: None,
            sink,
            fault_count: 0,
        }
    }

    /// Creates an empty bus that logs faults through `tracing`.
    pub fn with_tracing() -> Self {
        Self::new(Box::new(TracingSink))
    }

    /// Registers a device on the bus.
    ///
    /// The device named `"DRAM"` becomes the RAM window and is always decoded first.
    pub fn add_device(&mut self, dev: Box<dyn Device>) {
        self.devices.push(dev);
        self.ram_idx = self.devices.iter().position(|d| d.name() == "DRAM");
    }

    /// Replaces the fault sink.
    pub fn set_fault_sink(&mut self, sink: Box<dyn FaultSink>) {
        self.sink = sink;
    }

    /// Number of access faults reported since the bus was created.
    pub const fn fault_count(&self) -> u64 {
        self.fault_count
    }

    /// Returns (base, size) of the RAM window, if RAM is attached.
    pub fn ram_range(&self) -> Option<(u32, u32)> {
        self.ram_idx.map(|idx| self.devices[idx].address_range())
    }

    /// Returns whether the given address is claimed by any device.
    pub fn is_valid_address(&self, addr: u32) -> bool {
        self.devices.iter().any(|d| d.contains(addr))
    }

    /// Copies a binary into RAM starting at `addr`.
    ///
    /// Bytes that would land past the end of RAM are not loaded. Returns the number of bytes
    /// copied; 0 if `addr` is not inside RAM.
    pub fn load_binary_at(&mut self, data: &[u8], addr: u32) -> usize {
        let Some(idx) = self.ram_idx else {
            return 0;
        };
        let dev = &mut self.devices[idx];
        if !dev.contains(addr) {
            return 0;
        }
        let (base, _) = dev.address_range();
        dev.as_memory_mut()
            .map_or(0, |mem| mem.load(data, (addr - base) as usize))
    }

    /// Copies a program image to the start of RAM. Returns the number of bytes loaded.
    pub fn load_program(&mut self, image: &[u8]) -> usize {
        match self.ram_range() {
            Some((base, _)) => self.load_binary_at(image, base),
            None => 0,
        }
    }

    fn find_device(&mut self, addr: u32) -> Option<(&mut Box<dyn Device>, u32)> {
        let idx = self
            .ram_idx
            .filter(|&idx| self.devices[idx].contains(addr))
            .or_else(|| self.devices.iter().position(|d| d.contains(addr)))?;
        let dev = &mut self.devices[idx];
        let (base, _) = dev.address_range();
        Some((dev, addr - base))
    }

    fn report(&mut self, fault: Fault) {
        self.fault_count += 1;
        self.sink.report(fault);
    }

    fn read<T: Default>(
        &mut self,
        addr: u32,
        width: AccessWidth,
        access: impl FnOnce(&mut Box<dyn Device>, u32) -> DeviceResult<T>,
    ) -> T {
        let result = match self.find_device(addr) {
            Some((dev, offset)) => access(dev, offset),
            None => Err(AccessDenied),
        };
        result.unwrap_or_else(|AccessDenied| {
            self.report(Fault::ReadFault { addr, width });
            T::default()
        })
    }

    fn write(
        &mut self,
        addr: u32,
        width: AccessWidth,
        access: impl FnOnce(&mut Box<dyn Device>, u32) -> DeviceResult<()>,
    ) {
        let result = match self.find_device(addr) {
            Some((dev, offset)) => access(dev, offset),
            None => Err(AccessDenied),
        };
        if result.is_err() {
            self.report(Fault::WriteFault { addr, width });
        }
    }
}

impl MemoryBus for Bus {
    fn read_u8(&mut self, addr: u32) -> u8 {
        self.read(addr, AccessWidth::Byte, |dev, off| dev.read_u8(off))
    }

    fn read_u16(&mut self, addr: u32) -> u16 {
        self.read(addr, AccessWidth::Half, |dev, off| dev.read_u16(off))
    }

    fn read_u32(&mut self, addr: u32) -> u32 {
        self.read(addr, AccessWidth::Word, |dev, off| dev.read_u32(off))
    }

    fn write_u8(&mut self, addr: u32, val: u8) {
        self.write(addr, AccessWidth::Byte, |dev, off| dev.write_u8(off, val));
    }

    fn write_u16(&mut self, addr: u32, val: u16) {
        self.write(addr, AccessWidth::Half, |dev, off| dev.write_u16(off, val));
    }

    fn write_u32(&mut self, addr: u32, val: u32) {
        self.write(addr, AccessWidth::Word, |dev, off| dev.write_u32(off, val));
    }

    fn report_fault(&mut self, fault: Fault) {
        self.sink.report(fault);
    }
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field(
                "devices",
                &self.devices.iter().map(|d| d.name()).collect::<Vec<_>>(),
            )
            .field("fault_count", &self.fault_count)
            .finish_non_exhaustive()
    }
}
