//! Fault and Error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Faults:** Contained emulation faults (bad bus accesses, illegal opcodes) that are
//!    reported but never unwind past the instruction that caused them.
//! 2. **Host Errors:** Failures of the host process itself (allocation, file and config I/O).
//! 3. **Device Refusals:** The marker a device returns when it cannot serve an access.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessWidth;

/// A contained fault raised while emulating a program.
///
/// Bus faults are diagnostic only: reads yield zero and writes are dropped. An illegal opcode
/// halts the emulated program but not the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A read hit an address that no device serves.
    #[error("Read fault at address {addr:#010x} ({width})")]
    ReadFault {
        /// Faulting address.
        addr: u32,
        /// Width of the attempted access.
        width: AccessWidth,
    },

    /// A write hit an address that no device serves.
    #[error("Write fault at address {addr:#010x} ({width})")]
    WriteFault {
        /// Faulting address.
        addr: u32,
        /// Width of the attempted access.
        width: AccessWidth,
    },

    /// The fetched word carried an opcode outside the instruction table.
    #[error("Unknown opcode: {opcode:#04x} at PC: {pc:#010x}")]
    IllegalOpcode {
        /// The 7-bit opcode field.
        opcode: u8,
        /// Address of the offending instruction.
        pc: u32,
    },
}

impl Fault {
    /// Returns `true` for faults raised by the bus.
    pub const fn is_bus_fault(&self) -> bool {
        matches!(self, Self::ReadFault { .. } | Self::WriteFault { .. })
    }
}

/// Returned by a device that cannot serve an access at the given offset and width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("access not supported by device")]
pub struct AccessDenied;

/// Host-level errors. Any of these stops the emulator before or instead of running.
#[derive(Debug, Error)]
pub enum Error {
    /// RAM could not be allocated.
    #[error("failed to allocate {size} bytes of RAM")]
    RamAllocation {
        /// Requested RAM size in bytes.
        size: usize,
    },

    /// The program image could not be read.
    #[error("failed to open program file '{}': {source}", .path.display())]
    ProgramRead {
        /// Path of the program image.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read.
    #[error("failed to read config file '{}': {source}", .path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::Config`].
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The configured memory map cannot be realized.
    #[error("invalid memory map: RAM at {base:#010x} with {size} bytes")]
    InvalidMemoryMap {
        /// Configured RAM base.
        base: u32,
        /// Configured RAM size.
        size: usize,
    },
}

/// Result alias for host-level operations.
pub type Result<T> = std::result::Result<T, Error>;
