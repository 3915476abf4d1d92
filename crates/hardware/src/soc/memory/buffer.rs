//! DRAM Buffer Implementation.
//!
//! Backing storage for system RAM. Allocation is fallible so an oversized RAM configuration is
//! reported as an error instead of aborting the process. All accessors are bounds-checked and
//! return `None` when the requested span leaves the buffer.

use crate::common::error::{Error, Result};

/// Zero-initialized, fixed-size byte buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DramBuffer {
    data: Vec<u8>,
}

impl DramBuffer {
    /// Allocates a zeroed buffer of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RamAllocation`] if the host cannot provide the memory.
    pub fn new(size: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| Error::RamAllocation { size })?;
        data.resize(size, 0);
        Ok(Self { data })
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for a zero-sized buffer.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads a single byte.
    pub fn read_u8(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, offset: usize, val: u8) -> Option<()> {
        let slot = self.data.get_mut(offset)?;
        *slot = val;
        Some(())
    }

    /// Returns `len` bytes starting at `offset`.
    pub fn read_slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.data.get(offset..end)
    }

    /// Copies `data` into the buffer starting at `offset`. Nothing is written if it does not fit.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> Option<()> {
        let end = offset.checked_add(data.len())?;
        self.data.get_mut(offset..end)?.copy_from_slice(data);
        Some(())
    }

    /// Returns the whole buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
