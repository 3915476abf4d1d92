//! Common utilities and types used throughout the emulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Default memory map and instruction geometry.
//! 2. **Memory Access:** Access widths for bus operations.
//! 3. **Error Handling:** Emulation faults and host-level errors.
//! 4. **Diagnostics:** Injectable fault sinks.
//! 5. **Register Management:** The integer register file.

/// Common constants used throughout the emulator.
pub mod constants;

/// Memory access width definitions.
pub mod data;

/// Fault sinks for reporting contained faults.
pub mod diag;

/// Error types and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::AccessWidth;
pub use diag::{FaultLog, FaultSink, TracingSink};
pub use error::{AccessDenied, Error, Fault, Result};
pub use reg::RegisterFile;
