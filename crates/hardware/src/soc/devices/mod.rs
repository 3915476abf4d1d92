//! Memory-Mapped IO Devices.
//!
//! The only peripheral is the character output port; RAM lives in [`crate::soc::memory`].

/// Write-only character/decimal/hex output port.
pub mod charout;

pub use charout::CharOut;

pub use crate::soc::traits::Device;
