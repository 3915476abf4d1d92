//! Simulation utilities and program loading.
//!
//! Provides the program loader and the top-level [`Simulator`] that owns a configured CPU.

/// Flat binary program loading.
pub mod loader;

/// Configured CPU and bus bundle.
pub mod simulator;

pub use simulator::Simulator;
