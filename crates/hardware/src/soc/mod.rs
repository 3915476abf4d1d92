//! Memory system components.
//!
//! This module organizes the components behind the CPU's memory interface: the system bus,
//! RAM, the output port, and the builder that assembles them.

/// System builder for assembling the bus from configuration.
pub mod builder;

/// Memory-mapped I/O device implementations.
pub mod devices;

/// System bus interconnect and routing.
pub mod interconnect;

/// RAM device and its backing buffer.
pub mod memory;

/// Device and memory-bus trait definitions.
pub mod traits;

pub use builder::SystemBuilder;
pub use interconnect::Bus;
pub use traits::{Device, MemoryBus};
