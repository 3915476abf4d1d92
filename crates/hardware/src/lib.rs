//! Mini-RISC emulator library.
//!
//! This crate implements an emulator for a small custom 32-bit instruction set:
//! 1. **Core:** Register file, PC/next-PC, and the fetch-decode-execute loop.
//! 2. **ISA:** Opcode table, field extraction, decoding, and disassembly.
//! 3. **SoC:** Bus interconnect, RAM, and the memory-mapped character output port.
//! 4. **Simulation:** Configuration, program loading, and run statistics.

/// Common types and constants (registers, faults, errors, access widths).
pub mod common;
/// Emulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (state and execution loop).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and top-level simulator.
pub mod sim;
/// Memory system (builder, bus, devices, memory, traits).
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, PC, and the bus.
pub use crate::core::{Cpu, HaltReason};
/// Configured CPU plus system bus.
pub use crate::sim::Simulator;
/// System bus and its builder.
pub use crate::soc::{Bus, MemoryBus, SystemBuilder};
