//! Simulator: a configured CPU plus its system bus.
//!
//! Ties configuration, bus construction, program loading, and the run loop together for the
//! command-line front end and for end-to-end tests.

use std::path::Path;

use crate::common::error::Result;
use crate::config::Config;
use crate::core::{Cpu, HaltReason};
use crate::sim::loader;
use crate::soc::{Bus, SystemBuilder};

/// Top-level emulator: CPU state wired to the system bus.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, PC, bus, stats).
    pub cpu: Cpu<Bus>,
}

impl Simulator {
    /// Builds the system described by `config` with stdout output and `tracing` diagnostics.
    ///
    /// # Errors
    ///
    /// Fails if the memory map is invalid or RAM cannot be allocated.
    pub fn new(config: &Config) -> Result<Self> {
        let bus = SystemBuilder::new(config).build()?;
        Ok(Self::with_bus(bus, config))
    }

    /// Wraps an already built bus.
    pub fn with_bus(bus: Bus, config: &Config) -> Self {
        let mut cpu = Cpu::new(config.start_pc(), bus);
        cpu.trace = config.general.trace_instructions;
        Self { cpu }
    }

    /// Copies a program image to the start of RAM. Returns the number of bytes loaded.
    pub fn load_program(&mut self, image: &[u8]) -> usize {
        self.cpu.bus.load_program(image)
    }

    /// Reads a program file (up to RAM size) and loads it. Returns the number of bytes loaded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::Error::ProgramRead`] if the file cannot be read.
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let limit = self
            .cpu
            .bus
            .ram_range()
            .map_or(0, |(_, size)| size as usize);
        let image = loader::read_program(path, limit)?;
        let loaded = self.load_program(&image);
        tracing::info!("Loaded {loaded} bytes from {}", path.display());
        Ok(loaded)
    }

    /// Runs until the CPU halts.
    pub fn run(&mut self) -> HaltReason {
        let reason = self.cpu.run();
        self.cpu.stats.bus_faults = self.cpu.bus.fault_count();
        reason
    }
}
