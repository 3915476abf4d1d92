//! System construction.
//!
//! This module builds the complete memory system from configuration. It performs:
//! 1. **Validation:** Rejects memory maps that overlap or overflow the address space.
//! 2. **RAM allocation:** Allocates zeroed RAM of the configured size (fallible).
//! 3. **Device registration:** Attaches RAM and the character output port to the bus.
//! 4. **Injection:** Lets callers substitute the output writer and the fault sink.

use std::io::Write;

use crate::common::diag::FaultSink;
use crate::common::error::Result;
use crate::config::Config;
use crate::soc::devices::CharOut;
use crate::soc::interconnect::Bus;
use crate::soc::memory::Memory;

/// Builder for a configured [`Bus`].
///
/// ```
/// use minirisc_core::config::Config;
/// use minirisc_core::soc::SystemBuilder;
///
/// let bus = SystemBuilder::new(&Config::default())
///     .output(Box::new(std::io::sink()))
///     .build()
///     .unwrap();
/// assert_eq!(bus.ram_range(), Some((0x8000_0000, 32 * 1024 * 1024)));
/// ```
pub struct SystemBuilder<'a> {
    config: &'a Config,
    output: Option<Box<dyn Write + Send>>,
    sink: Option<Box<dyn FaultSink>>,
}

impl<'a> SystemBuilder<'a> {
    /// Starts a builder for `config`. Output defaults to stdout and faults to `tracing`.
    pub const fn new(config: &'a Config) -> Self {
        Self {
            config,
            output: None,
            sink: None,
        }
    }

    /// Sends program output to `out` instead of stdout.
    #[must_use]
    pub fn output(mut self, out: Box<dyn Write + Send>) -> Self {
        self.output = Some(out);
        self
    }

    /// Reports bus faults to `sink` instead of `tracing`.
    #[must_use]
    pub fn fault_sink(mut self, sink: Box<dyn FaultSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validates the configuration, allocates RAM, and wires up the devices.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::Error::InvalidMemoryMap`] for an unusable memory map and
    /// [`crate::common::Error::RamAllocation`] if RAM cannot be allocated.
    pub fn build(self) -> Result<Bus> {
        self.config.validate()?;

        let ram = Memory::with_size(self.config.memory.ram_size, self.config.system.ram_base)?;
        let charout_base = self.config.system.charout_base;
        let charout = match self.output {
            Some(out) => CharOut::with_writer(charout_base, out),
            None => CharOut::new(charout_base),
        };

        let mut bus = match self.sink {
            Some(sink) => Bus::new(sink),
            None => Bus::with_tracing(),
        };
        bus.add_device(Box::new(ram));
        bus.add_device(Box::new(charout));
        Ok(bus)
    }
}

impl std::fmt::Debug for SystemBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemBuilder")
            .field("config", self.config)
            .field("custom_output", &self.output.is_some())
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}
