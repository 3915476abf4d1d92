//! Configuration system for the emulator.
//!
//! This module defines all configuration structures used to parameterize the emulator. It provides:
//! 1. **Defaults:** Baseline memory map (RAM base and size, output port base).
//! 2. **Structures:** Hierarchical config for general, system, and memory settings.
//! 3. **Validation:** Rejection of memory maps that cannot exist in a 32-bit address space.
//!
//! Configuration is supplied as JSON (every field is optional) or via `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants;
use crate::common::error::{Error, Result};

/// Default configuration constants for the emulator.
mod defaults {
    use crate::common::constants;

    /// Base address of main RAM.
    pub const RAM_BASE: u32 = constants::RAM_BASE;

    /// Total size of main RAM (32 MiB).
    pub const RAM_SIZE: usize = constants::RAM_SIZE;

    /// Base address of the character output port.
    pub const CHAROUT_BASE: u32 = constants::CHAROUT_BASE;
}

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use minirisc_core::config::Config;
///
/// let json = r#"{ "memory": { "ram_size": 65536 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.memory.ram_size, 65536);
/// assert_eq!(config.system.ram_base, 0x8000_0000);
/// assert_eq!(config.start_pc(), 0x8000_0000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General emulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory map.
    #[serde(default)]
    pub system: SystemConfig,
    /// RAM sizing.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed JSON and [`Error::InvalidMemoryMap`] when the
    /// resulting memory map is unusable.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read, otherwise as [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Address of the first instruction: `general.start_pc` if set, otherwise the RAM base.
    pub const fn start_pc(&self) -> u32 {
        match self.general.start_pc {
            Some(pc) => pc,
            None => self.system.ram_base,
        }
    }

    /// Checks that RAM is non-empty, fits below 4 GiB, and does not overlap the output port.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMemoryMap`] when any of these conditions fails.
    pub fn validate(&self) -> Result<()> {
        let base = self.system.ram_base;
        let size = self.memory.ram_size;
        let invalid = || Error::InvalidMemoryMap { base, size };

        if size == 0 {
            return Err(invalid());
        }
        let size32 = u32::try_from(size).map_err(|_| invalid())?;
        let ram_end = u64::from(base) + u64::from(size32);
        if ram_end > 1 << 32 {
            return Err(invalid());
        }

        let out_start = u64::from(self.system.charout_base);
        let out_end = out_start + u64::from(constants::CHAROUT_SIZE);
        if out_start < ram_end && u64::from(base) < out_end {
            return Err(invalid());
        }
        Ok(())
    }
}

/// General emulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log every executed instruction at `trace` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value. `None` starts at the configured RAM base; see [`Config::start_pc`].
    #[serde(default)]
    pub start_pc: Option<u32>,
}

/// Memory map configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Main RAM base address.
    #[serde(default = "SystemConfig::default_ram_base")]
    pub ram_base: u32,

    /// Character output port base address.
    #[serde(default = "SystemConfig::default_charout_base")]
    pub charout_base: u32,
}

impl SystemConfig {
    /// Returns the default RAM base address.
    const fn default_ram_base() -> u32 {
        defaults::RAM_BASE
    }

    /// Returns the default output port base address.
    const fn default_charout_base() -> u32 {
        defaults::CHAROUT_BASE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            charout_base: defaults::CHAROUT_BASE,
        }
    }
}

/// RAM configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Size of main RAM in bytes.
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    /// Returns the default RAM size.
    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
        }
    }
}
