//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, next-PC, and the instruction
//!    register.
//! 2. **Control:** Tracks the fetch/execute/halted cycle state and the halt reason.
//! 3. **System Integration:** Owns the memory bus through the [`MemoryBus`] capability.

/// Fetch-decode-execute loop.
pub mod execution;

/// Halt reasons.
pub mod halt;

pub use halt::HaltReason;

use crate::common::RegisterFile;
use crate::soc::interconnect::Bus;
use crate::soc::traits::MemoryBus;
use crate::stats::SimStats;

/// Position of the CPU in its fetch-execute cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    /// Next action is reading the word at `pc`.
    Fetch,
    /// The instruction register holds a word waiting to be executed.
    Execute,
    /// Terminal; the loop has stopped.
    Halted,
}

/// Main CPU structure containing all processor state.
///
/// Generic over the bus so alternate memory backends can be substituted; defaults to the
/// system [`Bus`].
#[derive(Debug)]
pub struct Cpu<B: MemoryBus = Bus> {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Address of the current instruction.
    pub pc: u32,
    /// Address of the instruction to run after the current one; copied into `pc` at the end of
    /// every step.
    pub next_pc: u32,
    /// Most recently fetched instruction word.
    pub ir: u32,
    /// Memory bus.
    pub bus: B,
    /// Log every executed instruction at `trace` level.
    pub trace: bool,
    /// Execution counters.
    pub stats: SimStats,
    state: CpuState,
    halt: Option<HaltReason>,
}

impl<B: MemoryBus> Cpu<B> {
    /// Creates a CPU that will start fetching at `start_pc`. All registers are zero.
    ///
    /// # Arguments
    ///
    /// * `start_pc` - Address of the first instruction.
    /// * `bus` - Memory backend used for every fetch, load, and store.
    pub fn new(start_pc: u32, bus: B) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: start_pc,
            next_pc: start_pc,
            ir: 0,
            bus,
            trace: false,
            stats: SimStats::default(),
            state: CpuState::Fetch,
            halt: None,
        }
    }

    /// Current cycle state.
    pub const fn state(&self) -> CpuState {
        self.state
    }

    /// Returns `true` once the CPU has stopped.
    pub const fn is_halted(&self) -> bool {
        self.halt.is_some()
    }

    /// Why the CPU stopped, if it has.
    pub const fn halt_reason(&self) -> Option<HaltReason> {
        self.halt
    }

    /// Consumes the CPU and returns its bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Dumps the current CPU state (PC and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.pc);
        self.regs.dump();
    }

    fn set_halted(&mut self, reason: HaltReason) {
        self.halt = Some(reason);
        self.state = CpuState::Halted;
    }
}
