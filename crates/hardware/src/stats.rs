//! Emulation statistics collection and reporting.
//!
//! This module tracks execution counters for a run. It provides:
//! 1. **Throughput:** Retired instructions and host time (MIPS).
//! 2. **Instruction mix:** Loads, stores, taken branches, and jumps.
//! 3. **Faults:** Bus faults reported during the run.

use std::time::{Duration, Instant};

/// Execution counters for one run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed, including the one that halted the CPU.
    pub instructions_retired: u64,
    /// Count of LBU instructions executed.
    pub inst_load: u64,
    /// Count of SB instructions executed.
    pub inst_store: u64,
    /// Count of BEQ instructions executed.
    pub inst_branch: u64,
    /// Count of BEQ instructions that redirected the PC.
    pub branches_taken: u64,
    /// Count of JAL and JALR instructions executed.
    pub inst_jump: u64,
    /// Bus faults reported while running.
    pub bus_faults: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            branches_taken: 0,
            inst_jump: 0,
            bus_faults: 0,
        }
    }
}

impl SimStats {
    /// Restarts the host clock; called when a run begins so setup time is not measured.
    pub fn start_timer(&mut self) {
        self.start_time = Instant::now();
    }

    /// Host time since the last [`SimStats::start_timer`] (or since creation).
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints a summary to stdout.
    #[allow(clippy::cast_precision_loss)]
    pub fn print(&self) {
        let seconds = self.elapsed().as_secs_f64();
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        println!("\n==========================================================");
        println!("MINI-RISC EMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_mips                 {mips:.2}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  load                   {}", self.inst_load);
        println!("  store                  {}", self.inst_store);
        println!(
            "  branch                 {} ({} taken)",
            self.inst_branch, self.branches_taken
        );
        println!("  jump                   {}", self.inst_jump);
        println!("----------------------------------------------------------");
        println!("bus_faults               {}", self.bus_faults);
    }
}
