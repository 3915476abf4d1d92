//! Mini-RISC emulator CLI.
//!
//! This binary loads a flat program image into RAM and runs it until the CPU halts. It performs:
//! 1. **Setup:** Reads an optional JSON config, installs the stderr `tracing` subscriber, and
//!    builds the system bus.
//! 2. **Load:** Copies the program image to the start of RAM.
//! 3. **Run:** Executes until EBREAK or an illegal opcode, then optionally dumps registers and
//!    statistics.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use minirisc_core::common::Error;
use minirisc_core::config::Config;
use minirisc_core::core::HaltReason;
use minirisc_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "minirisc",
    author,
    version,
    about = "Mini-RISC 32-bit emulator",
    long_about = "Load a flat binary at the start of RAM and run it until EBREAK or an illegal opcode.\n\nExamples:\n  minirisc hello.bin\n  minirisc --trace --dump-regs hello.bin\n  minirisc --config board.json --stats hello.bin"
)]
struct Cli {
    /// Flat binary program image.
    program: PathBuf,

    /// JSON configuration file (memory map, start PC).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Print run statistics after the program halts.
    #[arg(long)]
    stats: bool,

    /// Print PC and registers after the program halts.
    #[arg(long)]
    dump_regs: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the built-in default.
fn init_tracing(trace: bool) {
    let default = if trace { "minirisc_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;

    let mut sim = Simulator::new(&config)?;
    let loaded = sim.load_program_file(&cli.program)?;
    println!(
        "Loaded {loaded} bytes from {} into memory.",
        cli.program.display()
    );

    println!("Starting emulation...");
    let reason = sim.run();
    tracing::debug!(%reason, "cpu halted");
    if let Some(line) = halt_message(reason) {
        println!("{line}");
    }
    println!("Emulation finished.");

    if cli.dump_regs {
        sim.cpu.dump_state();
    }
    if cli.stats {
        sim.cpu.stats.print();
    }
    Ok(())
}

/// Stdout line for a halt. Illegal opcodes are already reported on stderr by the fault sink.
const fn halt_message(reason: HaltReason) -> Option<&'static str> {
    match reason {
        HaltReason::Breakpoint { .. } => Some("EBREAK executed. Halting."),
        HaltReason::IllegalOpcode { .. } => None,
    }
}
