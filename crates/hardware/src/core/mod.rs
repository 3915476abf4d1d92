//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state and the fetch-decode-execute loop.

/// CPU core implementation and execution loop.
pub mod cpu;

pub use self::cpu::{Cpu, CpuState, HaltReason};
