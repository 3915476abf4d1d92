//! # Common Unit Tests


/// Fault sinks.
pub mod fault_sinks;

/// Register file semantics, including the zero register.
pub mod register_file;
