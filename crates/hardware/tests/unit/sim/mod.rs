//! # Simulation Unit Tests

/// Program image loading from disk.
pub mod loader;
