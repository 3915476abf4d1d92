//! Fault reporting.
//!
//! Faults are handed to a [`FaultSink`] injected into the bus instead of being printed from deep
//! inside device code, so callers decide where diagnostics go:
//! 1. **`TracingSink`:** Logs every fault through `tracing` (the default).
//! 2. **`FaultLog`:** Records every fault in a shared list and logs it as well.

use std::sync::{Arc, Mutex, PoisonError};

use super::error::Fault;

/// Destination for contained emulation faults.
pub trait FaultSink: Send {
    /// Records or reports one fault. Must not panic; emulation continues afterwards.
    fn report(&mut self, fault: Fault);
}

/// Emits a fault on the diagnostic stream.
pub fn log_fault(fault: &Fault) {
    match fault {
        Fault::IllegalOpcode { .. } => tracing::error!("{fault}"),
        Fault::ReadFault { .. } | Fault::WriteFault { .. } => tracing::warn!("{fault}"),
    }
}

/// Sink that forwards every fault to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl FaultSink for TracingSink {
    fn report(&mut self, fault: Fault) {
        log_fault(&fault);
    }
}

/// Shared, cloneable fault recorder.
///
/// Every clone appends to the same list, so a test (or the CLI) keeps one handle and gives
/// another to the bus.
#[derive(Clone, Debug, Default)]
pub struct FaultLog {
    faults: Arc<Mutex<Vec<Fault>>>,
}

impl FaultLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every fault recorded so far, oldest first.
    pub fn snapshot(&self) -> Vec<Fault> {
        self.faults
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of faults recorded.
    pub fn len(&self) -> usize {
        self.faults.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets all recorded faults.
    pub fn clear(&self) {
        self.faults
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl FaultSink for FaultLog {
    fn report(&mut self, fault: Fault) {
        log_fault(&fault);
        self.faults
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(fault);
    }
}
