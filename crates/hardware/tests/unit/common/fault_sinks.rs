//! Fault Sink Tests.

use minirisc_core::common::{AccessWidth, Fault, FaultLog, FaultSink, TracingSink};
use pretty_assertions::assert_eq;

use crate::common::harness::init_tracing;

fn read_fault(addr: u32) -> Fault {
    Fault::ReadFault {
        addr,
        width: AccessWidth::Word,
    }
}

#[test]
fn fault_log_records_in_order() {
    init_tracing();
    let mut log = FaultLog::new();
    log.report(read_fault(1));
    log.report(read_fault(2));
    assert_eq!(log.snapshot(), vec![read_fault(1), read_fault(2)]);
    assert_eq!(log.len(), 2);
}

#[test]
fn fault_log_clones_share_storage() {
    let log = FaultLog::new();
    let mut handle = log.clone();
    handle.report(read_fault(0x2000_0000));
    assert_eq!(log.len(), 1);
    assert!(!log.is_empty());
}

#[test]
fn fault_log_clear() {
    let mut log = FaultLog::new();
    log.report(read_fault(0));
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.snapshot(), Vec::<Fault>::new());
}

#[test]
fn tracing_sink_accepts_every_kind() {
    init_tracing();
    let mut sink = TracingSink;
    sink.report(read_fault(0));
    sink.report(Fault::WriteFault {
        addr: 0,
        width: AccessWidth::Half,
    });
    sink.report(Fault::IllegalOpcode { opcode: 0x7F, pc: 0 });
}
