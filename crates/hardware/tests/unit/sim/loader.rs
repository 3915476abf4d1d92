//! Program Loader Tests.

use std::io::Write;

use minirisc_core::common::Error;
use minirisc_core::sim::loader::read_program;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn temp_program(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_whole_file() {
    let file = temp_program(&[0x13, 0x05, 0x80, 0x03, 0x27, 0, 0, 0]);
    let image = read_program(file.path(), 1024).unwrap();
    assert_eq!(image, vec![0x13, 0x05, 0x80, 0x03, 0x27, 0, 0, 0]);
}

#[test]
fn stops_at_limit() {
    let file = temp_program(&[0xAA; 100]);
    let image = read_program(file.path(), 16).unwrap();
    assert_eq!(image.len(), 16);
}

#[test]
fn empty_file_is_a_valid_image() {
    let file = temp_program(&[]);
    let image = read_program(file.path(), 1024).unwrap();
    assert!(image.is_empty());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bin");

    match read_program(&path, 1024) {
        Err(Error::ProgramRead { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ProgramRead, got {other:?}"),
    }
}
