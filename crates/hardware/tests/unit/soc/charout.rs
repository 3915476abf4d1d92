//! Character Output Port Tests.

use minirisc_core::soc::Device;
use minirisc_core::soc::devices::CharOut;
use minirisc_core::soc::devices::charout::{REG_CHAR, REG_HEX, REG_INT};
use rstest::rstest;

use crate::common::mocks::output::SharedBuffer;

const BASE: u32 = 0x1000_0000;

fn port() -> (CharOut, SharedBuffer) {
    let out = SharedBuffer::new();
    (CharOut::with_writer(BASE, Box::new(out.clone())), out)
}

#[rstest]
#[case(REG_CHAR, 0x41, "A")]
#[case(REG_CHAR, 0x0000_0A41, "A")]
#[case(REG_CHAR, 0x0A, "\n")]
#[case(REG_INT, 42, "42")]
#[case(REG_INT, 0, "0")]
#[case(REG_INT, 0xFFFF_FFFF, "-1")]
#[case(REG_INT, 0x8000_0000, "-2147483648")]
#[case(REG_HEX, 0xDEAD_BEEF, "deadbeef")]
#[case(REG_HEX, 0x0000_00FF, "ff")]
#[case(REG_HEX, 0, "0")]
fn word_writes(#[case] offset: u32, #[case] val: u32, #[case] expected: &str) {
    let (mut dev, out) = port();
    assert!(dev.write_u32(offset, val).is_ok());
    assert_eq!(out.as_string(), expected);
}

#[test]
fn every_write_is_flushed() {
    let (mut dev, out) = port();
    dev.write_u32(REG_CHAR, u32::from(b'H')).unwrap();
    dev.write_u8(REG_CHAR, b'i').unwrap();
    assert_eq!(out.as_string(), "Hi");
    assert_eq!(out.flush_count(), 2);
}

#[test]
fn byte_write_to_char_register_emits() {
    let (mut dev, out) = port();
    dev.write_u8(REG_CHAR, b'B').unwrap();
    assert_eq!(out.as_string(), "B");
}

#[rstest]
#[case(1)]
#[case(REG_INT)]
#[case(REG_HEX)]
#[case(11)]
fn other_byte_writes_are_ignored(#[case] offset: u32) {
    let (mut dev, out) = port();
    assert!(dev.write_u8(offset, b'X').is_ok());
    assert_eq!(out.as_string(), "");
}

#[test]
fn unassigned_word_offset_is_ignored() {
    let (mut dev, out) = port();
    assert!(dev.write_u32(2, 0x41).is_ok());
    assert_eq!(out.as_string(), "");
}

#[test]
fn halfword_writes_are_refused() {
    let (mut dev, out) = port();
    assert!(dev.write_u16(REG_CHAR, 0x41).is_err());
    assert_eq!(out.as_string(), "");
}

#[rstest]
#[case(REG_CHAR)]
#[case(REG_INT)]
#[case(REG_HEX)]
fn reads_are_refused(#[case] offset: u32) {
    let (mut dev, _) = port();
    assert!(dev.read_u8(offset).is_err());
    assert!(dev.read_u16(offset).is_err());
    assert!(dev.read_u32(offset).is_err());
}

#[test]
fn window_is_twelve_bytes() {
    let (dev, _) = port();
    assert_eq!(dev.name(), "CHAROUT");
    assert_eq!(dev.address_range(), (BASE, 12));
    assert!(dev.contains(BASE + 11));
    assert!(!dev.contains(BASE + 12));
}
