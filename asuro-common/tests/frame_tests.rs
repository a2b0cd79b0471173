// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Frame layout, numbering and hex dump tests.

use asuro_common::protocol::{CRC_OFFSET, FRAME_SIZE, MAX_FILE_SIZE, PAGE_SIZE};
use asuro_common::{crc16, Frame, FrameBuilder};

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_frame_size() {
    assert_eq!(FRAME_SIZE, 67);
    assert_eq!(Frame::new(0, &[]).as_bytes().len(), FRAME_SIZE);
}

#[test]
fn test_max_file_size() {
    assert_eq!(MAX_FILE_SIZE, 64 * 128 - 1024);
}

#[test]
fn test_short_input_is_padded() {
    let input: Vec<u8> = (1..=10).collect();
    let frame = FrameBuilder::new().build(&input);

    assert_eq!(&frame.data()[..10], &input[..]);
    assert!(frame.data()[10..].iter().all(|&b| b == 0xFF));
    assert_eq!(frame.data().len(), PAGE_SIZE);
}

#[test]
fn test_full_page_carries_data_unchanged() {
    let input: Vec<u8> = (0..PAGE_SIZE as u8).collect();
    let frame = FrameBuilder::new().build(&input);
    assert_eq!(frame.data(), &input[..]);
}

#[test]
fn test_crc_tail_covers_header_and_data() {
    let chunks: [&[u8]; 4] = [b"", b"\x00", b"hello asuro", &[0xAA; PAGE_SIZE]];
    let mut builder = FrameBuilder::new();
    for chunk in chunks {
        let frame = builder.build(chunk);
        let bytes = frame.as_bytes();
        let expected = crc16(&bytes[..CRC_OFFSET]);
        assert_eq!(u16::from_le_bytes([bytes[65], bytes[66]]), expected);
        assert!(frame.is_intact());
    }
}

#[test]
fn test_corrupted_frame_is_not_intact() {
    let frame = Frame::new(7, b"data");
    let mut bytes = *frame.as_bytes();
    bytes[10] ^= 0x40;
    assert_ne!(crc16(&bytes[..CRC_OFFSET]), frame.crc());
}

#[test]
fn test_final_page_sentinel() {
    let frame = Frame::final_page();
    assert_eq!(frame.as_bytes(), &[0xFF; FRAME_SIZE]);
    // Not a CRC-consistent frame; the bootloader treats it as a stop marker
    assert!(!frame.is_intact());
}

// =============================================================================
// Page numbering
// =============================================================================

#[test]
fn test_pages_count_up_from_zero() {
    let mut builder = FrameBuilder::new();
    let pages: Vec<u8> = (0..5).map(|_| builder.build(b"x").page()).collect();
    assert_eq!(pages, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_page_number_wraps() {
    let mut builder = FrameBuilder::starting_at(254);
    assert_eq!(builder.build(b"a").page(), 254);
    assert_eq!(builder.build(b"b").page(), 255);
    assert_eq!(builder.build(b"c").page(), 0);
    assert_eq!(builder.next_page(), 1);
}

#[test]
fn test_independent_builders_do_not_share_counter() {
    let mut first = FrameBuilder::new();
    let mut second = FrameBuilder::new();
    first.build(b"1");
    first.build(b"2");
    assert_eq!(second.build(b"3").page(), 0);
}

#[test]
fn test_same_content_different_page_changes_crc() {
    assert_ne!(Frame::new(0, b"same").crc(), Frame::new(1, b"same").crc());
}

// =============================================================================
// Hex dump
// =============================================================================

#[test]
fn test_hex_dump_length() {
    let frame = FrameBuilder::new().build(&[0u8; 10]);
    let line = frame.to_string();
    assert_eq!(line.len(), FRAME_SIZE * 2 + 2);
}

#[test]
fn test_hex_dump_sections() {
    let frame = Frame::new(0x0A, &[0xDE, 0xAD]);
    let line = frame.to_string();
    let sections: Vec<&str> = line.split(' ').collect();

    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0], "0a");
    assert_eq!(sections[1].len(), PAGE_SIZE * 2);
    assert!(sections[1].starts_with("deadffff"));
    assert_eq!(sections[2], format!("{:04x}", frame.crc().swap_bytes()));
}

#[test]
fn test_hex_dump_is_lowercase() {
    let line = Frame::final_page().to_string();
    assert!(line.chars().all(|c| c == ' ' || matches!(c, '0'..='9' | 'a'..='f')));
    assert!(line.starts_with("ff ffff"));
}
