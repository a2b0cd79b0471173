// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Wire constants shared between the uploader and the ASURO bootloader.

// --- Flash layout constants ---

/// Bytes of program memory carried by one frame.
pub const PAGE_SIZE: usize = 64;
pub const MAX_PAGES: usize = 128;
/// Program memory occupied by the bootloader itself (16 pages).
pub const BOOTLOADER_SIZE: usize = 1024;

/// Largest image that still fits below the bootloader.
pub const MAX_FILE_SIZE: usize = PAGE_SIZE * MAX_PAGES - BOOTLOADER_SIZE;

// --- Frame layout (67 bytes) ---
//
// [page_number][64 data bytes][crc_lo][crc_hi]

pub const PAGE_NUMBER_LEN: usize = 1;
pub const CRC_LEN: usize = 2;
pub const FRAME_SIZE: usize = PAGE_NUMBER_LEN + PAGE_SIZE + CRC_LEN;

/// Offset of the CRC tail within a frame.
pub const CRC_OFFSET: usize = PAGE_NUMBER_LEN + PAGE_SIZE;

/// Fill byte for the unused part of a short page (erased flash).
pub const PAD_BYTE: u8 = 0xFF;

// Compile-time layout checks
const _: () = assert!(FRAME_SIZE == 67);
const _: () = assert!(MAX_FILE_SIZE == 7168);

// --- Link parameters ---

/// IR transceiver line rate (8N1, no flow control).
pub const BAUD_RATE: u32 = 2400;

// --- Handshake / response strings ---

/// Sent repeatedly until the bootloader answers.
pub const FLASH_COMMAND: &[u8] = b"Flash";
/// Bootloader answer that confirms programming mode.
///
/// Drives the transitions of [`ConnectState`](crate::connect::ConnectState).
pub const CONNECT_MARKER: &[u8] = b"ASURO";

pub const RESPONSE_OK: [u8; 2] = *b"OK";
pub const RESPONSE_CHECKSUM: [u8; 2] = *b"CK";
pub const RESPONSE_MEMORY: [u8; 2] = *b"ER";
