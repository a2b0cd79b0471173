// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Page frames and the builder that cuts an image into them.
//!
//! A frame is the unit the bootloader acknowledges:
//! - 1 byte page number (wraps at 256)
//! - `PAGE_SIZE` bytes of data, padded with `0xFF`
//! - CRC-16 of the preceding bytes, LSB first

use core::fmt;

use crate::crc::crc16;
use crate::protocol::{CRC_OFFSET, FRAME_SIZE, PAD_BYTE, PAGE_NUMBER_LEN, PAGE_SIZE};

/// One page wrapped for transmission.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; FRAME_SIZE],
}

impl Frame {
    /// Wrap `chunk` (at most `PAGE_SIZE` bytes) as page `page`.
    ///
    /// Panics if `chunk` is longer than a page.
    pub fn new(page: u8, chunk: &[u8]) -> Self {
        assert!(chunk.len() <= PAGE_SIZE, "chunk exceeds page size");

        let mut bytes = [PAD_BYTE; FRAME_SIZE];
        bytes[0] = page;
        bytes[PAGE_NUMBER_LEN..PAGE_NUMBER_LEN + chunk.len()].copy_from_slice(chunk);

        let crc = crc16(&bytes[..CRC_OFFSET]);
        bytes[CRC_OFFSET..].copy_from_slice(&crc.to_le_bytes());

        Self { bytes }
    }

    /// The page that makes the bootloader leave programming mode.
    ///
    /// Every byte is `0xFF`, including the CRC positions.
    pub const fn final_page() -> Self {
        Self {
            bytes: [0xFF; FRAME_SIZE],
        }
    }

    pub fn page(&self) -> u8 {
        self.bytes[0]
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes[PAGE_NUMBER_LEN..CRC_OFFSET]
    }

    /// CRC as carried in the frame tail.
    pub fn crc(&self) -> u16 {
        u16::from_le_bytes([self.bytes[CRC_OFFSET], self.bytes[CRC_OFFSET + 1]])
    }

    /// Whether the tail matches the CRC of the header and data.
    pub fn is_intact(&self) -> bool {
        crc16(&self.bytes[..CRC_OFFSET]) == self.crc()
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("page", &self.page())
            .field("crc", &format_args!("0x{:04x}", self.crc()))
            .finish()
    }
}

/// Hex dump: page number, data and CRC separated by single spaces.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i == PAGE_NUMBER_LEN || i == CRC_OFFSET {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Numbers pages and wraps them into frames.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    next_page: u8,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start numbering at `page` instead of 0.
    pub fn starting_at(page: u8) -> Self {
        Self { next_page: page }
    }

    /// Page number the next frame will carry.
    pub fn next_page(&self) -> u8 {
        self.next_page
    }

    /// Frame `chunk` under the next page number.
    pub fn build(&mut self, chunk: &[u8]) -> Frame {
        let frame = Frame::new(self.next_page, chunk);
        self.next_page = self.next_page.wrapping_add(1);
        frame
    }

    /// Read up to one page from `source` and frame it.
    ///
    /// Returns the frame with the number of bytes consumed, or `None` once
    /// the source is exhausted. A short final page is padded with `0xFF`.
    #[cfg(feature = "std")]
    pub fn next_frame<R: std::io::Read>(
        &mut self,
        mut source: R,
    ) -> std::io::Result<Option<(Frame, usize)>> {
        let mut page = [0u8; PAGE_SIZE];
        let mut filled = 0;

        while filled < PAGE_SIZE {
            match source.read(&mut page[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        if filled == 0 {
            return Ok(None);
        }

        Ok(Some((self.build(&page[..filled]), filled)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pads_short_chunk() {
        let frame = Frame::new(3, &[0x11, 0x22]);
        assert_eq!(frame.page(), 3);
        assert_eq!(&frame.data()[..2], &[0x11, 0x22]);
        assert!(frame.data()[2..].iter().all(|&b| b == PAD_BYTE));
    }

    #[test]
    fn test_crc_is_little_endian_tail() {
        let frame = Frame::new(0, &[0x01]);
        let expected = crc16(&frame.as_bytes()[..CRC_OFFSET]);
        assert_eq!(frame.as_bytes()[CRC_OFFSET], expected as u8);
        assert_eq!(frame.as_bytes()[CRC_OFFSET + 1], (expected >> 8) as u8);
    }

    #[test]
    #[should_panic(expected = "chunk exceeds page size")]
    fn test_new_rejects_oversized_chunk() {
        let _ = Frame::new(0, &[0u8; PAGE_SIZE + 1]);
    }

    #[test]
    fn test_final_page_is_all_ff() {
        let frame = Frame::final_page();
        assert!(frame.as_bytes().iter().all(|&b| b == 0xFF));
        assert_eq!(frame.page(), 0xFF);
        assert_eq!(frame.crc(), 0xFFFF);
    }
}
