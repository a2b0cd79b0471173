// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Classification of the bootloader's per-page answer.
//!
//! The bootloader answers each frame with a two-letter code. Only the last
//! two bytes received after a send are significant; anything before them
//! (echoes, line noise) is ignored.

use heapless::HistoryBuffer;

use crate::protocol::{RESPONSE_CHECKSUM, RESPONSE_MEMORY, RESPONSE_OK};

/// Two-letter answer to a page frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    /// `"OK"`: page programmed.
    Ok,
    /// `"CK"`: frame CRC did not match.
    ChecksumError,
    /// `"ER"`: writing program memory failed.
    MemoryError,
}

impl ResponseCode {
    pub fn from_tail(tail: [u8; 2]) -> Option<Self> {
        match tail {
            RESPONSE_OK => Some(Self::Ok),
            RESPONSE_CHECKSUM => Some(Self::ChecksumError),
            RESPONSE_MEMORY => Some(Self::MemoryError),
            _ => None,
        }
    }
}

/// Last two bytes seen on the link.
pub struct ResponseTail {
    recent: HistoryBuffer<u8, 2>,
}

impl Default for ResponseTail {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseTail {
    pub fn new() -> Self {
        Self {
            recent: HistoryBuffer::new(),
        }
    }

    pub fn push(&mut self, byte: u8) {
        self.recent.write(byte);
    }

    /// The two most recent bytes, oldest first, once at least two arrived.
    pub fn tail(&self) -> Option<[u8; 2]> {
        let mut bytes = self.recent.oldest_ordered();
        match (bytes.next(), bytes.next()) {
            (Some(&first), Some(&second)) => Some([first, second]),
            _ => None,
        }
    }

    /// `None` means nothing recognisable arrived.
    pub fn classify(&self) -> Option<ResponseCode> {
        self.tail().and_then(ResponseCode::from_tail)
    }
}
