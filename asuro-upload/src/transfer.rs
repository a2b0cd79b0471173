// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Send one page frame and wait for the bootloader's verdict.

use std::fmt;

use asuro_common::{Frame, ResponseCode, ResponseTail};

use crate::config::Timing;
use crate::transport::{Link, LinkError};

/// Result of pushing one frame through the retry loop.
#[derive(Debug)]
pub enum TransferOutcome {
    /// `"OK"`: page programmed.
    Ok,
    /// `"CK"`: the bootloader saw a CRC mismatch.
    ChecksumError,
    /// `"ER"`: programming the flash page failed.
    MemoryError,
    /// No recognisable answer.
    Timeout,
    /// The link broke; never retried.
    Link(LinkError),
}

impl TransferOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<Option<ResponseCode>> for TransferOutcome {
    fn from(code: Option<ResponseCode>) -> Self {
        match code {
            Some(ResponseCode::Ok) => Self::Ok,
            Some(ResponseCode::ChecksumError) => Self::ChecksumError,
            Some(ResponseCode::MemoryError) => Self::MemoryError,
            None => Self::Timeout,
        }
    }
}

impl fmt::Display for TransferOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::ChecksumError => f.write_str("CRC error"),
            Self::MemoryError => f.write_str("memory error"),
            Self::Timeout => f.write_str("timeout"),
            Self::Link(e) => write!(f, "link error: {}", e),
        }
    }
}

/// Send `frame` until it is acknowledged or the retry budget is spent.
///
/// Checksum errors, memory errors and timeouts are all retried the same
/// way; the last one seen is returned when the budget runs out.
pub fn send_frame<L: Link>(link: &mut L, frame: &Frame, timing: &Timing) -> TransferOutcome {
    let mut retries_left = timing.page_retries;

    loop {
        if let Err(e) = link.send(frame.as_ref()) {
            return TransferOutcome::Link(e);
        }
        timing.settle();

        let mut tail = ResponseTail::new();
        link.drain(|byte| tail.push(byte));

        let outcome = TransferOutcome::from(tail.classify());
        if outcome.is_ok() {
            return outcome;
        }

        if retries_left == 0 {
            log::warn!("Page {}: {}", frame.page(), outcome);
            return outcome;
        }
        log::warn!("Page {}: {}. Retrying", frame.page(), outcome);
        retries_left -= 1;
    }
}
