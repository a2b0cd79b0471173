// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Timing and retry budgets for talking to the bootloader.

use std::time::Duration;

/// Wait after each send before collecting the answer.
pub const DEFAULT_SETTLE_MS: u64 = 100;
/// Extra "Flash" attempts before giving up on the handshake.
pub const DEFAULT_CONNECT_RETRIES: u32 = 100;
/// Extra attempts per page after a bad or missing answer.
pub const DEFAULT_PAGE_RETRIES: u32 = 10;

/// Fixed delays and retry budgets.
///
/// A retry count of `n` allows `n + 1` attempts in total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    pub settle_delay: Duration,
    pub connect_retries: u32,
    pub page_retries: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_MS),
            connect_retries: DEFAULT_CONNECT_RETRIES,
            page_retries: DEFAULT_PAGE_RETRIES,
        }
    }
}

impl Timing {
    /// Same budgets, no settle delay. Used against in-memory links.
    pub fn immediate() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Block for the settle delay, if any.
    pub fn settle(&self) {
        if !self.settle_delay.is_zero() {
            std::thread::sleep(self.settle_delay);
        }
    }
}
