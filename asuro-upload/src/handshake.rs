// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bring the bootloader into programming mode.
//!
//! The robot only listens for a short window after reset, so the host keeps
//! sending `"Flash"` until `"ASURO"` comes back or the budget runs out.

use thiserror::Error;

use asuro_common::{ConnectState, FLASH_COMMAND};

use crate::config::Timing;
use crate::transport::{Link, LinkError};

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("link failure during handshake")]
    Link(#[from] LinkError),
    #[error("no answer from bootloader after {attempts} attempts")]
    NoResponse { attempts: u32 },
}

/// Send `"Flash"` until the bootloader greets with `"ASURO"`.
pub fn connect<L: Link>(link: &mut L, timing: &Timing) -> Result<(), ConnectError> {
    let attempts = timing.connect_retries.saturating_add(1);

    for attempt in 1..=attempts {
        link.send(FLASH_COMMAND)?;
        timing.settle();

        let mut state = ConnectState::Idle;
        link.drain(|byte| state = state.next(byte));

        if state.is_matched() {
            log::debug!("Bootloader answered on attempt {}", attempt);
            return Ok(());
        }
        log::debug!("No greeting (attempt {}/{})", attempt, attempts);
    }

    Err(ConnectError::NoResponse { attempts })
}
