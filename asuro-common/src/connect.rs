// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Matcher for the bootloader's `"ASURO"` greeting.
//!
//! Bytes arrive one at a time from a noisy IR link. An `'A'` always
//! (re)starts the match; any other unexpected byte drops back to `Idle`.

use crate::protocol::CONNECT_MARKER;

// One state per marker prefix, from empty to complete
const _: () = assert!(CONNECT_MARKER.len() == 5);

/// Progress through `"ASURO"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectState {
    #[default]
    Idle,
    SawA,
    SawAS,
    SawASU,
    SawASUR,
    Matched,
}

impl ConnectState {
    /// Number of marker bytes matched so far.
    pub fn matched_len(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::SawA => 1,
            Self::SawAS => 2,
            Self::SawASU => 3,
            Self::SawASUR => 4,
            Self::Matched => 5,
        }
    }

    fn from_matched_len(len: usize) -> Self {
        match len {
            1 => Self::SawA,
            2 => Self::SawAS,
            3 => Self::SawASU,
            4 => Self::SawASUR,
            5 => Self::Matched,
            _ => Self::Idle,
        }
    }

    /// Advance by one received byte.
    pub fn next(self, byte: u8) -> Self {
        if byte == CONNECT_MARKER[0] {
            return Self::SawA;
        }

        match self {
            // A completed match only yields to a new 'A'
            Self::Matched => Self::Matched,
            state if byte == CONNECT_MARKER[state.matched_len()] => {
                Self::from_matched_len(state.matched_len() + 1)
            }
            _ => Self::Idle,
        }
    }

    /// Feed every byte of `bytes` through [`next`](Self::next).
    pub fn scan(self, bytes: &[u8]) -> Self {
        bytes.iter().fold(self, |state, &b| state.next(b))
    }

    pub fn is_matched(self) -> bool {
        self == ConnectState::Matched
    }
}
