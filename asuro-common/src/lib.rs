// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Protocol building blocks for the ASURO IR bootloader.
//!
//! This crate supports both `no_std` and `std` environments:
//! - Default: `no_std`, pure frame/CRC/handshake logic
//! - `std` feature: adds the `std::io::Read` entry point of the frame builder

#![cfg_attr(not(feature = "std"), no_std)]

pub mod connect;
pub mod crc;
pub mod frame;
pub mod protocol;
pub mod response;

// Re-export commonly used types
pub use connect::ConnectState;
pub use crc::crc16;
pub use frame::{Frame, FrameBuilder};
pub use protocol::{CONNECT_MARKER, FLASH_COMMAND, FRAME_SIZE, MAX_FILE_SIZE, PAGE_SIZE};
pub use response::{ResponseCode, ResponseTail};
