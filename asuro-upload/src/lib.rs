// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host side of the ASURO IR bootloader protocol.
//!
//! The link is abstracted behind [`transport::Link`] so the handshake and
//! page transfer logic can run against real serial ports or in-memory fakes.

pub mod cli;
pub mod config;
pub mod handshake;
pub mod session;
pub mod transfer;
pub mod transport;

pub use config::Timing;
pub use handshake::{connect, ConnectError};
pub use session::SessionError;
pub use transfer::{send_frame, TransferOutcome};
pub use transport::{Link, LinkError, SerialLink};
