// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial transport layer for the IR transceiver.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};
use thiserror::Error;

use asuro_common::protocol::BAUD_RATE;

/// Failure of the byte channel itself, as opposed to a silent or unhappy device.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("failed to open device `{device}`")]
    Open {
        device: String,
        #[source]
        source: serialport::Error,
    },
    #[error("serial I/O error")]
    Io(#[from] io::Error),
}

/// Duplex byte channel to the bootloader.
pub trait Link {
    /// Write all of `bytes` and wait until they have left the transmitter.
    fn send(&mut self, bytes: &[u8]) -> Result<(), LinkError>;

    /// Take one pending byte without blocking. `None` means nothing is pending.
    fn recv_byte(&mut self) -> Option<u8>;

    /// Release the channel.
    fn close(self)
    where
        Self: Sized,
    {
    }

    /// Hand every pending byte to `sink` until the receive side runs dry.
    fn drain(&mut self, mut sink: impl FnMut(u8))
    where
        Self: Sized,
    {
        while let Some(byte) = self.recv_byte() {
            sink(byte);
        }
    }
}

/// IR transceiver attached to a serial port.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    /// Open `device` at 2400 baud 8N1 with polling reads and flush stale data.
    pub fn open(device: &str) -> Result<Self, LinkError> {
        let port = serialport::new(device, BAUD_RATE)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::ZERO)
            .open()
            .map_err(|source| LinkError::Open {
                device: device.to_string(),
                source,
            })?;

        // Discard whatever the transceiver buffered before we arrived
        if let Err(e) = port.clear(ClearBuffer::All) {
            log::warn!("Failed to flush {}: {}", device, e);
        }

        Ok(Self { port })
    }

    /// Get the port name.
    pub fn port_name(&self) -> String {
        self.port.name().unwrap_or_else(|| "?".to_string())
    }
}

/// Write `bytes` in full, then wait for the transmitter to drain.
///
/// Only the write can fail the send; a failed drain is logged because the
/// bytes have already been handed to the driver.
pub(crate) fn write_drained<W: Write + ?Sized>(port: &mut W, bytes: &[u8]) -> Result<(), LinkError> {
    // write_all turns a short write into WriteZero
    port.write_all(bytes)?;
    if let Err(e) = port.flush() {
        log::warn!("Failed to drain transmit buffer: {}", e);
    }
    Ok(())
}

impl Link for SerialLink {
    fn send(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        write_drained(self.port.as_mut(), bytes)
    }

    fn recv_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.port.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {
                None
            }
            Err(e) => {
                log::error!("Serial read error: {}", e);
                None
            }
        }
    }

    fn close(self) {
        log::debug!("Closing {}", self.port_name());
    }
}
