// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! One complete upload: handshake, every page, then the exit page.

use std::io::{self, Read, Write};

use indicatif::ProgressBar;
use thiserror::Error;

use asuro_common::{Frame, FrameBuilder};

use crate::config::Timing;
use crate::handshake::{connect, ConnectError};
use crate::transfer::{send_frame, TransferOutcome};
use crate::transport::Link;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("handshake failed")]
    Connect(#[from] ConnectError),
    #[error("failed to program page {page}: {outcome}")]
    Page { page: u8, outcome: TransferOutcome },
    #[error("image input failed")]
    Input(#[source] io::Error),
}

/// Write the hex dump of every frame in `source` to `out`, one per line.
///
/// Returns the number of frames written.
pub fn dump<R: Read, W: Write>(mut source: R, mut out: W) -> io::Result<usize> {
    let mut builder = FrameBuilder::new();
    let mut pages = 0;

    while let Some((frame, _)) = builder.next_frame(&mut source)? {
        writeln!(out, "{}", frame)?;
        pages += 1;
    }
    out.flush()?;

    Ok(pages)
}

/// Program every page of `source` into the device behind `link`.
///
/// Stops at the first page that is not acknowledged. On success the exit
/// page is sent so the bootloader leaves programming mode. Returns the
/// number of pages programmed.
pub fn flash<L: Link, R: Read>(
    link: &mut L,
    mut source: R,
    timing: &Timing,
    progress: &ProgressBar,
) -> Result<usize, SessionError> {
    log::info!("Connecting..");
    connect(link, timing)?;
    log::info!("Bootloader in programming mode");

    let mut builder = FrameBuilder::new();
    let mut pages = 0;

    while let Some((frame, _)) = builder.next_frame(&mut source).map_err(SessionError::Input)? {
        log::debug!("Sending page {:3}", frame.page());

        let outcome = send_frame(link, &frame, timing);
        if !outcome.is_ok() {
            progress.abandon();
            return Err(SessionError::Page {
                page: frame.page(),
                outcome,
            });
        }

        pages += 1;
        progress.inc(1);
    }

    // The bootloader ignores a failure here; so do we, beyond logging it
    if let Err(e) = link.send(Frame::final_page().as_ref()) {
        log::warn!("Exit page not sent: {}", e);
    }
    progress.finish();

    Ok(pages)
}

/// Run one session.
///
/// Without a link the frames are dumped to `out` instead of transmitted.
/// With a link the image is flashed and the link is closed afterwards,
/// whatever the outcome.
pub fn run<L: Link, R: Read, W: Write>(
    source: R,
    link: Option<L>,
    out: W,
    timing: &Timing,
    progress: &ProgressBar,
) -> Result<(), SessionError> {
    match link {
        None => {
            let pages = dump(source, out).map_err(SessionError::Input)?;
            log::debug!("Dumped {} frames", pages);
            Ok(())
        }
        Some(mut link) => {
            let result = flash(&mut link, source, timing, progress);
            link.close();
            let pages = result?;
            log::info!("{} pages programmed", pages);
            Ok(())
        }
    }
}
