// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use asuro_common::protocol::{MAX_FILE_SIZE, PAGE_SIZE};

use crate::config::{Timing, DEFAULT_CONNECT_RETRIES, DEFAULT_PAGE_RETRIES, DEFAULT_SETTLE_MS};
use crate::session;
use crate::transport::SerialLink;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "asuro-upload", version)]
#[command(about = "Flash a raw binary image into the ASURO robot over its IR link")]
pub struct Cli {
    /// Raw binary image to flash. Read from stdin if not given.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Serial device of the IR transceiver (e.g., /dev/ttyS0).
    /// Without it, frames are printed as hex to stdout.
    #[arg(short, long, value_name = "DEVICE")]
    pub device: Option<String>,

    /// Wait after each send before reading the answer, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_SETTLE_MS)]
    pub settle_ms: u64,

    /// Extra "Flash" attempts before giving up on the handshake
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CONNECT_RETRIES)]
    pub connect_retries: u32,

    /// Extra attempts per page
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_RETRIES)]
    pub page_retries: u32,

    /// Log every page and handshake attempt
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn timing(&self) -> Timing {
        Timing {
            settle_delay: Duration::from_millis(self.settle_ms),
            connect_retries: self.connect_retries,
            page_retries: self.page_retries,
        }
    }
}

/// Read the whole image from `path`, or stdin.
fn read_image(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to open file `{}`", path.display()))
        }
        None => {
            let mut image = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut image)
                .context("Failed to read image from stdin")?;
            Ok(image)
        }
    }
}

fn page_count(len: usize) -> u64 {
    len.div_ceil(PAGE_SIZE) as u64
}

fn progress_bar(pages: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(pages);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages ({eta})")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let timing = cli.timing();
    let image = read_image(cli.input.as_deref())?;

    if image.len() > MAX_FILE_SIZE {
        log::warn!(
            "Image is {} bytes, the device holds at most {}; page numbers past the limit will not fit",
            image.len(),
            MAX_FILE_SIZE
        );
    }

    let Some(device) = cli.device.as_deref() else {
        let stdout = io::stdout();
        session::run(
            &image[..],
            None::<SerialLink>,
            stdout.lock(),
            &timing,
            &ProgressBar::hidden(),
        )?;
        return Ok(());
    };

    let link = SerialLink::open(device)?;
    let pages = page_count(image.len());
    log::info!(
        "Image: {} bytes, {} pages, device {}",
        image.len(),
        pages,
        link.port_name()
    );

    let pb = progress_bar(pages)?;
    session::run(&image[..], Some(link), io::sink(), &timing, &pb)?;

    Ok(())
}
