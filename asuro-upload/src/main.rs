// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Firmware upload tool for the ASURO bootloader via IR serial link.
//!
//! Usage:
//!   asuro-upload -i firmware.bin -d /dev/ttyS0
//!   asuro-upload -d /dev/ttyS0 < firmware.bin
//!   asuro-upload -i firmware.bin            (hex dump, nothing sent)

use std::process::ExitCode;

use asuro_upload::cli;
use clap::Parser;

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help goes to stdout with success, usage errors to stderr with 1
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logger(args.verbose);

    match cli::run(args) {
        Ok(()) => {
            log::info!("Success.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
