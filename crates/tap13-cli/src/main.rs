// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tap13: summarize TAP version 13 test output
//!
//! This binary reads one or more TAP files (or stdin), and prints an overall
//! verdict and test counts for each.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use tap13_cli::config::Config;
use tap13_cli::summarize::{EXIT_UNREADABLE, summarize};

fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize tracing subscriber; TAP13_LOG overrides the flags
    let filter = EnvFilter::try_from_env("TAP13_LOG")
        .unwrap_or_else(|_| EnvFilter::default().add_directive(config.log_level().into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::from(EXIT_UNREADABLE);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = match summarize(&config, io::stdin().lock(), &mut out) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{e:#}");
            return ExitCode::from(EXIT_UNREADABLE);
        }
    };
    if let Err(e) = out.flush() {
        error!("Failed to flush output: {e}");
        return ExitCode::from(EXIT_UNREADABLE);
    }

    debug!(?outcome, "Done");
    ExitCode::from(outcome.exit_code(config.check))
}
