// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Summarizing TAP inputs
//!
//! Reads each configured input, parses it, and writes one summary per input.
//! An unreadable file is logged and counted but does not stop the remaining
//! inputs from being summarized.
//!
//! # Example
//!
//! ```no_run
//! use tap13_cli::config::Config;
//! use tap13_cli::summarize::summarize;
//!
//! let config = Config::default();
//! let mut out = Vec::new();
//! let outcome = summarize(&config, std::io::stdin().lock(), &mut out).expect("summarize");
//! println!("{} inputs failed", outcome.failing);
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, error, info};

use tap13::{Results, Summary, TapError};

use crate::config::{Config, Input, OutputFormat};

/// Exit status when every input was read and, with `--check`, passed
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when `--check` is set and an input failed its verdict
pub const EXIT_FAILING: u8 = 1;
/// Exit status when an input could not be read
pub const EXIT_UNREADABLE: u8 = 2;

/// Counts gathered while summarizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Inputs parsed and summarized
    pub summarized: usize,
    /// Summarized inputs whose verdict was fail
    pub failing: usize,
    /// Inputs that could not be read
    pub unreadable: usize,
}

impl RunOutcome {
    /// Process exit status for this outcome
    #[must_use]
    pub fn exit_code(&self, check: bool) -> u8 {
        if self.unreadable > 0 {
            EXIT_UNREADABLE
        } else if check && self.failing > 0 {
            EXIT_FAILING
        } else {
            EXIT_SUCCESS
        }
    }
}

/// JSON record written for each input
#[derive(Debug, Serialize)]
struct InputSummary<'a> {
    file: &'a str,
    #[serde(flatten)]
    summary: Summary,
}

/// Summarize every input named by `config`
///
/// `stdin` is read for the `-` input (or when no files are given).
///
/// # Errors
///
/// Returns an error if writing to `out` fails. Unreadable inputs are not
/// errors; they are counted in [`RunOutcome::unreadable`].
pub fn summarize(
    config: &Config,
    mut stdin: impl BufRead,
    out: &mut impl Write,
) -> Result<RunOutcome> {
    let mut outcome = RunOutcome::default();

    for input in config.inputs() {
        let label = input.label();
        let lines = match read_input(&input, &mut stdin) {
            Ok(lines) => lines,
            Err(e) => {
                error!(input = %label, "{e}");
                outcome.unreadable += 1;
                continue;
            }
        };

        let results = tap13::parse(&lines);
        debug!(
            input = %label,
            lines = lines.len(),
            tests = results.tests.len(),
            "Parsed TAP input"
        );
        if !results.found_tap_data() {
            info!(input = %label, "No TAP version header found");
        }

        write_summary(config.format, &label, &results, out)
            .with_context(|| format!("Failed to write summary for {label}"))?;

        outcome.summarized += 1;
        if !results.is_passing() {
            outcome.failing += 1;
        }
    }

    Ok(outcome)
}

fn read_input(input: &Input, stdin: &mut impl BufRead) -> Result<Vec<String>, TapError> {
    match input {
        Input::Stdin => tap13::read_lines_from(stdin),
        Input::File(path) => tap13::read_lines(path),
    }
}

fn write_summary(
    format: OutputFormat,
    label: &str,
    results: &Results,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{label}")?;
            writeln!(out, "{results}")?;
        }
        OutputFormat::Json => {
            let record = InputSummary {
                file: label,
                summary: Summary::from(results),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
