// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reading TAP input into lines

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::TapError;

/// Read a TAP file into lines, without line terminators
///
/// # Errors
///
/// Returns `TapError::Io` if the file cannot be opened or read.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, TapError> {
    let path = path.as_ref();
    let io_error = |source| TapError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;
    debug!(path = %path.display(), lines = lines.len(), "Read TAP file");
    Ok(lines)
}

/// Read TAP lines from any buffered reader, e.g. stdin
///
/// # Errors
///
/// Returns `TapError::Stream` if reading fails.
pub fn read_lines_from(reader: impl BufRead) -> Result<Vec<String>, TapError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}
