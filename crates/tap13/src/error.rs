// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for tap13
//!
//! Malformed TAP is never an error: the parser skips lines it cannot
//! classify. These errors only cover reading input and serializing output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading TAP input or rendering results
#[derive(Debug, Error)]
pub enum TapError {
    /// Error reading a TAP file
    #[error("Could not open file {path}: {source}")]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error reading TAP from a stream
    #[error("IO error: {0}")]
    Stream(#[from] std::io::Error),

    /// Error serializing results to JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
