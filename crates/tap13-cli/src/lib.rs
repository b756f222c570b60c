// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tap13-cli library
//!
//! This module exports the command-line configuration and the summarize
//! driver for use in integration tests and by the `tap13` binary.

pub mod config;
pub mod summarize;
