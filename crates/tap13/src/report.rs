// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering
//!
//! Two views of a finished [`Results`]:
//! - the fixed-layout text report (`Display for Results`), whose labels are
//!   right-aligned to a common column;
//! - a [`Summary`] digest that serializes to JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TapError;
use crate::result::Results;

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_passing() { "PASS" } else { "FAIL" };
        writeln!(f, " Overall result: {verdict}")?;
        if self.total_tests == 0 || self.passed_tests != self.total_tests {
            writeln!(f, "Total tests run: {}", self.total_tests)?;
        }
        if let Some(expected) = self.plan().filter(|&n| n > 0) {
            if expected != self.total_tests {
                writeln!(f, " Expected tests: {expected}")?;
            }
            if self.total_tests < expected {
                writeln!(f, "  Missing tests: {}", expected - self.total_tests)?;
            }
        }
        if self.passed_tests > 0 {
            writeln!(f, "   Passed tests: {}", self.passed_tests)?;
        }
        if self.failed_tests > 0 {
            writeln!(f, "   Failed tests: {}", self.failed_tests)?;
        }
        if self.skipped_tests > 0 {
            writeln!(f, "  Skipped tests: {}", self.skipped_tests)?;
        }
        if self.todo_tests > 0 {
            writeln!(f, "     TODO tests: {}", self.todo_tests)?;
        }
        if self.bail_out {
            let reason = if self.bail_out_reason.is_empty() {
                "(no reason given)"
            } else {
                self.bail_out_reason.as_str()
            };
            writeln!(f, "     Bailed out: {reason}")?;
        }
        Ok(())
    }
}

/// A failed test, as listed in a [`Summary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedTest {
    /// Test number, -1 if it overflowed
    pub number: Option<i64>,
    /// Test description
    pub description: String,
    /// Diagnostics attached to the test
    pub diagnostics: Vec<String>,
}

/// Machine-readable digest of a TAP run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Overall verdict
    pub passing: bool,
    /// TAP version, if a header was found
    pub tap_version: Option<i64>,
    /// Declared plan size
    pub expected: Option<usize>,
    /// Tests counted
    pub total: usize,
    /// Tests passed
    pub passed: usize,
    /// Tests failed
    pub failed: usize,
    /// Tests skipped
    pub skipped: usize,
    /// Tests marked todo
    pub todo: usize,
    /// Planned tests that never reported
    pub missing: usize,
    /// Bail-out reason, `Some("")` for a bail out without one
    pub bail_out: Option<String>,
    /// Failed tests in input order
    pub failures: Vec<FailedTest>,
}

impl From<&Results> for Summary {
    fn from(results: &Results) -> Self {
        Self {
            passing: results.is_passing(),
            tap_version: results.found_tap_data().then_some(results.tap_version),
            expected: results.plan(),
            total: results.total_tests,
            passed: results.passed_tests,
            failed: results.failed_tests,
            skipped: results.skipped_tests,
            todo: results.todo_tests,
            missing: results.missing_tests(),
            bail_out: results
                .bail_out
                .then(|| results.bail_out_reason.clone()),
            failures: results
                .failing_tests()
                .into_iter()
                .map(|t| FailedTest {
                    number: t.number.as_i64(),
                    description: t.description.clone(),
                    diagnostics: t.diagnostics.clone(),
                })
                .collect(),
        }
    }
}

/// Render results as a JSON [`Summary`]
///
/// # Errors
///
/// Returns `TapError::Json` if serialization fails.
pub fn to_json(results: &Results, pretty: bool) -> Result<String, TapError> {
    let summary = Summary::from(results);
    let json = if pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    Ok(json)
}
