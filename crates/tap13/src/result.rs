// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result types

use serde::{Deserialize, Serialize};

/// Possible test outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    /// `ok` without a directive
    Passed,
    /// `not ok` without a directive
    Failed,
    /// Test carried a `# SKIP` directive
    Skipped,
    /// Test carried a `# TODO` directive
    Todo,
}

/// The number reported on a test line
///
/// Omitting the number and reporting one that does not fit in an `i64`
/// are kept apart here; [`TestNumber::as_i64`] folds them back into the
/// conventional `-1` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum TestNumber {
    /// No number on the line
    #[default]
    Unknown,
    /// Digits were present but overflowed
    Overflowed,
    /// A parsed number
    Value(i64),
}

impl TestNumber {
    /// Number as reported to consumers: `None` when absent, `-1` on overflow
    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Unknown => None,
            Self::Overflowed => Some(-1),
            Self::Value(n) => Some(n),
        }
    }
}

/// A single test result line, plus anything attached to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    /// Test number, if the line carried one
    pub number: TestNumber,
    /// Outcome of the test
    ///
    /// `None` only for lines that appeared after every planned test had
    /// already been counted.
    pub outcome: Option<TestOutcome>,
    /// Description following the test number
    pub description: String,
    /// Directive text after `#`, starting with the directive word
    pub directive_text: String,
    /// Trimmed, non-empty comment lines following the test
    pub diagnostics: Vec<String>,
    /// Raw YAML block following the test
    pub yaml: Vec<u8>,
}

impl Test {
    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == Some(TestOutcome::Passed)
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.outcome == Some(TestOutcome::Failed)
    }

    /// Check if the test was skipped
    #[must_use]
    pub fn skipped(&self) -> bool {
        self.outcome == Some(TestOutcome::Skipped)
    }

    /// Check if the test is marked todo
    #[must_use]
    pub fn todo(&self) -> bool {
        self.outcome == Some(TestOutcome::Todo)
    }

    /// YAML block as text, if it is valid UTF-8
    #[must_use]
    pub fn yaml_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.yaml).ok()
    }
}

/// Aggregated results of a TAP stream
///
/// `expected_tests` and `tap_version` use `-1` when the input had no plan or
/// no version header, respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Results {
    /// Declared plan size, or -1 without a plan
    pub expected_tests: i64,
    /// Tests counted
    pub total_tests: usize,
    /// Tests passed
    pub passed_tests: usize,
    /// Tests failed
    pub failed_tests: usize,
    /// Tests skipped
    pub skipped_tests: usize,
    /// Tests marked todo
    pub todo_tests: usize,
    /// TAP version from the header, or -1 if none was found
    pub tap_version: i64,
    /// Whether a `Bail out!` line was seen
    pub bail_out: bool,
    /// Reason given after `Bail out!`
    pub bail_out_reason: String,
    /// Test records in input order
    pub tests: Vec<Test>,
    /// The input lines
    pub lines: Vec<String>,
    /// Comment lines seen before the first test
    pub explanation: Vec<String>,
}

impl Results {
    /// Create results for an input that has not been parsed yet
    #[must_use]
    pub fn empty(lines: Vec<String>) -> Self {
        Self {
            expected_tests: -1,
            total_tests: 0,
            passed_tests: 0,
            failed_tests: 0,
            skipped_tests: 0,
            todo_tests: 0,
            tap_version: -1,
            bail_out: false,
            bail_out_reason: String::new(),
            tests: Vec::new(),
            lines,
            explanation: Vec::new(),
        }
    }

    /// Whether a TAP version header was found
    #[must_use]
    pub fn found_tap_data(&self) -> bool {
        self.tap_version >= 0
    }

    /// The declared plan size, if any
    #[must_use]
    pub fn plan(&self) -> Option<usize> {
        usize::try_from(self.expected_tests).ok()
    }

    /// Number of planned tests that never reported
    #[must_use]
    pub fn missing_tests(&self) -> usize {
        self.plan()
            .map_or(0, |expected| expected.saturating_sub(self.total_tests))
    }

    /// Get failing tests
    #[must_use]
    pub fn failing_tests(&self) -> Vec<&Test> {
        self.tests.iter().filter(|t| t.failed()).collect()
    }

    /// Check if the run should be considered passing
    ///
    /// A run without a TAP header, or one that bailed out, always fails.
    /// Otherwise every planned test (or, without a plan, every test seen)
    /// must have passed, been skipped, or be marked todo.
    #[must_use]
    pub fn is_passing(&self) -> bool {
        if !self.found_tap_data() || self.bail_out {
            return false;
        }
        let target = self.plan().unwrap_or(self.total_tests);
        self.todo_tests + self.skipped_tests + self.passed_tests == target
    }

    pub(crate) fn record(&mut self, outcome: TestOutcome) {
        self.total_tests += 1;
        match outcome {
            TestOutcome::Passed => self.passed_tests += 1,
            TestOutcome::Failed => self.failed_tests += 1,
            TestOutcome::Skipped => self.skipped_tests += 1,
            TestOutcome::Todo => self.todo_tests += 1,
        }
    }
}

impl Default for Results {
    fn default() -> Self {
        Self::empty(Vec::new())
    }
}
