// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tap13: Test Anything Protocol (TAP) version 13 parsing
//!
//! This library crate turns the lines of a TAP v13 stream into a [`Results`]
//! aggregate: per-test records, counters, and a pass/fail verdict. Malformed
//! input is tolerated line by line rather than rejected.
//!
//! # Example
//!
//! ```
//! use tap13::parse_str;
//!
//! let output = "TAP version 13\n1..3\nok 1\nnot ok 2 # SKIP no network\nok 3\n";
//! let results = parse_str(output);
//! assert!(results.is_passing());
//! assert_eq!(results.skipped_tests, 1);
//! print!("{results}");
//! ```
//!
//! Reading from a file:
//!
//! ```no_run
//! let lines = tap13::read_lines("results.tap").unwrap();
//! let results = tap13::parse(&lines);
//! println!("{}", tap13::report::to_json(&results, true).unwrap());
//! ```

pub mod classify;
pub mod error;
pub mod input;
pub mod parser;
pub mod report;
pub mod result;

pub use error::TapError;
pub use input::{read_lines, read_lines_from};
pub use parser::{parse, parse_str};
pub use report::Summary;
pub use result::{Results, Test, TestNumber, TestOutcome};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TapError;
    pub use crate::parser::{parse, parse_str};
    pub use crate::result::{Results, Test, TestNumber, TestOutcome};
}
