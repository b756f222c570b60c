// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! TAP version 13 parsing
//!
//! The parser is a small state machine driven by the classifiers in
//! [`crate::classify`]. It makes a single pass over the input lines:
//!
//! - before a `TAP version N` header every line is ignored;
//! - after it, plan, test, bail-out and comment lines are recorded;
//! - a `---` line opens a YAML block that runs until `...` and is attached
//!   verbatim to the preceding test.
//!
//! Malformed lines are skipped, never reported as errors.
//!
//! # Example
//!
//! ```
//! use tap13::parse;
//!
//! let results = parse(&["TAP version 13", "1..2", "ok 1 - first", "not ok 2 # TODO later"]);
//! assert_eq!(results.total_tests, 2);
//! assert_eq!(results.todo_tests, 1);
//! assert!(results.is_passing());
//! ```

use tracing::{debug, trace};

use crate::classify;
use crate::result::{Results, Test, TestOutcome};

/// Parse TAP output that has already been split into lines
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Results {
    let lines: Vec<String> = lines.iter().map(|l| l.as_ref().to_owned()).collect();
    let mut parser = Parser::new();
    for line in &lines {
        parser.process_line(line);
    }
    parser.finish(lines)
}

/// Parse TAP output held in a single string
///
/// The text is split on `\n`, with a trailing `\r` removed from each line.
pub fn parse_str(output: &str) -> Results {
    let lines: Vec<&str> = output.lines().collect();
    parse(&lines)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    SeekingVersion,
    InTestStream,
    InYamlBlock,
}

/// Single-pass accumulator; owned by one `parse` call
struct Parser {
    state: ParseState,
    results: Results,
    current: Option<Test>,
    /// Every planned test has been counted
    run_cap_reached: bool,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: ParseState::SeekingVersion,
            results: Results::default(),
            current: None,
            run_cap_reached: false,
        }
    }

    fn process_line(&mut self, line: &str) {
        self.state = match self.state {
            ParseState::SeekingVersion => self.seek_version(line),
            ParseState::InTestStream => self.test_stream_line(line),
            ParseState::InYamlBlock => self.yaml_line(line),
        };
    }

    fn seek_version(&mut self, line: &str) -> ParseState {
        let Some(header) = classify::version(line) else {
            return ParseState::SeekingVersion;
        };
        match header.version {
            Ok(version) => {
                debug!(version, "Found TAP version header");
                self.results.tap_version = version;
                ParseState::InTestStream
            }
            Err(e) => {
                trace!(line, error = %e, "Skipping malformed version line");
                ParseState::SeekingVersion
            }
        }
    }

    fn test_stream_line(&mut self, line: &str) -> ParseState {
        if let Some(bail_out) = classify::bail_out(line) {
            debug!(reason = bail_out.reason, "Bail out");
            self.results.bail_out = true;
            self.results.bail_out_reason = bail_out.reason.to_owned();
            return ParseState::InTestStream;
        }

        // A later valid plan replaces an earlier one.
        if let Some(plan) = classify::plan(line) {
            match plan.count {
                Ok(count) => self.record_plan(count),
                Err(e) => trace!(line, error = %e, "Skipping malformed plan line"),
            }
            return ParseState::InTestStream;
        }

        if let Some(test_line) = classify::test_line(line) {
            self.start_test(test_line.not_ok, test_line.tail);
            return ParseState::InTestStream;
        }

        if classify::yaml_start(line) {
            return ParseState::InYamlBlock;
        }

        if let Some(text) = classify::comment(line) {
            match self.current.as_mut() {
                Some(test) => test.diagnostics.push(text.to_owned()),
                None => self.results.explanation.push(text.to_owned()),
            }
        }
        ParseState::InTestStream
    }

    fn yaml_line(&mut self, line: &str) -> ParseState {
        if classify::yaml_end(line) {
            return ParseState::InTestStream;
        }
        match self.current.as_mut() {
            Some(test) => {
                test.yaml.extend_from_slice(line.as_bytes());
                test.yaml.push(b'\n');
            }
            None => trace!(line, "Dropping YAML outside of a test"),
        }
        ParseState::InYamlBlock
    }

    fn record_plan(&mut self, count: i64) {
        debug!(count, "Found test plan");
        self.results.expected_tests = count;
    }

    fn start_test(&mut self, not_ok: bool, tail: &str) {
        self.flush_current();
        if self.run_cap_reached {
            // Past the plan: stage a blank, uncounted record.
            trace!(tail, "Test line beyond plan; not counted");
            self.current = Some(Test::default());
            return;
        }

        let tail = classify::test_tail(tail);
        let outcome = match tail.directive {
            Some(d) if d.is_skip() => TestOutcome::Skipped,
            Some(d) if d.is_todo() => TestOutcome::Todo,
            _ if not_ok => TestOutcome::Failed,
            _ => TestOutcome::Passed,
        };
        let directive_text = tail
            .directive
            .filter(|d| !d.word.is_empty())
            .map(|d| d.text.to_owned())
            .unwrap_or_default();

        self.results.record(outcome);
        if self.results.plan() == Some(self.results.total_tests) {
            debug!(total = self.results.total_tests, "All planned tests found");
            self.run_cap_reached = true;
        }

        self.current = Some(Test {
            number: tail.number(),
            outcome: Some(outcome),
            description: tail.description,
            directive_text,
            ..Test::default()
        });
    }

    fn flush_current(&mut self) {
        if let Some(test) = self.current.take() {
            self.results.tests.push(test);
        }
    }

    fn finish(mut self, lines: Vec<String>) -> Results {
        self.flush_current();
        self.results.lines = lines;
        debug!(
            total = self.results.total_tests,
            passed = self.results.passed_tests,
            failed = self.results.failed_tests,
            skipped = self.results.skipped_tests,
            todo = self.results.todo_tests,
            "Finished parsing TAP"
        );
        self.results
    }
}
