// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for test line classification
//!
//! Feeds structured test lines through the parser after a valid header.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TestLineInput {
    not_ok: bool,
    number: Option<String>,
    description: String,
    directive: Option<String>,
}

fuzz_target!(|inputs: Vec<TestLineInput>| {
    let mut lines = vec!["TAP version 13".to_string()];
    for input in &inputs {
        let mut line = String::new();
        if input.not_ok {
            line.push_str("not ");
        }
        line.push_str("ok");
        if let Some(number) = &input.number {
            line.push(' ');
            line.push_str(number);
        }
        line.push(' ');
        line.push_str(&input.description);
        if let Some(directive) = &input.directive {
            line.push_str(" # ");
            line.push_str(directive);
        }
        lines.push(line);
    }

    let results = tap13::parse(&lines);
    assert!(results.tests.len() <= inputs.len());
    assert!(results.total_tests <= results.tests.len());
});
