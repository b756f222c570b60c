// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for TAP parsing
//!
//! Parses arbitrary text and checks the counter invariants on the result.

#![no_main]

use libfuzzer_sys::fuzz_target;

use tap13::{classify, parse_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let results = parse_str(input);

        assert_eq!(
            results.total_tests,
            results.passed_tests + results.failed_tests + results.skipped_tests + results.todo_tests
        );
        // A single non-zero plan ahead of every test line bounds the count
        let lines: Vec<&str> = input.lines().collect();
        let plans: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| classify::plan(l).is_some())
            .map(|(i, _)| i)
            .collect();
        let first_test = lines.iter().position(|l| classify::test_line(l).is_some());
        if let ([plan_at], Some(expected)) = (plans.as_slice(), results.plan()) {
            if expected > 0 && first_test.is_none_or(|t| *plan_at < t) {
                assert!(results.total_tests <= expected);
            }
        }

        // Rendering should never panic
        let _ = results.to_string();
        let _ = tap13::report::to_json(&results, false);
    }
});
