// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for tap13
//!
//! These tests use proptest to verify the counter invariants hold for
//! arbitrary mixtures of well-formed and malformed TAP lines.

use proptest::prelude::*;
use tap13::{TestNumber, parse};

// ============================================================================
// Strategies
// ============================================================================

/// Generate a single TAP-ish line, biased towards lines the parser recognises
fn tap_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TAP version 13".to_string()),
        Just("ok".to_string()),
        Just("not ok".to_string()),
        (1u32..20).prop_map(|n| format!("1..{n}")),
        Just("1..400000000000000000000000000000".to_string()),
        (any::<bool>(), 0u32..100, "[a-z ]{0,12}").prop_map(|(not_ok, n, desc)| {
            format!("{}ok {n} {desc}", if not_ok { "not " } else { "" })
        }),
        (any::<bool>(), prop_oneof![Just("SKIP"), Just("todo"), Just("other")]).prop_map(
            |(not_ok, directive)| {
                format!("{}ok # {directive} reason", if not_ok { "not " } else { "" })
            }
        ),
        Just("Bail out!".to_string()),
        Just("  ---".to_string()),
        Just("  ...".to_string()),
        "# [a-z ]{0,20}".prop_map(|s| s),
        ".{0,40}".prop_map(|s| s),
    ]
}

fn tap_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tap_line(), 0..60)
}

/// Generate a stream whose only valid plan comes right after the header
fn planned_stream() -> impl Strategy<Value = (i64, Vec<String>)> {
    (1i64..20, tap_lines()).prop_map(|(plan, body)| {
        let mut lines = vec!["TAP version 13".to_string(), format!("1..{plan}")];
        lines.extend(body.into_iter().filter(|l| tap13::classify::plan(l).is_none()));
        (plan, lines)
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_total_is_sum_of_outcomes(lines in tap_lines()) {
        let results = parse(&lines);
        prop_assert_eq!(
            results.total_tests,
            results.passed_tests + results.failed_tests + results.skipped_tests + results.todo_tests
        );
    }

    #[test]
    fn prop_total_never_exceeds_leading_plan((plan, lines) in planned_stream()) {
        let results = parse(&lines);
        prop_assert_eq!(results.expected_tests, plan);
        prop_assert!(results.total_tests as i64 <= plan);
    }

    #[test]
    fn prop_counted_tests_have_records(lines in tap_lines()) {
        let results = parse(&lines);
        let counted = results.tests.iter().filter(|t| t.outcome.is_some()).count();
        prop_assert_eq!(counted, results.total_tests);
    }

    #[test]
    fn prop_no_header_always_fails(lines in tap_lines()) {
        let lines: Vec<String> = lines
            .into_iter()
            .filter(|l| !l.starts_with("TAP version "))
            .collect();
        let results = parse(&lines);
        prop_assert!(!results.found_tap_data());
        prop_assert_eq!(results.total_tests, 0);
        prop_assert!(!results.is_passing());
    }

    #[test]
    fn prop_lines_are_echoed(lines in tap_lines()) {
        let results = parse(&lines);
        prop_assert_eq!(results.lines, lines);
    }

    #[test]
    fn prop_test_numbers_round_trip(numbers in prop::collection::vec(0i64..=i64::MAX, 1..20)) {
        let mut lines = vec!["TAP version 13".to_string()];
        lines.extend(numbers.iter().map(|n| format!("ok {n} - numbered")));
        let results = parse(&lines);
        let parsed: Vec<TestNumber> = results.tests.iter().map(|t| t.number).collect();
        let expected: Vec<TestNumber> = numbers.iter().map(|&n| TestNumber::Value(n)).collect();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn prop_report_starts_with_verdict(lines in tap_lines()) {
        let results = parse(&lines);
        let report = results.to_string();
        let expected = if results.is_passing() {
            " Overall result: PASS\n"
        } else {
            " Overall result: FAIL\n"
        };
        prop_assert!(report.starts_with(expected));
    }
}
