// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classifiers
//!
//! Each classifier looks at a single line, independent of parser state, and
//! returns a structured match or `None`. Numeric captures are kept as a
//! [`Number`] result: a line can match its pattern and still carry a number
//! that does not fit in an `i64`.

use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::Regex;

use crate::result::TestNumber;

/// A decoded numeric capture
pub type Number = Result<i64, ParseIntError>;

static VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^TAP version ([0-9]+)").expect("valid regex"));

static BAIL_OUT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Bail out![ \t\n\x0C\r]*([^ \t\n\x0C\r].*)?$").expect("valid regex")
});

static PLAN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\.([0-9]+)$").expect("valid regex"));

// `ok` must end at an ASCII word boundary: "okay" is not a test line.
static TEST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(not )?ok((?:[^0-9A-Za-z_].*)?)$").expect("valid regex")
});

static TEST_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[ \t\n\x0C\r]*([0-9]*)[ \t\n\x0C\r]*",
        r"((?:\\.|[^#])*)",
        r"(?:#[ \t\n\x0C\r]*(([0-9A-Za-z_]*).*))?",
    ))
    .expect("valid regex")
});

/// A `TAP version N` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
    /// The declared version
    pub version: Number,
}

/// A `Bail out!` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BailOutLine<'a> {
    /// Trimmed reason, empty if none was given
    pub reason: &'a str,
}

/// A `1..N` plan line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLine {
    /// The declared test count
    pub count: Number,
}

/// An `ok` / `not ok` line, before its tail is decomposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestLine<'a> {
    /// Line started with `not `
    pub not_ok: bool,
    /// Everything after `ok`
    pub tail: &'a str,
}

/// A `#` directive on a test line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// The directive word, e.g. `SKIP`; may be empty
    pub word: &'a str,
    /// Text from the directive word to the end of the line
    pub text: &'a str,
}

impl Directive<'_> {
    /// Directive word is `skip`, in any case
    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.word.eq_ignore_ascii_case("skip")
    }

    /// Directive word is `todo`, in any case
    #[must_use]
    pub fn is_todo(&self) -> bool {
        self.word.eq_ignore_ascii_case("todo")
    }
}

/// The tail of a test line split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTail<'a> {
    /// Leading digits, if any
    pub digits: &'a str,
    /// Trimmed description with `\#` unescaped
    pub description: String,
    /// Directive, if the tail contained an unescaped `#`
    pub directive: Option<Directive<'a>>,
}

impl TestTail<'_> {
    /// Decode the leading digits into a test number
    #[must_use]
    pub fn number(&self) -> TestNumber {
        if self.digits.is_empty() {
            return TestNumber::Unknown;
        }
        match self.digits.parse::<i64>() {
            Ok(n) => TestNumber::Value(n),
            Err(_) => TestNumber::Overflowed,
        }
    }
}

/// Match a `TAP version N` header
#[must_use]
pub fn version(line: &str) -> Option<VersionLine> {
    let caps = VERSION_LINE.captures(line)?;
    Some(VersionLine {
        version: caps[1].parse(),
    })
}

/// Match a `Bail out!` line
#[must_use]
pub fn bail_out(line: &str) -> Option<BailOutLine<'_>> {
    let caps = BAIL_OUT_LINE.captures(line)?;
    let reason = caps.get(1).map_or("", |m| m.as_str().trim());
    Some(BailOutLine { reason })
}

/// Match a `1..N` plan line
#[must_use]
pub fn plan(line: &str) -> Option<PlanLine> {
    let caps = PLAN_LINE.captures(line)?;
    Some(PlanLine {
        count: caps[1].parse(),
    })
}

/// Match an `ok` or `not ok` line
#[must_use]
pub fn test_line(line: &str) -> Option<TestLine<'_>> {
    let caps = TEST_LINE.captures(line)?;
    Some(TestLine {
        not_ok: caps.get(1).is_some(),
        tail: caps.get(2).map_or("", |m| m.as_str()),
    })
}

/// Split the tail of a test line into number, description and directive
#[must_use]
pub fn test_tail(tail: &str) -> TestTail<'_> {
    // Every part of the pattern is optional, so it matches any input.
    let Some(caps) = TEST_TAIL.captures(tail) else {
        return TestTail {
            digits: "",
            description: tail.trim().to_string(),
            directive: None,
        };
    };

    let digits = caps.get(1).map_or("", |m| m.as_str());
    let description = caps
        .get(2)
        .map_or("", |m| m.as_str())
        .trim()
        .replace("\\#", "#");
    let directive = caps.get(3).map(|text| Directive {
        word: caps.get(4).map_or("", |m| m.as_str()),
        text: text.as_str(),
    });

    TestTail {
        digits,
        description,
        directive,
    }
}

/// Match a comment line, returning its trimmed text
///
/// Lines whose comment is blank do not match.
#[must_use]
pub fn comment(line: &str) -> Option<&str> {
    let (_, text) = line.split_once('#')?;
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

/// Match the `---` line opening a YAML block
#[must_use]
pub fn yaml_start(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_ascii_whitespace()) == "---"
}

/// Match the `...` line closing a YAML block
#[must_use]
pub fn yaml_end(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_ascii_whitespace()) == "..."
}
