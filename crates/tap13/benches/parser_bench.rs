// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Build a TAP stream with `n` tests, a YAML block every tenth test
fn synthetic_tap(n: usize) -> Vec<String> {
    let mut lines = vec!["TAP version 13".to_string(), format!("1..{n}")];
    for i in 1..=n {
        match i % 10 {
            0 => {
                lines.push(format!("not ok {i} - failing test"));
                lines.push("  ---".to_string());
                lines.push("  message: 'assertion failed'".to_string());
                lines.push("  ...".to_string());
            }
            3 => lines.push(format!("ok {i} - skipped # SKIP not on this platform")),
            7 => lines.push(format!("not ok {i} - pending # TODO implement")),
            _ => lines.push(format!("ok {i} - passing test")),
        }
        if i % 25 == 0 {
            lines.push(format!("# checkpoint {i}"));
        }
    }
    lines
}

fn parse_benchmarks(c: &mut Criterion) {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/edge_cases.tap13");
    let edge_cases = tap13::read_lines(fixture).expect("Failed to read edge case fixture");

    c.bench_function("parse_edge_cases", |b| {
        b.iter(|| tap13::parse(black_box(&edge_cases)))
    });

    let mut group = c.benchmark_group("scaling");
    for size in [100, 1_000, 10_000].iter() {
        let lines = synthetic_tap(*size);
        group.bench_with_input(BenchmarkId::new("parse", size), &lines, |b, lines| {
            b.iter(|| tap13::parse(black_box(lines)))
        });
    }
    group.finish();
}

fn render_benchmarks(c: &mut Criterion) {
    let results = tap13::parse(&synthetic_tap(1_000));

    c.bench_function("render_text", |b| b.iter(|| black_box(&results).to_string()));
    c.bench_function("render_json", |b| {
        b.iter(|| tap13::report::to_json(black_box(&results), false).expect("serialize"))
    });
}

criterion_group!(benches, parse_benchmarks, render_benchmarks);
criterion_main!(benches);
