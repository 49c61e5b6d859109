// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use unlock_patterns::enumerate::enumerate_length;
use unlock_patterns::{enumerate, CrossingSummary, GridTopology, PathAnalyzer, Pattern};

fn bench_enumeration(c: &mut Criterion) {
    let grid = GridTopology::standard();
    let mut group = c.benchmark_group("enumerate");

    for length in [4usize, 6, 9] {
        group.bench_with_input(BenchmarkId::new("length", length), &length, |b, &length| {
            b.iter(|| {
                let (patterns, _) = enumerate_length(&grid, black_box(length));
                black_box(patterns.len())
            })
        });
    }
    group.sample_size(10);
    group.bench_function("full_range", |b| {
        b.iter(|| {
            let enumeration = enumerate(&grid, 4, 9).expect("valid range");
            black_box(enumeration.total())
        })
    });

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let grid = GridTopology::standard();
    let analyzer = PathAnalyzer::new(&grid);
    let longest: Pattern = "183492765".parse().expect("valid pattern");

    c.bench_function("analyze_nine_dots", |b| {
        b.iter(|| black_box(analyzer.analyze_pattern(black_box(&longest)).intersection_count()))
    });

    let enumeration = enumerate(&grid, 5, 5).expect("valid range");
    c.bench_function("summarize_length_five", |b| {
        b.iter(|| black_box(CrossingSummary::collect(&analyzer, enumeration.iter())))
    });
}

criterion_group!(benches, bench_enumeration, bench_analysis);
criterion_main!(benches);
