// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-tick position pipeline.
//!
//! Measures the performance of:
//! - Timestamp formatting (runs 25 times a second while playing)
//! - Pointer-to-time mapping (runs on every pointer move over the bar)
//! - Building a full display snapshot
//! - URL validation (once per load, but worth keeping cheap)

use criterion::{criterion_group, criterion_main, Criterion};
use playhead::player::PositionDisplay;
use playhead::seekbar::{self, BarGeometry};
use playhead::source_url;
use playhead::timestamp;
use std::hint::black_box;

/// Benchmark timestamp formatting across representative positions.
///
/// This is the hottest pure function in the engine: one call per poll
/// tick plus one per seek preview.
fn bench_format_timestamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_pipeline");

    let positions = [0.0, 59.999, 3661.5, 86_399.25, 360_000.0];

    group.bench_function("format_timestamp", |b| {
        b.iter(|| {
            for secs in positions {
                black_box(timestamp::format(black_box(secs)));
            }
        });
    });

    group.finish();
}

/// Benchmark mapping pointer positions over the seek bar.
fn bench_map_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_pipeline");

    let geometry = BarGeometry {
        left_edge: 96.0,
        width: 641.0,
    };
    let duration = Some(5_400.0);

    group.bench_function("map_pointer_sweep", |b| {
        b.iter(|| {
            // A sweep across the bar plus both out-of-tolerance sides
            let mut x = 60.0;
            while x < 780.0 {
                black_box(seekbar::map_pointer(
                    black_box(geometry),
                    black_box(x),
                    black_box(duration),
                ));
                x += 12.5;
            }
        });
    });

    group.finish();
}

/// Benchmark building the render-ready display snapshot.
fn bench_position_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_pipeline");

    group.bench_function("position_display", |b| {
        b.iter(|| {
            let display = PositionDisplay::new(black_box(1234.567), black_box(Some(5400.0)));
            black_box(display.percent_rounded());
            black_box(display.bar_value());
        });
    });

    group.finish();
}

/// Benchmark source URL validation.
fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_pipeline");

    let accepted = "http://media.example.com/films/sintel.mp4";
    let rejected = "http://media.example.com/films/sintel.webm";

    group.bench_function("validate_url", |b| {
        b.iter(|| {
            black_box(source_url::validate(black_box(accepted)).is_ok());
            black_box(source_url::validate(black_box(rejected)).is_err());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_format_timestamp,
    bench_map_pointer,
    bench_position_display,
    bench_validate_url
);
criterion_main!(benches);
