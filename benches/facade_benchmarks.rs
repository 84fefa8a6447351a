//! Criterion benchmarks for logcat_facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logcat_facade::core::formatter::{format_message, split_chunks};
use logcat_facade::prelude::*;
use logcat_facade::derive_display_name;
use std::sync::Arc;

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::with_sink(Arc::new(NullSink));
    registry.get_logger("com.example.app.MainActivity");

    group.bench_function("get_logger_cached", |b| {
        b.iter(|| black_box(registry.get_logger(black_box("com.example.app.MainActivity"))));
    });

    group.bench_function("derive_display_name", |b| {
        b.iter(|| {
            derive_display_name(
                black_box(Some("com.example.app.MainActivity")),
                black_box(Some("APP")),
            )
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::with_sink(Arc::new(NullSink));
    let logger = registry.get_logger("com.example.Bench");

    group.bench_function("enabled_plain", |b| {
        b.iter(|| logger.info(black_box("benchmark message")));
    });

    group.bench_function("enabled_template", |b| {
        b.iter(|| logger.info_fmt(black_box("user {} did {}"), &[&42, &"login"]));
    });

    registry.set_min_level(LogLevel::Error);
    group.bench_function("disabled_template", |b| {
        b.iter(|| logger.debug_fmt(black_box("user {} did {}"), &[&42, &"login"]));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    group.bench_function("format_message_3_args", |b| {
        b.iter(|| format_message(black_box("{} + {} = {}"), &[&1, &2, &3]));
    });

    let long = "x".repeat(20_000);
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("split_20k_chars", |b| {
        b.iter(|| split_chunks(black_box(&long), 4000).len());
    });

    group.finish();
}

criterion_group!(benches, bench_registry, bench_logging, bench_formatting);
criterion_main!(benches);
