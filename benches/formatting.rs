use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tintlog::fmt::{Arg, sprintf};
use tintlog::{ConsoleLogger, Level};

fn bench_sprintf(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprintf");

    group.bench_function("plain", |b| {
        b.iter(|| sprintf(black_box("Application started successfully"), &[]));
    });

    let args = [Arg::from("fetch"), Arg::from(120), Arg::from(12.5)];
    group.bench_function("mixed", |b| {
        b.iter(|| sprintf(black_box("%s took %5dms (%.1f%%)"), black_box(&args)));
    });

    group.finish();
}

fn bench_format_line(c: &mut Criterion) {
    let logger = ConsoleLogger::new();
    let at = NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .expect("valid timestamp");

    c.bench_function("ConsoleLogger::format_line", |b| {
        b.iter(|| logger.format_line(black_box(Level::Warn), at, black_box(" disk at 87%")));
    });
}

criterion_group!(benches, bench_sprintf, bench_format_line);
criterion_main!(benches);
