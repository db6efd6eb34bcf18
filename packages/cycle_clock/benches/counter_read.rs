//! Benchmark comparing `cycle_clock::now()` with `std::time::Instant::now()`.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use cycle_clock::Clock;

fn counter_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_read");

    group.bench_function("std_instant_now", |b| {
        b.iter(|| black_box(Instant::now()));
    });

    group.bench_function("cycle_clock_now", |b| {
        b.iter(|| black_box(cycle_clock::now()));
    });

    let clock = Clock::new();

    group.bench_function("clock_cycles", |b| {
        b.iter(|| black_box(clock.cycles()));
    });

    group.bench_function("clock_monotonic", |b| {
        b.iter(|| black_box(clock.monotonic()));
    });

    group.finish();
}

criterion_group!(benches, counter_read);
criterion_main!(benches);
