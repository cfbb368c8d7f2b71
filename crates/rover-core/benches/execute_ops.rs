//! Criterion micro-benchmarks for command-string execution.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rover_core::{validate_command_string, Rover};

const PATH: &str = "ffffffflfffffffrbbbbbblbbbbbb";

/// Benchmark: validate a 1000-token command string.
fn bench_validate_1k(c: &mut Criterion) {
    let commands: String = PATH.chars().cycle().take(1000).collect();

    c.bench_function("validate_1k", |b| {
        b.iter(|| black_box(validate_command_string(black_box(&commands))));
    });
}

/// Benchmark: execute a 1000-token command string with no obstacles.
fn bench_execute_1k_clear(c: &mut Criterion) {
    let commands: String = PATH.chars().cycle().take(1000).collect();
    let mut rover = Rover::builder().seed(0).build();

    c.bench_function("execute_1k_clear", |b| {
        b.iter(|| black_box(rover.execute_command_string(black_box(&commands))));
    });
}

/// Benchmark: execute with a 1% obstacle rate, so most runs abort early.
fn bench_execute_1k_sparse_obstacles(c: &mut Criterion) {
    let commands: String = PATH.chars().cycle().take(1000).collect();
    let mut rover = Rover::builder()
        .obstacle_probability(0.01)
        .seed(1234)
        .build();

    c.bench_function("execute_1k_sparse_obstacles", |b| {
        b.iter(|| black_box(rover.execute_command_string(black_box(&commands))));
    });
}

criterion_group!(
    benches,
    bench_validate_1k,
    bench_execute_1k_clear,
    bench_execute_1k_sparse_obstacles
);
criterion_main!(benches);
