//! Benchmark for LinkedQueue vs standard VecDeque.
//!
//! Compares linkline's arena-backed queue against Rust's standard VecDeque
//! for the enqueue/dequeue cycle and for hydrating from a stored sequence.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linkline::linked::{LinkedQueue, Rehydrate};
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// enqueue/dequeue Benchmark
// =============================================================================

fn benchmark_enqueue_dequeue(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("enqueue_dequeue");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("LinkedQueue", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut queue = LinkedQueue::new();
                    for index in 0..size {
                        queue.enqueue(black_box(index));
                    }
                    while let Some(value) = queue.dequeue() {
                        black_box(value);
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut queue = VecDeque::new();
                    for index in 0..size {
                        queue.push_back(black_box(index));
                    }
                    while let Some(value) = queue.pop_front() {
                        black_box(value);
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// hydrate/snapshot Benchmark
// =============================================================================

fn benchmark_hydrate_snapshot(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("hydrate_snapshot");

    for size in [10, 100, 1000] {
        let stored: Vec<String> = (0..size).map(|index| format!("item-{index}")).collect();

        group.bench_with_input(
            BenchmarkId::new("LinkedQueue", size),
            &stored,
            |bencher, stored| {
                bencher.iter(|| {
                    let mut queue = LinkedQueue::hydrate(stored.iter().cloned());
                    queue.enqueue("extra".to_string());
                    black_box(queue.snapshot())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_enqueue_dequeue,
    benchmark_hydrate_snapshot
);
criterion_main!(benches);
