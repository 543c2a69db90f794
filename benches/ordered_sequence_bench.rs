//! OrderedSequence insertion, lookup and pagination benchmarks.
//!
//! Compares in-order insertion (tail check only) against reversed and
//! scattered insertion (full re-sort) and against a single batch insert.
//! Expected: in-order insertion scales linearly, the others do not.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sorted_bags::RawSequence;
use std::hint::black_box;

const SIZES: [u64; 3] = [100, 1000, 10000];

/// Deterministic permutation of `0..size`; 7919 is prime and coprime with every size.
fn scattered(size: u64) -> Vec<u64> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_sequence_insert");

    for size in SIZES {
        let ascending: Vec<u64> = (0..size).collect();
        let descending: Vec<u64> = (0..size).rev().collect();
        let shuffled = scattered(size);

        for (name, input) in [
            ("ascending", &ascending),
            ("descending", &descending),
            ("scattered", &shuffled),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), input, |bencher, input| {
                bencher.iter_batched(
                    || input.clone(),
                    |elements| {
                        let mut sequence = RawSequence::with_capacity(elements.len());
                        for element in elements {
                            sequence.insert(black_box(element));
                        }
                        black_box(sequence)
                    },
                    BatchSize::SmallInput,
                );
            });
        }

        group.bench_with_input(BenchmarkId::new("batch", size), &shuffled, |bencher, input| {
            bencher.iter_batched(
                || input.clone(),
                |elements| {
                    let mut sequence = RawSequence::new();
                    sequence.insert_batch(black_box(elements));
                    black_box(sequence)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_sequence_lookup");

    for size in SIZES {
        let sequence: RawSequence<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("get_index", size), &sequence, |bencher, sequence| {
            bencher.iter(|| {
                for key in (0..size).step_by(7) {
                    black_box(sequence.get_index(black_box(&key)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_pagination(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_sequence_pagination");

    for size in SIZES {
        let sequence: RawSequence<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("walk_pages_of_50", size), &sequence, |bencher, sequence| {
            bencher.iter(|| {
                let mut visited = 0;
                let mut page = sequence.first_page(50);
                while let Some(last) = page.last() {
                    visited += page.len();
                    page = sequence.slice(last, 50);
                }
                black_box(visited)
            });
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_sequence_remove");

    for size in SIZES {
        let sequence: RawSequence<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("remove_middle", size), &sequence, |bencher, sequence| {
            bencher.iter_batched(
                || sequence.clone(),
                |mut sequence| {
                    black_box(sequence.remove(black_box(&(size / 2))));
                    sequence
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_lookup,
    benchmark_pagination,
    benchmark_remove
);

criterion_main!(benches);
