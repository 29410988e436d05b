//! Benchmark for Sequence vs standard Vec.
//!
//! Compares appending, in-place compaction and de-duplication against the
//! equivalent `Vec` idioms.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slicekit::sequence::Sequence;
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// append Benchmark
// =============================================================================

fn benchmark_append(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("append");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("Sequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sequence = Sequence::new();
                    for index in 0..size {
                        sequence.push(black_box(index));
                    }
                    black_box(sequence)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// keep_if Benchmark
// =============================================================================

fn benchmark_keep_if(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keep_if");

    for size in [100, 1000, 10000] {
        let sequence: Sequence<i32> = (0..size).collect();
        let vector: Vec<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Sequence", size),
            &sequence,
            |bencher, sequence| {
                bencher.iter(|| {
                    let mut copy = sequence.clone();
                    copy.keep_if(|element| element % 3 != 0);
                    black_box(copy)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &vector, |bencher, vector| {
            bencher.iter(|| {
                let mut copy = vector.clone();
                copy.retain(|element| element % 3 != 0);
                black_box(copy)
            });
        });
    }

    group.finish();
}

// =============================================================================
// uniq Benchmark
// =============================================================================

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for size in [100, 1000, 10000] {
        let sequence: Sequence<i32> = (0..size).map(|index| index % 64).collect();
        let vector: Vec<i32> = (0..size).map(|index| index % 64).collect();

        group.bench_with_input(
            BenchmarkId::new("Sequence", size),
            &sequence,
            |bencher, sequence| {
                bencher.iter(|| {
                    let mut copy = sequence.clone();
                    copy.uniq();
                    black_box(copy)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &vector, |bencher, vector| {
            bencher.iter(|| {
                let mut copy = vector.clone();
                let mut seen = HashSet::with_capacity(copy.len());
                copy.retain(|element| seen.insert(*element));
                black_box(copy)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_append, benchmark_keep_if, benchmark_uniq);
criterion_main!(benches);
