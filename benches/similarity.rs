//! Digitization and scoring benchmarks.

use std::hint::black_box;

use blink::{FixedBitVector, IntervalSequence, Metric, digitize, score, score_all};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn generate_pattern(len: usize, seed: u64) -> IntervalSequence {
    (0..len as u64)
        .map(|i| 20 + (i.wrapping_mul(31).wrapping_add(seed) % 400))
        .collect::<Vec<_>>()
        .into()
}

fn generate_bits(len: usize, seed: u64) -> FixedBitVector {
    (0..len as u64)
        .map(|i| (i.wrapping_mul(2654435761).wrapping_add(seed) >> 3) & 1 == 1)
        .collect()
}

fn bench_digitize(c: &mut Criterion) {
    let pattern = generate_pattern(64, 7);
    let mut group = c.benchmark_group("digitize");

    for resolution in [64usize, 256, 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &resolution,
            |b, &resolution| b.iter(|| digitize(black_box(&pattern), black_box(resolution))),
        );
    }

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for len in [64usize, 1024, 16_384] {
        let a = generate_bits(len, 1);
        let b = generate_bits(len, 2);

        for metric in Metric::ALL {
            group.bench_with_input(BenchmarkId::new(metric.name(), len), &len, |bench, _| {
                bench.iter(|| score(black_box(&a), black_box(&b), metric))
            });
        }
    }

    group.finish();
}

fn bench_score_all(c: &mut Criterion) {
    let a = generate_bits(1024, 3);
    let b = generate_bits(1024, 4);

    c.bench_function("score_all_1024", |bench| {
        bench.iter(|| score_all(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_digitize, bench_score, bench_score_all);
criterion_main!(benches);
