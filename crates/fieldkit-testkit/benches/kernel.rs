//! Benchmarks for the kernel hot paths: hash composition and the
//! comparison chain, measured through the reference value object.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fieldkit::{ComparisonChain, FieldHasher};
use fieldkit_testkit::fixtures::Measurement;

fn bench_combined_hash(c: &mut Criterion) {
    let m = Measurement::new(42, 19.5, "ms");
    c.bench_function("combined_hash", |b| {
        b.iter(|| black_box(&m).combined_hash())
    });
}

fn bench_raw_field_fold(c: &mut Criterion) {
    c.bench_function("raw_field_fold", |b| {
        b.iter(|| {
            FieldHasher::new()
                .field(black_box(&42i64))
                .field(black_box(&19.5f64))
                .finish()
        })
    });
}

fn bench_comparison_chain(c: &mut Criterion) {
    let first = Measurement::new(42, 19.5, "ms");
    let second = Measurement::new(42, 21.0, "ms");
    c.bench_function("comparison_chain", |b| {
        b.iter(|| black_box(&first).compare(black_box(&second)))
    });
}

fn bench_chain_short_circuit(c: &mut Criterion) {
    c.bench_function("chain_short_circuit", |b| {
        b.iter(|| {
            ComparisonChain::start()
                .compare(black_box(&1i64), black_box(&2i64))
                .compare(black_box(&5i64), black_box(&1i64))
                .result()
        })
    });
}

criterion_group!(
    benches,
    bench_combined_hash,
    bench_raw_field_fold,
    bench_comparison_chain,
    bench_chain_short_circuit
);
criterion_main!(benches);
