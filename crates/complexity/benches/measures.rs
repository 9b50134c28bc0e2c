//! Criterion benchmarks for the F1 and F2 measures.
//!
//! Run with: `cargo bench -p complexity`

use complexity::{fisher_discriminant_ratio, volume_of_overlap, Aggregator, FeatureTable, LabelColumn};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Deterministic blobs: class k centred at k on every feature, bounded jitter.
fn generate_blobs(n_rows: usize, n_features: usize, n_classes: usize) -> (FeatureTable, LabelColumn<usize>) {
    let names: Vec<String> = (0..n_features).map(|f| format!("f{}", f)).collect();
    let rows: Vec<Vec<f64>> = (0..n_rows)
        .map(|i| {
            let class = i % n_classes;
            (0..n_features)
                .map(|f| class as f64 + ((i * 31 + f * 17) as f64).sin() * 0.75)
                .collect()
        })
        .collect();
    let labels = (0..n_rows).map(|i| i % n_classes).collect();

    (
        FeatureTable::from_rows(names.as_slice(), &rows).expect("generated rows are rectangular"),
        LabelColumn::new("target", labels),
    )
}

fn bench_fisher(c: &mut Criterion) {
    let mut group = c.benchmark_group("f1_rows");
    for size in [1_000, 10_000, 50_000] {
        let (features, labels) = generate_blobs(size, 8, 3);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| fisher_discriminant_ratio(black_box(&features), black_box(&labels)))
        });
    }
    group.finish();
}

fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("f2_classes");
    for n_classes in [2, 8, 32] {
        let (features, labels) = generate_blobs(10_000, 8, n_classes);
        group.bench_with_input(BenchmarkId::from_parameter(n_classes), &n_classes, |b, _| {
            b.iter(|| volume_of_overlap(black_box(&features), black_box(&labels), Aggregator::Mean))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fisher, bench_overlap);
criterion_main!(benches);
