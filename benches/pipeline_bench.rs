//! Pipeline throughput benchmarks: full reports per second and the raw
//! aggregation passes on their own.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use porygon::chart::TypeChart;
use porygon::report::{build_report, ReportConfig};
use porygon::scoring::{attack_rankings, defense_rankings, normalize, AttackCoverage};

fn bench_full_pipeline(c: &mut Criterion) {
    let chart = TypeChart::standard();
    let config = ReportConfig::default();

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(1));
    group.bench_function("full_report", |b| {
        b.iter(|| build_report(black_box(chart), black_box(&config)).unwrap())
    });
    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let chart = TypeChart::standard();

    let mut group = c.benchmark_group("aggregation");
    group.bench_function("defense_rankings", |b| {
        b.iter(|| defense_rankings(black_box(chart)).unwrap())
    });
    group.bench_function("attack_rankings_dual", |b| {
        b.iter(|| attack_rankings(black_box(chart), AttackCoverage::DualCoverage).unwrap())
    });
    group.bench_function("normalize_defense", |b| {
        let defense = defense_rankings(chart).unwrap();
        b.iter(|| normalize(black_box(&defense)))
    });
    group.finish();
}

criterion_group!(benches, bench_full_pipeline, bench_aggregation);
criterion_main!(benches);
