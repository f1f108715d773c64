//! Benchmarks for keychunk.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use keychunk::{ChunkConfig, Chunker, Frequency, Table, TableGenerator};

fn generated(n_rows: usize, n_unique: usize) -> Table {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().into();
    let end = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().into();
    TableGenerator::new(start, end, n_rows, Frequency::Minutely)
        .unwrap()
        .with_n_unique_keys(n_unique)
        .with_seed(123)
        .generate()
        .unwrap()
}

fn bench_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunker");

    // Different row counts, fixed key cardinality
    for rows in [10_000, 100_000, 1_000_000] {
        let table = generated(rows, 100);

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(format!("rows_{}k", rows / 1000), &table, |b, table| {
            b.iter(|| {
                let chunker = Chunker::new(ChunkConfig::new(1000).unwrap());
                let chunks = chunker.chunk(black_box(table)).unwrap();
                black_box(chunks.len())
            });
        });
    }

    group.finish();
}

fn bench_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("configs");
    let table = generated(100_000, 100);

    // Small chunks
    group.bench_function("small_chunks", |b| {
        let config = ChunkConfig::new(100).unwrap();
        b.iter(|| {
            let chunker = Chunker::new(config.clone());
            let chunks = chunker.chunk(black_box(&table)).unwrap();
            black_box(chunks.len())
        });
    });

    // Default chunks
    group.bench_function("default_chunks", |b| {
        let config = ChunkConfig::default();
        b.iter(|| {
            let chunker = Chunker::new(config.clone());
            let chunks = chunker.chunk(black_box(&table)).unwrap();
            black_box(chunks.len())
        });
    });

    // Large chunks
    group.bench_function("large_chunks", |b| {
        let config = ChunkConfig::new(10_000).unwrap();
        b.iter(|| {
            let chunker = Chunker::new(config.clone());
            let chunks = chunker.chunk(black_box(&table)).unwrap();
            black_box(chunks.len())
        });
    });

    group.finish();
}

fn bench_plan_vs_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_vs_materialize");
    let table = generated(100_000, 100);
    let chunker = Chunker::new(ChunkConfig::new(1000).unwrap());

    group.throughput(Throughput::Elements(table.len() as u64));

    // Index plan only
    group.bench_function("plan", |b| {
        b.iter(|| {
            let plan = chunker.chunk_indices(black_box(&table)).unwrap();
            black_box(plan.len())
        });
    });

    // Plan plus owned-row materialization
    group.bench_function("materialize", |b| {
        b.iter(|| {
            let chunks = chunker.chunk(black_box(&table)).unwrap();
            black_box(chunks.len())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_chunker,
    bench_configs,
    bench_plan_vs_materialize
);
criterion_main!(benches);
