//! Insert and lookup throughput for the chained hash index.
//!
//! Run with:
//! ```bash
//! cargo bench --bench index_benchmark
//! ```

#![allow(clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use marquee_index::{HashIndex, HashScheme, IndexConfig, Record};
use std::hint::black_box;

fn sample_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::new(
                if i % 3 == 0 { "TV Show" } else { "Movie" },
                format!("Catalog Title Number {i}"),
                format!("Director {}", i % 97),
                "United States",
                1990 + (i % 35) as i32,
                60 + (i % 120) as i32,
            )
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for count in [1_000, 8_000] {
        let records = sample_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| {
                let index = HashIndex::from_records(IndexConfig::default(), records.iter().cloned());
                black_box(index.len())
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let records = sample_records(8_000);

    for scheme in [HashScheme::Stepwise, HashScheme::ReduceOnce] {
        let config = IndexConfig::default().with_hash_scheme(scheme);
        let index = HashIndex::from_records(config, records.iter().cloned());

        group.bench_function(BenchmarkId::new("hit", scheme), |b| {
            b.iter(|| black_box(index.lookup(black_box("Catalog Title Number 4242"))));
        });
        group.bench_function(BenchmarkId::new("miss", scheme), |b| {
            b.iter(|| black_box(index.lookup(black_box("Not In The Catalog"))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);
