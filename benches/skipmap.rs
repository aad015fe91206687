//! Benchmarks for [`SkipMap`].

use criterion::{black_box, AxisScale, BenchmarkId, Criterion, PlotConfiguration};
use rand::prelude::*;
use skiplanes::SkipMap;

/// Benchmarking sizes
const SIZES: [usize; 5] = [10, 100, 1000, 10_000, 100_000];

/// Benchmarking insertion in random key order
pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipMap Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut map: SkipMap<u64, u64> = std::iter::repeat_with(|| (rng.gen(), 0))
                .take(size)
                .collect();

            b.iter(|| {
                map.insert(rng.gen(), 0);
            });
        });
    }
}

/// Benchmarking keyed lookups
pub fn get(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipMap Get");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let map: SkipMap<u64, u64> = std::iter::repeat_with(|| (rng.gen(), 0))
                .take(size)
                .collect();
            let probes: Vec<u64> = std::iter::repeat_with(|| rng.gen()).take(10).collect();

            b.iter(|| {
                for probe in &probes {
                    black_box(map.get(probe));
                }
            });
        });
    }
}

/// Benchmarking iteration over entries
pub fn iter(c: &mut Criterion) {
    c.bench_function("SkipMap Iter", |b| {
        let mut rng = StdRng::seed_from_u64(0x1234_abcd);
        let map: SkipMap<u64, u64> = std::iter::repeat_with(|| (rng.gen(), 0))
            .take(100_000)
            .collect();

        b.iter(|| {
            for entry in &map {
                black_box(entry);
            }
        });
    });
}

pub fn benchmark(c: &mut Criterion) {
    insert(c);
    get(c);
    iter(c);
}
