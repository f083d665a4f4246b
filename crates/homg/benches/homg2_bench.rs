//! Criterion benchmarks for homogeneous 2D points.
//! Focus sizes for the centroid: n in {1, 10, 100, 1000, 10000}.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use homg::homg2::rand::{sample_collinear, CollinearCfg, ReplayToken};
use homg::homg2::{centre, centre_of, collinear, cross_ratio, HomgPoint2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<HomgPoint2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let w: f64 = rng.gen_range(0.5..2.0);
            HomgPoint2::from_homg(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0), w)
        })
        .collect()
}

fn bench_centre(c: &mut Criterion) {
    let mut group = c.benchmark_group("homg2_centre");
    for &n in &[1usize, 10, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("centre_of", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 41),
                |pts| {
                    let _c = centre_of(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    let pts = random_points(2, 42);
    group.bench_function("centre_pair", |b| {
        b.iter(|| centre(black_box(&pts[0]), black_box(&pts[1])).unwrap())
    });
    group.finish();
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("homg2_predicates");
    let exact = sample_collinear(CollinearCfg::default(), 4, ReplayToken { seed: 43, index: 0 });
    let noisy = sample_collinear(
        CollinearCfg {
            jitter: 1e-3,
            ..CollinearCfg::default()
        },
        4,
        ReplayToken { seed: 43, index: 1 },
    );
    for (name, s) in [("exact", &exact), ("noisy", &noisy)] {
        let q = &s.points;
        group.bench_function(BenchmarkId::new("cross_ratio", name), |b| {
            b.iter(|| cross_ratio(black_box(&q[0]), &q[1], &q[2], &q[3]))
        });
    }
    let ints = [
        HomgPoint2::new(0i64, 0),
        HomgPoint2::new(3, 7),
        HomgPoint2::new(6, 14),
    ];
    group.bench_function("collinear_i64", |b| {
        b.iter(|| collinear(black_box(&ints[0]), &ints[1], &ints[2]))
    });
    group.finish();
}

criterion_group!(benches, bench_centre, bench_predicates);
criterion_main!(benches);
