//! Criterion benchmarks for the Graham scan and its angular sort.
//! Focus sizes: n in {10, 100, 1000, 10000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::hull::angular_sort;
use hull2::{graham_scan, Collinear, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_disk(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let r = rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Point::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

/// Integer grid points: many collinear boundary runs.
fn random_grid(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(0..32) as f64, rng.gen_range(0..32) as f64))
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("graham_scan");
    for &n in &[10usize, 100, 1000, 10000] {
        let disk = random_disk(n, 42);
        group.bench_with_input(BenchmarkId::new("disk_drop", n), &disk, |b, pts| {
            b.iter(|| graham_scan(pts, Collinear::Drop).unwrap())
        });
        let grid = random_grid(n, 43);
        group.bench_with_input(BenchmarkId::new("grid_keep", n), &grid, |b, pts| {
            b.iter(|| graham_scan(pts, Collinear::Keep).unwrap())
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("angular_sort");
    for &n in &[100usize, 10000] {
        group.bench_with_input(BenchmarkId::new("disk", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut pts = random_disk(n, 44);
                    pts.insert(0, Point::new(0.0, -2.0));
                    pts
                },
                |mut pts| {
                    let len = pts.len();
                    angular_sort(&mut pts, 1..len);
                    pts
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_sort);
criterion_main!(benches);
