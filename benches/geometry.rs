//! Geometry benchmarks across scalar types.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vecg::prelude::*;

const BATCH: usize = 4_096;

fn generate_vec3(len: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            Vec3::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            )
        })
        .collect()
}

fn bench_products(c: &mut Criterion) {
    let a = generate_vec3(BATCH);
    let b = generate_vec3(BATCH);
    let mut group = c.benchmark_group("products");
    group.throughput(Throughput::Elements(BATCH as u64));

    group.bench_function("dot3", |bencher| {
        bencher.iter(|| {
            a.iter()
                .zip(b.iter())
                .map(|(&x, &y)| dot3(black_box(x), black_box(y)))
                .sum::<f64>()
        })
    });

    group.bench_function("cross3", |bencher| {
        bencher.iter(|| {
            a.iter()
                .zip(b.iter())
                .map(|(&x, &y)| cross3(black_box(x), black_box(y)))
                .fold(Vec3::zero(), |acc, v| acc + v)
        })
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize3");
    group.throughput(Throughput::Elements(BATCH as u64));

    let floats = generate_vec3(BATCH);
    group.bench_with_input(BenchmarkId::new("f64", BATCH), &floats, |bencher, data| {
        bencher.iter(|| {
            data.iter()
                .map(|&v| normalize3(black_box(v)))
                .fold(Vec3::zero(), |acc, v| acc + v)
        })
    });

    let singles: Vec<Vec3g<f32>> = floats.iter().map(|v| v.as_f32()).collect();
    group.bench_with_input(BenchmarkId::new("f32", BATCH), &singles, |bencher, data| {
        bencher.iter(|| {
            data.iter()
                .map(|&v| normalize3(black_box(v)))
                .fold(Vec3g::zero(), |acc, v| acc + v)
        })
    });

    let ints: Vec<Vec3i> = floats.iter().map(|v| v.as_isize()).collect();
    group.bench_with_input(BenchmarkId::new("isize", BATCH), &ints, |bencher, data| {
        bencher.iter(|| {
            data.iter()
                .map(|&v| normalize3(black_box(v)))
                .fold(Vec3i::zero(), |acc, v| acc + v)
        })
    });

    group.finish();
}

fn bench_interpolation(c: &mut Criterion) {
    let a = generate_vec3(BATCH);
    let b = generate_vec3(BATCH);
    let mut group = c.benchmark_group("interpolation");
    group.throughput(Throughput::Elements(BATCH as u64));

    for t in [0.25, 0.5, 0.75] {
        group.bench_with_input(BenchmarkId::new("lerp3", t), &t, |bencher, &t| {
            bencher.iter(|| {
                a.iter()
                    .zip(b.iter())
                    .map(|(&x, &y)| lerp3(x, y, black_box(t)))
                    .fold(Vec3::zero(), |acc, v| acc + v)
            })
        });

        group.bench_with_input(BenchmarkId::new("slerp3", t), &t, |bencher, &t| {
            bencher.iter(|| {
                a.iter()
                    .zip(b.iter())
                    .map(|(&x, &y)| slerp3(x, y, black_box(t)))
                    .fold(Vec3::zero(), |acc, v| acc + v)
            })
        });
    }

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let points: Vec<Vec2> = generate_vec3(BATCH).iter().map(|v| v.truncate()).collect();
    c.bench_function("rotate2", |bencher| {
        bencher.iter(|| {
            points
                .iter()
                .map(|&p| rotate2(p, black_box(0.3)))
                .fold(Vec2::zero(), |acc, v| acc + v)
        })
    });
}

criterion_group!(
    benches,
    bench_products,
    bench_normalize,
    bench_interpolation,
    bench_rotate
);
criterion_main!(benches);
