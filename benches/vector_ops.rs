// benches/vector_ops.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vecmath::Vector;

fn bench_dot_and_norm(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("vector");

    for &dim in &[3usize, 64, 1024] {
        let a = Vector::random_with(dim, &mut rng);
        let b = Vector::random_with(dim, &mut rng);

        group.bench_with_input(BenchmarkId::new("dot", dim), &dim, |bench, _| {
            bench.iter(|| black_box(&a).dot(black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("unit", dim), &dim, |bench, _| {
            bench.iter(|| black_box(&a).unit())
        });
        group.bench_with_input(BenchmarkId::new("add_vector", dim), &dim, |bench, _| {
            bench.iter(|| black_box(&a).add_vector(black_box(&b)))
        });
    }
    group.finish();
}

fn bench_checked_vs_panicking(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let a = Vector::random_with(256, &mut rng);
    let b = Vector::random_with(256, &mut rng);

    c.bench_function("dot_256", |bench| bench.iter(|| black_box(&a).dot(black_box(&b))));
    c.bench_function("try_dot_256", |bench| {
        bench.iter(|| black_box(&a).try_dot(black_box(&b)))
    });
}

criterion_group!(benches, bench_dot_and_norm, bench_checked_vs_panicking);
criterion_main!(benches);
