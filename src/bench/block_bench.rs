//! Criterion benchmarks: naive baseline vs the three block drivers.

use blockmat::matrix::naive::matmul_naive_ijk;
use blockmat::{BlockMatrix, multiply, multiply_transpose_left, multiply_transpose_right};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn inputs(n: usize) -> (Vec<f64>, Vec<f64>) {
    let a: Vec<f64> = (0..n * n).map(|i| ((i % 1000) as f64) * 0.01).collect();
    let b: Vec<f64> = (0..n * n).map(|i| (((i + 500) % 1000) as f64) * 0.01).collect();
    (a, b)
}

fn bench_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("Naive");
    group.sample_size(20);

    for &n in [128usize, 256].iter() {
        let (a, b) = inputs(n);
        let mut out = vec![0.0; n * n];

        group.throughput(Throughput::Elements((2 * n * n * n) as u64));
        group.bench_with_input(BenchmarkId::new("ijk", n), &n, |bench, &n| {
            bench.iter(|| matmul_naive_ijk(black_box(&a), black_box(&b), &mut out, n, n, n));
        });
    }

    group.finish();
}

fn bench_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Blocked");
    group.sample_size(20);

    for &n in [128usize, 256].iter() {
        let (a, b) = inputs(n);
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));

        for &bl in [16usize, 60].iter() {
            let ba = BlockMatrix::from_row_major(n, n, bl, &a).unwrap();
            let bb = BlockMatrix::from_row_major(n, n, bl, &b).unwrap();
            let mut bc = BlockMatrix::new(n, n, bl).unwrap();

            group.bench_with_input(BenchmarkId::new(format!("AxB/bl{}", bl), n), &n, |bench, _| {
                bench.iter(|| {
                    multiply(bl, &ba.full_view(), &bb.full_view(), &mut bc.full_view_mut())
                        .unwrap()
                });
            });
            group.bench_with_input(BenchmarkId::new(format!("AtxB/bl{}", bl), n), &n, |bench, _| {
                bench.iter(|| {
                    multiply_transpose_left(
                        bl,
                        &ba.full_view(),
                        &bb.full_view(),
                        &mut bc.full_view_mut(),
                    )
                    .unwrap()
                });
            });
            group.bench_with_input(BenchmarkId::new(format!("AxBt/bl{}", bl), n), &n, |bench, _| {
                bench.iter(|| {
                    multiply_transpose_right(
                        bl,
                        &ba.full_view(),
                        &bb.full_view(),
                        &mut bc.full_view_mut(),
                    )
                    .unwrap()
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_naive, bench_drivers);
criterion_main!(benches);
