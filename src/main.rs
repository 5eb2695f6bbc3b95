//! Benchmark runner for the block drivers.

use blockmat::matrix::naive::matmul_naive_ijk;
use blockmat::{BlockMatrix, multiply, multiply_transpose_left, multiply_transpose_right};
use std::time::Instant;

fn main() {
    println!("=== Block Matrix Multiplication Benchmark ===\n");

    let sizes = [128, 256, 512];
    let block_lengths = [8, 32, 60, 128];
    let iterations = 3;
    let mut all_results = Vec::new();

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(60));

        let a: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..size * size).map(|i| (i % 97) as f64).collect();

        let mut results: Vec<(String, (f64, f64))> = vec![(
            "Naive (i-j-k)".to_string(),
            bench_naive(&a, &b, size, iterations),
        )];

        for &bl in &block_lengths {
            let block_a = BlockMatrix::from_row_major(size, size, bl, &a)
                .expect("benchmark input has matching length");
            let block_b = BlockMatrix::from_row_major(size, size, bl, &b)
                .expect("benchmark input has matching length");

            results.push((
                format!("A×B   bl={}", bl),
                bench_blocked(&block_a, &block_b, iterations, |bl, a, b, c| {
                    multiply(bl, a, b, c)
                }),
            ));
            results.push((
                format!("Aᵀ×B  bl={}", bl),
                bench_blocked(&block_a, &block_b, iterations, |bl, a, b, c| {
                    multiply_transpose_left(bl, a, b, c)
                }),
            ));
            results.push((
                format!("A×Bᵀ  bl={}", bl),
                bench_blocked(&block_a, &block_b, iterations, |bl, a, b, c| {
                    multiply_transpose_right(bl, a, b, c)
                }),
            ));
        }

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{:2}. {:16} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                speedup
            );
        }
        println!();

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
}

/// Time the dense baseline on square `n × n` operands.
fn bench_naive(a: &[f64], b: &[f64], n: usize, iterations: usize) -> (f64, f64) {
    let mut c = vec![0.0; n * n];
    matmul_naive_ijk(a, b, &mut c, n, n, n);

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        matmul_naive_ijk(a, b, &mut c, n, n, n);
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    let gflops = 2.0 * (n * n * n) as f64 / avg / 1e9;
    (avg * 1000.0, gflops)
}

/// Time one block driver over full views of square operands.
fn bench_blocked<F>(a: &BlockMatrix, b: &BlockMatrix, iterations: usize, f: F) -> (f64, f64)
where
    F: Fn(
        usize,
        &blockmat::Submatrix<'_>,
        &blockmat::Submatrix<'_>,
        &mut blockmat::SubmatrixMut<'_>,
    ) -> blockmat::Result<()>,
{
    let n = a.num_rows();
    let bl = a.block_length();
    let mut c = BlockMatrix::new(n, n, bl).expect("block length is positive");

    // Warmup
    f(bl, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).expect("square operands");

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f(bl, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).expect("square operands");
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    let gflops = 2.0 * (n * n * n) as f64 / avg / 1e9;
    (avg * 1000.0, gflops)
}

fn print_summary_table(all_results: &[(usize, Vec<(String, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(90));
    println!("SUMMARY");
    println!("{}", "=".repeat(90));

    print!("\n{:<18}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{}×{}", size, size));
    }
    println!(" {:>12}", "Speedup");
    println!("{}", "-".repeat(90));

    let num_methods = all_results[0].1.len();

    for method_idx in 0..num_methods {
        let method_name = &all_results[0].1[method_idx].0;
        print!("{:<18}", method_name);

        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let (time_ms, gflops) = results[method_idx].1;
            let baseline_time = results[0].1.0;
            print!(" {:>11.2} GF", gflops);
            speedups.push(baseline_time / time_ms);
        }

        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>11.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(90));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!("Speedup relative to Naive (i-j-k). Higher is better.\n");
}
