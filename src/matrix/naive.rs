//! Textbook products over dense row-major buffers.
//!
//! These are the correctness baselines for the block drivers. They know
//! nothing about blocks: every operand is a plain row-major slice.

/// Naive matrix multiplication using i-j-k loop order: C = A × B
///
/// Each output element is summed in a local over ascending `p`, then stored.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

/// C = Aᵀ × B where A is stored as (k × m).
pub fn matmul_naive_trans_a(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[p * m + i] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

/// C = A × Bᵀ where B is stored as (n × k).
pub fn matmul_naive_trans_b(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[i * k + p] * b[j * k + p];
            }
            c[i * n + j] = sum;
        }
    }
}

/// Transpose a dense matrix: dst = srcᵀ
///
/// # Example
///
/// ```
/// use blockmat::matrix::naive::transpose;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,
///                      2.0, 5.0,
///                      3.0, 6.0]);
/// ```
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    for (i, row) in src.chunks_exact(cols.max(1)).take(rows).enumerate() {
        for (j, &v) in row.iter().enumerate() {
            dst[j * rows + i] = v;
        }
    }
}
