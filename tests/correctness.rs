use approx::assert_relative_eq;
use blockmat::matrix::naive::{
    matmul_naive_ijk, matmul_naive_trans_a, matmul_naive_trans_b, transpose,
};
use blockmat::{
    BlockError, BlockMatrix, multiply, multiply_transpose_left, multiply_transpose_right,
};
use proptest::prelude::*;

fn assert_matrices_close(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert_relative_eq!(expected[i], actual[i], epsilon = 1e-9, max_relative = 1e-12);
    }
}

fn dense(rows: usize, cols: usize, salt: usize) -> Vec<f64> {
    (0..rows * cols)
        .map(|i| ((i * 7 + salt) % 11) as f64 - 5.0)
        .collect()
}

fn block(rows: usize, cols: usize, bl: usize, src: &[f64]) -> BlockMatrix {
    BlockMatrix::from_row_major(rows, cols, bl, src).unwrap()
}

/// Runs all three drivers on full views and returns the dense results.
fn run_all(
    m: usize,
    n: usize,
    k: usize,
    bl: usize,
    a: &[f64],
    b: &[f64],
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut at = vec![0.0; m * k];
    let mut bt = vec![0.0; k * n];
    transpose(a, &mut at, m, k);
    transpose(b, &mut bt, k, n);

    let ba = block(m, k, bl, a);
    let bb = block(k, n, bl, b);
    let bat = block(k, m, bl, &at);
    let bbt = block(n, k, bl, &bt);

    let mut c1 = BlockMatrix::new(m, n, bl).unwrap();
    let mut c2 = BlockMatrix::new(m, n, bl).unwrap();
    let mut c3 = BlockMatrix::new(m, n, bl).unwrap();

    multiply(bl, &ba.full_view(), &bb.full_view(), &mut c1.full_view_mut()).unwrap();
    multiply_transpose_left(bl, &bat.full_view(), &bb.full_view(), &mut c2.full_view_mut())
        .unwrap();
    multiply_transpose_right(bl, &ba.full_view(), &bbt.full_view(), &mut c3.full_view_mut())
        .unwrap();

    (c1.to_row_major(), c2.to_row_major(), c3.to_row_major())
}

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn test_3x3_times_identity() {
    let a = block(3, 3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let b = BlockMatrix::identity(3, 2).unwrap();
    let mut c = BlockMatrix::new(3, 3, 2).unwrap();

    multiply(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).unwrap();

    assert_eq!(c, a);
}

#[test]
fn test_3x4_times_4x2() {
    let a = block(
        3,
        4,
        2,
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
    );
    let b = block(4, 2, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let mut c = BlockMatrix::new(3, 2, 2).unwrap();

    multiply(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).unwrap();

    assert_eq!(
        c.to_row_major(),
        vec![50.0, 60.0, 114.0, 140.0, 178.0, 220.0]
    );
}

// ============================================================
// Equivalence to naive multiply
// ============================================================

#[test]
fn test_matches_naive_across_shapes() {
    let shapes = [
        (1, 1, 1),
        (2, 3, 4),
        (5, 5, 5),
        (7, 3, 5),
        (3, 7, 2),
        (11, 13, 17),
        (16, 16, 16),
    ];

    for (m, n, k) in shapes {
        let a = dense(m, k, 1);
        let b = dense(k, n, 2);
        let mut expected = vec![0.0; m * n];
        matmul_naive_ijk(&a, &b, &mut expected, m, n, k);

        for bl in [1, 2, 3, 4, 7, 32] {
            let (c1, c2, c3) = run_all(m, n, k, bl, &a, &b);
            let name = format!("{}x{}x{} bl={}", m, n, k, bl);
            assert_eq!(expected, c1, "multiply {}", name);
            assert_eq!(expected, c2, "transpose_left {}", name);
            assert_eq!(expected, c3, "transpose_right {}", name);
        }
    }
}

#[test]
fn test_matches_naive_fractional_values() {
    let (m, n, k) = (19, 23, 29);
    let a: Vec<f64> = (0..m * k).map(|i| ((i % 1000) as f64) * 0.013 - 3.1).collect();
    let b: Vec<f64> = (0..k * n)
        .map(|i| (((i + 500) % 997) as f64) * 0.007 + 0.25)
        .collect();

    let mut expected = vec![0.0; m * n];
    matmul_naive_ijk(&a, &b, &mut expected, m, n, k);

    for bl in [3, 8, 10] {
        let (c1, c2, c3) = run_all(m, n, k, bl, &a, &b);
        assert_matrices_close(&expected, &c1, "multiply");
        assert_matrices_close(&expected, &c2, "transpose_left");
        assert_matrices_close(&expected, &c3, "transpose_right");
    }
}

// ============================================================
// Block-size invariance and boundary tiles
// ============================================================

#[test]
fn test_block_size_invariance() {
    let (m, n, k) = (9, 6, 8);
    let a = dense(m, k, 3);
    let b = dense(k, n, 4);

    let reference = run_all(m, n, k, 1, &a, &b);
    for bl in [2, 7, 50] {
        assert_eq!(run_all(m, n, k, bl, &a, &b), reference, "bl={}", bl);
    }
}

#[test]
fn test_5x5_trailing_tile() {
    let a = dense(5, 5, 5);
    let b = dense(5, 5, 6);
    let mut expected = vec![0.0; 25];
    matmul_naive_ijk(&a, &b, &mut expected, 5, 5, 5);

    let (c1, c2, c3) = run_all(5, 5, 5, 2, &a, &b);
    assert_eq!(expected, c1);
    assert_eq!(expected, c2);
    assert_eq!(expected, c3);
}

// ============================================================
// Set vs accumulate ordering
// ============================================================

#[test]
fn test_contraction_blocks_summed_in_ascending_order() {
    // 1 + 1e16 is lost to rounding, so grouping decides the answer
    let a = [1e16, 1.0, -1e16, 1.0];
    let ones = [1.0; 4];

    let first: f64 = 0.0 + 1e16 + 1.0;
    let second: f64 = 0.0 + -1e16 + 1.0;
    let two_blocks = first + second;
    assert_eq!(two_blocks, 0.0);

    let ba = block(1, 4, 2, &a);
    let bb = block(4, 1, 2, &ones);
    let mut c = BlockMatrix::new(1, 1, 2).unwrap();
    multiply(2, &ba.full_view(), &bb.full_view(), &mut c.full_view_mut()).unwrap();
    assert_eq!(c.get(0, 0), two_blocks);

    // Aᵀ × B with A stored as a column
    let bat = block(4, 1, 2, &a);
    multiply_transpose_left(2, &bat.full_view(), &bb.full_view(), &mut c.full_view_mut())
        .unwrap();
    assert_eq!(c.get(0, 0), two_blocks);

    // A × Bᵀ with B stored as a row
    let bbt = block(1, 4, 2, &ones);
    multiply_transpose_right(2, &ba.full_view(), &bbt.full_view(), &mut c.full_view_mut())
        .unwrap();
    assert_eq!(c.get(0, 0), two_blocks);

    // One block covering the whole contraction sums straight through
    let ba = block(1, 4, 4, &a);
    let bb = block(4, 1, 4, &ones);
    let mut c = BlockMatrix::new(1, 1, 4).unwrap();
    multiply(4, &ba.full_view(), &bb.full_view(), &mut c.full_view_mut()).unwrap();
    assert_eq!(c.get(0, 0), 1.0);
}

#[test]
fn test_output_overwritten_not_accumulated() {
    let a = block(4, 4, 2, &dense(4, 4, 7));
    let b = block(4, 4, 2, &dense(4, 4, 8));
    let mut c = BlockMatrix::from_row_major(4, 4, 2, &[1000.0; 16]).unwrap();

    multiply(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).unwrap();

    let mut expected = vec![0.0; 16];
    matmul_naive_ijk(&dense(4, 4, 7), &dense(4, 4, 8), &mut expected, 4, 4, 4);
    assert_eq!(c.to_row_major(), expected);
}

// ============================================================
// Transpose correctness
// ============================================================

#[test]
fn test_transpose_drivers_match_explicit_transpose() {
    let a = block(7, 5, 3, &dense(7, 5, 9));
    let b = block(7, 4, 3, &dense(7, 4, 10));

    let via_left = a.mult_trans_a(&b).unwrap();
    let explicit = a.transpose().mult(&b).unwrap();
    assert_eq!(via_left, explicit);

    let d = block(4, 5, 3, &dense(4, 5, 11));
    let via_right = a.mult_trans_b(&d).unwrap();
    let explicit = a.mult(&d.transpose()).unwrap();
    assert_eq!(via_right, explicit);
}

// ============================================================
// Sub-views with non-zero origins
// ============================================================

/// C's window is rows 6..10, cols 3..8 of a 10×8 matrix; everything outside
/// it must keep its sentinel value.
fn check_window(c: &BlockMatrix, expected: &[f64]) {
    assert_eq!(c.view(6, 10, 3, 8).unwrap().to_row_major(), expected);
    for r in 0..10 {
        for col in 0..8 {
            if !(6..10).contains(&r) || !(3..8).contains(&col) {
                assert_eq!(c.get(r, col), 42.0, "({}, {}) was written", r, col);
            }
        }
    }
}

#[test]
fn test_subview_multiply() {
    let a = block(7, 8, 3, &dense(7, 8, 12));
    let b = block(8, 5, 3, &dense(8, 5, 13));
    let mut c = BlockMatrix::from_row_major(10, 8, 3, &[42.0; 80]).unwrap();

    let va = a.view(3, 7, 3, 8).unwrap();
    let vb = b.view(3, 8, 0, 5).unwrap();
    multiply(3, &va, &vb, &mut c.view_mut(6, 10, 3, 8).unwrap()).unwrap();

    let mut expected = vec![0.0; 4 * 5];
    matmul_naive_ijk(&va.to_row_major(), &vb.to_row_major(), &mut expected, 4, 5, 5);
    check_window(&c, &expected);
}

#[test]
fn test_subview_transpose_left() {
    let a = block(8, 7, 3, &dense(8, 7, 14));
    let b = block(8, 5, 3, &dense(8, 5, 15));
    let mut c = BlockMatrix::from_row_major(10, 8, 3, &[42.0; 80]).unwrap();

    let va = a.view(3, 8, 3, 7).unwrap();
    let vb = b.view(3, 8, 0, 5).unwrap();
    multiply_transpose_left(3, &va, &vb, &mut c.view_mut(6, 10, 3, 8).unwrap()).unwrap();

    let mut expected = vec![0.0; 4 * 5];
    matmul_naive_trans_a(&va.to_row_major(), &vb.to_row_major(), &mut expected, 4, 5, 5);
    check_window(&c, &expected);
}

#[test]
fn test_subview_transpose_right() {
    let a = block(7, 8, 3, &dense(7, 8, 16));
    let b = block(5, 8, 3, &dense(5, 8, 17));
    let mut c = BlockMatrix::from_row_major(10, 8, 3, &[42.0; 80]).unwrap();

    let va = a.view(3, 7, 3, 8).unwrap();
    let vb = b.view(0, 5, 3, 8).unwrap();
    multiply_transpose_right(3, &va, &vb, &mut c.view_mut(6, 10, 3, 8).unwrap()).unwrap();

    let mut expected = vec![0.0; 4 * 5];
    matmul_naive_trans_b(&va.to_row_major(), &vb.to_row_major(), &mut expected, 4, 5, 5);
    check_window(&c, &expected);
}

// ============================================================
// Preconditions
// ============================================================

#[test]
fn test_dimension_mismatch_leaves_output_untouched() {
    let a = block(4, 3, 2, &dense(4, 3, 18));
    let b = block(4, 2, 2, &dense(4, 2, 19));
    let mut c = BlockMatrix::from_row_major(4, 2, 2, &[7.0; 8]).unwrap();
    let before = c.clone();

    let err = multiply(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).unwrap_err();
    assert!(matches!(err, BlockError::DimensionMismatch { op: "multiply", .. }));
    assert_eq!(c, before);

    // Aᵀ × B would fit these shapes only with C as 3×2
    let err = multiply_transpose_left(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut())
        .unwrap_err();
    assert!(matches!(err, BlockError::DimensionMismatch { .. }));
    assert_eq!(c, before);

    let err = multiply_transpose_right(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut())
        .unwrap_err();
    assert!(matches!(err, BlockError::DimensionMismatch { .. }));
    assert_eq!(c, before);
}

#[test]
fn test_block_length_checks() {
    let a = block(4, 4, 2, &dense(4, 4, 20));
    let b = block(4, 4, 3, &dense(4, 4, 21));
    let mut c = BlockMatrix::new(4, 4, 2).unwrap();

    assert_eq!(
        multiply(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).unwrap_err(),
        BlockError::BlockLengthMismatch {
            expected: 2,
            got: 3
        }
    );
    assert_eq!(
        multiply(0, &a.full_view(), &a.full_view(), &mut c.full_view_mut()).unwrap_err(),
        BlockError::InvalidBlockLength
    );
}

#[test]
fn test_empty_contraction_zero_fills() {
    let a = BlockMatrix::new(3, 0, 2).unwrap();
    let b = BlockMatrix::new(0, 2, 2).unwrap();
    let mut c = BlockMatrix::from_row_major(3, 2, 2, &[5.0; 6]).unwrap();

    multiply(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).unwrap();

    assert_eq!(c.to_row_major(), vec![0.0; 6]);
}

// ============================================================
// Property tests
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_drivers_match_naive(
        m in 1usize..12,
        n in 1usize..12,
        k in 1usize..12,
        bl in 1usize..9,
        salt in 0usize..100,
    ) {
        let a = dense(m, k, salt);
        let b = dense(k, n, salt + 1);
        let mut expected = vec![0.0; m * n];
        matmul_naive_ijk(&a, &b, &mut expected, m, n, k);

        let (c1, c2, c3) = run_all(m, n, k, bl, &a, &b);
        prop_assert_eq!(&expected, &c1);
        prop_assert_eq!(&expected, &c2);
        prop_assert_eq!(&expected, &c3);
    }

    #[test]
    fn prop_block_length_does_not_change_result(
        m in 1usize..10,
        n in 1usize..10,
        k in 1usize..10,
        bl in 2usize..12,
    ) {
        let a = dense(m, k, 3);
        let b = dense(k, n, 5);
        prop_assert_eq!(run_all(m, n, k, 1, &a, &b), run_all(m, n, k, bl, &a, &b));
    }
}
