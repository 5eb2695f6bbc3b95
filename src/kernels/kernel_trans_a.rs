//! Tile kernel for C = Aᵀ × B.

use super::{dot, store};

/// Computes a tile product: C[w_a × w_c] = A[d × w_a]ᵀ × B[d × w_c]
///
/// A is stored untransposed, so `height_a` is the contraction depth and
/// `width_a` becomes the height of C. Both operands are read down a column:
/// A with stride `width_a`, B with stride `width_c`.
///
/// # Panics
///
/// Panics if any tile runs past the end of its buffer, or if a dimension is
/// zero.
#[allow(clippy::too_many_arguments)]
pub fn kernel_trans_a_set(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    index_a: usize,
    index_b: usize,
    index_c: usize,
    height_a: usize,
    width_a: usize,
    width_c: usize,
) {
    kernel_trans_a::<false>(a, b, c, index_a, index_b, index_c, height_a, width_a, width_c);
}

/// Computes a tile product: C[w_a × w_c] += A[d × w_a]ᵀ × B[d × w_c]
#[allow(clippy::too_many_arguments)]
pub fn kernel_trans_a_add(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    index_a: usize,
    index_b: usize,
    index_c: usize,
    height_a: usize,
    width_a: usize,
    width_c: usize,
) {
    kernel_trans_a::<true>(a, b, c, index_a, index_b, index_c, height_a, width_a, width_c);
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn kernel_trans_a<const ADD: bool>(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    index_a: usize,
    index_b: usize,
    index_c: usize,
    height_a: usize,
    width_a: usize,
    width_c: usize,
) {
    debug_assert!(height_a > 0 && width_a > 0 && width_c > 0);

    let a_tile = &a[index_a..index_a + height_a * width_a];
    let b_tile = &b[index_b..index_b + height_a * width_c];
    let c_tile = &mut c[index_c..index_c + width_a * width_c];

    for (i, c_row) in c_tile.chunks_exact_mut(width_c).enumerate() {
        for (j, out) in c_row.iter_mut().enumerate() {
            let val = dot(
                a_tile[i..].iter().step_by(width_a),
                b_tile[j..].iter().step_by(width_c),
            );
            store::<ADD>(out, val);
        }
    }
}
