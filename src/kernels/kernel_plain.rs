//! Tile kernel for C = A × B.

use super::{dot, store};

/// Computes a tile product: C[h × w] = A[h × d] × B[d × w]
///
/// `height_a` is the tile height of A and C, `width_a` the contraction depth
/// (width of A, height of B) and `width_c` the width of B and C.
///
/// Walks C row-major. For each output element the row of A is read
/// sequentially and the column of B with stride `width_c`.
///
/// # Panics
///
/// Panics if any tile runs past the end of its buffer, or if a dimension is
/// zero. The drivers never produce either.
#[allow(clippy::too_many_arguments)]
pub fn kernel_plain_set(
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
    kernel_plain::<false>(a, b, c, index_a, index_b, index_c, height_a, width_a, width_c);
}

/// Computes a tile product: C[h × w] += A[h × d] × B[d × w]
///
/// Same as [`kernel_plain_set`] but accumulates into C.
#[allow(clippy::too_many_arguments)]
pub fn kernel_plain_add(
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
    kernel_plain::<true>(a, b, c, index_a, index_b, index_c, height_a, width_a, width_c);
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn kernel_plain<const ADD: bool>(
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
    let b_tile = &b[index_b..index_b + width_a * width_c];
    let c_tile = &mut c[index_c..index_c + height_a * width_c];

    for (a_row, c_row) in a_tile
        .chunks_exact(width_a)
        .zip(c_tile.chunks_exact_mut(width_c))
    {
        for (j, out) in c_row.iter_mut().enumerate() {
            let val = dot(a_row.iter(), b_tile[j..].iter().step_by(width_c));
            store::<ADD>(out, val);
        }
    }
}
