//! Tile kernel for C = A × Bᵀ.

use super::{dot, store};

/// Computes a tile product: C[h × w_c] = A[h × d] × B[w_c × d]ᵀ
///
/// Both A and B are walked row by row, so every inner product reads two
/// contiguous runs of `width_a` values.
///
/// # Panics
///
/// Panics if any tile runs past the end of its buffer, or if a dimension is
/// zero.
#[allow(clippy::too_many_arguments)]
pub fn kernel_trans_b_set(
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
    kernel_trans_b::<false>(a, b, c, index_a, index_b, index_c, height_a, width_a, width_c);
}

/// Computes a tile product: C[h × w_c] += A[h × d] × B[w_c × d]ᵀ
#[allow(clippy::too_many_arguments)]
pub fn kernel_trans_b_add(
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
    kernel_trans_b::<true>(a, b, c, index_a, index_b, index_c, height_a, width_a, width_c);
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn kernel_trans_b<const ADD: bool>(
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
    let b_tile = &b[index_b..index_b + width_c * width_a];
    let c_tile = &mut c[index_c..index_c + height_a * width_c];

    for (a_row, c_row) in a_tile
        .chunks_exact(width_a)
        .zip(c_tile.chunks_exact_mut(width_c))
    {
        for (b_row, out) in b_tile.chunks_exact(width_a).zip(c_row.iter_mut()) {
            store::<ADD>(out, dot(a_row.iter(), b_row.iter()));
        }
    }
}
