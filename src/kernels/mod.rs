//! Tile kernels for the inner computation of the block drivers.
//!
//! Each kernel multiplies one tile of A against one tile of B and writes the
//! product into a tile of C. Tiles are addressed by a raw offset into the
//! matrix buffer; inside a tile the data is row-major with the tile's own
//! (clipped) width as the stride. Kernels know nothing about blocking or
//! views, the drivers in [`crate::blocked`] compute every offset.
//!
//! Every kernel comes in two flavours:
//! - `*_set`: C = A × B (overwrites the output tile)
//! - `*_add`: C += A × B (accumulates into the output tile)
//!
//! Available kernels:
//! - `kernel_plain`: C = A × B
//! - `kernel_trans_a`: C = Aᵀ × B
//! - `kernel_trans_b`: C = A × Bᵀ
//!
//! All of them sum over the contraction index in ascending order, so the
//! result of a single tile product is bit-for-bit reproducible.

pub mod kernel_plain;
pub mod kernel_trans_a;
pub mod kernel_trans_b;

/// Ascending-order dot product of two equally long strided sequences.
#[inline(always)]
fn dot<'a>(a: impl Iterator<Item = &'a f64>, b: impl Iterator<Item = &'a f64>) -> f64 {
    a.zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
}

/// Writes `val` into `out`, either replacing or adding to it.
#[inline(always)]
fn store<const ADD: bool>(out: &mut f64, val: f64) {
    if ADD {
        *out += val;
    } else {
        *out = val;
    }
}
