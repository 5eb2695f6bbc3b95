//! Block drivers for products of block-major submatrices.
//!
//! A driver walks the output block-rows, output block-columns, and
//! contraction blocks of its operands in steps of the block length, clips
//! every step at the trailing edge, and hands each tile triple to a kernel
//! from [`crate::kernels`]. The first contraction block of an output tile
//! uses the `set` kernel and every later one the `add` kernel, so C needs no
//! zero-fill pass and each output tile is the ascending sum of its partial
//! products.
//!
//! Available drivers:
//! - `gemm_plain`: C = A × B
//! - `gemm_trans_a`: C = Aᵀ × B
//! - `gemm_trans_b`: C = A × Bᵀ
//!
//! All operand checks run before the first write to C. A call that returns
//! an error leaves C untouched.

pub mod gemm_plain;
pub mod gemm_trans_a;
pub mod gemm_trans_b;

pub use gemm_plain::multiply;
pub use gemm_trans_a::multiply_transpose_left;
pub use gemm_trans_b::multiply_transpose_right;

use crate::error::{BlockError, Result};
use crate::matrix::{Submatrix, SubmatrixMut};

/// Every operand must be stored with the block length the driver steps by.
fn check_block_length(
    block_length: usize,
    a: &Submatrix<'_>,
    b: &Submatrix<'_>,
    c: &SubmatrixMut<'_>,
) -> Result<()> {
    if block_length == 0 {
        return Err(BlockError::InvalidBlockLength);
    }
    for got in [
        a.matrix().block_length(),
        b.matrix().block_length(),
        c.matrix().block_length(),
    ] {
        if got != block_length {
            return Err(BlockError::BlockLengthMismatch {
                expected: block_length,
                got,
            });
        }
    }
    Ok(())
}

fn dimension_mismatch(
    op: &'static str,
    a: &Submatrix<'_>,
    b: &Submatrix<'_>,
    c: &SubmatrixMut<'_>,
) -> BlockError {
    BlockError::DimensionMismatch {
        op,
        a: (a.rows(), a.cols()),
        b: (b.rows(), b.cols()),
        c: (c.rows(), c.cols()),
    }
}
