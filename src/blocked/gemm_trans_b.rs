//! Blocked C = A × Bᵀ.

use super::{check_block_length, dimension_mismatch};
use crate::error::Result;
use crate::kernels::kernel_trans_b::{kernel_trans_b_add, kernel_trans_b_set};
use crate::matrix::{Submatrix, SubmatrixMut};

/// Block matrix multiplication with B transposed: C = A × Bᵀ
///
/// A is m × k, B is n × k as stored and C is m × n. The block-rows of B
/// become the output block-columns, and B's block-columns are walked in step
/// with A's as the contraction axis.
///
/// # Errors
///
/// Same conditions as [`crate::blocked::multiply`]. C is untouched on error.
pub fn multiply_transpose_right(
    block_length: usize,
    a: &Submatrix<'_>,
    b: &Submatrix<'_>,
    c: &mut SubmatrixMut<'_>,
) -> Result<()> {
    check_block_length(block_length, a, b, c)?;
    if a.cols() != b.cols() || c.rows() != a.rows() || c.cols() != b.rows() {
        return Err(dimension_mismatch("multiply_transpose_right", a, b, c));
    }

    log::debug!(
        "multiply_transpose_right: [{}x{}] x [{}x{}]ᵀ, block length {}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols(),
        block_length
    );

    if a.cols() == 0 {
        c.fill_zero();
        return Ok(());
    }

    let data_a = a.matrix().data();
    let data_b = b.matrix().data();
    let cols_a = a.matrix().num_cols();
    let cols_b = b.matrix().num_cols();
    let cols_c = c.matrix().num_cols();
    let (c_row0, c_col0) = (c.row0, c.col0);
    let data_c = c.matrix.data_mut();

    for i in (a.row0..a.row1).step_by(block_length) {
        let height_a = block_length.min(a.row1 - i);

        for j in (b.row0..b.row1).step_by(block_length) {
            let width_c = block_length.min(b.row1 - j);

            let index_c = (i - a.row0 + c_row0) * cols_c + (j - b.row0 + c_col0) * height_a;

            log::trace!(
                "multiply_transpose_right: C tile at {} ({}x{})",
                index_c,
                height_a,
                width_c
            );

            for k in (a.col0..a.col1).step_by(block_length) {
                let width_a = block_length.min(a.col1 - k);

                let index_a = i * cols_a + k * height_a;
                // B's block-row j is width_c tall
                let index_b = j * cols_b + (k - a.col0 + b.col0) * width_c;

                if k == a.col0 {
                    kernel_trans_b_set(
                        data_a, data_b, data_c, index_a, index_b, index_c, height_a, width_a,
                        width_c,
                    );
                } else {
                    kernel_trans_b_add(
                        data_a, data_b, data_c, index_a, index_b, index_c, height_a, width_a,
                        width_c,
                    );
                }
            }
        }
    }
    Ok(())
}
