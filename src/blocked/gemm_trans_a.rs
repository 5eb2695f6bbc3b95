//! Blocked C = Aᵀ × B.

use super::{check_block_length, dimension_mismatch};
use crate::error::Result;
use crate::kernels::kernel_trans_a::{kernel_trans_a_add, kernel_trans_a_set};
use crate::matrix::{Submatrix, SubmatrixMut};

/// Block matrix multiplication with A transposed: C = Aᵀ × B
///
/// A is k × m as stored, B is k × n and C is m × n. The block-columns of A
/// become the output block-rows and A's block-rows are the contraction axis.
///
/// # Errors
///
/// Same conditions as [`crate::blocked::multiply`]. C is untouched on error.
pub fn multiply_transpose_left(
    block_length: usize,
    a: &Submatrix<'_>,
    b: &Submatrix<'_>,
    c: &mut SubmatrixMut<'_>,
) -> Result<()> {
    check_block_length(block_length, a, b, c)?;
    if a.rows() != b.rows() || c.rows() != a.cols() || c.cols() != b.cols() {
        return Err(dimension_mismatch("multiply_transpose_left", a, b, c));
    }

    log::debug!(
        "multiply_transpose_left: [{}x{}]ᵀ x [{}x{}], block length {}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols(),
        block_length
    );

    if a.rows() == 0 {
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

    for i in (a.col0..a.col1).step_by(block_length) {
        let width_a = block_length.min(a.col1 - i);

        for j in (b.col0..b.col1).step_by(block_length) {
            let width_b = block_length.min(b.col1 - j);

            let index_c = (i - a.col0 + c_row0) * cols_c + (j - b.col0 + c_col0) * width_a;

            log::trace!(
                "multiply_transpose_left: C tile at {} ({}x{})",
                index_c,
                width_a,
                width_b
            );

            for k in (a.row0..a.row1).step_by(block_length) {
                let height_a = block_length.min(a.row1 - k);

                let index_a = k * cols_a + i * height_a;
                let index_b = (k - a.row0 + b.row0) * cols_b + j * height_a;

                if k == a.row0 {
                    kernel_trans_a_set(
                        data_a, data_b, data_c, index_a, index_b, index_c, height_a, width_a,
                        width_b,
                    );
                } else {
                    kernel_trans_a_add(
                        data_a, data_b, data_c, index_a, index_b, index_c, height_a, width_a,
                        width_b,
                    );
                }
            }
        }
    }
    Ok(())
}
