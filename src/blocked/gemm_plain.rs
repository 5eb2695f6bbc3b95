//! Blocked C = A × B.

use super::{check_block_length, dimension_mismatch};
use crate::error::Result;
use crate::kernels::kernel_plain::{kernel_plain_add, kernel_plain_set};
use crate::matrix::{Submatrix, SubmatrixMut};

/// Block matrix multiplication: C = A × B
///
/// All three views must be block-aligned windows over matrices stored with
/// `block_length`. A must be m × k, B k × n and C m × n. C is overwritten;
/// it is a mutable borrow, so it cannot overlap A or B.
///
/// # Errors
///
/// Returns an error, without touching C, if `block_length` is zero, if any
/// operand is stored with a different block length, or if the extents do
/// not line up.
///
/// # Example
///
/// ```
/// use blockmat::{multiply, BlockMatrix};
///
/// let a = BlockMatrix::from_row_major(2, 3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let b = BlockMatrix::from_row_major(3, 2, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
/// let mut c = BlockMatrix::new(2, 2, 2).unwrap();
///
/// multiply(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).unwrap();
///
/// assert_eq!(c.to_row_major(), vec![58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn multiply(
    block_length: usize,
    a: &Submatrix<'_>,
    b: &Submatrix<'_>,
    c: &mut SubmatrixMut<'_>,
) -> Result<()> {
    check_block_length(block_length, a, b, c)?;
    if a.cols() != b.rows() || c.rows() != a.rows() || c.cols() != b.cols() {
        return Err(dimension_mismatch("multiply", a, b, c));
    }

    log::debug!(
        "multiply: [{}x{}] x [{}x{}], block length {}",
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

    // Output block-rows of C follow the block-rows of A
    for i in (a.row0..a.row1).step_by(block_length) {
        let height_a = block_length.min(a.row1 - i);

        // Output block-columns of C follow the block-columns of B
        for j in (b.col0..b.col1).step_by(block_length) {
            let width_b = block_length.min(b.col1 - j);

            // C's block-row has the same height as A's
            let index_c = (i - a.row0 + c_row0) * cols_c + (j - b.col0 + c_col0) * height_a;

            log::trace!("multiply: C tile at {} ({}x{})", index_c, height_a, width_b);

            for k in (a.col0..a.col1).step_by(block_length) {
                let width_a = block_length.min(a.col1 - k);

                let index_a = i * cols_a + k * height_a;
                // B's block-row here is as tall as A's tile is wide
                let index_b = (k - a.col0 + b.row0) * cols_b + j * width_a;

                if k == a.col0 {
                    kernel_plain_set(
                        data_a, data_b, data_c, index_a, index_b, index_c, height_a, width_a,
                        width_b,
                    );
                } else {
                    kernel_plain_add(
                        data_a, data_b, data_c, index_a, index_b, index_c, height_a, width_a,
                        width_b,
                    );
                }
            }
        }
    }
    Ok(())
}
