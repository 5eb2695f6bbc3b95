//! Block-aligned windows into a [`BlockMatrix`].
//!
//! A view never owns data. [`Submatrix`] borrows the matrix shared and is
//! used for the inputs of a product; [`SubmatrixMut`] borrows it exclusively
//! and is used for the output. Since an output view holds the only mutable
//! borrow of its matrix, it can never alias an input view.

use super::block_matrix::BlockMatrix;
use crate::error::{BlockError, Result};

/// Read-only view of rows `row0..row1` and columns `col0..col1`.
#[derive(Debug, Clone, Copy)]
pub struct Submatrix<'a> {
    pub(crate) matrix: &'a BlockMatrix,
    pub(crate) row0: usize,
    pub(crate) row1: usize,
    pub(crate) col0: usize,
    pub(crate) col1: usize,
}

/// Writable view of rows `row0..row1` and columns `col0..col1`.
#[derive(Debug)]
pub struct SubmatrixMut<'a> {
    pub(crate) matrix: &'a mut BlockMatrix,
    pub(crate) row0: usize,
    pub(crate) row1: usize,
    pub(crate) col0: usize,
    pub(crate) col1: usize,
}

/// Checks that the window fits in the matrix and starts and ends on block
/// boundaries. A bound is on a boundary when it is a multiple of the block
/// length or equal to the matrix extent.
fn check_bounds(
    matrix: &BlockMatrix,
    row0: usize,
    row1: usize,
    col0: usize,
    col1: usize,
) -> Result<()> {
    if row0 > row1 || col0 > col1 || row1 > matrix.num_rows() || col1 > matrix.num_cols() {
        return Err(BlockError::ViewOutOfBounds {
            row0,
            row1,
            col0,
            col1,
            num_rows: matrix.num_rows(),
            num_cols: matrix.num_cols(),
        });
    }

    let bl = matrix.block_length();
    let on_boundary = |x: usize, extent: usize| x % bl == 0 || x == extent;

    if !(on_boundary(row0, matrix.num_rows())
        && on_boundary(row1, matrix.num_rows())
        && on_boundary(col0, matrix.num_cols())
        && on_boundary(col1, matrix.num_cols()))
    {
        return Err(BlockError::MisalignedView {
            row0,
            row1,
            col0,
            col1,
            block_length: bl,
        });
    }
    Ok(())
}

impl BlockMatrix {
    /// Read-only view of a block-aligned window.
    ///
    /// # Example
    ///
    /// ```
    /// use blockmat::BlockMatrix;
    ///
    /// let m = BlockMatrix::new(5, 5, 2).unwrap();
    /// assert!(m.view(2, 5, 0, 4).is_ok());
    /// assert!(m.view(1, 5, 0, 4).is_err()); // row 1 is inside a block
    /// ```
    pub fn view(&self, row0: usize, row1: usize, col0: usize, col1: usize) -> Result<Submatrix<'_>> {
        check_bounds(self, row0, row1, col0, col1)?;
        Ok(Submatrix {
            matrix: self,
            row0,
            row1,
            col0,
            col1,
        })
    }

    /// Writable view of a block-aligned window.
    pub fn view_mut(
        &mut self,
        row0: usize,
        row1: usize,
        col0: usize,
        col1: usize,
    ) -> Result<SubmatrixMut<'_>> {
        check_bounds(self, row0, row1, col0, col1)?;
        Ok(SubmatrixMut {
            matrix: self,
            row0,
            row1,
            col0,
            col1,
        })
    }

    /// View of the whole matrix.
    pub fn full_view(&self) -> Submatrix<'_> {
        Submatrix {
            matrix: self,
            row0: 0,
            row1: self.num_rows(),
            col0: 0,
            col1: self.num_cols(),
        }
    }

    /// Writable view of the whole matrix.
    pub fn full_view_mut(&mut self) -> SubmatrixMut<'_> {
        let (row1, col1) = (self.num_rows(), self.num_cols());
        SubmatrixMut {
            matrix: self,
            row0: 0,
            row1,
            col0: 0,
            col1,
        }
    }
}

impl<'a> Submatrix<'a> {
    pub fn matrix(&self) -> &'a BlockMatrix {
        self.matrix
    }

    pub fn row0(&self) -> usize {
        self.row0
    }

    pub fn row1(&self) -> usize {
        self.row1
    }

    pub fn col0(&self) -> usize {
        self.col0
    }

    pub fn col1(&self) -> usize {
        self.col1
    }

    /// Number of rows in the window.
    pub fn rows(&self) -> usize {
        self.row1 - self.row0
    }

    /// Number of columns in the window.
    pub fn cols(&self) -> usize {
        self.col1 - self.col0
    }

    /// Copies the window out as a dense row-major buffer.
    pub fn to_row_major(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.rows() * self.cols());
        for r in self.row0..self.row1 {
            for c in self.col0..self.col1 {
                out.push(self.matrix.get(r, c));
            }
        }
        out
    }
}

impl SubmatrixMut<'_> {
    pub fn matrix(&self) -> &BlockMatrix {
        &*self.matrix
    }

    pub fn row0(&self) -> usize {
        self.row0
    }

    pub fn row1(&self) -> usize {
        self.row1
    }

    pub fn col0(&self) -> usize {
        self.col0
    }

    pub fn col1(&self) -> usize {
        self.col1
    }

    pub fn rows(&self) -> usize {
        self.row1 - self.row0
    }

    pub fn cols(&self) -> usize {
        self.col1 - self.col0
    }

    /// Read-only view of the same window.
    pub fn as_view(&self) -> Submatrix<'_> {
        Submatrix {
            matrix: &*self.matrix,
            row0: self.row0,
            row1: self.row1,
            col0: self.col0,
            col1: self.col1,
        }
    }

    /// Sets every element inside the window to zero.
    pub fn fill_zero(&mut self) {
        for r in self.row0..self.row1 {
            for c in self.col0..self.col1 {
                self.matrix.set(r, c, 0.0);
            }
        }
    }
}
