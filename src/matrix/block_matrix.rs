//! Block-major matrix container.

use crate::blocked::{multiply, multiply_transpose_left, multiply_transpose_right};
use crate::error::{BlockError, Result};

/// Block length used by [`BlockMatrix::with_default_block`].
pub const DEFAULT_BLOCK_LENGTH: usize = 60;

/// A dense `f64` matrix stored in block-major order.
///
/// The matrix is cut into square blocks of side `block_length`; blocks in the
/// last block-row and block-column are clipped to whatever is left. Blocks are
/// stored block-row by block-row, left to right, and each block is row-major
/// with its own clipped width as the stride. A block-row of height `h`
/// therefore occupies `h * num_cols` consecutive values, and the block at
/// origin `(i, j)` starts at `i * num_cols + j * h`.
///
/// For a 3×3 matrix with block length 2 the buffer holds
/// `[a00 a01 a10 a11 | a02 a12 | a20 a21 | a22]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMatrix {
    num_rows: usize,
    num_cols: usize,
    block_length: usize,
    data: Vec<f64>,
}

impl BlockMatrix {
    /// Creates a zero-filled matrix.
    pub fn new(num_rows: usize, num_cols: usize, block_length: usize) -> Result<Self> {
        if block_length == 0 {
            return Err(BlockError::InvalidBlockLength);
        }
        Ok(BlockMatrix {
            num_rows,
            num_cols,
            block_length,
            data: vec![0.0; num_rows * num_cols],
        })
    }

    /// Creates a zero-filled matrix with [`DEFAULT_BLOCK_LENGTH`].
    pub fn with_default_block(num_rows: usize, num_cols: usize) -> Self {
        BlockMatrix {
            num_rows,
            num_cols,
            block_length: DEFAULT_BLOCK_LENGTH,
            data: vec![0.0; num_rows * num_cols],
        }
    }

    /// Creates an `n × n` identity matrix.
    pub fn identity(n: usize, block_length: usize) -> Result<Self> {
        let mut m = Self::new(n, n, block_length)?;
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        Ok(m)
    }

    /// Converts a dense row-major buffer into block-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use blockmat::BlockMatrix;
    ///
    /// let m = BlockMatrix::from_row_major(3, 3, 2, &[1.0, 2.0, 3.0,
    ///                                                4.0, 5.0, 6.0,
    ///                                                7.0, 8.0, 9.0]).unwrap();
    ///
    /// assert_eq!(m.data(), &[1.0, 2.0, 4.0, 5.0, 3.0, 6.0, 7.0, 8.0, 9.0]);
    /// assert_eq!(m.get(2, 1), 8.0);
    /// ```
    pub fn from_row_major(
        num_rows: usize,
        num_cols: usize,
        block_length: usize,
        src: &[f64],
    ) -> Result<Self> {
        if src.len() != num_rows * num_cols {
            return Err(BlockError::DataLength {
                expected: num_rows * num_cols,
                got: src.len(),
            });
        }
        let mut m = Self::new(num_rows, num_cols, block_length)?;

        for i in (0..num_rows).step_by(block_length) {
            let height = block_length.min(num_rows - i);

            for j in (0..num_cols).step_by(block_length) {
                let width = block_length.min(num_cols - j);
                let block = i * num_cols + j * height;

                for r in 0..height {
                    let from = (i + r) * num_cols + j;
                    let to = block + r * width;
                    m.data[to..to + width].copy_from_slice(&src[from..from + width]);
                }
            }
        }
        Ok(m)
    }

    /// Converts back into a dense row-major buffer.
    pub fn to_row_major(&self) -> Vec<f64> {
        let mut dst = vec![0.0; self.num_rows * self.num_cols];
        let bl = self.block_length;

        for i in (0..self.num_rows).step_by(bl) {
            let height = bl.min(self.num_rows - i);

            for j in (0..self.num_cols).step_by(bl) {
                let width = bl.min(self.num_cols - j);
                let block = i * self.num_cols + j * height;

                for r in 0..height {
                    let from = block + r * width;
                    let to = (i + r) * self.num_cols + j;
                    dst[to..to + width].copy_from_slice(&self.data[from..from + width]);
                }
            }
        }
        dst
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn block_length(&self) -> usize {
        self.block_length
    }

    /// The raw block-major buffer.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Buffer index of element `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_rows` or `col >= num_cols`.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.num_rows,
            self.num_cols
        );
        let bl = self.block_length;
        let block_row = row - row % bl;
        let block_col = col - col % bl;
        let height = bl.min(self.num_rows - block_row);
        let width = bl.min(self.num_cols - block_col);

        block_row * self.num_cols + block_col * height + (row - block_row) * width + (col - block_col)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.index_of(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let index = self.index_of(row, col);
        self.data[index] = value;
    }

    /// Returns the transpose, keeping the block length.
    ///
    /// Works tile by tile: the block at `(i, j)` becomes the block at
    /// `(j, i)` with its contents transposed.
    pub fn transpose(&self) -> BlockMatrix {
        let bl = self.block_length;
        let mut out = BlockMatrix {
            num_rows: self.num_cols,
            num_cols: self.num_rows,
            block_length: bl,
            data: vec![0.0; self.data.len()],
        };

        for i in (0..self.num_rows).step_by(bl) {
            let height = bl.min(self.num_rows - i);

            for j in (0..self.num_cols).step_by(bl) {
                let width = bl.min(self.num_cols - j);
                let from = i * self.num_cols + j * height;
                // Output block sits in block-row j, which has height `width`.
                let to = j * out.num_cols + i * width;

                for r in 0..height {
                    for c in 0..width {
                        out.data[to + c * height + r] = self.data[from + r * width + c];
                    }
                }
            }
        }
        out
    }

    /// Allocates and returns `self * b`.
    pub fn mult(&self, b: &BlockMatrix) -> Result<BlockMatrix> {
        let mut c = BlockMatrix::new(self.num_rows, b.num_cols, self.block_length)?;
        multiply(
            self.block_length,
            &self.full_view(),
            &b.full_view(),
            &mut c.full_view_mut(),
        )?;
        Ok(c)
    }

    /// Allocates and returns `selfᵀ * b`.
    pub fn mult_trans_a(&self, b: &BlockMatrix) -> Result<BlockMatrix> {
        let mut c = BlockMatrix::new(self.num_cols, b.num_cols, self.block_length)?;
        multiply_transpose_left(
            self.block_length,
            &self.full_view(),
            &b.full_view(),
            &mut c.full_view_mut(),
        )?;
        Ok(c)
    }

    /// Allocates and returns `self * bᵀ`.
    pub fn mult_trans_b(&self, b: &BlockMatrix) -> Result<BlockMatrix> {
        let mut c = BlockMatrix::new(self.num_rows, b.num_rows, self.block_length)?;
        multiply_transpose_right(
            self.block_length,
            &self.full_view(),
            &b.full_view(),
            &mut c.full_view_mut(),
        )?;
        Ok(c)
    }
}
