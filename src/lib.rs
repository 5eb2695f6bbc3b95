//! Cache-blocked matrix multiplication over block-major matrices.
//!
//! A [`BlockMatrix`] stores its elements tile by tile instead of row by row,
//! so a whole tile of `block_length × block_length` values sits in one
//! contiguous run of memory. The drivers multiply block-aligned windows
//! ([`Submatrix`] / [`SubmatrixMut`]) of such matrices one tile triple at a
//! time, which keeps the working set of the inner loops small enough to stay
//! in cache.
//!
//! ## Usage
//!
//! ```
//! use blockmat::{multiply, BlockMatrix};
//!
//! let a = BlockMatrix::from_row_major(3, 3, 2, &[1.0, 2.0, 3.0,
//!                                                4.0, 5.0, 6.0,
//!                                                7.0, 8.0, 9.0]).unwrap();
//! let b = BlockMatrix::identity(3, 2).unwrap();
//! let mut c = BlockMatrix::new(3, 3, 2).unwrap();
//!
//! multiply(2, &a.full_view(), &b.full_view(), &mut c.full_view_mut()).unwrap();
//!
//! assert_eq!(c, a);
//! ```
//!
//! Windows work the same way. Here the bottom-right 2×2 block of C receives
//! the product of a 2×4 strip of A and a 4×2 strip of B:
//!
//! ```
//! use blockmat::{multiply, BlockMatrix};
//!
//! let a = BlockMatrix::from_row_major(4, 4, 2, &[1.0; 16]).unwrap();
//! let b = BlockMatrix::from_row_major(4, 4, 2, &[2.0; 16]).unwrap();
//! let mut c = BlockMatrix::new(4, 4, 2).unwrap();
//!
//! let a_strip = a.view(0, 2, 0, 4).unwrap();
//! let b_strip = b.view(0, 4, 2, 4).unwrap();
//! multiply(2, &a_strip, &b_strip, &mut c.view_mut(2, 4, 2, 4).unwrap()).unwrap();
//!
//! assert_eq!(c.get(3, 3), 8.0);
//! assert_eq!(c.get(0, 0), 0.0);
//! ```
//!
//! ## What's inside
//!
//! - Block-major container with row-major conversion and transpose
//! - Block-aligned views, checked at construction
//! - Three drivers: A × B, Aᵀ × B, A × Bᵀ
//! - Six tile kernels (set / accumulate for each driver)
//! - Naive dense baselines for correctness checks

pub mod blocked;
pub mod error;
pub mod kernels;
pub mod matrix;

pub use blocked::{multiply, multiply_transpose_left, multiply_transpose_right};
pub use error::{BlockError, Result};
pub use matrix::naive::matmul_naive_ijk;
pub use matrix::{BlockMatrix, DEFAULT_BLOCK_LENGTH, Submatrix, SubmatrixMut};
