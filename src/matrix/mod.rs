//! Matrix storage, views, and naive baselines.
//!
//! - `block_matrix`: the block-major container the drivers operate on
//! - `submatrix`: block-aligned read-only and writable windows
//! - `naive`: dense row-major reference products used for correctness

pub mod block_matrix;
pub mod naive;
pub mod submatrix;

pub use block_matrix::{BlockMatrix, DEFAULT_BLOCK_LENGTH};
pub use submatrix::{Submatrix, SubmatrixMut};
