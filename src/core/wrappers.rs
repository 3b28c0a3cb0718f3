//! Interop between `Field` and `faer` dense matrices.
//!
//! Callers that set up grids or post-process solutions with `faer` can hand a
//! `faer::Mat` straight to the solver and get one back. Row `i` / column `j` of the
//! matrix map to `field[(i, j)]`.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use faer::{Mat, MatRef};
use num_traits::Float;

use crate::core::field::Field;
use crate::core::traits::GridShape;

/// Builds a field from a `faer::Mat`, copying entry by entry.
impl<T: Copy + Float> From<&Mat<T>> for Field<T> {
    fn from(m: &Mat<T>) -> Self {
        Field::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

/// Builds a field from a matrix view (`faer::MatRef`).
impl<'a, T: Copy + Float> From<MatRef<'a, T>> for Field<T> {
    fn from(m: MatRef<'a, T>) -> Self {
        Field::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl<T: Copy + Float> Field<T> {
    /// Copy into a column-major `faer::Mat` of the same shape.
    pub fn to_mat(&self) -> Mat<T> {
        Mat::from_fn(self.nx(), self.ny(), |i, j| self[(i, j)])
    }
}
