//! Core traits for grid-based relaxation.

use crate::core::field::Field;

/// Uniform shape queries for anything laid out on an `nx × ny` grid.
pub trait GridShape {
    /// Number of rows (x direction).
    fn nx(&self) -> usize;
    /// Number of columns (y direction).
    fn ny(&self) -> usize;
    /// `(nx, ny)`.
    fn shape(&self) -> (usize, usize) {
        (self.nx(), self.ny())
    }
    /// True if `(i, j)` lies on the outer ring of the grid.
    fn is_boundary(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i + 1 == self.nx() || j + 1 == self.ny()
    }
}

/// Pointwise update rule applied to interior nodes during a sweep.
///
/// Implementations read only from the snapshot `u`, never from the buffer being
/// written, so a sweep built on top of them has Jacobi semantics.
pub trait Stencil<T> {
    /// New value at interior node `(i, j)`.
    fn update(&self, u: &Field<T>, f: &Field<T>, i: usize, j: usize) -> T;

    /// Update interior columns `1..ny-1` of row `i`, writing into `out`.
    ///
    /// `out` is row `i` of the destination buffer; its first and last entries
    /// are boundary values and are left untouched.
    fn update_row(&self, u: &Field<T>, f: &Field<T>, i: usize, out: &mut [T]) {
        let ny = out.len();
        for j in 1..ny - 1 {
            out[j] = self.update(u, f, i, j);
        }
    }
}
