//! Dense row-major 2D scalar field.
//!
//! `Field<T>` stores an `nx × ny` array with `data[i * ny + j]` holding the value at
//! row `i`, column `j`. Row `i` corresponds to the x coordinate `x[i]` and column `j`
//! to `y[j]`, matching the `(row, column)` indexing used throughout the solver.

use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::core::traits::GridShape;
use crate::error::{PoissonError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Field<T> {
    nx: usize,
    ny: usize,
    data: Vec<T>,
}

impl<T: Float> Field<T> {
    /// All-zero field of shape `nx × ny`.
    pub fn zeros(nx: usize, ny: usize) -> Self {
        Self::filled(nx, ny, T::zero())
    }

    /// Field with every entry set to `value`.
    pub fn filled(nx: usize, ny: usize, value: T) -> Self {
        Self { nx, ny, data: vec![value; nx * ny] }
    }

    /// Build a field by evaluating `f(i, j)` at every index.
    pub fn from_fn<F>(nx: usize, ny: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(nx * ny);
        for i in 0..nx {
            for j in 0..ny {
                data.push(f(i, j));
            }
        }
        Self { nx, ny, data }
    }

    /// Wrap existing row-major storage.
    pub fn from_row_major(nx: usize, ny: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != nx * ny {
            return Err(PoissonError::ShapeMismatch {
                name: "row-major data",
                expected: (nx, ny),
                found: (data.len(), 1),
            });
        }
        Ok(Self { nx, ny, data })
    }

    /// Transposed copy: `out[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ny, self.nx, |i, j| self[(j, i)])
    }

    /// Index of the first NaN or infinite entry, scanning row by row.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|k| (k / self.ny, k % self.ny))
    }

    /// Smallest and largest entry, ignoring NaN. `None` if nothing is left.
    pub fn min_max(&self) -> Option<(T, T)> {
        let mut it = self.data.iter().copied().filter(|v| !v.is_nan());
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl<T> Field<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row `i` as a slice of length `ny`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ny..(i + 1) * self.ny]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.ny..(i + 1) * self.ny]
    }

    /// Iterate over `((i, j), &value)` for every boundary node, each node once.
    pub fn boundary(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let (nx, ny) = (self.nx, self.ny);
        self.data.iter().enumerate().filter_map(move |(k, v)| {
            let (i, j) = (k / ny, k % ny);
            if i == 0 || j == 0 || i + 1 == nx || j + 1 == ny {
                Some(((i, j), v))
            } else {
                None
            }
        })
    }
}

impl<T> GridShape for Field<T> {
    fn nx(&self) -> usize {
        self.nx
    }
    fn ny(&self) -> usize {
        self.ny
    }
}

impl<T> Index<(usize, usize)> for Field<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(i < self.nx && j < self.ny, "index ({i}, {j}) out of bounds");
        &self.data[i * self.ny + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Field<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(i < self.nx && j < self.ny, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.ny + j]
    }
}

impl<T> AsRef<[T]> for Field<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for Field<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let f = Field::<f64>::from_fn(2, 3, |i, j| (10 * i + j) as f64);
        assert_eq!(f.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(f.row(1), &[10.0, 11.0, 12.0]);
        assert_eq!(f[(1, 2)], 12.0);
        assert_eq!(f.shape(), (2, 3));
    }

    #[test]
    fn from_row_major_rejects_wrong_length() {
        let err = Field::<f64>::from_row_major(3, 3, vec![0.0; 8]).unwrap_err();
        assert!(matches!(err, PoissonError::ShapeMismatch { .. }));
    }

    #[test]
    fn boundary_visits_each_edge_node_once() {
        let f = Field::<f64>::zeros(4, 5);
        let nodes: Vec<_> = f.boundary().map(|(ij, _)| ij).collect();
        // two full rows of 5, two partial columns of 2
        assert_eq!(nodes.len(), 14);
        assert!(nodes.iter().all(|&(i, j)| f.is_boundary(i, j)));
        assert!(!nodes.contains(&(1, 1)));
    }

    #[test]
    fn first_non_finite_reports_position() {
        let mut f = Field::<f64>::zeros(3, 4);
        assert_eq!(f.first_non_finite(), None);
        f[(2, 1)] = f64::INFINITY;
        f[(2, 3)] = f64::NAN;
        assert_eq!(f.first_non_finite(), Some((2, 1)));
    }

    #[test]
    fn transpose_swaps_axes() {
        let f = Field::<f64>::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let t = f.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(2, 1)], f[(1, 2)]);
    }

    #[test]
    fn min_max_skips_nan() {
        let f = Field::from_row_major(1, 4, vec![2.0, f64::NAN, -1.0, 5.0]).unwrap();
        assert_eq!(f.min_max(), Some((-1.0, 5.0)));
    }
}
