//! 5-point finite-difference stencil for the Poisson equation.

use num_traits::Float;

use crate::core::{Field, Stencil};
use crate::domain::Spacing;

/// Jacobi update for `-Δu = f` on a uniform grid:
///
/// ```text
/// u'[i,j] = ( dx²·dy²·f[i,j]
///           + dy²·(u[i-1,j] + u[i+1,j])
///           + dx²·(u[i,j-1] + u[i,j+1]) ) / (2·(dx² + dy²))
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FivePoint<T> {
    /// dx²·dy², weight of the source term.
    cf: T,
    /// dy², weight of the neighbors along x (rows i±1).
    cx: T,
    /// dx², weight of the neighbors along y (columns j±1).
    cy: T,
    /// 2·(dx² + dy²).
    denom: T,
}

impl<T: Float> FivePoint<T> {
    pub fn new(h: Spacing<T>) -> Self {
        let dx2 = h.dx * h.dx;
        let dy2 = h.dy * h.dy;
        Self {
            cf: dx2 * dy2,
            cx: dy2,
            cy: dx2,
            denom: (T::one() + T::one()) * (dx2 + dy2),
        }
    }
}

impl<T: Float> Stencil<T> for FivePoint<T> {
    #[inline]
    fn update(&self, u: &Field<T>, f: &Field<T>, i: usize, j: usize) -> T {
        (self.cf * f[(i, j)]
            + self.cx * (u[(i - 1, j)] + u[(i + 1, j)])
            + self.cy * (u[(i, j - 1)] + u[(i, j + 1)]))
            / self.denom
    }

    // Same expression as `update`, on row slices.
    fn update_row(&self, u: &Field<T>, f: &Field<T>, i: usize, out: &mut [T]) {
        let (north, mid, south) = (u.row(i - 1), u.row(i), u.row(i + 1));
        let src = f.row(i);
        for j in 1..out.len() - 1 {
            out[j] = (self.cf * src[j]
                + self.cx * (north[j] + south[j])
                + self.cy * (mid[j - 1] + mid[j + 1]))
                / self.denom;
        }
    }
}
