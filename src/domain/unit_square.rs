//! Uniform `nx × ny` node grid on `[0, 1] × [0, 1]`.

use num_traits::{Float, FloatConst};

use crate::core::Field;
use crate::error::{PoissonError, Result};

/// Grid spacing in x (rows) and y (columns).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing<T> {
    pub dx: T,
    pub dy: T,
}

impl<T: Float> Spacing<T> {
    pub fn new(dx: T, dy: T) -> Result<Self> {
        let s = Spacing { dx, dy };
        s.validate()?;
        Ok(s)
    }

    /// Both spacings must be strictly positive and finite.
    pub fn validate(&self) -> Result<()> {
        let ok = |h: T| h.is_finite() && h > T::zero();
        if ok(self.dx) && ok(self.dy) {
            Ok(())
        } else {
            Err(PoissonError::InvalidSpacing {
                dx: self.dx.to_f64().unwrap_or(f64::NAN),
                dy: self.dy.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}

/// Node grid with `nx` points along x and `ny` along y, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSquare {
    nx: usize,
    ny: usize,
}

impl UnitSquare {
    /// At least three nodes per direction so the grid has an interior.
    pub fn new(nx: usize, ny: usize) -> Result<Self> {
        if nx < 3 || ny < 3 {
            return Err(PoissonError::InvalidDimension { nx, ny });
        }
        Ok(Self { nx, ny })
    }

    /// The 100 × 100 grid of the reference problem.
    pub fn reference() -> Self {
        Self { nx: 100, ny: 100 }
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    /// `dx = 1/(nx-1)`, `dy = 1/(ny-1)`.
    pub fn spacing<T: Float>(&self) -> Spacing<T> {
        Spacing {
            dx: T::one() / cast::<T>(self.nx - 1),
            dy: T::one() / cast::<T>(self.ny - 1),
        }
    }

    /// Node x coordinates, `linspace(0, 1, nx)`.
    pub fn x<T: Float>(&self) -> Vec<T> {
        linspace(self.nx)
    }

    /// Node y coordinates, `linspace(0, 1, ny)`.
    pub fn y<T: Float>(&self) -> Vec<T> {
        linspace(self.ny)
    }

    /// Evaluate `g(x, y)` at every node.
    pub fn sample<T, G>(&self, mut g: G) -> Field<T>
    where
        T: Float,
        G: FnMut(T, T) -> T,
    {
        let (x, y) = (self.x::<T>(), self.y::<T>());
        Field::from_fn(self.nx, self.ny, |i, j| g(x[i], y[j]))
    }

    pub fn zero_field<T: Float>(&self) -> Field<T> {
        Field::zeros(self.nx, self.ny)
    }

    /// Starting field for a Dirichlet problem: `g(x, y)` on the boundary, zero inside.
    pub fn with_dirichlet<T, G>(&self, mut g: G) -> Field<T>
    where
        T: Float,
        G: FnMut(T, T) -> T,
    {
        let (x, y) = (self.x::<T>(), self.y::<T>());
        let (nx, ny) = (self.nx, self.ny);
        Field::from_fn(nx, ny, |i, j| {
            if i == 0 || j == 0 || i + 1 == nx || j + 1 == ny {
                g(x[i], y[j])
            } else {
                T::zero()
            }
        })
    }
}

/// Source term of the reference problem: `sin(πx)·sin(πy)`.
pub fn reference_source<T: Float + FloatConst>(x: T, y: T) -> T {
    (T::PI() * x).sin() * (T::PI() * y).sin()
}

/// Continuous solution of `-Δu = sin(πx)·sin(πy)` with zero boundary values.
pub fn reference_exact<T: Float + FloatConst>(x: T, y: T) -> T {
    let two_pi_sq = (T::one() + T::one()) * T::PI() * T::PI();
    reference_source(x, y) / two_pi_sq
}

fn linspace<T: Float>(n: usize) -> Vec<T> {
    let last = cast::<T>(n - 1);
    (0..n).map(|k| cast::<T>(k) / last).collect()
}

fn cast<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridShape;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_grids_without_interior() {
        assert!(matches!(
            UnitSquare::new(2, 10),
            Err(PoissonError::InvalidDimension { nx: 2, ny: 10 })
        ));
        assert!(UnitSquare::new(3, 3).is_ok());
    }

    #[test]
    fn spacing_and_coordinates() {
        let g = UnitSquare::new(5, 11).unwrap();
        let h = g.spacing::<f64>();
        assert_eq!(h.dx, 0.25);
        assert_abs_diff_eq!(h.dy, 0.1, epsilon = 1e-15);
        let x = g.x::<f64>();
        assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let y = g.y::<f64>();
        assert_eq!(y.len(), 11);
        assert_eq!(y[10], 1.0);
    }

    #[test]
    fn spacing_validation() {
        assert!(Spacing::new(0.1, 0.2).is_ok());
        for (dx, dy) in [(0.0, 0.1), (0.1, -1.0), (f64::NAN, 0.1), (0.1, f64::INFINITY)] {
            assert!(matches!(
                Spacing::new(dx, dy),
                Err(PoissonError::InvalidSpacing { .. })
            ));
        }
    }

    #[test]
    fn dirichlet_field_has_zero_interior() {
        let g = UnitSquare::new(4, 6).unwrap();
        let u = g.with_dirichlet(|x: f64, y: f64| 1.0 + x + 10.0 * y);
        assert_eq!(u.shape(), (4, 6));
        assert_eq!(u[(0, 0)], 1.0);
        assert_abs_diff_eq!(u[(3, 5)], 12.0, epsilon = 1e-12);
        for i in 1..3 {
            for j in 1..5 {
                assert_eq!(u[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn reference_source_peaks_at_centre() {
        let g = UnitSquare::new(5, 5).unwrap();
        let f = g.sample(reference_source::<f64>);
        assert_abs_diff_eq!(f[(2, 2)], 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(f[(0, 2)], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(
            reference_exact(0.5f64, 0.5),
            1.0 / (2.0 * std::f64::consts::PI.powi(2)),
            epsilon = 1e-15
        );
    }
}
