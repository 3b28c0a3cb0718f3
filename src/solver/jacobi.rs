//! Jacobi relaxation for the 2D Poisson problem.
//!
//! Each sweep applies the [`FivePoint`] update to every interior node, reading only
//! from the previous sweep's field. Two buffers are kept and swapped after every
//! sweep; updating a single buffer in place would turn the scheme into Gauss-Seidel.
//! The boundary ring is copied once into both buffers and never written again.

use log::{debug, trace};
use num_traits::Float;

use crate::config::{InputChecks, SolverOptions};
use crate::core::{Field, GridShape};
use crate::domain::{Spacing, UnitSquare};
use crate::error::{PoissonError, Result};
use crate::parallel::{Backend, Sweep};
use crate::solver::{FivePoint, RelaxationSolver};
use crate::utils::convergence::{residual_norm, SolveStats};

pub struct JacobiSolver<T> {
    stencil: FivePoint<T>,
    spacing: Spacing<T>,
    options: SolverOptions,
    backend: Backend,
}

impl<T: Float + Send + Sync> JacobiSolver<T> {
    pub fn new(spacing: Spacing<T>, options: SolverOptions) -> Result<Self> {
        spacing.validate()?;
        let backend = Backend::from_execution(options.execution)?;
        Ok(Self { stencil: FivePoint::new(spacing), spacing, options, backend })
    }

    /// Solver using the spacing of `grid`.
    pub fn for_grid(grid: &UnitSquare, options: SolverOptions) -> Result<Self> {
        Self::new(grid.spacing(), options)
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn spacing(&self) -> Spacing<T> {
        self.spacing
    }

    fn validate(&self, f: &Field<T>, u: &Field<T>) -> Result<()> {
        let (nx, ny) = u.shape();
        if nx < 3 || ny < 3 {
            return Err(PoissonError::InvalidDimension { nx, ny });
        }
        if f.shape() != u.shape() {
            return Err(PoissonError::ShapeMismatch {
                name: "source field f",
                expected: u.shape(),
                found: f.shape(),
            });
        }
        let checks = self.options.checks;
        for (flag, which, field) in [
            (InputChecks::FINITE_SOURCE, "source field f", f),
            (InputChecks::FINITE_FIELD, "initial field u0", u),
        ] {
            if checks.contains(flag) {
                if let Some((row, col)) = field.first_non_finite() {
                    return Err(PoissonError::NonFiniteInput { which, row, col });
                }
            }
        }
        Ok(())
    }
}

impl<T: Float + Send + Sync> RelaxationSolver<T> for JacobiSolver<T> {
    type Error = PoissonError;

    fn solve(&mut self, f: &Field<T>, u: &mut Field<T>) -> Result<SolveStats<T>> {
        self.validate(f, u)?;
        let iterations = self.options.iterations;
        debug!(
            "jacobi: {}x{} grid, {} sweeps, backend {:?}",
            u.nx(),
            u.ny(),
            iterations,
            self.backend
        );

        if iterations > 0 {
            let mut next = u.clone();
            for k in 0..iterations {
                self.backend.sweep(&self.stencil, u, f, &mut next);
                std::mem::swap(u, &mut next);
                trace!("jacobi: sweep {}/{}", k + 1, iterations);
            }
        }

        let final_residual = residual_norm(f, u, self.spacing);
        debug!(
            "jacobi: finished {} sweeps, residual {:.3e}",
            iterations,
            final_residual.to_f64().unwrap_or(f64::NAN)
        );
        Ok(SolveStats { iterations, final_residual })
    }
}

/// Run `iterations` Jacobi sweeps on an `nx × ny` grid and return the relaxed field.
///
/// `u0` supplies the boundary values (kept bit-for-bit) and the initial interior
/// guess. `iterations == 0` returns a copy of `u0`. Inputs are validated before any
/// sweep: grid size, field shapes, spacing and finiteness of `f` and `u0`.
pub fn solve<T: Float + Send + Sync>(
    nx: usize,
    ny: usize,
    f: &Field<T>,
    u0: &Field<T>,
    dx: T,
    dy: T,
    iterations: usize,
) -> Result<Field<T>> {
    if nx < 3 || ny < 3 {
        return Err(PoissonError::InvalidDimension { nx, ny });
    }
    for (name, field) in [("source field f", f), ("initial field u0", u0)] {
        if field.shape() != (nx, ny) {
            return Err(PoissonError::ShapeMismatch {
                name,
                expected: (nx, ny),
                found: field.shape(),
            });
        }
    }
    let options = SolverOptions::default().with_iterations(iterations);
    let mut solver = JacobiSolver::new(Spacing::new(dx, dy)?, options)?;
    let mut u = u0.clone();
    solver.solve(f, &mut u)?;
    Ok(u)
}
