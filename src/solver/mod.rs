//! Relaxation solver interfaces.

use crate::core::Field;
use crate::utils::convergence::SolveStats;

/// Common interface for fixed-budget relaxation solvers of `-Δu = f`.
pub trait RelaxationSolver<T> {
    type Error;
    /// Relax `u` in place against the source `f`.
    ///
    /// `u` carries the boundary values and the initial interior guess on entry and
    /// the final approximation on return. Boundary entries are never written.
    fn solve(&mut self, f: &Field<T>, u: &mut Field<T>) -> Result<SolveStats<T>, Self::Error>;
}

pub mod stencil;
pub use stencil::FivePoint;

pub mod jacobi;
pub use jacobi::{solve, JacobiSolver};
