//! jacobi-poisson: Jacobi relaxation for the 2D Poisson equation
//!
//! This crate relaxes `-Δu = f` on a structured grid with the classic 5-point
//! finite-difference stencil and Jacobi (double-buffered) sweeps. Boundary values are
//! Dirichlet data supplied by the caller and are never modified. Sweeps can run on one
//! thread or split by rows across a rayon pool with bit-identical results.

pub mod parallel;

pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use domain::*;
pub use error::*;
pub use parallel::{Execution, Sweep};
pub use solver::*;
pub use utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
