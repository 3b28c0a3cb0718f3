//! Solver configuration.

pub mod options;
pub use options::{InputChecks, SolverOptions, REFERENCE_ITERATIONS};
