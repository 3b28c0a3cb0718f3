//! Solve statistics and field norms.

pub mod convergence;
pub mod norms;

pub use convergence::{residual_norm, SolveStats};
pub use norms::{l2_error, max_abs_diff};
