use thiserror::Error;

// Unified error type for jacobi-poisson

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoissonError {
    #[error("grid must be at least 3x3 to have an interior, got {nx}x{ny}")]
    InvalidDimension { nx: usize, ny: usize },
    #[error("{name} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        name: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("grid spacing must be positive and finite (dx = {dx}, dy = {dy})")]
    InvalidSpacing { dx: f64, dy: f64 },
    #[error("non-finite value in {which} at ({row}, {col})")]
    NonFiniteInput {
        which: &'static str,
        row: usize,
        col: usize,
    },
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, PoissonError>;
