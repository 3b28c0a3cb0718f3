//! Execution backends for a single Jacobi sweep.
//!
//! A sweep reads every interior value from the snapshot `u` and writes the new value
//! into a separate buffer. Because no sweep ever reads what it writes, rows can be
//! processed in any order or concurrently; the serial and rayon backends therefore
//! produce bit-identical output. The caller swaps buffers between sweeps, which is
//! the barrier between iterations.

use log::debug;
use num_traits::Float;

use crate::core::{Field, GridShape, Stencil};
use crate::error::Result;

#[cfg(feature = "rayon")]
pub mod rayon_sweep;
#[cfg(feature = "rayon")]
pub use rayon_sweep::RayonSweep;

/// Requested way of running each sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One thread, rows in order.
    #[default]
    Serial,
    /// Rows split across a dedicated rayon pool. `threads == 0` uses every core.
    Rayon { threads: usize },
}

/// One stencil sweep over the interior of a grid.
pub trait Sweep<T> {
    /// Write the updated interior of `u` into `out`. Boundary entries of `out` are not touched.
    fn sweep<S: Stencil<T> + Sync>(&self, stencil: &S, u: &Field<T>, f: &Field<T>, out: &mut Field<T>);
}

/// Row-by-row sweep on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialSweep;

impl<T: Float> Sweep<T> for SerialSweep {
    fn sweep<S: Stencil<T> + Sync>(&self, stencil: &S, u: &Field<T>, f: &Field<T>, out: &mut Field<T>) {
        let nx = out.nx();
        for i in 1..nx - 1 {
            stencil.update_row(u, f, i, out.row_mut(i));
        }
    }
}

/// Backend selected from an [`Execution`] request.
pub enum Backend {
    Serial(SerialSweep),
    #[cfg(feature = "rayon")]
    Rayon(RayonSweep),
}

impl Backend {
    pub fn from_execution(execution: Execution) -> Result<Self> {
        match execution {
            Execution::Serial => Ok(Backend::Serial(SerialSweep)),
            #[cfg(feature = "rayon")]
            Execution::Rayon { threads } => {
                let backend = RayonSweep::new(threads)?;
                debug!("rayon sweep backend with {} threads", backend.num_threads());
                Ok(Backend::Rayon(backend))
            }
            #[cfg(not(feature = "rayon"))]
            Execution::Rayon { .. } => {
                debug!("rayon execution requested without the `rayon` feature");
                Err(crate::error::PoissonError::Unsupported("rayon execution requires the `rayon` feature"))
            }
        }
    }
}

impl<T: Float + Send + Sync> Sweep<T> for Backend {
    fn sweep<S: Stencil<T> + Sync>(&self, stencil: &S, u: &Field<T>, f: &Field<T>, out: &mut Field<T>) {
        match self {
            Backend::Serial(b) => b.sweep(stencil, u, f, out),
            #[cfg(feature = "rayon")]
            Backend::Rayon(b) => b.sweep(stencil, u, f, out),
        }
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Serial(_) => write!(f, "Serial"),
            #[cfg(feature = "rayon")]
            Backend::Rayon(b) => write!(f, "Rayon({} threads)", b.num_threads()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CopyEast;
    impl Stencil<f64> for CopyEast {
        fn update(&self, u: &Field<f64>, _f: &Field<f64>, i: usize, j: usize) -> f64 {
            u[(i, j + 1)]
        }
    }

    #[test]
    fn serial_sweep_only_writes_interior() {
        let u = Field::from_fn(4, 4, |i, j| (i * 4 + j) as f64);
        let f = Field::zeros(4, 4);
        let mut out = Field::filled(4, 4, -1.0);
        SerialSweep.sweep(&CopyEast, &u, &f, &mut out);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if out.is_boundary(i, j) { -1.0 } else { u[(i, j + 1)] };
                assert_eq!(out[(i, j)], expected);
            }
        }
    }

    #[cfg(not(feature = "rayon"))]
    #[test]
    fn rayon_request_without_feature_is_unsupported() {
        let err = Backend::from_execution(Execution::Rayon { threads: 2 }).unwrap_err();
        assert!(matches!(err, crate::error::PoissonError::Unsupported(_)));
    }
}
