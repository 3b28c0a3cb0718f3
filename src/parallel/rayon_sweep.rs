// rayon-based row-parallel sweep

use rayon::prelude::*;

use crate::core::{Field, GridShape, Stencil};
use crate::error::{PoissonError, Result};
use super::Sweep;

pub struct RayonSweep {
    pool: rayon::ThreadPool,
}

impl RayonSweep {
    /// Build a private pool; `threads == 0` means one thread per core.
    pub fn new(threads: usize) -> Result<Self> {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| PoissonError::ThreadPool(e.to_string()))?;
        Ok(RayonSweep { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl<T: num_traits::Float + Send + Sync> Sweep<T> for RayonSweep {
    fn sweep<S: Stencil<T> + Sync>(&self, stencil: &S, u: &Field<T>, f: &Field<T>, out: &mut Field<T>) {
        let (nx, ny) = out.shape();
        self.pool.install(|| {
            out.as_mut_slice()
                .par_chunks_mut(ny)
                .enumerate()
                .for_each(|(i, row)| {
                    if i == 0 || i + 1 == nx {
                        return;
                    }
                    stencil.update_row(u, f, i, row);
                });
        });
    }
}
