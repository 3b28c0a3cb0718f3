//! API options for the relaxation solver.
//!
//! This module provides the `SolverOptions` struct, which fixes the sweep budget,
//! the execution backend used for each sweep, and which input checks run before
//! the first sweep. The defaults reproduce the reference configuration: 100
//! serial sweeps with every input check enabled.

use bitflags::bitflags;

use crate::parallel::Execution;

/// Sweep count used by the reference unit-square problem.
pub const REFERENCE_ITERATIONS: usize = 100;

bitflags! {
    /// Optional validation performed before relaxing.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct InputChecks: u32 {
        /// Reject NaN/Inf in the source field `f`.
        const FINITE_SOURCE = 0b01;
        /// Reject NaN/Inf in the boundary-initialized field `u0`.
        const FINITE_FIELD  = 0b10;
        const ALL           = Self::FINITE_SOURCE.bits() | Self::FINITE_FIELD.bits();
    }
}

impl Default for InputChecks {
    fn default() -> Self {
        InputChecks::ALL
    }
}

/// Relaxation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    /// Number of full Jacobi sweeps. The sole stopping criterion.
    pub iterations: usize,

    /// Backend used to run each sweep.
    pub execution: Execution,

    /// Validation run before the first sweep.
    pub checks: InputChecks,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            iterations: REFERENCE_ITERATIONS,
            execution: Execution::Serial,
            checks: InputChecks::ALL,
        }
    }
}

impl SolverOptions {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn with_checks(mut self, checks: InputChecks) -> Self {
        self.checks = checks;
        self
    }
}
