//! Structured grids on the unit square.
//!
//! The solver itself only sees fields and a spacing. This module is the caller-side
//! plumbing that produces them: node coordinates, sampled source terms and
//! boundary-initialized starting fields.

pub mod unit_square;

pub use unit_square::{reference_exact, reference_source, Spacing, UnitSquare};
