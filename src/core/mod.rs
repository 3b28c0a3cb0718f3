//! Core grid types and traits: the 2D scalar field, shape queries and stencil rules.

pub mod field;
pub mod traits;
pub mod wrappers;

pub use field::Field;
pub use traits::{GridShape, Stencil};
