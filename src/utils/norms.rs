//! Distances between fields of equal shape.

use num_traits::Float;

use crate::core::{Field, GridShape};
use crate::error::{PoissonError, Result};

fn check_same_shape<T>(a: &Field<T>, b: &Field<T>) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(PoissonError::ShapeMismatch {
            name: "second operand",
            expected: a.shape(),
            found: b.shape(),
        });
    }
    Ok(())
}

/// Root-mean-square difference over all nodes.
pub fn l2_error<T: Float>(a: &Field<T>, b: &Field<T>) -> Result<T> {
    check_same_shape(a, b)?;
    let n = a.as_slice().len();
    if n == 0 {
        return Ok(T::zero());
    }
    let sum = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| (x - y) * (x - y))
        .fold(T::zero(), |acc, v| acc + v);
    Ok((sum / T::from(n).unwrap_or_else(T::one)).sqrt())
}

/// Largest absolute pointwise difference.
pub fn max_abs_diff<T: Float>(a: &Field<T>, b: &Field<T>) -> Result<T> {
    check_same_shape(a, b)?;
    Ok(a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| (x - y).abs())
        .fold(T::zero(), T::max))
}
