//! Scalar trait for the elimination routines
//!
//! [`RealField`] abstracts over the real floating-point types the solver
//! accepts (`f64`, `f32`). Complex entries are not supported.

use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be stored in a matrix being reduced.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most systems)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + Copy + Debug + Display + Send + Sync + 'static
{
    /// Check if this is approximately zero
    fn is_zero_approx(&self, tol: Self) -> bool {
        self.abs() <= tol
    }

    /// Lossy conversion used when reporting values in errors and logs
    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl RealField for f64 {}

impl RealField for f32 {}
