//! Error types for primitive validation
//!
//! Queries never fail. Primitives carry caller-enforced invariants (unit ray
//! directions, orthonormal box axes, ...) that are not checked on
//! construction; `validate` methods check them on request.

use gm_math::Real;
use thiserror::Error;

/// A primitive violates one of its documented invariants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Hypersphere radius below zero
    #[error("Hypersphere radius is negative")]
    NegativeRadius,

    /// Box half-extent below zero
    #[error("Box extent on axis {axis} is negative")]
    NegativeExtent { axis: usize },

    /// Aligned box with `min > max`
    #[error("Aligned box has min > max on axis {axis}")]
    InvertedBox { axis: usize },

    /// Oriented box axes are not mutually orthonormal
    #[error("Oriented box axes are not orthonormal")]
    NonOrthonormalAxes,

    /// Direction (ray, hyperplane normal) that must be unit length is not
    #[error("Direction is not unit length")]
    NonUnitDirection,

    /// Line direction is the zero vector
    #[error("Direction is the zero vector")]
    ZeroDirection,
}

/// Result type for primitive validation
pub type Result<T> = core::result::Result<T, GeometryError>;

/// Tolerance used by the `validate` methods: `sqrt(epsilon)` of the scalar
#[inline]
pub fn default_tolerance<T: Real>() -> T {
    T::epsilon().sqrt()
}

/// Log and return a validation failure
pub(crate) fn invalid<V>(what: &str, error: GeometryError) -> Result<V> {
    log::warn!("Invalid {}: {}", what, error);
    Err(error)
}
