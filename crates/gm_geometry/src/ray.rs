//! Rays `P + t*D` for `t >= 0`
//!
//! The direction must be unit length. This is the caller's responsibility and
//! is not checked by [`Ray::new`] or by any query; [`Ray::validate`] checks it
//! on request.

use gm_math::{Real, Vector};

use crate::error::{default_tolerance, invalid, GeometryError, Result};

/// Ray for intersection testing
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct Ray<const N: usize, T> {
    /// Ray origin point
    pub origin: Vector<N, T>,
    /// Ray direction (unit length)
    pub direction: Vector<N, T>,
}

pub type Ray2<T> = Ray<2, T>;
pub type Ray3<T> = Ray<3, T>;

impl<const N: usize, T: Real> Ray<N, T> {
    /// Create a ray. `direction` is stored as given.
    #[inline]
    pub const fn new(origin: Vector<N, T>, direction: Vector<N, T>) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `start` towards `end`.
    ///
    /// The direction is normalized robustly; coincident points give a zero
    /// direction, which every query treats as a degenerate (point) ray.
    #[inline]
    pub fn from_points(start: Vector<N, T>, end: Vector<N, T>) -> Self {
        Self::new(start, (end - start).normalize_robust())
    }

    /// Get a point at parameter t along the ray
    #[inline]
    pub fn at(&self, t: T) -> Vector<N, T> {
        self.origin + self.direction * t
    }

    pub fn validate(&self) -> Result<()> {
        if (self.direction.length_robust() - T::one()).abs() > default_tolerance() {
            return invalid("ray", GeometryError::NonUnitDirection);
        }
        Ok(())
    }
}

impl<const N: usize, T: Real> Default for Ray<N, T> {
    /// Origin at zero, direction along the first axis
    fn default() -> Self {
        Self::new(Vector::zero(), Vector::unit(0))
    }
}
