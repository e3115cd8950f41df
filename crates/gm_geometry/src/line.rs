//! Lines `P + t*D` for all real `t`

use gm_math::{Real, Vector};

use crate::error::{invalid, GeometryError, Result};
use crate::ray::Ray;

/// Infinite line through `origin` along `direction`.
///
/// The direction does not need to be unit length unless a query says so.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct Line<const N: usize, T> {
    pub origin: Vector<N, T>,
    pub direction: Vector<N, T>,
}

pub type Line2<T> = Line<2, T>;
pub type Line3<T> = Line<3, T>;

impl<const N: usize, T: Real> Line<N, T> {
    #[inline]
    pub const fn new(origin: Vector<N, T>, direction: Vector<N, T>) -> Self {
        Self { origin, direction }
    }

    /// Line through two points, `at(0) == p0` and `at(1) == p1`
    #[inline]
    pub fn from_points(p0: Vector<N, T>, p1: Vector<N, T>) -> Self {
        Self::new(p0, p1 - p0)
    }

    #[inline]
    pub fn at(&self, t: T) -> Vector<N, T> {
        self.origin + self.direction * t
    }

    pub fn validate(&self) -> Result<()> {
        if self.direction.is_zero() {
            return invalid("line", GeometryError::ZeroDirection);
        }
        Ok(())
    }
}

impl<const N: usize, T: Real> Default for Line<N, T> {
    /// Origin at zero, direction along the first axis
    fn default() -> Self {
        Self::new(Vector::zero(), Vector::unit(0))
    }
}

impl<const N: usize, T: Real> From<Ray<N, T>> for Line<N, T> {
    /// The line containing the ray
    fn from(ray: Ray<N, T>) -> Self {
        Self::new(ray.origin, ray.direction)
    }
}
