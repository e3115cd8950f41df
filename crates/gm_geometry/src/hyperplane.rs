//! Hyperplanes `Dot(N, X) = c` (lines in 2D, planes in 3D)

use gm_math::{LengthMode, Real, Vector};

use crate::error::{default_tolerance, invalid, GeometryError, Result};

/// Hyperplane with unit `normal` and `constant`.
///
/// The constructors that derive a normal normalize it robustly, since the
/// inputs are user geometry of unknown scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct Hyperplane<const N: usize, T> {
    pub normal: Vector<N, T>,
    pub constant: T,
}

pub type Plane3<T> = Hyperplane<3, T>;

impl<const N: usize, T: Real> Hyperplane<N, T> {
    /// `normal` must be unit length
    #[inline]
    pub const fn new(normal: Vector<N, T>, constant: T) -> Self {
        Self { normal, constant }
    }

    /// Plane through `point` with unit `normal`
    #[inline]
    pub fn from_point(normal: Vector<N, T>, point: &Vector<N, T>) -> Self {
        Self::new(normal, normal.dot(*point))
    }

    /// Signed distance, positive on the side the normal points to
    #[inline]
    pub fn signed_distance(&self, point: &Vector<N, T>) -> T {
        self.normal.dot(*point) - self.constant
    }

    /// Orthogonal projection of a point onto the plane
    #[inline]
    pub fn project(&self, point: &Vector<N, T>) -> Vector<N, T> {
        *point - self.normal * self.signed_distance(point)
    }

    /// Some point on the plane
    #[inline]
    pub fn origin(&self) -> Vector<N, T> {
        self.normal * self.constant
    }

    pub fn validate(&self) -> Result<()> {
        if (self.normal.length_robust() - T::one()).abs() > default_tolerance() {
            return invalid("hyperplane", GeometryError::NonUnitDirection);
        }
        Ok(())
    }
}

impl<T: Real> Hyperplane<3, T> {
    /// Plane through three points; the normal follows `(p1 - p0) x (p2 - p0)`.
    ///
    /// Collinear points produce a zero normal, which [`Self::validate`] reports.
    pub fn from_points(p0: &Vector<3, T>, p1: &Vector<3, T>, p2: &Vector<3, T>) -> Self {
        let normal = (*p1 - *p0).cross(*p2 - *p0).normalize_with(LengthMode::Robust);
        Self::from_point(normal, p0)
    }
}

impl<const N: usize, T: Real> Default for Hyperplane<N, T> {
    /// Normal along the last axis, through the origin
    fn default() -> Self {
        Self::new(Vector::unit(N.saturating_sub(1)), T::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gm_math::Vector3;

    #[test]
    fn test_signed_distance() {
        let plane = Plane3::from_point(Vector3::unit(1), &Vector3::new([0.0, 2.0, 0.0]));
        assert_eq!(plane.constant, 2.0);
        assert_eq!(plane.signed_distance(&Vector3::new([5.0, 5.0, 1.0])), 3.0);
        assert_eq!(plane.signed_distance(&Vector3::new([5.0, -1.0, 1.0])), -3.0);
        assert_eq!(plane.project(&Vector3::new([5.0, -1.0, 1.0])), Vector3::new([5.0, 2.0, 1.0]));
    }

    #[test]
    fn test_from_points() {
        let plane = Plane3::from_points(
            &Vector3::new([0.0, 0.0, 3.0]),
            &Vector3::new([1.0, 0.0, 3.0]),
            &Vector3::new([0.0, 1.0, 3.0]),
        );
        assert_relative_eq!(plane.normal[2], 1.0, epsilon = 1e-12);
        assert_relative_eq!(plane.constant, 3.0, epsilon = 1e-12);
        assert!(plane.validate().is_ok());
    }

    #[test]
    fn test_collinear_points() {
        let p = Vector3::new([1.0, 1.0, 1.0]);
        let plane = Plane3::from_points(&p, &(p * 2.0), &(p * 3.0));
        assert!(plane.normal.is_zero());
        assert_eq!(plane.validate(), Err(GeometryError::NonUnitDirection));
    }
}
