//! Axis-angle rotations

use crate::matrix::Matrix3;
use crate::real::Real;
use crate::vector::Vector3;

/// Rotation by `angle` radians about a unit-length `axis`.
///
/// The axis is not normalized on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct AxisAngle<T> {
    pub axis: Vector3<T>,
    pub angle: T,
}

impl<T: Real> AxisAngle<T> {
    #[inline]
    pub const fn new(axis: Vector3<T>, angle: T) -> Self {
        Self { axis, angle }
    }

    #[inline]
    pub fn to_matrix(&self) -> Matrix3<T> {
        Matrix3::from_axis_angle(self)
    }
}
