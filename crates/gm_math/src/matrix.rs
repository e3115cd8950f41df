//! 3x3 matrices for rotations and scales

use core::ops::Mul;

use crate::axis_angle::AxisAngle;
use crate::error::{MathError, Result};
use crate::real::Real;
use crate::vector::Vector3;

/// 3x3 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct Matrix3<T> {
    pub cols: [Vector3<T>; 3],
}

impl<T: Real> Matrix3<T> {
    pub fn identity() -> Self {
        Self::from_cols(Vector3::unit(0), Vector3::unit(1), Vector3::unit(2))
    }

    pub fn zero() -> Self {
        Self::from_cols(Vector3::zero(), Vector3::zero(), Vector3::zero())
    }

    #[inline]
    pub const fn from_cols(c0: Vector3<T>, c1: Vector3<T>, c2: Vector3<T>) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    #[inline]
    pub fn from_diagonal(d: Vector3<T>) -> Self {
        let z = T::zero();
        Self::from_cols(
            Vector3::new([d[0], z, z]),
            Vector3::new([z, d[1], z]),
            Vector3::new([z, z, d[2]]),
        )
    }

    /// Rotation by `angle` radians about a unit-length axis (Rodrigues)
    pub fn from_axis_angle(axis_angle: &AxisAngle<T>) -> Self {
        let [x, y, z] = axis_angle.axis.to_array();
        let (s, c) = axis_angle.angle.sin_cos();
        let one_minus_c = T::one() - c;
        Self::from_cols(
            Vector3::new([
                c + x * x * one_minus_c,
                y * x * one_minus_c + z * s,
                z * x * one_minus_c - y * s,
            ]),
            Vector3::new([
                x * y * one_minus_c - z * s,
                c + y * y * one_minus_c,
                z * y * one_minus_c + x * s,
            ]),
            Vector3::new([
                x * z * one_minus_c + y * s,
                y * z * one_minus_c - x * s,
                c + z * z * one_minus_c,
            ]),
        )
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vector3<T> {
        self.cols[i]
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vector3<T> {
        Vector3::new([self.cols[0][i], self.cols[1][i], self.cols[2][i]])
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    #[inline]
    pub fn determinant(&self) -> T {
        self.cols[0].dot(self.cols[1].cross(self.cols[2]))
    }

    /// Inverse via the adjugate; exact-zero determinant is singular
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(MathError::SingularMatrix);
        }
        let [c0, c1, c2] = self.cols;
        // Rows of the inverse are the cross products of the columns.
        let r0 = c1.cross(c2) / det;
        let r1 = c2.cross(c0) / det;
        let r2 = c0.cross(c1) / det;
        Ok(Self::from_cols(r0, r1, r2).transpose())
    }

    /// Max-abs difference from the identity of `Mᵀ M`
    pub fn orthonormality_error(&self) -> T {
        let mut err = T::zero();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { T::one() } else { T::zero() };
                err = err.max((self.cols[i].dot(self.cols[j]) - expected).abs());
            }
        }
        err
    }
}

impl<T: Real> Default for Matrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.cols[0] * rhs[0] + self.cols[1] * rhs[1] + self.cols[2] * rhs[2]
    }
}

impl<T: Real> Mul for Matrix3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn test_axis_angle_rotation() {
        let rot = Matrix3::from_axis_angle(&AxisAngle::new(Vector3::unit(2), FRAC_PI_2));
        let v = rot * Vector3::new([1.0, 0.0, 0.0]);
        assert_relative_eq!(v[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(v[1], 1.0, epsilon = 1e-12);
        assert!(rot.orthonormality_error() < 1e-12);
    }

    #[test]
    fn test_inverse() {
        let m = Matrix3::from_cols(
            Vector3::new([2.0, 0.0, 0.0]),
            Vector3::new([1.0, 3.0, 0.0]),
            Vector3::new([0.0, 1.0, 4.0]),
        );
        let inv = m.try_inverse().unwrap();
        let id = m * inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(id.cols[i][j], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_singular() {
        let m = Matrix3::from_diagonal(Vector3::new([1.0, 0.0, 1.0]));
        assert_eq!(m.try_inverse(), Err(MathError::SingularMatrix));
    }
}
