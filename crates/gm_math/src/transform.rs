//! Rotation-scale-translation transforms with a lazily computed inverse
//!
//! The forward map is `Y = R * (S * X) + T`. The inverse is only needed by a
//! few callers (world-to-local conversions), so it is computed on demand and
//! cached until the next mutation.

use crate::axis_angle::AxisAngle;
use crate::error::{MathError, Result};
use crate::matrix::Matrix3;
use crate::real::Real;
use crate::vector::Vector3;

/// Inverse of a [`Transform`] as a general affine map `X = L * Y + t`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineInverse<T> {
    pub linear: Matrix3<T>,
    pub translation: Vector3<T>,
}

impl<T: Real> AffineInverse<T> {
    #[inline]
    pub fn apply(&self, point: Vector3<T>) -> Vector3<T> {
        self.linear * point + self.translation
    }

    #[inline]
    pub fn apply_vector(&self, vector: Vector3<T>) -> Vector3<T> {
        self.linear * vector
    }
}

/// 3D transform: rotation (orthonormal), per-axis scale, translation
#[derive(Clone, Debug, PartialEq)]
pub struct Transform<T> {
    rotation: Matrix3<T>,
    scale: Vector3<T>,
    translation: Vector3<T>,
    is_identity: bool,
    is_uniform_scale: bool,
    inverse: Option<AffineInverse<T>>,
    inverse_needs_update: bool,
}

impl<T: Real> Transform<T> {
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            scale: Vector3::splat(T::one()),
            translation: Vector3::zero(),
            is_identity: true,
            is_uniform_scale: true,
            inverse: None,
            inverse_needs_update: true,
        }
    }

    pub fn from_translation(translation: Vector3<T>) -> Self {
        let mut transform = Self::identity();
        transform.set_translation(translation);
        transform
    }

    /// Set rotation (builder pattern)
    pub fn with_rotation(mut self, rotation: Matrix3<T>) -> Self {
        self.set_rotation(rotation);
        self
    }

    /// Set translation (builder pattern)
    pub fn with_translation(mut self, translation: Vector3<T>) -> Self {
        self.set_translation(translation);
        self
    }

    /// Set scale (builder pattern)
    pub fn with_scale(mut self, scale: Vector3<T>) -> Self {
        self.set_scale(scale);
        self
    }

    fn invalidate(&mut self) {
        self.is_identity = false;
        self.inverse_needs_update = true;
    }

    pub fn make_identity(&mut self) {
        *self = Self::identity();
    }

    /// The matrix must be orthonormal; this is not checked.
    pub fn set_rotation(&mut self, rotation: Matrix3<T>) {
        self.rotation = rotation;
        self.invalidate();
    }

    pub fn set_rotation_axis_angle(&mut self, axis_angle: &AxisAngle<T>) {
        self.set_rotation(axis_angle.to_matrix());
    }

    pub fn set_translation(&mut self, translation: Vector3<T>) {
        self.translation = translation;
        self.invalidate();
    }

    pub fn set_scale(&mut self, scale: Vector3<T>) {
        self.scale = scale;
        self.is_uniform_scale = scale[0] == scale[1] && scale[1] == scale[2];
        self.invalidate();
    }

    pub fn set_uniform_scale(&mut self, scale: T) {
        self.set_scale(Vector3::splat(scale));
    }

    #[inline]
    pub fn rotation(&self) -> &Matrix3<T> {
        &self.rotation
    }

    #[inline]
    pub fn translation(&self) -> Vector3<T> {
        self.translation
    }

    #[inline]
    pub fn scale(&self) -> Vector3<T> {
        self.scale
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_identity
    }

    #[inline]
    pub fn is_uniform_scale(&self) -> bool {
        self.is_uniform_scale
    }

    /// Whether the next call to [`Self::inverse`] reuses a cached value
    #[inline]
    pub fn is_inverse_cached(&self) -> bool {
        self.inverse.is_some() && !self.inverse_needs_update
    }

    /// `R * S`, the linear part of the forward map
    pub fn linear(&self) -> Matrix3<T> {
        self.rotation * Matrix3::from_diagonal(self.scale)
    }

    #[inline]
    pub fn apply_forward(&self, point: Vector3<T>) -> Vector3<T> {
        if self.is_identity {
            return point;
        }
        self.rotation * point.mul_elements(self.scale) + self.translation
    }

    #[inline]
    pub fn apply_forward_vector(&self, vector: Vector3<T>) -> Vector3<T> {
        if self.is_identity {
            return vector;
        }
        self.rotation * vector.mul_elements(self.scale)
    }

    /// Inverse map, recomputed only after a mutation.
    ///
    /// `S⁻¹ * Rᵀ` is used for the linear part; a zero scale component makes
    /// the transform singular.
    pub fn inverse(&mut self) -> Result<AffineInverse<T>> {
        if self.inverse_needs_update || self.inverse.is_none() {
            let computed = self.compute_inverse()?;
            self.inverse = Some(computed);
            self.inverse_needs_update = false;
        }
        self.inverse.ok_or(MathError::SingularMatrix)
    }

    fn compute_inverse(&self) -> Result<AffineInverse<T>> {
        if self.is_identity {
            return Ok(AffineInverse {
                linear: Matrix3::identity(),
                translation: Vector3::zero(),
            });
        }
        if (0..3).any(|i| self.scale[i] == T::zero()) {
            return Err(MathError::SingularMatrix);
        }
        let inv_scale = Vector3::from_fn(|i| T::one() / self.scale[i]);
        let linear = Matrix3::from_diagonal(inv_scale) * self.rotation.transpose();
        let translation = -(linear * self.translation);
        Ok(AffineInverse { linear, translation })
    }

    pub fn apply_inverse(&mut self, point: Vector3<T>) -> Result<Vector3<T>> {
        Ok(self.inverse()?.apply(point))
    }
}

impl<T: Real> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}
