//! Hyperspheres `|X - C| = R` (circles in 2D, spheres in 3D)
//!
//! Queries treat the hypersphere as solid: points inside are at distance zero.

use gm_math::{Real, Vector};

use crate::error::{invalid, GeometryError, Result};

/// Hypersphere with `center` and `radius >= 0`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct Hypersphere<const N: usize, T> {
    pub center: Vector<N, T>,
    pub radius: T,
}

pub type Circle2<T> = Hypersphere<2, T>;
pub type Sphere3<T> = Hypersphere<3, T>;

impl<const N: usize, T: Real> Hypersphere<N, T> {
    #[inline]
    pub const fn new(center: Vector<N, T>, radius: T) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn contains(&self, point: &Vector<N, T>) -> bool {
        (*point - self.center).squared_length() <= self.radius * self.radius
    }

    pub fn validate(&self) -> Result<()> {
        if self.radius < T::zero() {
            return invalid("hypersphere", GeometryError::NegativeRadius);
        }
        Ok(())
    }
}

impl<const N: usize, T: Real> Default for Hypersphere<N, T> {
    /// Zero center and zero radius
    fn default() -> Self {
        Self::new(Vector::zero(), T::zero())
    }
}
