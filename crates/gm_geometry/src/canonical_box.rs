//! Boxes centered at the origin and aligned with the coordinate axes

use gm_math::{Real, Vector};

use crate::error::{invalid, GeometryError, Result};

/// Canonical box `|x[i]| <= extent[i]`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct CanonicalBox<const N: usize, T> {
    pub extent: Vector<N, T>,
}

pub type CanonicalBox2<T> = CanonicalBox<2, T>;
pub type CanonicalBox3<T> = CanonicalBox<3, T>;

impl<const N: usize, T: Real> CanonicalBox<N, T> {
    #[inline]
    pub const fn new(extent: Vector<N, T>) -> Self {
        Self { extent }
    }

    #[inline]
    pub fn contains(&self, point: &Vector<N, T>) -> bool {
        (0..N).all(|i| point[i].abs() <= self.extent[i])
    }

    pub fn validate(&self) -> Result<()> {
        match (0..N).find(|&i| self.extent[i] < T::zero()) {
            Some(axis) => invalid("canonical box", GeometryError::NegativeExtent { axis }),
            None => Ok(()),
        }
    }
}

impl<const N: usize, T: Real> Default for CanonicalBox<N, T> {
    fn default() -> Self {
        Self::new(Vector::splat(T::one()))
    }
}
