//! Axis-aligned boxes in min/max form

use gm_math::{Real, Vector};

use crate::error::{invalid, GeometryError, Result};

/// Axis-aligned box `min[i] <= x[i] <= max[i]`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct AlignedBox<const N: usize, T> {
    pub min: Vector<N, T>,
    pub max: Vector<N, T>,
}

pub type AlignedBox2<T> = AlignedBox<2, T>;
pub type AlignedBox3<T> = AlignedBox<3, T>;

impl<const N: usize, T: Real> AlignedBox<N, T> {
    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vector<N, T>, max: Vector<N, T>) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_extent(center: Vector<N, T>, extent: Vector<N, T>) -> Self {
        Self::new(center - extent, center + extent)
    }

    /// Smallest box containing every point; `None` for an empty slice
    pub fn from_points(points: &[Vector<N, T>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(*first, *first), |b, p| {
            Self::new(b.min.min(*p), b.max.max(*p))
        }))
    }

    /// `(center, extent)` with `center = (min + max) / 2`, `extent = (max - min) / 2`
    #[inline]
    pub fn centered_form(&self) -> (Vector<N, T>, Vector<N, T>) {
        let center = (self.max + self.min) * T::half();
        let extent = (self.max - self.min) * T::half();
        (center, extent)
    }

    /// Closed containment test
    #[inline]
    pub fn contains(&self, point: &Vector<N, T>) -> bool {
        (0..N).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    pub fn validate(&self) -> Result<()> {
        match (0..N).find(|&i| self.min[i] > self.max[i]) {
            Some(axis) => invalid("aligned box", GeometryError::InvertedBox { axis }),
            None => Ok(()),
        }
    }
}

impl<const N: usize, T: Real> Default for AlignedBox<N, T> {
    /// The unit box `[-1, 1]^N`
    fn default() -> Self {
        Self::new(Vector::splat(-T::one()), Vector::splat(T::one()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_math::Vector3;

    #[test]
    fn test_centered_form() {
        let b = AlignedBox::new(Vector3::new([0.0, 2.0, -4.0]), Vector3::new([2.0, 6.0, 0.0]));
        let (center, extent) = b.centered_form();
        assert_eq!(center, Vector3::new([1.0, 4.0, -2.0]));
        assert_eq!(extent, Vector3::new([1.0, 2.0, 2.0]));
        assert_eq!(AlignedBox::from_center_extent(center, extent), b);
    }

    #[test]
    fn test_contains_boundary() {
        let b = AlignedBox3::<f64>::default();
        assert!(b.contains(&Vector3::new([1.0, -1.0, 0.0])));
        assert!(!b.contains(&Vector3::new([1.0, -1.0, 1.5])));
    }

    #[test]
    fn test_from_points() {
        let points = [
            Vector3::new([1.0, 0.0, 0.0]),
            Vector3::new([-1.0, 3.0, 0.5]),
            Vector3::new([0.0, -2.0, 0.0]),
        ];
        let b = AlignedBox::from_points(&points).unwrap();
        assert_eq!(b.min, Vector3::new([-1.0, -2.0, 0.0]));
        assert_eq!(b.max, Vector3::new([1.0, 3.0, 0.5]));
        assert!(AlignedBox3::<f32>::from_points(&[]).is_none());
    }

    #[test]
    fn test_validate() {
        let inverted = AlignedBox::new(Vector3::new([0.0, 1.0, 0.0]), Vector3::new([1.0, 0.0, 1.0]));
        assert_eq!(inverted.validate(), Err(GeometryError::InvertedBox { axis: 1 }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_aligned_box_bincode() {
        let b = AlignedBox::new(Vector3::new([-1.0_f64, 0.0, 2.0]), Vector3::new([1.0, 3.0, 4.5]));
        let bytes = bincode::serialize(&b).unwrap();
        let back: AlignedBox<3, f64> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(b, back);
    }
}
