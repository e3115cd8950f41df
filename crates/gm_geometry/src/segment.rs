//! Line segments
//!
//! Stored as two endpoints. Queries that clip a line parameter use the
//! centered form `C + t*D` with unit `D` and `t` in `[-extent, extent]`.

use gm_math::{LengthMode, Real, Vector};

/// Segment between `p[0]` and `p[1]`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Real + serde::Serialize + serde::de::DeserializeOwned"))]
pub struct Segment<const N: usize, T> {
    pub p: [Vector<N, T>; 2],
}

pub type Segment2<T> = Segment<2, T>;
pub type Segment3<T> = Segment<3, T>;

impl<const N: usize, T: Real> Segment<N, T> {
    #[inline]
    pub const fn new(p0: Vector<N, T>, p1: Vector<N, T>) -> Self {
        Self { p: [p0, p1] }
    }

    /// Segment `center ± extent * direction`; `direction` should be unit length
    #[inline]
    pub fn from_centered(center: Vector<N, T>, direction: Vector<N, T>, extent: T) -> Self {
        Self::new(center - direction * extent, center + direction * extent)
    }

    /// `(center, unit direction, extent)`.
    ///
    /// Normalization is robust: segments come straight from user geometry and
    /// may be arbitrarily long or short. A degenerate segment yields a zero
    /// direction and zero extent.
    pub fn centered_form(&self) -> (Vector<N, T>, Vector<N, T>, T) {
        let center = (self.p[0] + self.p[1]) * T::half();
        let (direction, length) = (self.p[1] - self.p[0]).normalize_and_length(LengthMode::Robust);
        (center, direction, length * T::half())
    }

    #[inline]
    pub fn length(&self) -> T {
        (self.p[1] - self.p[0]).length_robust()
    }

    /// `p[0] + t * (p[1] - p[0])`
    #[inline]
    pub fn at(&self, t: T) -> Vector<N, T> {
        self.p[0] + (self.p[1] - self.p[0]) * t
    }
}

impl<const N: usize, T: Real> Default for Segment<N, T> {
    /// From `-e0` to `+e0`
    fn default() -> Self {
        Self::new(-Vector::unit(0), Vector::unit(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_math::Vector2;

    #[test]
    fn test_centered_form() {
        let seg = Segment::new(Vector2::new([1.0, 1.0]), Vector2::new([5.0, 1.0]));
        let (center, direction, extent) = seg.centered_form();
        assert_eq!(center, Vector2::new([3.0, 1.0]));
        assert_eq!(direction, Vector2::new([1.0, 0.0]));
        assert_eq!(extent, 2.0);
        assert_eq!(Segment::from_centered(center, direction, extent), seg);
    }

    #[test]
    fn test_degenerate_centered_form() {
        let p = Vector2::new([2.0_f32, -1.0]);
        let (center, direction, extent) = Segment::new(p, p).centered_form();
        assert_eq!(center, p);
        assert!(direction.is_zero());
        assert_eq!(extent, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_segment_bincode() {
        let seg = Segment::new(Vector2::new([1.0_f64, -2.0]), Vector2::new([0.5, 7.0]));
        let bytes = bincode::serialize(&seg).unwrap();
        let back: Segment<2, f64> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(seg, back);
    }
}
