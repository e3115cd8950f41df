//! Boxes with arbitrary orthonormal axes

use gm_math::{Matrix3, Real, Vector};

use crate::aligned_box::AlignedBox;
use crate::canonical_box::CanonicalBox;
use crate::error::{default_tolerance, invalid, GeometryError, Result};

/// Box `C + Σ y[i] * axis[i]` with `|y[i]| <= extent[i]`.
///
/// The axes must be mutually orthonormal. This is not checked on
/// construction; [`OrientedBox::validate`] checks it on request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox<const N: usize, T> {
    pub center: Vector<N, T>,
    pub axis: [Vector<N, T>; N],
    pub extent: Vector<N, T>,
}

pub type OrientedBox2<T> = OrientedBox<2, T>;
pub type OrientedBox3<T> = OrientedBox<3, T>;

impl<const N: usize, T: Real> OrientedBox<N, T> {
    #[inline]
    pub const fn new(center: Vector<N, T>, axis: [Vector<N, T>; N], extent: Vector<N, T>) -> Self {
        Self { center, axis, extent }
    }

    /// Same box as `aligned`, expressed with the coordinate axes
    pub fn from_aligned(aligned: &AlignedBox<N, T>) -> Self {
        let (center, extent) = aligned.centered_form();
        Self::new(center, core::array::from_fn(Vector::unit), extent)
    }

    /// The box with the same extents centered at the origin
    #[inline]
    pub fn canonical(&self) -> CanonicalBox<N, T> {
        CanonicalBox::new(self.extent)
    }

    /// Coordinates of a world point in the box frame, `Dot(axis[i], P - C)`
    pub fn to_local(&self, point: &Vector<N, T>) -> Vector<N, T> {
        self.to_local_vector(&(*point - self.center))
    }

    /// Coordinates of a world direction in the box frame
    pub fn to_local_vector(&self, vector: &Vector<N, T>) -> Vector<N, T> {
        Vector::from_fn(|i| self.axis[i].dot(*vector))
    }

    /// `C + Σ local[i] * axis[i]`
    pub fn to_world(&self, local: &Vector<N, T>) -> Vector<N, T> {
        let mut world = self.center;
        for i in 0..N {
            world += self.axis[i] * local[i];
        }
        world
    }

    pub fn contains(&self, point: &Vector<N, T>) -> bool {
        self.canonical().contains(&self.to_local(point))
    }

    pub fn validate(&self) -> Result<()> {
        self.canonical().validate()?;
        let tolerance = default_tolerance::<T>();
        for i in 0..N {
            for j in i..N {
                let expected = if i == j { T::one() } else { T::zero() };
                if (self.axis[i].dot(self.axis[j]) - expected).abs() > tolerance {
                    return invalid("oriented box", GeometryError::NonOrthonormalAxes);
                }
            }
        }
        Ok(())
    }
}

impl<T: Real> OrientedBox<3, T> {
    /// Box whose axes are the columns of a rotation matrix
    pub fn from_rotation(center: Vector<3, T>, rotation: &Matrix3<T>, extent: Vector<3, T>) -> Self {
        Self::new(center, rotation.cols, extent)
    }
}

impl<const N: usize, T: Real> Default for OrientedBox<N, T> {
    /// Unit box at the origin with the coordinate axes
    fn default() -> Self {
        Self::new(Vector::zero(), core::array::from_fn(Vector::unit), Vector::splat(T::one()))
    }
}

// `[Vector; N]` has no serde impls for a generic `N`; the box is written as
// a tuple `(center, axis[0], .., axis[N-1], extent)`.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::OrientedBox;
    use core::fmt;
    use core::marker::PhantomData;
    use gm_math::{Real, Vector};
    use serde::de::{Error, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<const N: usize, T: Real + Serialize> Serialize for OrientedBox<N, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_tuple(N + 2)?;
            seq.serialize_element(&self.center)?;
            for axis in &self.axis {
                seq.serialize_element(axis)?;
            }
            seq.serialize_element(&self.extent)?;
            seq.end()
        }
    }

    struct BoxVisitor<const N: usize, T>(PhantomData<T>);

    impl<'de, const N: usize, T: Real + Deserialize<'de>> Visitor<'de> for BoxVisitor<N, T> {
        type Value = OrientedBox<N, T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a center, {} axes and an extent", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut next = |index: usize| -> Result<Vector<N, T>, A::Error> {
                seq.next_element()?.ok_or_else(|| A::Error::invalid_length(index, &self))
            };
            let center = next(0)?;
            let mut axis = [Vector::zero(); N];
            for (i, a) in axis.iter_mut().enumerate() {
                *a = next(i + 1)?;
            }
            let extent = next(N + 1)?;
            Ok(OrientedBox::new(center, axis, extent))
        }
    }

    impl<'de, const N: usize, T: Real + Deserialize<'de>> Deserialize<'de> for OrientedBox<N, T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N + 2, BoxVisitor::<N, T>(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gm_math::{AxisAngle, Vector3};

    fn rotated_box() -> OrientedBox3<f64> {
        let rotation = AxisAngle::new(Vector3::unit(2), core::f64::consts::FRAC_PI_4).to_matrix();
        OrientedBox::from_rotation(Vector3::new([1.0, 2.0, 3.0]), &rotation, Vector3::new([1.0, 2.0, 0.5]))
    }

    #[test]
    fn test_local_world_round_trip() {
        let b = rotated_box();
        let p = Vector3::new([-0.5, 4.0, 2.0]);
        let back = b.to_world(&b.to_local(&p));
        for i in 0..3 {
            assert_relative_eq!(back[i], p[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_from_aligned() {
        let aligned = AlignedBox::new(Vector3::new([0.0, 0.0, 0.0]), Vector3::new([2.0, 4.0, 6.0]));
        let b = OrientedBox::from_aligned(&aligned);
        assert_eq!(b.center, Vector3::new([1.0, 2.0, 3.0]));
        assert_eq!(b.axis[1], Vector3::unit(1));
        assert!(b.contains(&Vector3::new([2.0, 4.0, 6.0])));
        assert!(b.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(rotated_box().validate().is_ok());

        let mut skewed = rotated_box();
        skewed.axis[1] = Vector3::new([1.0, 1.0, 0.0]);
        assert_eq!(skewed.validate(), Err(GeometryError::NonOrthonormalAxes));

        let mut negative = rotated_box();
        negative.extent[2] = -1.0;
        assert_eq!(negative.validate(), Err(GeometryError::NegativeExtent { axis: 2 }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_oriented_box_bincode() {
        let b = rotated_box();
        let bytes = bincode::serialize(&b).unwrap();
        let back: OrientedBox3<f64> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(b, back);

        assert!(bincode::deserialize::<OrientedBox3<f64>>(&bytes[..bytes.len() - 8]).is_err());
    }
}
