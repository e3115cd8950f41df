//! Fixed-size vectors generic over dimension and scalar type

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{MathError, Result};
use crate::real::Real;

/// How lengths are computed and vectors normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthMode {
    /// Rescale by the largest absolute component before the square root.
    /// Immune to overflow/underflow; the zero vector normalizes to zero.
    #[default]
    Robust,
    /// `sqrt(dot(v, v))`. Faster, overflows for extreme magnitudes.
    Naive,
}

/// `N`-dimensional vector
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Vector<const N: usize, T> {
    tuple: [T; N],
}

pub type Vector2<T> = Vector<2, T>;
pub type Vector3<T> = Vector<3, T>;
pub type Vector4<T> = Vector<4, T>;

impl<const N: usize, T: Real> Vector<N, T> {
    #[inline]
    pub const fn new(tuple: [T; N]) -> Self {
        Self { tuple }
    }

    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self { tuple: core::array::from_fn(f) }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn splat(v: T) -> Self {
        Self { tuple: [v; N] }
    }

    /// Unit vector along axis `d`. Out-of-range `d` gives the zero vector.
    #[inline]
    pub fn unit(d: usize) -> Self {
        Self::from_fn(|i| if i == d { T::one() } else { T::zero() })
    }

    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.tuple
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.tuple
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.tuple.iter().all(|c| *c == T::zero())
    }

    #[inline]
    pub fn dot(self, other: Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.tuple[i] * other.tuple[i];
        }
        sum
    }

    #[inline]
    pub fn squared_length(self) -> T {
        self.dot(self)
    }

    /// Naive length, `sqrt(dot(v, v))`
    #[inline]
    pub fn length(self) -> T {
        self.squared_length().sqrt()
    }

    /// Length computed on the vector rescaled by its largest absolute component
    pub fn length_robust(self) -> T {
        let max_abs = self.max_abs_component();
        if max_abs > T::zero() {
            let scaled = self / max_abs;
            max_abs * scaled.length()
        } else {
            T::zero()
        }
    }

    #[inline]
    pub fn length_with(self, mode: LengthMode) -> T {
        match mode {
            LengthMode::Robust => self.length_robust(),
            LengthMode::Naive => self.length(),
        }
    }

    /// Naive normalization.
    ///
    /// # Panics
    ///
    /// Panics if the vector has length exactly zero. Use [`Self::try_normalize`]
    /// or [`Self::normalize_robust`] when the input may be degenerate.
    #[inline]
    pub fn normalize(self) -> Self {
        self.normalize_and_length(LengthMode::Naive).0
    }

    #[inline]
    pub fn normalize_robust(self) -> Self {
        self.normalize_and_length(LengthMode::Robust).0
    }

    #[inline]
    pub fn normalize_with(self, mode: LengthMode) -> Self {
        self.normalize_and_length(mode).0
    }

    /// Naive normalization reporting a zero-length input as an error
    pub fn try_normalize(self) -> Result<Self> {
        let length = self.length();
        if length > T::zero() {
            Ok(self / length)
        } else {
            Err(MathError::ZeroLength)
        }
    }

    /// Normalize and return the length of the input.
    ///
    /// In [`LengthMode::Robust`] the zero vector yields `(zero, 0)`.
    ///
    /// # Panics
    ///
    /// In [`LengthMode::Naive`], panics on a zero-length input.
    pub fn normalize_and_length(self, mode: LengthMode) -> (Self, T) {
        match mode {
            LengthMode::Robust => {
                let max_abs = self.max_abs_component();
                if max_abs > T::zero() {
                    let scaled = self / max_abs;
                    let length = scaled.length();
                    (scaled / length, length * max_abs)
                } else {
                    (Self::zero(), T::zero())
                }
            }
            LengthMode::Naive => match self.try_normalize() {
                Ok(unit) => (unit, self.length()),
                Err(e) => {
                    log::error!("Naive normalization failed for {:?}: {}", self, e);
                    panic!("{}", e);
                }
            },
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_fn(|i| self.tuple[i].abs())
    }

    #[inline]
    pub fn max_abs_component(self) -> T {
        self.tuple.iter().fold(T::zero(), |acc, c| acc.max(c.abs()))
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| self.tuple[i].min(other.tuple[i]))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| self.tuple[i].max(other.tuple[i]))
    }

    /// Component-wise product
    #[inline]
    pub fn mul_elements(self, other: Self) -> Self {
        Self::from_fn(|i| self.tuple[i] * other.tuple[i])
    }

    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.tuple.iter().all(|c| c.is_finite())
    }
}

impl<T: Real> Vector<2, T> {
    /// `(y, -x)`
    #[inline]
    pub fn perp(self) -> Self {
        Self::new([self.tuple[1], -self.tuple[0]])
    }

    /// `Dot(self, Perp(other))`
    #[inline]
    pub fn dot_perp(self, other: Self) -> T {
        self.tuple[0] * other.tuple[1] - self.tuple[1] * other.tuple[0]
    }
}

impl<T: Real> Vector<3, T> {
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [x0, y0, z0] = self.tuple;
        let [x1, y1, z1] = other.tuple;
        Self::new([y0 * z1 - z0 * y1, z0 * x1 - x0 * z1, x0 * y1 - y0 * x1])
    }

    /// Complete a unit vector to a right-handed orthonormal basis.
    ///
    /// `self` must be unit length; it is returned unchanged as the first basis
    /// vector. The remaining two are normalized robustly.
    pub fn orthonormal_basis(self) -> [Self; 3] {
        let [x, y, z] = self.tuple;
        let u = if x.abs() > y.abs() {
            Self::new([-z, T::zero(), x])
        } else {
            Self::new([T::zero(), z, -y])
        };
        let u = u.normalize_robust();
        let v = self.cross(u).normalize_robust();
        [self, u, v]
    }
}

/// Gram-Schmidt orthonormalization in place.
///
/// Returns the smallest length of the intermediate (unnormalized) vectors; a
/// value near zero means the inputs were nearly linearly dependent.
pub fn orthonormalize<const N: usize, T: Real>(
    vectors: &mut [Vector<N, T>],
    mode: LengthMode,
) -> Result<T> {
    if vectors.is_empty() || vectors.len() > N {
        return Err(MathError::InvalidCount { count: vectors.len(), dimension: N });
    }

    let (first, length) = vectors[0].normalize_and_length(mode);
    vectors[0] = first;
    let mut min_length = length;
    for i in 1..vectors.len() {
        for j in 0..i {
            let dot = vectors[i].dot(vectors[j]);
            vectors[i] -= vectors[j] * dot;
        }
        let (unit, length) = vectors[i].normalize_and_length(mode);
        vectors[i] = unit;
        if length < min_length {
            min_length = length;
        }
    }
    Ok(min_length)
}

impl<const N: usize, T: Real> Default for Vector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T: Real> From<[T; N]> for Vector<N, T> {
    #[inline]
    fn from(tuple: [T; N]) -> Self {
        Self::new(tuple)
    }
}

impl<const N: usize, T> Index<usize> for Vector<N, T> {
    type Output = T;
    #[inline] fn index(&self, i: usize) -> &T { &self.tuple[i] }
}
impl<const N: usize, T> IndexMut<usize> for Vector<N, T> {
    #[inline] fn index_mut(&mut self, i: usize) -> &mut T { &mut self.tuple[i] }
}

impl<const N: usize, T: Real> Add for Vector<N, T> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::from_fn(|i| self.tuple[i] + rhs.tuple[i]) }
}
impl<const N: usize, T: Real> Sub for Vector<N, T> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::from_fn(|i| self.tuple[i] - rhs.tuple[i]) }
}
impl<const N: usize, T: Real> Mul<T> for Vector<N, T> {
    type Output = Self;
    #[inline] fn mul(self, rhs: T) -> Self { Self::from_fn(|i| self.tuple[i] * rhs) }
}
impl<const N: usize, T: Real> Div<T> for Vector<N, T> {
    type Output = Self;
    #[inline] fn div(self, rhs: T) -> Self { Self::from_fn(|i| self.tuple[i] / rhs) }
}
impl<const N: usize, T: Real> Neg for Vector<N, T> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::from_fn(|i| -self.tuple[i]) }
}
impl<const N: usize, T: Real> AddAssign for Vector<N, T> {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl<const N: usize, T: Real> SubAssign for Vector<N, T> {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}
impl<const N: usize, T: Real> MulAssign<T> for Vector<N, T> {
    #[inline] fn mul_assign(&mut self, rhs: T) { *self = *self * rhs; }
}
impl<const N: usize, T: Real> DivAssign<T> for Vector<N, T> {
    #[inline] fn div_assign(&mut self, rhs: T) { *self = *self / rhs; }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<N, $t>> for $t {
            type Output = Vector<N, $t>;
            #[inline] fn mul(self, rhs: Vector<N, $t>) -> Vector<N, $t> { rhs * self }
        }
    )*};
}
impl_scalar_mul!(f32, f64);

// serde only implements arrays up to a fixed length, so the tuple is written
// element by element.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::Vector;
    use crate::real::Real;
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{Error, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<const N: usize, T: Real + Serialize> Serialize for Vector<N, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_tuple(N)?;
            for c in self.as_slice() {
                seq.serialize_element(c)?;
            }
            seq.end()
        }
    }

    struct TupleVisitor<const N: usize, T>(PhantomData<T>);

    impl<'de, const N: usize, T: Real + Deserialize<'de>> Visitor<'de> for TupleVisitor<N, T> {
        type Value = Vector<N, T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a tuple of {} scalars", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut v = Vector::<N, T>::zero();
            for i in 0..N {
                v[i] = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(i, &self))?;
            }
            Ok(v)
        }
    }

    impl<'de, const N: usize, T: Real + Deserialize<'de>> Deserialize<'de> for Vector<N, T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, TupleVisitor::<N, T>(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_dot() {
        let a = Vector3::new([1.0, 2.0, 3.0]);
        let b = Vector3::new([4.0, 5.0, 6.0]);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vector_cross() {
        let z = Vector3::<f64>::unit(0).cross(Vector3::unit(1));
        assert_eq!(z, Vector3::unit(2));
    }

    #[test]
    fn test_vector_normalize() {
        let v = Vector3::new([3.0, 0.0, 4.0]);
        let n = v.normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n[0], 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_robust_zero_vector() {
        let zero = Vector3::<f64>::zero();
        assert_eq!(zero.length_robust(), 0.0);
        let (unit, length) = zero.normalize_and_length(LengthMode::Robust);
        assert_eq!(unit, zero);
        assert_eq!(length, 0.0);
    }

    #[test]
    fn test_try_normalize_zero() {
        assert_eq!(Vector2::<f32>::zero().try_normalize(), Err(MathError::ZeroLength));
    }

    #[test]
    #[should_panic(expected = "zero-length")]
    fn test_naive_normalize_zero_panics() {
        let _ = Vector3::<f64>::zero().normalize();
    }

    #[test]
    fn test_robust_length_avoids_overflow() {
        let v = Vector2::new([1e200_f64, 1e200]);
        assert!(v.length().is_infinite());
        assert_relative_eq!(v.length_robust(), 1e200 * 2f64.sqrt(), max_relative = 1e-12);

        let unit = v.normalize_robust();
        assert_relative_eq!(unit.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_robust_length_avoids_underflow() {
        let v = Vector3::new([1e-30_f32, 0.0, 0.0]);
        assert_eq!(v.length(), 0.0);
        assert!(v.length_robust() > 0.0);
    }

    #[test]
    fn test_perp() {
        let v = Vector2::new([2.0, 3.0]);
        assert_eq!(v.perp(), Vector2::new([3.0, -2.0]));
        assert_eq!(v.dot(v.perp()), 0.0);
        assert_eq!(Vector2::new([1.0, 0.0]).dot_perp(Vector2::new([0.0, 1.0])), 1.0);
    }

    #[test]
    fn test_orthonormal_basis() {
        let n = Vector3::new([1.0, 2.0, 2.0]) / 3.0;
        let [a, b, c] = n.orthonormal_basis();
        assert_eq!(a, n);
        assert_relative_eq!(a.dot(b), 0.0, epsilon = 1e-12);
        assert_relative_eq!(a.dot(c), 0.0, epsilon = 1e-12);
        assert_relative_eq!(b.dot(c), 0.0, epsilon = 1e-12);
        assert_relative_eq!(b.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_orthonormalize() {
        let mut vs = [Vector3::new([2.0, 0.0, 0.0]), Vector3::new([1.0, 1.0, 0.0])];
        let min_length = orthonormalize(&mut vs, LengthMode::Robust).unwrap();
        assert_relative_eq!(min_length, 1.0, epsilon = 1e-12);
        assert_eq!(vs[0], Vector3::unit(0));
        assert_relative_eq!(vs[1][1], 1.0, epsilon = 1e-12);

        let mut none: [Vector3<f64>; 0] = [];
        assert!(matches!(
            orthonormalize(&mut none, LengthMode::Naive),
            Err(MathError::InvalidCount { count: 0, dimension: 3 })
        ));
    }

    #[test]
    fn test_scalar_mul() {
        let v = 2.0_f64 * Vector2::new([1.0, -1.0]);
        assert_eq!(v, Vector2::new([2.0, -2.0]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_vector_bincode() {
        let v = Vector3::new([1.5_f64, -2.0, 8.0]);
        let bytes = bincode::serialize(&v).unwrap();
        let back: Vector3<f64> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(v, back);
    }
}
