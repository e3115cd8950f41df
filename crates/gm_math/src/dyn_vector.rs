//! Runtime-sized vectors
//!
//! Sizes are only known at runtime, so every binary operation checks that
//! the operands agree. The `try_*` forms report a mismatch as
//! [`MathError::DimensionMismatch`]; the plain forms treat it as a programmer
//! error, log it and panic.

use core::ops::{Index, IndexMut};

use crate::error::{MathError, Result};
use crate::real::Real;
use crate::vector::LengthMode;

/// Heap-allocated vector whose size is chosen at construction
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynVector<T> {
    data: Vec<T>,
}

impl<T: Real> DynVector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn zeros(size: usize) -> Self {
        Self { data: vec![T::zero(); size] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_size(&self, other: &Self) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            log::error!("Mismatched sizes: {} vs {}", self.len(), other.len());
            Err(MathError::DimensionMismatch { left: self.len(), right: other.len() })
        }
    }

    pub fn try_dot(&self, other: &Self) -> Result<T> {
        self.check_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b))
    }

    /// # Panics
    ///
    /// Panics if the sizes differ.
    pub fn dot(&self, other: &Self) -> T {
        match self.try_dot(other) {
            Ok(dot) => dot,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_size(other)?;
        Ok(Self::new(self.data.iter().zip(&other.data).map(|(a, b)| *a + *b).collect()))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_size(other)?;
        Ok(Self::new(self.data.iter().zip(&other.data).map(|(a, b)| *a - *b).collect()))
    }

    pub fn scale(&self, s: T) -> Self {
        Self::new(self.data.iter().map(|c| *c * s).collect())
    }

    pub fn max_abs_component(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, c| acc.max(c.abs()))
    }

    pub fn length_with(&self, mode: LengthMode) -> T {
        let sqr = |v: &Self| v.data.iter().fold(T::zero(), |acc, c| acc + *c * *c);
        match mode {
            LengthMode::Naive => sqr(self).sqrt(),
            LengthMode::Robust => {
                let max_abs = self.max_abs_component();
                if max_abs > T::zero() {
                    max_abs * sqr(&self.scale(T::one() / max_abs)).sqrt()
                } else {
                    T::zero()
                }
            }
        }
    }

    /// Normalize in place, returning the length of the input.
    ///
    /// A zero vector stays zero in robust mode and is an error in naive mode.
    pub fn normalize_with(&mut self, mode: LengthMode) -> Result<T> {
        let length = self.length_with(mode);
        if length > T::zero() {
            for c in &mut self.data {
                *c = *c / length;
            }
            Ok(length)
        } else {
            for c in &mut self.data {
                *c = T::zero();
            }
            match mode {
                LengthMode::Robust => Ok(T::zero()),
                LengthMode::Naive => {
                    log::error!("Cannot normalize a zero-length vector of size {}", self.len());
                    Err(MathError::ZeroLength)
                }
            }
        }
    }

    /// Gram-Schmidt orthonormalization in place; returns the smallest
    /// intermediate length.
    pub fn orthonormalize(vectors: &mut [Self], mode: LengthMode) -> Result<T> {
        let dimension = vectors.first().map_or(0, Self::len);
        if vectors.is_empty() || vectors.len() > dimension {
            return Err(MathError::InvalidCount { count: vectors.len(), dimension });
        }
        for v in vectors.iter().skip(1) {
            vectors[0].check_size(v)?;
        }

        let mut min_length = vectors[0].normalize_with(mode)?;
        for i in 1..vectors.len() {
            for j in 0..i {
                let dot = vectors[i].try_dot(&vectors[j])?;
                let projection = vectors[j].scale(dot);
                vectors[i] = vectors[i].try_sub(&projection)?;
            }
            let length = vectors[i].normalize_with(mode)?;
            if length < min_length {
                min_length = length;
            }
        }
        Ok(min_length)
    }

    /// Component-wise bounds of a set of vectors
    pub fn compute_extremes(vectors: &[Self]) -> Result<(Self, Self)> {
        let first = vectors.first().ok_or(MathError::InvalidCount { count: 0, dimension: 0 })?;
        let mut vmin = first.clone();
        let mut vmax = first.clone();
        for v in &vectors[1..] {
            first.check_size(v)?;
            for i in 0..v.len() {
                vmin.data[i] = vmin.data[i].min(v.data[i]);
                vmax.data[i] = vmax.data[i].max(v.data[i]);
            }
        }
        Ok((vmin, vmax))
    }
}

impl<T> Index<usize> for DynVector<T> {
    type Output = T;
    #[inline] fn index(&self, i: usize) -> &T { &self.data[i] }
}
impl<T> IndexMut<usize> for DynVector<T> {
    #[inline] fn index_mut(&mut self, i: usize) -> &mut T { &mut self.data[i] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_mismatch() {
        let a = DynVector::new(vec![1.0, 2.0]);
        let b = DynVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(a.try_dot(&b), Err(MathError::DimensionMismatch { left: 2, right: 3 }));
        assert_eq!(a.try_dot(&a), Ok(5.0));
    }

    #[test]
    #[should_panic(expected = "Mismatched sizes")]
    fn test_dot_mismatch_panics() {
        let a = DynVector::new(vec![1.0_f32]);
        let b = DynVector::new(vec![1.0_f32, 0.0]);
        let _ = a.dot(&b);
    }

    #[test]
    fn test_normalize_modes() {
        let mut v = DynVector::new(vec![0.0, 3.0, 4.0]);
        assert_eq!(v.normalize_with(LengthMode::Naive), Ok(5.0));
        assert_relative_eq!(v[2], 0.8, epsilon = 1e-12);

        let mut zero = DynVector::<f64>::zeros(4);
        assert_eq!(zero.normalize_with(LengthMode::Robust), Ok(0.0));
        assert_eq!(zero.normalize_with(LengthMode::Naive), Err(MathError::ZeroLength));
    }

    #[test]
    fn test_orthonormalize() {
        let mut vs = vec![
            DynVector::new(vec![1.0, 1.0, 0.0]),
            DynVector::new(vec![1.0, 0.0, 0.0]),
        ];
        DynVector::orthonormalize(&mut vs, LengthMode::Robust).unwrap();
        assert_relative_eq!(vs[0].dot(&vs[1]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(vs[1].length_with(LengthMode::Naive), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compute_extremes() {
        let vs = vec![
            DynVector::new(vec![1.0, -2.0]),
            DynVector::new(vec![-1.0, 5.0]),
            DynVector::new(vec![0.5, 0.0]),
        ];
        let (vmin, vmax) = DynVector::compute_extremes(&vs).unwrap();
        assert_eq!(vmin.as_slice(), &[-1.0, -2.0]);
        assert_eq!(vmax.as_slice(), &[1.0, 5.0]);

        let mixed = vec![DynVector::new(vec![1.0]), DynVector::new(vec![1.0, 2.0])];
        assert!(DynVector::compute_extremes(&mixed).is_err());
    }
}
