//! Scalar trait shared by every generic type in the kernel

use core::fmt::Debug;
use num_traits::Float;

/// Floating-point scalar usable by vectors, primitives and queries.
///
/// Implemented for every IEEE float `num_traits` knows about (`f32`, `f64`).
pub trait Real: Float + Debug + Default + Send + Sync + 'static {
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl<T> Real for T where T: Float + Debug + Default + Send + Sync + 'static {}
