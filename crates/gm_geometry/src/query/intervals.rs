//! Intersection of closed 1D intervals `[a0, a1]` with `a0 <= a1`
//!
//! Ray and segment queries use these to restrict the parameter interval of the
//! supporting line to their own domain.

use gm_math::Real;

use super::{FindIntersection, IntervalIntersection, TIResult, TestIntersection};

/// `[endpoint, +inf)` when `positive`, else `(-inf, endpoint]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemiInfiniteInterval<T> {
    pub endpoint: T,
    pub positive: bool,
}

impl<T: Real> SemiInfiniteInterval<T> {
    #[inline]
    pub const fn new(endpoint: T, positive: bool) -> Self {
        Self { endpoint, positive }
    }

    /// `[endpoint, +inf)`
    #[inline]
    pub const fn at_least(endpoint: T) -> Self {
        Self::new(endpoint, true)
    }

    /// `(-inf, endpoint]`
    #[inline]
    pub const fn at_most(endpoint: T) -> Self {
        Self::new(endpoint, false)
    }
}

/// Do two closed intervals overlap?
#[inline]
pub fn test<T: Real>(i0: &[T; 2], i1: &[T; 2]) -> bool {
    !(i0[1] < i1[0] || i0[0] > i1[1])
}

/// Does `i0` overlap the semi-infinite interval bounded by `a`?
#[inline]
pub fn test_semi_infinite<T: Real>(i0: &[T; 2], a: T, positive: bool) -> bool {
    if positive {
        i0[1] >= a
    } else {
        i0[0] <= a
    }
}

/// Overlap of two closed intervals
pub fn find<T: Real>(i0: &[T; 2], i1: &[T; 2]) -> IntervalIntersection<T> {
    if !test(i0, i1) {
        IntervalIntersection::none()
    } else if i0[1] > i1[0] {
        if i0[0] < i1[1] {
            IntervalIntersection::interval(i0[0].max(i1[0]), i0[1].min(i1[1]))
        } else {
            // i0[0] == i1[1]
            IntervalIntersection::point(i0[0])
        }
    } else {
        // i0[1] == i1[0]
        IntervalIntersection::point(i0[1])
    }
}

/// Overlap of `i0` with `[a, +inf)` (`positive`) or `(-inf, a]`
pub fn find_semi_infinite<T: Real>(i0: &[T; 2], a: T, positive: bool) -> IntervalIntersection<T> {
    if positive {
        if i0[1] > a {
            IntervalIntersection::interval(i0[0].max(a), i0[1])
        } else if i0[1] == a {
            IntervalIntersection::point(a)
        } else {
            IntervalIntersection::none()
        }
    } else if i0[0] < a {
        IntervalIntersection::interval(i0[0], i0[1].min(a))
    } else if i0[0] == a {
        IntervalIntersection::point(a)
    } else {
        IntervalIntersection::none()
    }
}

impl<T: Real> TestIntersection<[T; 2]> for [T; 2] {
    type Output = TIResult;

    fn test_intersection(&self, rhs: &[T; 2]) -> TIResult {
        TIResult::new(test(self, rhs))
    }
}

impl<T: Real> FindIntersection<[T; 2]> for [T; 2] {
    type Output = IntervalIntersection<T>;

    fn find_intersection(&self, rhs: &[T; 2]) -> IntervalIntersection<T> {
        find(self, rhs)
    }
}

impl<T: Real> TestIntersection<SemiInfiniteInterval<T>> for [T; 2] {
    type Output = TIResult;

    fn test_intersection(&self, rhs: &SemiInfiniteInterval<T>) -> TIResult {
        TIResult::new(test_semi_infinite(self, rhs.endpoint, rhs.positive))
    }
}

impl<T: Real> FindIntersection<SemiInfiniteInterval<T>> for [T; 2] {
    type Output = IntervalIntersection<T>;

    fn find_intersection(&self, rhs: &SemiInfiniteInterval<T>) -> IntervalIntersection<T> {
        find_semi_infinite(self, rhs.endpoint, rhs.positive)
    }
}
