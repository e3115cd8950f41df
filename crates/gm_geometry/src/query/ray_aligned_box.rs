//! Ray vs aligned box
//!
//! The test rejects early when the origin is outside a slab and the ray points
//! away from it, then falls back on the line clipping. The find query clips
//! the line interval to `[0, +inf)`.

use gm_math::{Real, Vector};

use super::intervals;
use super::line_aligned_box;
use super::{FindIntersection, IntervalIntersection, ParametricIntersection, TIResult, TestIntersection};
use crate::aligned_box::AlignedBox;
use crate::ray::Ray;

/// Test-intersection in the box frame
pub(crate) fn test_local<const N: usize, T: Real>(
    origin: &Vector<N, T>,
    direction: &Vector<N, T>,
    extent: &Vector<N, T>,
) -> bool {
    let separated = (0..N).any(|i| origin[i].abs() > extent[i] && origin[i] * direction[i] >= T::zero());
    !separated && line_aligned_box::test_local(origin, direction, extent)
}

/// Find-intersection in the box frame
pub(crate) fn find_local<const N: usize, T: Real>(
    origin: &Vector<N, T>,
    direction: &Vector<N, T>,
    extent: &Vector<N, T>,
) -> IntervalIntersection<T> {
    let line = line_aligned_box::find_local(origin, direction, extent);
    if !line.intersect {
        return line;
    }
    intervals::find_semi_infinite(&line.overlap, T::zero(), true)
}

impl<const N: usize, T: Real> TestIntersection<AlignedBox<N, T>> for Ray<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, aligned: &AlignedBox<N, T>) -> TIResult {
        let (center, extent) = aligned.centered_form();
        TIResult::new(test_local(&(self.origin - center), &self.direction, &extent))
    }
}

impl<const N: usize, T: Real> FindIntersection<AlignedBox<N, T>> for Ray<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, aligned: &AlignedBox<N, T>) -> ParametricIntersection<N, T> {
        let (center, extent) = aligned.centered_form();
        let interval = find_local(&(self.origin - center), &self.direction, &extent);
        ParametricIntersection::from_interval(interval, |t| self.at(t))
    }
}
