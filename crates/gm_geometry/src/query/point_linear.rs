//! Point vs line, ray and segment distance
//!
//! `parameter` is the closest point's parameter on the linear component: on
//! its own `origin + t * direction` form for lines and rays, and on
//! `p[0] + t * (p[1] - p[0])`, `t in [0, 1]`, for segments.

use gm_math::{Real, Vector};

use super::{DCPResult, DistanceClosestPoint, LinearDCPResult};
use crate::line::Line;
use crate::ray::Ray;
use crate::segment::Segment;

/// Parameter of the orthogonal projection onto `origin + t * direction`;
/// zero for a zero direction
#[inline]
fn project<const N: usize, T: Real>(point: &Vector<N, T>, origin: &Vector<N, T>, direction: &Vector<N, T>) -> T {
    let sqr_length = direction.squared_length();
    if sqr_length > T::zero() {
        direction.dot(*point - *origin) / sqr_length
    } else {
        T::zero()
    }
}

#[inline]
fn linear_result<const N: usize, T: Real>(point: &Vector<N, T>, closest: Vector<N, T>, parameter: T) -> LinearDCPResult<N, T> {
    LinearDCPResult {
        dcp: DCPResult::from_closest(*point, closest),
        parameter,
    }
}

impl<const N: usize, T: Real> DistanceClosestPoint<Line<N, T>> for Vector<N, T> {
    type Output = LinearDCPResult<N, T>;

    fn distance_closest_point(&self, line: &Line<N, T>) -> LinearDCPResult<N, T> {
        let t = project(self, &line.origin, &line.direction);
        linear_result(self, line.at(t), t)
    }
}

impl<const N: usize, T: Real> DistanceClosestPoint<Ray<N, T>> for Vector<N, T> {
    type Output = LinearDCPResult<N, T>;

    fn distance_closest_point(&self, ray: &Ray<N, T>) -> LinearDCPResult<N, T> {
        let t = project(self, &ray.origin, &ray.direction);
        if t > T::zero() {
            linear_result(self, ray.at(t), t)
        } else {
            linear_result(self, ray.origin, T::zero())
        }
    }
}

impl<const N: usize, T: Real> DistanceClosestPoint<Segment<N, T>> for Vector<N, T> {
    type Output = LinearDCPResult<N, T>;

    fn distance_closest_point(&self, segment: &Segment<N, T>) -> LinearDCPResult<N, T> {
        let [p0, p1] = segment.p;
        let direction = p1 - p0;
        if direction.dot(*self - p1) >= T::zero() {
            return linear_result(self, p1, T::one());
        }
        let t = direction.dot(*self - p0);
        if t <= T::zero() {
            return linear_result(self, p0, T::zero());
        }
        let sqr_length = direction.squared_length();
        if sqr_length > T::zero() {
            let t = t / sqr_length;
            linear_result(self, p0 + direction * t, t)
        } else {
            linear_result(self, p0, T::zero())
        }
    }
}

impl_reverse_dcp!(
    Line => LinearDCPResult,
    Ray => LinearDCPResult,
    Segment => LinearDCPResult,
);
