//! Line, ray and segment vs hypersphere (solid)
//!
//! With `diff = origin - center`, points of the line inside the hypersphere
//! satisfy `q(t) = a2 t^2 + 2 a1 t + a0 <= 0` where `a0 = |diff|^2 - r^2`,
//! `a1 = Dot(D, diff)` and `a2 = Dot(D, D)`. Segment parameters use the
//! centered form.

use gm_math::{Real, Vector};

use super::intervals;
use super::{FindIntersection, IntervalIntersection, ParametricIntersection, TIResult, TestIntersection};
use crate::hypersphere::Hypersphere;
use crate::line::Line;
use crate::ray::Ray;
use crate::segment::Segment;

#[derive(Clone, Copy)]
struct Quadratic<T> {
    a0: T,
    a1: T,
    a2: T,
}

impl<T: Real> Quadratic<T> {
    fn new<const N: usize>(origin: &Vector<N, T>, direction: &Vector<N, T>, sphere: &Hypersphere<N, T>) -> Self {
        let diff = *origin - sphere.center;
        Self {
            a0: diff.squared_length() - sphere.radius * sphere.radius,
            a1: direction.dot(diff),
            a2: direction.squared_length(),
        }
    }

    #[inline]
    fn discriminant(&self) -> T {
        self.a1 * self.a1 - self.a0 * self.a2
    }

    /// Roots interval of `q(t) <= 0`.
    ///
    /// A zero direction makes the line a single point; the interval is then
    /// either everything or nothing.
    fn interval(&self) -> IntervalIntersection<T> {
        if self.a2 == T::zero() {
            return if self.a0 <= T::zero() {
                IntervalIntersection::interval(-T::max_value(), T::max_value())
            } else {
                IntervalIntersection::none()
            };
        }

        let discr = self.discriminant();
        if discr > T::zero() {
            let root = discr.sqrt();
            IntervalIntersection::interval((-self.a1 - root) / self.a2, (-self.a1 + root) / self.a2)
        } else if discr < T::zero() {
            IntervalIntersection::none()
        } else {
            IntervalIntersection::point(-self.a1 / self.a2)
        }
    }
}

/// Centered-form segment test: an endpoint inside, or the interior minimum
/// of `q` reached within `[-extent, extent]` and non-positive
fn segment_test<T: Real>(q: &Quadratic<T>, extent: T) -> bool {
    let tmp0 = q.a2 * extent * extent + q.a0;
    let tmp1 = T::two() * q.a1 * extent;
    let qm = tmp0 - tmp1;
    let qp = tmp0 + tmp1;
    if qm <= T::zero() || qp <= T::zero() {
        return true;
    }
    q.a1.abs() < q.a2 * extent && q.discriminant() >= T::zero()
}

impl<const N: usize, T: Real> TestIntersection<Hypersphere<N, T>> for Line<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, sphere: &Hypersphere<N, T>) -> TIResult {
        let q = Quadratic::new(&self.origin, &self.direction, sphere);
        let intersect = if q.a2 == T::zero() {
            q.a0 <= T::zero()
        } else {
            q.discriminant() >= T::zero()
        };
        TIResult::new(intersect)
    }
}

impl<const N: usize, T: Real> FindIntersection<Hypersphere<N, T>> for Line<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, sphere: &Hypersphere<N, T>) -> ParametricIntersection<N, T> {
        let interval = Quadratic::new(&self.origin, &self.direction, sphere).interval();
        ParametricIntersection::from_interval(interval, |t| self.at(t))
    }
}

impl<const N: usize, T: Real> TestIntersection<Hypersphere<N, T>> for Ray<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, sphere: &Hypersphere<N, T>) -> TIResult {
        let q = Quadratic::new(&self.origin, &self.direction, sphere);
        if q.a0 <= T::zero() {
            // origin inside
            return TIResult::new(true);
        }
        if q.a1 >= T::zero() {
            // outside and moving away
            return TIResult::new(false);
        }
        TIResult::new(q.a1 * q.a1 >= q.a0 * q.a2)
    }
}

impl<const N: usize, T: Real> FindIntersection<Hypersphere<N, T>> for Ray<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, sphere: &Hypersphere<N, T>) -> ParametricIntersection<N, T> {
        let line = Quadratic::new(&self.origin, &self.direction, sphere).interval();
        let interval = if line.intersect {
            intervals::find_semi_infinite(&line.overlap, T::zero(), true)
        } else {
            line
        };
        ParametricIntersection::from_interval(interval, |t| self.at(t))
    }
}

impl<const N: usize, T: Real> TestIntersection<Hypersphere<N, T>> for Segment<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, sphere: &Hypersphere<N, T>) -> TIResult {
        let (center, direction, extent) = self.centered_form();
        let q = Quadratic::new(&center, &direction, sphere);
        TIResult::new(segment_test(&q, extent))
    }
}

impl<const N: usize, T: Real> FindIntersection<Hypersphere<N, T>> for Segment<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, sphere: &Hypersphere<N, T>) -> ParametricIntersection<N, T> {
        let (center, direction, extent) = self.centered_form();
        let line = Quadratic::new(&center, &direction, sphere).interval();
        let interval = if line.intersect {
            intervals::find(&line.overlap, &[-extent, extent])
        } else {
            line
        };
        ParametricIntersection::from_interval(interval, |t| center + direction * t)
    }
}
