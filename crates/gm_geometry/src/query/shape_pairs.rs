//! Test-intersection between solid shapes
//!
//! Hypersphere vs box reduces to the point vs box distance from the center.

use gm_math::Real;

use super::{DistanceClosestPoint, TIResult, TestIntersection};
use crate::aligned_box::AlignedBox;
use crate::hyperplane::Hyperplane;
use crate::hypersphere::Hypersphere;
use crate::oriented_box::OrientedBox;

impl<const N: usize, T: Real> TestIntersection<Hypersphere<N, T>> for Hypersphere<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, other: &Hypersphere<N, T>) -> TIResult {
        let radius_sum = self.radius + other.radius;
        TIResult::new((other.center - self.center).squared_length() <= radius_sum * radius_sum)
    }
}

impl<const N: usize, T: Real> TestIntersection<Hyperplane<N, T>> for Hypersphere<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, plane: &Hyperplane<N, T>) -> TIResult {
        TIResult::new(plane.signed_distance(&self.center).abs() <= self.radius)
    }
}

impl<const N: usize, T: Real> TestIntersection<AlignedBox<N, T>> for Hypersphere<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, aligned: &AlignedBox<N, T>) -> TIResult {
        let dcp = self.center.distance_closest_point(aligned);
        TIResult::new(dcp.sqr_distance <= self.radius * self.radius)
    }
}

impl<const N: usize, T: Real> TestIntersection<OrientedBox<N, T>> for Hypersphere<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, oriented: &OrientedBox<N, T>) -> TIResult {
        let dcp = self.center.distance_closest_point(oriented);
        TIResult::new(dcp.sqr_distance <= self.radius * self.radius)
    }
}

impl<const N: usize, T: Real> TestIntersection<AlignedBox<N, T>> for AlignedBox<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, other: &AlignedBox<N, T>) -> TIResult {
        TIResult::new((0..N).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i]))
    }
}

impl_reverse_ti!(
    Hypersphere => Hyperplane,
    Hypersphere => AlignedBox,
    Hypersphere => OrientedBox,
);
