//! Point vs solid box distance
//!
//! `closest[0]` is the input point and `closest[1]` the nearest box point.
//! Points inside the box, boundary included, are at distance exactly zero.
//! The distance is the naive square root of the accumulated squared distance.

use gm_math::{Real, Vector};

use super::{DCPResult, DistanceClosestPoint};
use crate::aligned_box::AlignedBox;
use crate::canonical_box::CanonicalBox;
use crate::oriented_box::OrientedBox;

impl<const N: usize, T: Real> DistanceClosestPoint<CanonicalBox<N, T>> for Vector<N, T> {
    type Output = DCPResult<N, T>;

    fn distance_closest_point(&self, canonical: &CanonicalBox<N, T>) -> DCPResult<N, T> {
        let mut closest = *self;
        let mut sqr_distance = T::zero();
        for i in 0..N {
            let extent = canonical.extent[i];
            if closest[i] < -extent {
                let delta = closest[i] + extent;
                sqr_distance = sqr_distance + delta * delta;
                closest[i] = -extent;
            } else if closest[i] > extent {
                let delta = closest[i] - extent;
                sqr_distance = sqr_distance + delta * delta;
                closest[i] = extent;
            }
        }
        DCPResult {
            distance: sqr_distance.sqrt(),
            sqr_distance,
            closest: [*self, closest],
        }
    }
}

impl<const N: usize, T: Real> DistanceClosestPoint<AlignedBox<N, T>> for Vector<N, T> {
    type Output = DCPResult<N, T>;

    fn distance_closest_point(&self, aligned: &AlignedBox<N, T>) -> DCPResult<N, T> {
        let (center, extent) = aligned.centered_form();
        let mut result = (*self - center).distance_closest_point(&CanonicalBox::new(extent));
        result.closest = [*self, result.closest[1] + center];
        result
    }
}

impl<const N: usize, T: Real> DistanceClosestPoint<OrientedBox<N, T>> for Vector<N, T> {
    type Output = DCPResult<N, T>;

    fn distance_closest_point(&self, oriented: &OrientedBox<N, T>) -> DCPResult<N, T> {
        let local = oriented.to_local(self);
        let mut result = local.distance_closest_point(&oriented.canonical());
        result.closest = [*self, oriented.to_world(&result.closest[1])];
        result
    }
}

impl_reverse_dcp!(
    CanonicalBox => DCPResult,
    AlignedBox => DCPResult,
    OrientedBox => DCPResult,
);
