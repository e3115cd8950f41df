//! Point vs solid hypersphere distance
//!
//! The center offset length is computed robustly; points inside, boundary
//! included, are at distance zero and are their own closest point.

use gm_math::{Real, Vector};

use super::{DCPResult, DistanceClosestPoint};
use crate::hypersphere::Hypersphere;

impl<const N: usize, T: Real> DistanceClosestPoint<Hypersphere<N, T>> for Vector<N, T> {
    type Output = DCPResult<N, T>;

    fn distance_closest_point(&self, sphere: &Hypersphere<N, T>) -> DCPResult<N, T> {
        let diff = *self - sphere.center;
        let length = diff.length_robust();
        if length <= sphere.radius {
            return DCPResult {
                distance: T::zero(),
                sqr_distance: T::zero(),
                closest: [*self, *self],
            };
        }
        let distance = length - sphere.radius;
        DCPResult {
            distance,
            sqr_distance: distance * distance,
            closest: [*self, sphere.center + diff * (sphere.radius / length)],
        }
    }
}

impl_reverse_dcp!(Hypersphere => DCPResult);
