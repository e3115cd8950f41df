//! Point vs hyperplane distance

use gm_math::{Real, Vector};

use super::{DCPResult, DistanceClosestPoint, PlaneDCPResult};
use crate::hyperplane::Hyperplane;

impl<const N: usize, T: Real> DistanceClosestPoint<Hyperplane<N, T>> for Vector<N, T> {
    type Output = PlaneDCPResult<N, T>;

    fn distance_closest_point(&self, plane: &Hyperplane<N, T>) -> PlaneDCPResult<N, T> {
        let signed_distance = plane.signed_distance(self);
        PlaneDCPResult {
            dcp: DCPResult {
                distance: signed_distance.abs(),
                sqr_distance: signed_distance * signed_distance,
                closest: [*self, *self - plane.normal * signed_distance],
            },
            signed_distance,
        }
    }
}

impl_reverse_dcp!(Hyperplane => PlaneDCPResult);
