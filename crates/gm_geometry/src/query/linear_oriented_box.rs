//! Line, ray and segment vs oriented box
//!
//! Origin and direction are expressed in the box frame, the aligned-box
//! algorithms run against the box extents, and world points come from the
//! original primitive. The frame change preserves parameters because the
//! axes are orthonormal.

use gm_math::Real;

use super::{line_aligned_box, ray_aligned_box, segment_aligned_box};
use super::{FindIntersection, ParametricIntersection, TIResult, TestIntersection};
use crate::line::Line;
use crate::oriented_box::OrientedBox;
use crate::ray::Ray;
use crate::segment::Segment;

impl<const N: usize, T: Real> TestIntersection<OrientedBox<N, T>> for Line<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, oriented: &OrientedBox<N, T>) -> TIResult {
        let origin = oriented.to_local(&self.origin);
        let direction = oriented.to_local_vector(&self.direction);
        TIResult::new(line_aligned_box::test_local(&origin, &direction, &oriented.extent))
    }
}

impl<const N: usize, T: Real> FindIntersection<OrientedBox<N, T>> for Line<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, oriented: &OrientedBox<N, T>) -> ParametricIntersection<N, T> {
        let origin = oriented.to_local(&self.origin);
        let direction = oriented.to_local_vector(&self.direction);
        let interval = line_aligned_box::find_local(&origin, &direction, &oriented.extent);
        ParametricIntersection::from_interval(interval, |t| self.at(t))
    }
}

impl<const N: usize, T: Real> TestIntersection<OrientedBox<N, T>> for Ray<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, oriented: &OrientedBox<N, T>) -> TIResult {
        let origin = oriented.to_local(&self.origin);
        let direction = oriented.to_local_vector(&self.direction);
        TIResult::new(ray_aligned_box::test_local(&origin, &direction, &oriented.extent))
    }
}

impl<const N: usize, T: Real> FindIntersection<OrientedBox<N, T>> for Ray<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, oriented: &OrientedBox<N, T>) -> ParametricIntersection<N, T> {
        let origin = oriented.to_local(&self.origin);
        let direction = oriented.to_local_vector(&self.direction);
        let interval = ray_aligned_box::find_local(&origin, &direction, &oriented.extent);
        ParametricIntersection::from_interval(interval, |t| self.at(t))
    }
}

impl<const N: usize, T: Real> TestIntersection<OrientedBox<N, T>> for Segment<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, oriented: &OrientedBox<N, T>) -> TIResult {
        let (center, direction, extent) = self.centered_form();
        TIResult::new(segment_aligned_box::test_local(
            &oriented.to_local(&center),
            &oriented.to_local_vector(&direction),
            extent,
            &oriented.extent,
        ))
    }
}

impl<const N: usize, T: Real> FindIntersection<OrientedBox<N, T>> for Segment<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, oriented: &OrientedBox<N, T>) -> ParametricIntersection<N, T> {
        let (center, direction, extent) = self.centered_form();
        let interval = segment_aligned_box::find_local(
            &oriented.to_local(&center),
            &oriented.to_local_vector(&direction),
            extent,
            &oriented.extent,
        );
        ParametricIntersection::from_interval(interval, |t| center + direction * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{find_intersection, test_intersection};
    use approx::assert_relative_eq;
    use gm_math::{AxisAngle, Vector3};

    /// Unit cube rotated 45 degrees about z, centered at (5, 0, 0)
    fn diamond() -> OrientedBox<3, f64> {
        let rotation = AxisAngle::new(Vector3::unit(2), core::f64::consts::FRAC_PI_4).to_matrix();
        OrientedBox::from_rotation(Vector3::new([5.0, 0.0, 0.0]), &rotation, Vector3::splat(1.0))
    }

    #[test]
    fn test_ray_hits_rotated_box() {
        let ray = Ray::new(Vector3::zero(), Vector3::unit(0));
        assert!(test_intersection(&ray, &diamond()).intersect);

        let hit = find_intersection(&ray, &diamond());
        assert_eq!(hit.num_intersections, 2);
        let half_diagonal = 2.0_f64.sqrt();
        assert_relative_eq!(hit.parameter[0], 5.0 - half_diagonal, epsilon = 1e-12);
        assert_relative_eq!(hit.parameter[1], 5.0 + half_diagonal, epsilon = 1e-12);
        assert_relative_eq!(hit.point[1][0], 5.0 + half_diagonal, epsilon = 1e-12);
    }

    #[test]
    fn test_ray_misses_rotated_box() {
        let ray = Ray::new(Vector3::zero(), -Vector3::unit(0));
        assert!(!test_intersection(&ray, &diamond()).intersect);

        // Passes just outside the corner at y = sqrt(2)
        let line = Line::new(Vector3::new([0.0, 1.5, 0.0]), Vector3::unit(0));
        assert!(!test_intersection(&line, &diamond()).intersect);
    }

    #[test]
    fn test_segment_vs_rotated_box() {
        let segment = Segment::new(Vector3::new([5.0, -3.0, 0.0]), Vector3::new([5.0, 0.0, 0.0]));
        assert!(test_intersection(&segment, &diamond()).intersect);

        let hit = find_intersection(&segment, &diamond());
        assert_eq!(hit.num_intersections, 2);
        assert_relative_eq!(hit.point[0][1], -(2.0_f64.sqrt()), epsilon = 1e-12);
        assert_relative_eq!(hit.point[1][1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_aligned_query() {
        let aligned = crate::aligned_box::AlignedBox::new(Vector3::splat(-1.0), Vector3::splat(2.0));
        let oriented = OrientedBox::from_aligned(&aligned);
        let ray = Ray::new(Vector3::new([-4.0, 0.5, 0.5]), Vector3::unit(0));
        assert_eq!(find_intersection(&ray, &aligned), find_intersection(&ray, &oriented));
    }
}
