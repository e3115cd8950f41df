//! Line, ray and segment vs hyperplane
//!
//! With `DdN = Dot(D, normal)`, a non-zero `DdN` gives a single crossing at
//! `t = -sdist / DdN`. A zero `DdN` means the primitive is parallel to the
//! plane: it either lies in it (`coincident`) or misses it.

use gm_math::{Real, Vector};

use super::{FindIntersection, PlaneIntersection, TIResult, TestIntersection};
use crate::hyperplane::Hyperplane;
use crate::line::Line;
use crate::ray::Ray;
use crate::segment::Segment;

enum Crossing<T> {
    At(T),
    Coincident,
    Parallel,
}

fn crossing<const N: usize, T: Real>(
    origin: &Vector<N, T>,
    direction: &Vector<N, T>,
    plane: &Hyperplane<N, T>,
) -> Crossing<T> {
    let sdist = plane.signed_distance(origin);
    let d_dot_n = direction.dot(plane.normal);
    if d_dot_n != T::zero() {
        Crossing::At(-sdist / d_dot_n)
    } else if sdist == T::zero() {
        Crossing::Coincident
    } else {
        Crossing::Parallel
    }
}

impl<const N: usize, T: Real> TestIntersection<Hyperplane<N, T>> for Line<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, plane: &Hyperplane<N, T>) -> TIResult {
        let d_dot_n = self.direction.dot(plane.normal);
        TIResult::new(d_dot_n != T::zero() || plane.signed_distance(&self.origin) == T::zero())
    }
}

impl<const N: usize, T: Real> FindIntersection<Hyperplane<N, T>> for Line<N, T> {
    type Output = PlaneIntersection<N, T>;

    fn find_intersection(&self, plane: &Hyperplane<N, T>) -> PlaneIntersection<N, T> {
        match crossing(&self.origin, &self.direction, plane) {
            Crossing::At(t) => PlaneIntersection::crossing(t, self.at(t)),
            Crossing::Coincident => PlaneIntersection::coincident(T::zero(), self.origin),
            Crossing::Parallel => PlaneIntersection::none(),
        }
    }
}

impl<const N: usize, T: Real> TestIntersection<Hyperplane<N, T>> for Ray<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, plane: &Hyperplane<N, T>) -> TIResult {
        let sdist = plane.signed_distance(&self.origin);
        let d_dot_n = self.direction.dot(plane.normal);
        TIResult::new(sdist == T::zero() || sdist * d_dot_n < T::zero())
    }
}

impl<const N: usize, T: Real> FindIntersection<Hyperplane<N, T>> for Ray<N, T> {
    type Output = PlaneIntersection<N, T>;

    fn find_intersection(&self, plane: &Hyperplane<N, T>) -> PlaneIntersection<N, T> {
        match crossing(&self.origin, &self.direction, plane) {
            Crossing::At(t) if t >= T::zero() => PlaneIntersection::crossing(t, self.at(t)),
            Crossing::At(_) | Crossing::Parallel => PlaneIntersection::none(),
            Crossing::Coincident => PlaneIntersection::coincident(T::zero(), self.origin),
        }
    }
}

impl<const N: usize, T: Real> TestIntersection<Hyperplane<N, T>> for Segment<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, plane: &Hyperplane<N, T>) -> TIResult {
        let sdist0 = plane.signed_distance(&self.p[0]);
        let sdist1 = plane.signed_distance(&self.p[1]);
        TIResult::new(sdist0 * sdist1 <= T::zero())
    }
}

impl<const N: usize, T: Real> FindIntersection<Hyperplane<N, T>> for Segment<N, T> {
    type Output = PlaneIntersection<N, T>;

    /// Parameters are in centered form, `|t| <= extent`.
    ///
    /// Works from the endpoint signed distances so that it agrees with the
    /// test query; an endpoint on the plane is reported exactly.
    fn find_intersection(&self, plane: &Hyperplane<N, T>) -> PlaneIntersection<N, T> {
        let sdist0 = plane.signed_distance(&self.p[0]);
        let sdist1 = plane.signed_distance(&self.p[1]);
        if sdist0 * sdist1 > T::zero() {
            return PlaneIntersection::none();
        }

        let (center, _, extent) = self.centered_form();
        if sdist0 == sdist1 {
            return PlaneIntersection::coincident(T::zero(), center);
        }

        // Ratio of the crossing to the half length, -1 at p[0] and 1 at p[1]
        let denom = sdist0 - sdist1;
        let ratio = (sdist0 + sdist1) / denom;
        if ratio <= -T::one() {
            PlaneIntersection::crossing(-extent, self.p[0])
        } else if ratio >= T::one() {
            PlaneIntersection::crossing(extent, self.p[1])
        } else {
            let point = (self.p[1] * sdist0 - self.p[0] * sdist1) / denom;
            PlaneIntersection::crossing(extent * ratio, point)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperplane::Plane3;
    use crate::query::{find_intersection, test_intersection};
    use approx::assert_relative_eq;
    use gm_math::Vector3;

    fn z_plane() -> Plane3<f64> {
        Plane3::new(Vector3::unit(2), 1.0)
    }

    #[test]
    fn test_line_crossing() {
        let line = Line::new(Vector3::zero(), Vector3::new([0.0, 0.0, 2.0]));
        let hit = find_intersection(&line, &z_plane());
        assert!(hit.intersect && !hit.coincident);
        assert_eq!(hit.num_intersections, 1);
        assert_eq!(hit.parameter, 0.5);
        assert_eq!(hit.point, Vector3::new([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_line_parallel() {
        let off = Line::new(Vector3::zero(), Vector3::unit(0));
        assert!(!test_intersection(&off, &z_plane()).intersect);
        assert!(!find_intersection(&off, &z_plane()).intersect);

        let inside = Line::new(Vector3::new([3.0, 0.0, 1.0]), Vector3::unit(0));
        assert!(test_intersection(&inside, &z_plane()).intersect);
        let hit = find_intersection(&inside, &z_plane());
        assert!(hit.coincident);
        assert_eq!(hit.num_intersections, 1);
        assert_eq!(hit.point, inside.origin);
    }

    #[test]
    fn test_ray_direction_matters() {
        let toward = Ray::new(Vector3::zero(), Vector3::unit(2));
        assert!(test_intersection(&toward, &z_plane()).intersect);
        assert_eq!(find_intersection(&toward, &z_plane()).parameter, 1.0);

        let away = Ray::new(Vector3::zero(), -Vector3::unit(2));
        assert!(!test_intersection(&away, &z_plane()).intersect);
        assert!(!find_intersection(&away, &z_plane()).intersect);
    }

    #[test]
    fn test_segment() {
        let through = Segment::new(Vector3::zero(), Vector3::new([0.0, 0.0, 3.0]));
        assert!(test_intersection(&through, &z_plane()).intersect);
        let hit = find_intersection(&through, &z_plane());
        assert_relative_eq!(hit.parameter, -0.5, epsilon = 1e-12);
        assert_eq!(hit.point, Vector3::new([0.0, 0.0, 1.0]));

        let above = Segment::new(Vector3::new([0.0, 0.0, 2.0]), Vector3::new([0.0, 0.0, 3.0]));
        assert!(!test_intersection(&above, &z_plane()).intersect);
        assert!(!find_intersection(&above, &z_plane()).intersect);

        let lying = Segment::new(Vector3::new([0.0, 0.0, 1.0]), Vector3::new([4.0, 0.0, 1.0]));
        let hit = find_intersection(&lying, &z_plane());
        assert!(hit.coincident);
        assert_eq!(hit.point, Vector3::new([2.0, 0.0, 1.0]));
    }

    #[test]
    fn test_segment_endpoint_on_plane() {
        let touching = Segment::new(
            Vector3::new([-9.418, -8.210, -5.564]),
            Vector3::new([0.849, 3.116, 1.0]),
        );
        assert!(test_intersection(&touching, &z_plane()).intersect);
        let hit = find_intersection(&touching, &z_plane());
        assert!(hit.intersect && !hit.coincident);
        assert_eq!(hit.num_intersections, 1);
        assert_eq!(hit.parameter, touching.centered_form().2);
        assert_eq!(hit.point, touching.p[1]);

        let reversed = Segment::new(touching.p[1], touching.p[0]);
        let hit = find_intersection(&reversed, &z_plane());
        assert!(hit.intersect);
        assert_eq!(hit.parameter, -reversed.centered_form().2);
        assert_eq!(hit.point, reversed.p[0]);
    }

    #[test]
    fn test_segment_find_agrees_with_test() {
        let mut seed = 0x2545_f491_u64;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((seed >> 11) as f64 / (1u64 << 53) as f64) * 20.0 - 10.0
        };
        for _ in 0..2000 {
            let p0 = Vector3::new([next(), next(), next()]);
            let p1 = Vector3::new([next(), next(), 1.0]);
            for segment in [Segment::new(p0, p1), Segment::new(p1, p0)] {
                let (_, _, extent) = segment.centered_form();
                let ti = test_intersection(&segment, &z_plane());
                let fi = find_intersection(&segment, &z_plane());
                assert_eq!(ti.intersect, fi.intersect, "{:?}", segment);
                assert!(fi.parameter.abs() <= extent);
            }
        }
    }
}
