//! Segment vs aligned box
//!
//! Segments are handled in centered form `center + t * direction` with unit
//! direction and `|t| <= extent`; reported parameters use that form.

use gm_math::{Real, Vector};

use super::intervals;
use super::line_aligned_box;
use super::{FindIntersection, IntervalIntersection, ParametricIntersection, TIResult, TestIntersection};
use crate::aligned_box::AlignedBox;
use crate::segment::Segment;

/// Test-intersection in the box frame for the centered segment
pub(crate) fn test_local<const N: usize, T: Real>(
    origin: &Vector<N, T>,
    direction: &Vector<N, T>,
    segment_extent: T,
    extent: &Vector<N, T>,
) -> bool {
    let separated = (0..N).any(|i| origin[i].abs() > extent[i] + segment_extent * direction[i].abs());
    if separated {
        return false;
    }
    match line_aligned_box::clip_line(origin, direction, extent) {
        Some(line) => intervals::test(&line, &[-segment_extent, segment_extent]),
        None => false,
    }
}

/// Find-intersection in the box frame for the centered segment
pub(crate) fn find_local<const N: usize, T: Real>(
    origin: &Vector<N, T>,
    direction: &Vector<N, T>,
    segment_extent: T,
    extent: &Vector<N, T>,
) -> IntervalIntersection<T> {
    let line = line_aligned_box::find_local(origin, direction, extent);
    if !line.intersect {
        return line;
    }
    intervals::find(&line.overlap, &[-segment_extent, segment_extent])
}

impl<const N: usize, T: Real> TestIntersection<AlignedBox<N, T>> for Segment<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, aligned: &AlignedBox<N, T>) -> TIResult {
        let (box_center, box_extent) = aligned.centered_form();
        let (center, direction, extent) = self.centered_form();
        TIResult::new(test_local(&(center - box_center), &direction, extent, &box_extent))
    }
}

impl<const N: usize, T: Real> FindIntersection<AlignedBox<N, T>> for Segment<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, aligned: &AlignedBox<N, T>) -> ParametricIntersection<N, T> {
        let (box_center, box_extent) = aligned.centered_form();
        let (center, direction, extent) = self.centered_form();
        let interval = find_local(&(center - box_center), &direction, extent, &box_extent);
        ParametricIntersection::from_interval(interval, |t| center + direction * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{find_intersection, test_intersection};
    use gm_math::{Vector2, Vector3};

    fn unit_box() -> AlignedBox<3, f64> {
        AlignedBox::new(Vector3::splat(-1.0), Vector3::splat(1.0))
    }

    #[test]
    fn test_segment_crosses_box() {
        let segment = Segment::new(Vector3::new([-3.0, 0.0, 0.0]), Vector3::new([3.0, 0.0, 0.0]));
        assert!(test_intersection(&segment, &unit_box()).intersect);
        let hit = find_intersection(&segment, &unit_box());
        assert_eq!(hit.num_intersections, 2);
        assert_eq!(hit.parameter, [-1.0, 1.0]);
        assert_eq!(hit.point[0], Vector3::new([-1.0, 0.0, 0.0]));
        assert_eq!(hit.point[1], Vector3::new([1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_segment_stops_short() {
        // Supporting line hits the box, the segment does not reach it
        let segment = Segment::new(Vector3::new([-5.0, 0.0, 0.0]), Vector3::new([-2.0, 0.0, 0.0]));
        assert!(!test_intersection(&segment, &unit_box()).intersect);
        assert!(!find_intersection(&segment, &unit_box()).intersect);
    }

    #[test]
    fn test_segment_inside() {
        let segment = Segment::new(Vector3::new([-0.5, 0.0, 0.0]), Vector3::new([0.5, 0.0, 0.0]));
        let hit = find_intersection(&segment, &unit_box());
        assert_eq!(hit.parameter, [-0.5, 0.5]);
        assert_eq!(hit.point[0], segment.p[0]);
    }

    #[test]
    fn test_segment_ends_on_face() {
        let b = AlignedBox::new(Vector2::new([0.0, 0.0]), Vector2::new([2.0, 2.0]));
        let segment = Segment::new(Vector2::new([-2.0, 1.0]), Vector2::new([0.0, 1.0]));
        let hit = find_intersection(&segment, &b);
        assert!(hit.intersect);
        assert_eq!(hit.num_intersections, 1);
        assert_eq!(hit.point[0], Vector2::new([0.0, 1.0]));
    }

    #[test]
    fn test_degenerate_segment() {
        let p = Vector3::new([0.5, 0.5, 0.5]);
        let hit = find_intersection(&Segment::new(p, p), &unit_box());
        assert_eq!(hit.num_intersections, 1);
        assert_eq!(hit.point[0], p);

        let q = Vector3::new([2.0, 0.0, 0.0]);
        assert!(!test_intersection(&Segment::new(q, q), &unit_box()).intersect);
    }
}
