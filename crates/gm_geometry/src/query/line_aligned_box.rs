//! Line vs aligned box, and the slab clipping core shared by every
//! linear-component vs box query
//!
//! Works in the box's centered frame: the box is `|x[i]| <= extent[i]` and the
//! line is `origin + t * direction`. The parameter interval starts as
//! `[-T::MAX, T::MAX]` and is clipped against both faces of each slab
//! (Liang-Barsky).

use gm_math::{Real, Vector};

use super::{FindIntersection, IntervalIntersection, ParametricIntersection, TIResult, TestIntersection};
use crate::aligned_box::AlignedBox;
use crate::line::Line;

/// Clip `[t0, t1]` against the half-line `denom * t >= numer`.
///
/// Returns `false` when the interval becomes empty. A zero `denom` means the
/// line is parallel to the face; it is kept iff `numer <= 0`.
#[inline]
fn clip<T: Real>(denom: T, numer: T, t0: &mut T, t1: &mut T) -> bool {
    if denom > T::zero() {
        if numer > denom * *t1 {
            return false;
        }
        if numer > denom * *t0 {
            *t0 = numer / denom;
        }
        true
    } else if denom < T::zero() {
        if numer > denom * *t0 {
            return false;
        }
        if numer > denom * *t1 {
            *t1 = numer / denom;
        }
        true
    } else {
        numer <= T::zero()
    }
}

/// Parameter interval of the line inside the canonical box `|x| <= extent`,
/// or `None` when the line misses it.
///
/// A zero direction whose origin lies in the box keeps the full interval
/// `[-T::MAX, T::MAX]`.
pub fn clip_line<const N: usize, T: Real>(
    origin: &Vector<N, T>,
    direction: &Vector<N, T>,
    extent: &Vector<N, T>,
) -> Option<[T; 2]> {
    let mut t0 = -T::max_value();
    let mut t1 = T::max_value();
    for i in 0..N {
        let inside = clip(direction[i], -origin[i] - extent[i], &mut t0, &mut t1)
            && clip(-direction[i], origin[i] - extent[i], &mut t0, &mut t1);
        if !inside {
            return None;
        }
    }
    Some([t0, t1])
}

/// Test-intersection in the box frame
#[inline]
pub(crate) fn test_local<const N: usize, T: Real>(
    origin: &Vector<N, T>,
    direction: &Vector<N, T>,
    extent: &Vector<N, T>,
) -> bool {
    clip_line(origin, direction, extent).is_some()
}

/// Find-intersection in the box frame: count 2 for a proper chord, 1 when
/// the line only touches the box
pub(crate) fn find_local<const N: usize, T: Real>(
    origin: &Vector<N, T>,
    direction: &Vector<N, T>,
    extent: &Vector<N, T>,
) -> IntervalIntersection<T> {
    match clip_line(origin, direction, extent) {
        Some([t0, t1]) => IntervalIntersection::interval(t0, t1),
        None => IntervalIntersection::none(),
    }
}

impl<const N: usize, T: Real> TestIntersection<AlignedBox<N, T>> for Line<N, T> {
    type Output = TIResult;

    fn test_intersection(&self, aligned: &AlignedBox<N, T>) -> TIResult {
        let (center, extent) = aligned.centered_form();
        TIResult::new(test_local(&(self.origin - center), &self.direction, &extent))
    }
}

impl<const N: usize, T: Real> FindIntersection<AlignedBox<N, T>> for Line<N, T> {
    type Output = ParametricIntersection<N, T>;

    fn find_intersection(&self, aligned: &AlignedBox<N, T>) -> ParametricIntersection<N, T> {
        let (center, extent) = aligned.centered_form();
        let interval = find_local(&(self.origin - center), &self.direction, &extent);
        ParametricIntersection::from_interval(interval, |t| self.at(t))
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
    fn test_clip_parallel_face() {
        let (mut t0, mut t1) = (-10.0, 10.0);
        assert!(clip(0.0, -1.0, &mut t0, &mut t1));
        assert!(clip(0.0, 0.0, &mut t0, &mut t1));
        assert!(!clip(0.0, 0.5, &mut t0, &mut t1));
        assert_eq!((t0, t1), (-10.0, 10.0));
    }

    #[test]
    fn test_line_through_box() {
        let line = Line::new(Vector3::new([0.0, 0.0, 5.0]), Vector3::new([0.0, 0.0, -2.0]));
        let hit = find_intersection(&line, &unit_box());
        assert!(hit.intersect);
        assert_eq!(hit.num_intersections, 2);
        assert_eq!(hit.parameter, [2.0, 3.0]);
        assert_eq!(hit.point[0], Vector3::new([0.0, 0.0, 1.0]));
        assert_eq!(hit.point[1], Vector3::new([0.0, 0.0, -1.0]));
    }

    #[test]
    fn test_line_behind_origin_still_hits() {
        let line = Line::new(Vector3::new([0.0, 0.0, 5.0]), Vector3::new([0.0, 0.0, 1.0]));
        let hit = find_intersection(&line, &unit_box());
        assert_eq!(hit.parameter, [-6.0, -4.0]);
    }

    #[test]
    fn test_line_touches_corner() {
        let b = AlignedBox::new(Vector2::new([0.0, 0.0]), Vector2::new([1.0, 1.0]));
        let line = Line::new(Vector2::new([0.0, 2.0]), Vector2::new([1.0, -1.0]));
        let hit = find_intersection(&line, &b);
        assert!(hit.intersect);
        assert_eq!(hit.num_intersections, 1);
        assert_eq!(hit.point[0], Vector2::new([1.0, 1.0]));
    }

    #[test]
    fn test_parallel_miss() {
        let line = Line::new(Vector3::new([0.0, 1.5, 0.0]), Vector3::new([1.0, 0.0, 0.0]));
        assert!(!test_intersection(&line, &unit_box()).intersect);
        assert!(!find_intersection(&line, &unit_box()).intersect);
    }

    #[test]
    fn test_parallel_on_face() {
        let line = Line::new(Vector3::new([0.0, 1.0, 0.0]), Vector3::new([1.0, 0.0, 0.0]));
        let hit = find_intersection(&line, &unit_box());
        assert_eq!(hit.parameter, [-1.0, 1.0]);
    }

    #[test]
    fn test_zero_extent_box() {
        let b = AlignedBox::new(Vector3::splat(0.5), Vector3::splat(0.5));
        let line = Line::new(Vector3::zero(), Vector3::splat(1.0));
        let hit = find_intersection(&line, &b);
        assert_eq!(hit.num_intersections, 1);
        assert_eq!(hit.parameter, [0.5, 0.5]);
    }
}
