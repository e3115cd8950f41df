//! Query traits, result types, and the per-pair algorithms
//!
//! Each supported ordered pair `(A, B)` implements one or more of
//! [`TestIntersection`], [`FindIntersection`] and [`DistanceClosestPoint`].
//! Queries are pure: they borrow both primitives and return a fresh result.

/// `shape` vs point, answered by the point vs `shape` query with the closest
/// pair swapped
macro_rules! impl_reverse_dcp {
    ($($shape:ident => $output:ident),+ $(,)?) => {
        $(
            impl<const N: usize, T: gm_math::Real> $crate::query::DistanceClosestPoint<gm_math::Vector<N, T>>
                for $shape<N, T>
            {
                type Output = $output<N, T>;

                #[inline]
                fn distance_closest_point(&self, point: &gm_math::Vector<N, T>) -> $output<N, T> {
                    $crate::query::DistanceClosestPoint::distance_closest_point(point, self).swapped()
                }
            }
        )+
    };
}

/// `B` vs `A` test-intersection, answered by the symmetric `A` vs `B` query
macro_rules! impl_reverse_ti {
    ($($lhs:ident => $rhs:ident),+ $(,)?) => {
        $(
            impl<const N: usize, T: gm_math::Real> $crate::query::TestIntersection<$lhs<N, T>> for $rhs<N, T> {
                type Output = $crate::query::TIResult;

                #[inline]
                fn test_intersection(&self, other: &$lhs<N, T>) -> $crate::query::TIResult {
                    $crate::query::TestIntersection::test_intersection(other, self)
                }
            }
        )+
    };
}

pub mod intervals;
pub mod line_aligned_box;
pub mod ray_aligned_box;
pub mod segment_aligned_box;
pub mod linear_oriented_box;
pub mod linear_hypersphere;
pub mod linear_hyperplane;
pub mod point_box;
pub mod point_linear;
pub mod point_hyperplane;
pub mod point_hypersphere;
pub mod shape_pairs;

pub use intervals::SemiInfiniteInterval;

use gm_math::{Real, Vector};

/// Does `self` intersect `rhs`?
pub trait TestIntersection<Rhs: ?Sized> {
    type Output;

    fn test_intersection(&self, rhs: &Rhs) -> Self::Output;
}

/// Where does `self` intersect `rhs`?
pub trait FindIntersection<Rhs: ?Sized> {
    type Output;

    fn find_intersection(&self, rhs: &Rhs) -> Self::Output;
}

/// Distance between `self` and `rhs`, and the points realizing it
pub trait DistanceClosestPoint<Rhs: ?Sized> {
    type Output;

    fn distance_closest_point(&self, rhs: &Rhs) -> Self::Output;
}

#[inline]
pub fn test_intersection<A, B>(a: &A, b: &B) -> A::Output
where
    A: TestIntersection<B> + ?Sized,
    B: ?Sized,
{
    a.test_intersection(b)
}

#[inline]
pub fn find_intersection<A, B>(a: &A, b: &B) -> A::Output
where
    A: FindIntersection<B> + ?Sized,
    B: ?Sized,
{
    a.find_intersection(b)
}

#[inline]
pub fn distance_closest_point<A, B>(a: &A, b: &B) -> A::Output
where
    A: DistanceClosestPoint<B> + ?Sized,
    B: ?Sized,
{
    a.distance_closest_point(b)
}

/// Result of a test-intersection query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TIResult {
    pub intersect: bool,
}

impl TIResult {
    #[inline]
    pub const fn new(intersect: bool) -> Self {
        Self { intersect }
    }
}

impl From<bool> for TIResult {
    fn from(intersect: bool) -> Self {
        Self::new(intersect)
    }
}

/// Intersection of two 1D intervals.
///
/// `num_intersections` is 0 (disjoint), 1 (a single shared value, stored in
/// both `overlap` slots) or 2 (a proper interval).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntervalIntersection<T> {
    pub intersect: bool,
    pub num_intersections: usize,
    pub overlap: [T; 2],
}

impl<T: Real> IntervalIntersection<T> {
    pub fn none() -> Self {
        Self {
            intersect: false,
            num_intersections: 0,
            overlap: [T::zero(); 2],
        }
    }

    /// Single shared value
    pub fn point(t: T) -> Self {
        Self {
            intersect: true,
            num_intersections: 1,
            overlap: [t, t],
        }
    }

    /// Closed interval `[t0, t1]`, collapsing to a point when `t0 == t1`
    pub fn interval(t0: T, t1: T) -> Self {
        if t0 < t1 {
            Self {
                intersect: true,
                num_intersections: 2,
                overlap: [t0, t1],
            }
        } else {
            Self::point(t0)
        }
    }
}

/// Find-intersection result of a line, ray or segment against a solid
/// (box or hypersphere).
///
/// `parameter` is measured along the query primitive's own parametrization
/// and `point[i]` is the world point at `parameter[i]`. With one
/// intersection both slots hold the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParametricIntersection<const N: usize, T> {
    pub intersect: bool,
    pub num_intersections: usize,
    pub parameter: [T; 2],
    pub point: [Vector<N, T>; 2],
}

impl<const N: usize, T: Real> ParametricIntersection<N, T> {
    pub fn none() -> Self {
        Self {
            intersect: false,
            num_intersections: 0,
            parameter: [T::zero(); 2],
            point: [Vector::zero(); 2],
        }
    }

    /// Lift a parameter interval to world points with `at`
    pub fn from_interval(interval: IntervalIntersection<T>, at: impl Fn(T) -> Vector<N, T>) -> Self {
        if !interval.intersect {
            return Self::none();
        }
        Self {
            intersect: true,
            num_intersections: interval.num_intersections,
            parameter: interval.overlap,
            point: [at(interval.overlap[0]), at(interval.overlap[1])],
        }
    }
}

impl<const N: usize, T: Real> Default for ParametricIntersection<N, T> {
    fn default() -> Self {
        Self::none()
    }
}

/// Find-intersection result of a line, ray or segment against a hyperplane.
///
/// When the primitive lies in the plane, `coincident` is set, the count is 1
/// and `parameter`/`point` give a representative point (the primitive's
/// origin or center).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneIntersection<const N: usize, T> {
    pub intersect: bool,
    pub num_intersections: usize,
    pub parameter: T,
    pub point: Vector<N, T>,
    pub coincident: bool,
}

impl<const N: usize, T: Real> PlaneIntersection<N, T> {
    pub fn none() -> Self {
        Self {
            intersect: false,
            num_intersections: 0,
            parameter: T::zero(),
            point: Vector::zero(),
            coincident: false,
        }
    }

    pub fn crossing(parameter: T, point: Vector<N, T>) -> Self {
        Self {
            intersect: true,
            num_intersections: 1,
            parameter,
            point,
            coincident: false,
        }
    }

    pub fn coincident(parameter: T, point: Vector<N, T>) -> Self {
        Self {
            coincident: true,
            ..Self::crossing(parameter, point)
        }
    }
}

impl<const N: usize, T: Real> Default for PlaneIntersection<N, T> {
    fn default() -> Self {
        Self::none()
    }
}

/// Distance query result; `closest[0]` is on the first primitive, `closest[1]`
/// on the second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DCPResult<const N: usize, T> {
    pub distance: T,
    pub sqr_distance: T,
    pub closest: [Vector<N, T>; 2],
}

impl<const N: usize, T: Real> DCPResult<N, T> {
    /// Build from a closest pair; the distance is `sqrt` of the squared one
    pub fn from_closest(closest0: Vector<N, T>, closest1: Vector<N, T>) -> Self {
        let sqr_distance = (closest1 - closest0).squared_length();
        Self {
            distance: sqr_distance.sqrt(),
            sqr_distance,
            closest: [closest0, closest1],
        }
    }

    /// The same result seen from the other primitive
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            closest: [self.closest[1], self.closest[0]],
            ..self
        }
    }
}

impl<const N: usize, T: Real> Default for DCPResult<N, T> {
    fn default() -> Self {
        Self {
            distance: T::zero(),
            sqr_distance: T::zero(),
            closest: [Vector::zero(); 2],
        }
    }
}

/// Distance to a line, ray or segment, plus the parameter of the closest
/// point on it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearDCPResult<const N: usize, T> {
    pub dcp: DCPResult<N, T>,
    pub parameter: T,
}

impl<const N: usize, T: Real> Default for LinearDCPResult<N, T> {
    fn default() -> Self {
        Self {
            dcp: DCPResult::default(),
            parameter: T::zero(),
        }
    }
}

impl<const N: usize, T: Real> LinearDCPResult<N, T> {
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            dcp: self.dcp.swapped(),
            ..self
        }
    }
}

/// Distance to a hyperplane, plus the signed distance of the point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneDCPResult<const N: usize, T> {
    pub dcp: DCPResult<N, T>,
    pub signed_distance: T,
}

impl<const N: usize, T: Real> Default for PlaneDCPResult<N, T> {
    fn default() -> Self {
        Self {
            dcp: DCPResult::default(),
            signed_distance: T::zero(),
        }
    }
}

impl<const N: usize, T: Real> PlaneDCPResult<N, T> {
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            dcp: self.dcp.swapped(),
            ..self
        }
    }
}
