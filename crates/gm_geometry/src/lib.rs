//! # gm_geometry - Primitives and Queries
//!
//! Value-type primitives generic over dimension `N` and scalar `T`, and the
//! three query families defined between them:
//!
//! - **Test-intersection** ([`TestIntersection`]): does the pair intersect?
//! - **Find-intersection** ([`FindIntersection`]): where (parameters, points)?
//! - **Distance/closest-point** ([`DistanceClosestPoint`]): how far apart, and
//!   which points realize the distance?
//!
//! Each supported ordered pair of primitives implements the relevant trait.
//! Dispatch is static; every query is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use gm_geometry::prelude::*;
//! use gm_math::Vector3;
//!
//! let ray = Ray::new(Vector3::new([0.0, 0.0, -10.0]), Vector3::new([0.0, 0.0, 1.0]));
//! let bbox = AlignedBox::new(Vector3::splat(-1.0), Vector3::splat(1.0));
//!
//! assert!(test_intersection(&ray, &bbox).intersect);
//!
//! let hit = find_intersection(&ray, &bbox);
//! assert_eq!(hit.num_intersections, 2);
//! assert_eq!(hit.parameter, [9.0, 11.0]);
//! ```

pub mod error;
pub mod line;
pub mod ray;
pub mod segment;
pub mod aligned_box;
pub mod canonical_box;
pub mod oriented_box;
pub mod hyperplane;
pub mod hypersphere;
pub mod query;

pub use error::*;
pub use line::*;
pub use ray::*;
pub use segment::*;
pub use aligned_box::*;
pub use canonical_box::*;
pub use oriented_box::*;
pub use hyperplane::*;
pub use hypersphere::*;
pub use query::*;

pub mod prelude {
    pub use crate::error::GeometryError;
    pub use crate::line::{Line, Line2, Line3};
    pub use crate::ray::{Ray, Ray2, Ray3};
    pub use crate::segment::{Segment, Segment2, Segment3};
    pub use crate::aligned_box::{AlignedBox, AlignedBox2, AlignedBox3};
    pub use crate::canonical_box::{CanonicalBox, CanonicalBox2, CanonicalBox3};
    pub use crate::oriented_box::{OrientedBox, OrientedBox2, OrientedBox3};
    pub use crate::hyperplane::{Hyperplane, Plane3};
    pub use crate::hypersphere::{Hypersphere, Circle2, Sphere3};
    pub use crate::query::{
        TestIntersection, FindIntersection, DistanceClosestPoint,
        test_intersection, find_intersection, distance_closest_point,
        TIResult, IntervalIntersection, SemiInfiniteInterval, ParametricIntersection,
        PlaneIntersection, DCPResult, LinearDCPResult, PlaneDCPResult,
    };
}
