//! # gm_math - Algebraic Foundation
//!
//! Numeric building blocks for the geometry query kernel:
//! - [`Vector`]: fixed-size `N`-tuples generic over the scalar type
//! - [`DynVector`]: runtime-sized vectors with checked dimensions
//! - [`Matrix3`] and [`AxisAngle`]: 3D rotations
//! - [`Transform`]: rotation-scale-translation with a lazily cached inverse
//!
//! Lengths and normalization come in two flavours selected by [`LengthMode`].
//! The robust flavour rescales by the largest component before taking the
//! square root and maps the zero vector to zero; the naive flavour is the
//! plain `sqrt(dot(v, v))`.

pub mod real;
pub mod error;
pub mod vector;
pub mod dyn_vector;
pub mod matrix;
pub mod axis_angle;
pub mod transform;

pub use real::*;
pub use error::*;
pub use vector::*;
pub use dyn_vector::*;
pub use matrix::*;
pub use axis_angle::*;
pub use transform::*;

pub mod prelude {
    pub use crate::real::Real;
    pub use crate::error::MathError;
    pub use crate::vector::{Vector, Vector2, Vector3, Vector4, LengthMode, orthonormalize};
    pub use crate::dyn_vector::DynVector;
    pub use crate::matrix::Matrix3;
    pub use crate::axis_angle::AxisAngle;
    pub use crate::transform::{Transform, AffineInverse};
}
