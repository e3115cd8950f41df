//! Rigid bodies: mass properties, pose, and the attached shape

use core::f64::consts::PI;

use gm_geometry::{Plane3, Sphere3};
use gm_math::{AxisAngle, Matrix3, Transform, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// Handle to a body in a [`CollisionWorld`](crate::world::CollisionWorld)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    /// Create from a raw index
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Mass properties and pose.
///
/// Immovable bodies have infinite mass and zero inverse mass.
#[derive(Debug, Clone)]
pub struct RigidBody {
    mass: f64,
    inverse_mass: f64,
    body_inertia: Matrix3<f64>,
    pose: Transform<f64>,
}

impl RigidBody {
    /// Movable body with a positive, finite mass
    pub fn new(mass: f64, body_inertia: Matrix3<f64>) -> Self {
        Self {
            mass,
            inverse_mass: 1.0 / mass,
            body_inertia,
            pose: Transform::identity(),
        }
    }

    /// Immovable body
    pub fn fixed() -> Self {
        Self {
            mass: f64::INFINITY,
            inverse_mass: 0.0,
            body_inertia: Matrix3::zero(),
            pose: Transform::identity(),
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f64 {
        self.inverse_mass
    }

    pub fn is_fixed(&self) -> bool {
        self.inverse_mass == 0.0
    }

    pub fn body_inertia(&self) -> &Matrix3<f64> {
        &self.body_inertia
    }

    pub fn position(&self) -> Vector3<f64> {
        self.pose.translation()
    }

    pub fn set_position(&mut self, position: Vector3<f64>) {
        self.pose.set_translation(position);
    }

    pub fn set_orientation(&mut self, orientation: &AxisAngle<f64>) {
        self.pose.set_rotation_axis_angle(orientation);
    }

    pub fn pose(&self) -> &Transform<f64> {
        &self.pose
    }

    /// Mutable pose; the inverse is recomputed after any change
    pub fn pose_mut(&mut self) -> &mut Transform<f64> {
        &mut self.pose
    }
}

/// Solid sphere body; the world sphere is centered at the body position
#[derive(Debug, Clone)]
pub struct RigidSphere {
    body: RigidBody,
    radius: f64,
}

impl RigidSphere {
    /// Sphere of uniform `density`, mass `density * 4/3 * pi * r^3`
    pub fn new(sphere: &Sphere3<f64>, density: f64) -> Result<Self> {
        sphere
            .validate()
            .map_err(|e| PhysicsError::InvalidShape(e.to_string()))?;
        if !(density > 0.0 && density.is_finite()) {
            return Err(PhysicsError::InvalidConfig(format!("density must be finite and positive, got {}", density)));
        }

        let radius = sphere.radius;
        let mass = density * 4.0 * PI * radius * radius * radius / 3.0;
        let inertia = 0.4 * mass * radius * radius;
        let mut body = RigidBody::new(mass, Matrix3::from_diagonal(Vector3::splat(inertia)));
        body.set_position(sphere.center);
        Ok(Self { body, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn world_sphere(&self) -> Sphere3<f64> {
        Sphere3::new(self.body.position(), self.radius)
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }
}

/// Immovable plane
#[derive(Debug, Clone)]
pub struct RigidPlane {
    body: RigidBody,
    plane: Plane3<f64>,
}

impl RigidPlane {
    pub fn new(plane: &Plane3<f64>) -> Result<Self> {
        plane
            .validate()
            .map_err(|e| PhysicsError::InvalidShape(e.to_string()))?;
        Ok(Self {
            body: RigidBody::fixed(),
            plane: *plane,
        })
    }

    pub fn plane(&self) -> &Plane3<f64> {
        &self.plane
    }

    /// Positive on the side the normal points to
    pub fn signed_distance(&self, point: &Vector3<f64>) -> f64 {
        self.plane.signed_distance(point)
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }
}
