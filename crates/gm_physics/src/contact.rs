//! Contacts reported by the collision world

use gm_math::Vector3;
use serde::{Deserialize, Serialize};

use crate::body::BodyHandle;

/// A contact between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// The bodies in contact
    pub bodies: [BodyHandle; 2],
    /// Contact point in world space
    pub point: Vector3<f64>,
    /// Unit contact normal, pointing from `bodies[0]` to `bodies[1]`
    pub normal: Vector3<f64>,
    /// Overlap depth; negative within the contact tolerance band
    pub penetration: f64,
}

impl Contact {
    /// Check if the shapes actually overlap
    pub fn is_penetrating(&self) -> bool {
        self.penetration > 0.0
    }

    /// Check if `body` takes part in this contact
    pub fn involves(&self, body: BodyHandle) -> bool {
        self.bodies.contains(&body)
    }
}
