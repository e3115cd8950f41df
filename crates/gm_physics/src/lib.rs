//! GM Physics - Sphere and Plane Collision World
//!
//! This crate is a small client of the `gm_geometry` queries: it owns rigid
//! spheres and immovable planes and reports the contacts between them.
//!
//! # Features
//!
//! - Rigid spheres with mass from a uniform density
//! - Immovable planes
//! - Contact detection: test-intersection per pair, then a distance query for
//!   the contact point, normal and penetration depth
//! - Body-frame transforms backed by a cached inverse pose
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │            CollisionWorld            │
//! │  ┌─────────────┐  ┌───────────────┐  │
//! │  │ RigidSphere │  │  RigidPlane   │  │
//! │  └──────┬──────┘  └───────┬───────┘  │
//! │         └──────┬──────────┘          │
//! │                ▼                     │
//! │     detect_contacts (TI, then DCP)   │
//! └────────────────┬─────────────────────┘
//!                  ▼
//!             Vec<Contact>
//! ```
//!
//! # Example
//!
//! ```
//! use gm_geometry::{Plane3, Sphere3};
//! use gm_math::Vector3;
//! use gm_physics::prelude::*;
//!
//! let mut world = CollisionWorld::new(PhysicsConfig::default()).unwrap();
//! let ground = world.add_plane(&Plane3::new(Vector3::unit(1), 0.0)).unwrap();
//! let ball = world.add_sphere(&Sphere3::new(Vector3::new([0.0, 0.5, 0.0]), 1.0)).unwrap();
//!
//! let contacts = world.detect_contacts();
//! assert_eq!(contacts.len(), 1);
//! assert_eq!(contacts[0].bodies, [ball, ground]);
//! assert!(contacts[0].is_penetrating());
//! ```

pub mod body;
pub mod config;
pub mod contact;
pub mod error;
pub mod world;

pub mod prelude {
    //! Common imports for collision functionality
    pub use crate::body::{BodyHandle, RigidBody, RigidPlane, RigidSphere};
    pub use crate::config::PhysicsConfig;
    pub use crate::contact::Contact;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::world::CollisionWorld;
}

pub use prelude::*;
