//! Collision world - bodies and contact detection

use gm_geometry::{distance_closest_point, test_intersection, Plane3, Sphere3};
use gm_math::Vector3;

use crate::body::{BodyHandle, RigidPlane, RigidSphere};
use crate::config::PhysicsConfig;
use crate::contact::Contact;
use crate::error::{PhysicsError, Result};

#[derive(Debug, Clone)]
enum Body {
    Sphere(RigidSphere),
    Plane(RigidPlane),
}

/// Spheres and planes, checked pairwise for contacts
#[derive(Debug, Clone)]
pub struct CollisionWorld {
    config: PhysicsConfig,
    bodies: Vec<Body>,
}

impl CollisionWorld {
    /// Create an empty world
    pub fn new(config: PhysicsConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("Creating collision world: {:?}", config);
        Ok(Self {
            config,
            bodies: Vec::new(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    // ==================== Bodies ====================

    /// Add a sphere with the default density
    pub fn add_sphere(&mut self, sphere: &Sphere3<f64>) -> Result<BodyHandle> {
        self.add_sphere_with_density(sphere, self.config.default_density)
    }

    /// Add a sphere of uniform density
    pub fn add_sphere_with_density(&mut self, sphere: &Sphere3<f64>, density: f64) -> Result<BodyHandle> {
        let body = RigidSphere::new(sphere, density).map_err(|e| {
            log::warn!("Rejected sphere {:?}: {}", sphere, e);
            e
        })?;
        let handle = self.push(Body::Sphere(body))?;
        log::debug!("Added sphere {:?} at {:?}, radius {}", handle, sphere.center, sphere.radius);
        Ok(handle)
    }

    /// Add an immovable plane
    pub fn add_plane(&mut self, plane: &Plane3<f64>) -> Result<BodyHandle> {
        let body = RigidPlane::new(plane).map_err(|e| {
            log::warn!("Rejected plane {:?}: {}", plane, e);
            e
        })?;
        let handle = self.push(Body::Plane(body))?;
        log::debug!("Added plane {:?}: normal {:?}, constant {}", handle, plane.normal, plane.constant);
        Ok(handle)
    }

    fn push(&mut self, body: Body) -> Result<BodyHandle> {
        let index = u32::try_from(self.bodies.len())
            .map_err(|_| PhysicsError::InvalidConfig("too many bodies".to_string()))?;
        self.bodies.push(body);
        Ok(BodyHandle(index))
    }

    /// Move a sphere
    pub fn set_sphere_position(&mut self, handle: BodyHandle, position: Vector3<f64>) -> Result<()> {
        match self.bodies.get_mut(handle.0 as usize) {
            Some(Body::Sphere(sphere)) => {
                sphere.body_mut().set_position(position);
                Ok(())
            }
            _ => Err(PhysicsError::BodyNotFound(handle)),
        }
    }

    /// Get a sphere
    pub fn sphere(&self, handle: BodyHandle) -> Result<&RigidSphere> {
        match self.bodies.get(handle.0 as usize) {
            Some(Body::Sphere(sphere)) => Ok(sphere),
            _ => Err(PhysicsError::BodyNotFound(handle)),
        }
    }

    /// Get a sphere mutably
    pub fn sphere_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidSphere> {
        match self.bodies.get_mut(handle.0 as usize) {
            Some(Body::Sphere(sphere)) => Ok(sphere),
            _ => Err(PhysicsError::BodyNotFound(handle)),
        }
    }

    /// Get a plane
    pub fn plane(&self, handle: BodyHandle) -> Result<&RigidPlane> {
        match self.bodies.get(handle.0 as usize) {
            Some(Body::Plane(plane)) => Ok(plane),
            _ => Err(PhysicsError::BodyNotFound(handle)),
        }
    }

    /// Express a world point in a sphere's body frame, using the cached
    /// inverse of its pose
    pub fn world_to_local(&mut self, handle: BodyHandle, point: Vector3<f64>) -> Result<Vector3<f64>> {
        let sphere = self.sphere_mut(handle)?;
        Ok(sphere.body_mut().pose_mut().apply_inverse(point)?)
    }

    // ==================== Contacts ====================

    /// All sphere-sphere and sphere-plane contacts, in handle order
    pub fn detect_contacts(&self) -> Vec<Contact> {
        let mut contacts = Vec::new();
        for (i, first) in self.bodies.iter().enumerate() {
            for (j, second) in self.bodies.iter().enumerate().skip(i + 1) {
                let handles = [BodyHandle(i as u32), BodyHandle(j as u32)];
                let contact = match (first, second) {
                    (Body::Sphere(a), Body::Sphere(b)) => self.sphere_sphere(handles, a, b),
                    (Body::Sphere(sphere), Body::Plane(plane)) => self.sphere_plane(handles, sphere, plane),
                    (Body::Plane(plane), Body::Sphere(sphere)) => {
                        self.sphere_plane([handles[1], handles[0]], sphere, plane)
                    }
                    (Body::Plane(_), Body::Plane(_)) => None,
                };
                if let Some(contact) = contact {
                    log::trace!(
                        "Contact {:?}: point {:?}, normal {:?}, penetration {}",
                        contact.bodies,
                        contact.point,
                        contact.normal,
                        contact.penetration
                    );
                    contacts.push(contact);
                }
            }
        }
        log::debug!("Detected {} contacts among {} bodies", contacts.len(), self.bodies.len());
        contacts
    }

    /// Sphere inflated by the contact tolerance
    fn inflated(&self, sphere: &RigidSphere) -> Sphere3<f64> {
        let world = sphere.world_sphere();
        Sphere3::new(world.center, world.radius + self.config.contact_tolerance)
    }

    fn sphere_sphere(&self, bodies: [BodyHandle; 2], a: &RigidSphere, b: &RigidSphere) -> Option<Contact> {
        if !test_intersection(&self.inflated(a), &b.world_sphere()).intersect {
            return None;
        }

        let (sa, sb) = (a.world_sphere(), b.world_sphere());
        let offset = sb.center - sa.center;
        // Coincident centers, or an offset too small to measure in the
        // configured mode, have no preferred direction
        let mode = self.config.length_mode;
        let (normal, distance) = if offset.length_with(mode) > 0.0 {
            offset.normalize_and_length(mode)
        } else {
            (Vector3::unit(1), 0.0)
        };
        let penetration = sa.radius + sb.radius - distance;
        Some(Contact {
            bodies,
            point: sa.center + normal * (sa.radius - penetration * 0.5),
            normal,
            penetration,
        })
    }

    fn sphere_plane(&self, bodies: [BodyHandle; 2], sphere: &RigidSphere, plane: &RigidPlane) -> Option<Contact> {
        if !test_intersection(&self.inflated(sphere), plane.plane()).intersect {
            return None;
        }

        let world = sphere.world_sphere();
        let dcp = distance_closest_point(&world.center, plane.plane());
        let toward_plane = if dcp.signed_distance >= 0.0 {
            -plane.plane().normal
        } else {
            plane.plane().normal
        };
        let normal = toward_plane.normalize_with(self.config.length_mode);
        Some(Contact {
            bodies,
            point: dcp.dcp.closest[1],
            normal,
            penetration: world.radius - dcp.dcp.distance,
        })
    }
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self {
            config: PhysicsConfig::default(),
            bodies: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sphere(x: f64, y: f64, radius: f64) -> Sphere3<f64> {
        Sphere3::new(Vector3::new([x, y, 0.0]), radius)
    }

    #[test]
    fn test_handles_are_typed() {
        let mut world = CollisionWorld::default();
        let s = world.add_sphere(&sphere(0.0, 0.0, 1.0)).unwrap();
        let p = world.add_plane(&Plane3::new(Vector3::unit(1), 0.0)).unwrap();
        assert!(world.sphere(s).is_ok());
        assert!(world.plane(p).is_ok());
        assert!(matches!(world.sphere(p), Err(PhysicsError::BodyNotFound(h)) if h == p));
        assert!(world.plane(BodyHandle::from_raw(42)).is_err());
        assert!(world.set_sphere_position(p, Vector3::zero()).is_err());
    }

    #[test]
    fn test_sphere_sphere_contact() {
        let mut world = CollisionWorld::new(PhysicsConfig::exact()).unwrap();
        let a = world.add_sphere(&sphere(0.0, 0.0, 1.0)).unwrap();
        let b = world.add_sphere(&sphere(1.5, 0.0, 1.0)).unwrap();

        let contacts = world.detect_contacts();
        assert_eq!(contacts.len(), 1);
        let contact = contacts[0];
        assert_eq!(contact.bodies, [a, b]);
        assert_eq!(contact.normal, Vector3::unit(0));
        assert_relative_eq!(contact.penetration, 0.5, epsilon = 1e-12);
        assert_relative_eq!(contact.point[0], 0.75, epsilon = 1e-12);

        world.set_sphere_position(b, Vector3::new([3.0, 0.0, 0.0])).unwrap();
        assert!(world.detect_contacts().is_empty());
    }

    #[test]
    fn test_plane_before_sphere_keeps_sphere_first() {
        let mut world = CollisionWorld::new(PhysicsConfig::exact()).unwrap();
        let ground = world.add_plane(&Plane3::new(Vector3::unit(1), 0.0)).unwrap();
        let ball = world.add_sphere(&sphere(0.0, 0.5, 1.0)).unwrap();

        let contacts = world.detect_contacts();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].bodies, [ball, ground]);
        assert_eq!(contacts[0].normal, -Vector3::unit(1));
        assert_eq!(contacts[0].point, Vector3::zero());
        assert_relative_eq!(contacts[0].penetration, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_centers() {
        let mut world = CollisionWorld::new(PhysicsConfig::fast()).unwrap();
        world.add_sphere(&sphere(1.0, 1.0, 1.0)).unwrap();
        world.add_sphere(&sphere(1.0, 1.0, 0.5)).unwrap();
        let contacts = world.detect_contacts();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].normal, Vector3::unit(1));
        assert_eq!(contacts[0].penetration, 1.5);
    }

    #[test]
    fn test_nearly_coincident_centers() {
        for config in [PhysicsConfig::fast(), PhysicsConfig::exact()] {
            let mut world = CollisionWorld::new(config).unwrap();
            world.add_sphere(&sphere(0.0, 0.0, 1.0)).unwrap();
            world.add_sphere(&sphere(1.0e-200, 0.0, 1.0)).unwrap();
            let contacts = world.detect_contacts();
            assert_eq!(contacts.len(), 1);
            assert_relative_eq!(contacts[0].normal.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(contacts[0].penetration, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_world_to_local() {
        let mut world = CollisionWorld::default();
        let s = world.add_sphere(&sphere(2.0, 0.0, 1.0)).unwrap();
        let local = world.world_to_local(s, Vector3::new([3.0, 1.0, 0.0])).unwrap();
        assert_eq!(local, Vector3::new([1.0, 1.0, 0.0]));

        world.set_sphere_position(s, Vector3::new([0.0, 5.0, 0.0])).unwrap();
        assert!(!world.sphere(s).unwrap().body().pose().is_inverse_cached());
        let local = world.world_to_local(s, Vector3::new([3.0, 1.0, 0.0])).unwrap();
        assert_eq!(local, Vector3::new([3.0, -4.0, 0.0]));
        assert!(world.sphere(s).unwrap().body().pose().is_inverse_cached());
    }
}
