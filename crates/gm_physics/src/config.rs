//! Collision world configuration

use gm_math::LengthMode;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// Collision world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Shapes closer than this are reported in contact (negative penetration)
    pub contact_tolerance: f64,

    /// Length computation for contact normals
    pub length_mode: LengthMode,

    /// Mass density used by `add_sphere`
    pub default_density: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            contact_tolerance: 1.0e-6,
            length_mode: LengthMode::Robust,
            default_density: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// Only overlapping shapes are in contact
    pub fn exact() -> Self {
        Self {
            contact_tolerance: 0.0,
            ..Default::default()
        }
    }

    /// Naive normals and a looser contact band
    pub fn fast() -> Self {
        Self {
            contact_tolerance: 1.0e-3,
            length_mode: LengthMode::Naive,
            ..Default::default()
        }
    }

    /// Set contact tolerance
    pub fn with_contact_tolerance(mut self, tolerance: f64) -> Self {
        self.contact_tolerance = tolerance;
        self
    }

    /// Set length mode
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Set default density
    pub fn with_default_density(mut self, density: f64) -> Self {
        self.default_density = density;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.contact_tolerance >= 0.0 && self.contact_tolerance.is_finite()) {
            return Err(PhysicsError::InvalidConfig(format!(
                "contact_tolerance must be finite and non-negative, got {}",
                self.contact_tolerance
            )));
        }
        if !(self.default_density > 0.0 && self.default_density.is_finite()) {
            return Err(PhysicsError::InvalidConfig(format!(
                "default_density must be finite and positive, got {}",
                self.default_density
            )));
        }
        Ok(())
    }
}
