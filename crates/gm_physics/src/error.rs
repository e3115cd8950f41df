//! Error types for the collision world

use gm_math::MathError;
use thiserror::Error;

use crate::body::BodyHandle;

/// Collision world errors
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// No body of the requested kind under this handle
    #[error("Body not found: {0:?}")]
    BodyNotFound(BodyHandle),

    /// Invalid configuration
    #[error("Invalid physics configuration: {0}")]
    InvalidConfig(String),

    /// Shape rejected on insertion
    #[error("Invalid collision shape: {0}")]
    InvalidShape(String),

    /// Pose could not be inverted
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
