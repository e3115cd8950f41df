//! Error types for the math library

use thiserror::Error;

/// Programmer errors detected by checked (`try_*`) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Two runtime-sized operands have different sizes
    #[error("Mismatched sizes: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Naive normalization of a vector whose length is exactly zero
    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    /// The matrix (or transform) has no inverse
    #[error("Matrix is singular")]
    SingularMatrix,

    /// Orthonormalization needs between 1 and N input vectors
    #[error("Invalid number of vectors: {count} (dimension {dimension})")]
    InvalidCount { count: usize, dimension: usize },
}

/// Result type for checked math operations
pub type Result<T> = core::result::Result<T, MathError>;
