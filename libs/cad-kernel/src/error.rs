//! # Error Types
//!
//! Error types for kernel operations. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - Degenerate input (zero-length vectors, collinear plane points, vertical
//!   lines) fails the call instead of producing `NaN`
//! - Parallel lines and planes are not errors: intersection methods return
//!   `None` for them
//! - Misusing a `MeshPoint` handle with the wrong mesh is an error

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during kernel operations.
///
/// ## Example
///
/// ```rust
/// use cad_kernel::{KernelError, Point};
///
/// match Point::ZERO.unit() {
///     Ok(v) => println!("unit vector {v}"),
///     Err(KernelError::ZeroLengthVector) => eprintln!("cannot normalize origin"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A zero-length vector was normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    /// The three points defining a plane lie on one line.
    #[error("cannot compute the normal of a degenerate plane")]
    DegeneratePlane,

    /// A vertical 2D line was asked for its slope and intercept.
    #[error("line is vertical, and cannot be written as a linear equation")]
    VerticalLine,

    /// A vertical plane was asked for its Z coordinate at an X/Y position.
    #[error("cannot find Z intersect on a vertical plane at ({x}, {y})")]
    VerticalPlane {
        /// X position of the probe line
        x: f64,
        /// Y position of the probe line
        y: f64,
    },

    /// A derived quantity is undefined for the given geometry.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What could not be computed
        message: String,
    },

    /// A point was copied into the mesh that already owns it.
    #[error("no need for duplicate points in the same mesh")]
    RedundantPoint,

    /// A point handle was used with a mesh that does not own it.
    #[error("mesh point belongs to a different mesh")]
    ForeignPoint,

    /// A mesh violates the dense-index face invariant.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// What is inconsistent
        message: String,
    },

    /// A generator received parameters that cannot produce geometry.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the rejected parameter
        message: String,
    },
}

impl KernelError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for kernel operations.
///
/// ## Example
///
/// ```rust
/// use cad_kernel::error::KernelResult;
/// use cad_kernel::Mesh;
///
/// fn create_mesh() -> KernelResult<Mesh> {
///     // ... mesh creation logic
///     # Ok(Mesh::new())
/// }
/// ```
pub type KernelResult<T> = Result<T, KernelError>;

// =============================================================================
// TESTS
// =============================================================================
