//! Centralized configuration values shared across the kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

/// Default number of angular segments used by cylinders and cones.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert_eq!(DEFAULT_SEGMENTS, 24);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 24;

/// Smallest segment count that still encloses a volume for a closed sweep.
///
/// # Examples
/// ```
/// use config::constants::{MIN_CLOSED_SEGMENTS, DEFAULT_SEGMENTS};
/// assert!(DEFAULT_SEGMENTS >= MIN_CLOSED_SEGMENTS);
/// ```
pub const MIN_CLOSED_SEGMENTS: u32 = 3;

/// Sweep angle, in degrees, of a full revolution.
///
/// Sweeps at or above this value are generated closed, without flat end faces.
///
/// # Examples
/// ```
/// use config::constants::FULL_ROTATION_DEGREES;
/// assert_eq!(FULL_ROTATION_DEGREES, 360.0);
/// ```
pub const FULL_ROTATION_DEGREES: f64 = 360.0;

/// Weight recorded for an edge when the caller does not pick one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_BEVEL_WEIGHT;
/// assert!(DEFAULT_BEVEL_WEIGHT > 0.0);
/// ```
pub const DEFAULT_BEVEL_WEIGHT: f64 = 1.0;

/// Minimum number of samples along a bezier curve (both endpoints).
///
/// # Examples
/// ```
/// use config::constants::MIN_BEZIER_POINTS;
/// assert_eq!(MIN_BEZIER_POINTS, 2);
/// ```
pub const MIN_BEZIER_POINTS: usize = 2;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.default_segments, 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Default segment count for swept primitives.
    pub default_segments: u32,
    /// Default sweep angle in degrees for swept primitives.
    pub default_rotation: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// segment count and sweep angle.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(48, 180.0).expect("valid config");
    /// assert_eq!(cfg.default_segments, 48);
    /// ```
    pub fn new(default_segments: u32, default_rotation: f64) -> Result<Self, ConfigError> {
        if default_segments < MIN_CLOSED_SEGMENTS {
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        if !(default_rotation > 0.0 && default_rotation <= FULL_ROTATION_DEGREES) {
            return Err(ConfigError::InvalidRotation(default_rotation));
        }
        Ok(Self {
            default_segments,
            default_rotation,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_segments: DEFAULT_SEGMENTS,
            default_rotation: FULL_ROTATION_DEGREES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Raised when the requested segment count is too small to form a polygon.
    #[error("default_segments must be >= {MIN_CLOSED_SEGMENTS}: {0}")]
    InvalidSegments(u32),
    /// Raised when the sweep angle is not in (0, 360].
    #[error("default_rotation must be in (0, {FULL_ROTATION_DEGREES}]: {0}")]
    InvalidRotation(f64),
}
