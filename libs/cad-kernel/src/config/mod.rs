//! Kernel-level configuration building on the shared `config` crate.
//!
//! Generators read their defaults from here instead of repeating literals.

use config::constants::{
    ConfigError, GlobalConfig, DEFAULT_BEVEL_WEIGHT, DEFAULT_SEGMENTS, FULL_ROTATION_DEGREES,
};
use thiserror::Error;

use crate::primitives::Sweep;

/// Kernel configuration wrapper.
///
/// # Examples
/// ```
/// use cad_kernel::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert_eq!(cfg.default_segments, 24);
/// assert_eq!(cfg.sweep().rotation, 360.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Segment count for cylinders and cones when the caller does not pick one.
    pub default_segments: u32,
    /// Sweep angle in degrees for cylinders and cones.
    pub default_rotation: f64,
    /// Weight for edges marked without an explicit weight.
    pub bevel_weight: f64,
}

impl KernelConfig {
    /// Creates a configuration from explicit sweep defaults.
    ///
    /// # Examples
    /// ```
    /// use cad_kernel::config::KernelConfig;
    /// let cfg = KernelConfig::new(48, 180.0).unwrap();
    /// assert_eq!(cfg.sweep().segments, 48);
    /// assert!(KernelConfig::new(2, 360.0).is_err());
    /// ```
    pub fn new(default_segments: u32, default_rotation: f64) -> Result<Self, KernelConfigError> {
        let global = GlobalConfig::new(default_segments, default_rotation)?;
        Ok(Self::from(global))
    }

    /// The sweep cylinders and cones use by default.
    pub fn sweep(&self) -> Sweep {
        Sweep {
            segments: self.default_segments,
            rotation: self.default_rotation,
        }
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(global: GlobalConfig) -> Self {
        Self {
            default_segments: global.default_segments,
            default_rotation: global.default_rotation,
            bevel_weight: DEFAULT_BEVEL_WEIGHT,
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            default_segments: DEFAULT_SEGMENTS,
            default_rotation: FULL_ROTATION_DEGREES,
            bevel_weight: DEFAULT_BEVEL_WEIGHT,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, Error, PartialEq)]
#[error(transparent)]
pub struct KernelConfigError(#[from] pub ConfigError);
