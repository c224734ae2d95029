//! # Config Crate
//!
//! Centralized configuration constants for the procedural CAD kernel.
//! Default tessellation parameters, sweep angles and bevel weights are
//! defined here so generators and callers agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, FULL_ROTATION_DEGREES};
//!
//! let fn_override = 0;
//! let segments = if fn_override > 0 { fn_override } else { DEFAULT_SEGMENTS };
//! assert_eq!(segments, 24);
//!
//! // Sweeps of a full turn or more are closed.
//! let rotation: f64 = 400.0;
//! assert!(rotation >= FULL_ROTATION_DEGREES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig` refuses values no generator can use

pub mod constants;
