//! Geometric kernel for procedural solid modeling.
//!
//! Parts are described as plain geometry: [`Point`]s moved by [`Transform`]s,
//! [`Plane`] and [`Line2D`] helpers for laying out walls, and indexed
//! [`Mesh`]es built by hand or by the [`primitives`]. The host application
//! takes a finished mesh through [`Mesh::to_data`] and does the boolean
//! combination, beveling and export itself. [`Beveler`] records which edges
//! the host should bevel.
//!
//! ```rust
//! use cad_kernel::{primitives::cube, Transform};
//!
//! let mut mesh = cube(10.0, 10.0, 2.0).unwrap();
//! mesh.transform(&Transform::new().translate(0.0, 0.0, 1.0));
//!
//! let (min, _) = mesh.bounding_box().unwrap();
//! assert_eq!(min.z, 0.0);
//! ```

pub mod bevel;
pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod primitives;
pub mod transform;

pub use bevel::{Beveler, RealizedEdge};
pub use core::{Point, Point2D};
pub use error::{KernelError, KernelResult};
pub use geometry::{Line2D, Plane};
pub use mesh::{Face, Mesh, MeshData, MeshPoint};
pub use primitives::{bezier, cone, cube, cylinder, range_cube, wedge, Height, Sweep};
pub use transform::Transform;
