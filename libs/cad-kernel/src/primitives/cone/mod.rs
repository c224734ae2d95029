//! Cones swept around the Z axis.

use tracing::debug;

use super::{positive, Height, Sweep};
use crate::error::KernelResult;
use crate::{Mesh, MeshPoint};

/// Creates a cone with base radius `r` at the bottom and its apex on the Z
/// axis at the top.
///
/// Sweeps follow the same closed/open policy as
/// [`cylinder`](super::cylinder::cylinder).
///
/// # Examples
/// ```
/// use cad_kernel::primitives::{cone, Sweep};
///
/// let c = cone(1.0, 2.0, Sweep::full(6)).unwrap();
/// assert_eq!(c.point_count(), 8);
/// assert_eq!(c.face_count(), 12);
/// ```
pub fn cone(r: f64, height: impl Into<Height>, sweep: Sweep) -> KernelResult<Mesh> {
    let r = positive("cone radius", r)?;
    let (bottom_z, top_z) = height.into().validated_bounds()?;
    let rim = sweep.rim()?;

    let mut mesh = Mesh::new();
    let apex = mesh.add_xyz(0.0, 0.0, top_z);
    let bottom_center = mesh.add_xyz(0.0, 0.0, bottom_z);
    let bottom: Vec<MeshPoint> = rim
        .iter()
        .map(|&(sin, cos)| mesh.add_xyz(sin * r, cos * r, bottom_z))
        .collect();

    for idx in 1..bottom.len() {
        let (prev, cur) = (bottom[idx - 1], bottom[idx]);
        mesh.add_tri(prev, cur, bottom_center)?;
        mesh.add_tri(apex, cur, prev)?;
    }

    let (first, last) = (bottom[0], bottom[bottom.len() - 1]);
    if sweep.is_closed() {
        mesh.add_tri(last, first, bottom_center)?;
        mesh.add_tri(apex, first, last)?;
    } else {
        mesh.add_tri(apex, first, bottom_center)?;
        mesh.add_tri(bottom_center, last, apex)?;
    }

    debug!(
        r,
        bottom_z,
        top_z,
        segments = sweep.segments,
        rotation = sweep.rotation,
        points = mesh.point_count(),
        faces = mesh.face_count(),
        "built cone"
    );
    Ok(mesh)
}
