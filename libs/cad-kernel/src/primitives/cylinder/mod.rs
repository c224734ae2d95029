//! Cylinders and frustums swept around the Z axis.

use tracing::debug;

use super::{positive, Height, Sweep};
use crate::error::KernelResult;
use crate::{Mesh, MeshPoint};

/// Creates a cylinder with top radius `r` and bottom radius `r2` (defaulting
/// to `r`).
///
/// # Arguments
/// * `r` - Radius of the top rim.
/// * `height` - A centered height or an explicit `(bottom_z, top_z)` span.
/// * `r2` - Radius of the bottom rim; `None` for a straight cylinder.
/// * `sweep` - Segment count and swept angle. Open sweeps are closed off with
///   two flat quads through the axis.
///
/// # Examples
/// ```
/// use cad_kernel::primitives::{cylinder, Sweep};
///
/// let c = cylinder(1.0, 2.0, None, Sweep::full(4)).unwrap();
/// assert_eq!(c.point_count(), 10);
/// assert_eq!(c.face_count(), 12);
///
/// let half = cylinder(1.0, (0.0, 5.0), Some(2.0), Sweep::new(6, 180.0)).unwrap();
/// assert_eq!(half.point_count(), 16);
/// ```
pub fn cylinder(
    r: f64,
    height: impl Into<Height>,
    r2: Option<f64>,
    sweep: Sweep,
) -> KernelResult<Mesh> {
    let r = positive("cylinder radius", r)?;
    let r2 = positive("cylinder bottom radius", r2.unwrap_or(r))?;
    let (bottom_z, top_z) = height.into().validated_bounds()?;
    let rim = sweep.rim()?;

    let mut mesh = Mesh::new();
    let top_center = mesh.add_xyz(0.0, 0.0, top_z);
    let bottom_center = mesh.add_xyz(0.0, 0.0, bottom_z);
    let (top, bottom): (Vec<MeshPoint>, Vec<MeshPoint>) = rim
        .iter()
        .map(|&(sin, cos)| {
            (
                mesh.add_xyz(sin * r, cos * r, top_z),
                mesh.add_xyz(sin * r2, cos * r2, bottom_z),
            )
        })
        .unzip();

    let centers = [top_center, bottom_center];
    for idx in 1..top.len() {
        let (prev, cur) = (idx - 1, idx);
        add_segment(&mut mesh, centers, [top[prev], top[cur]], [bottom[prev], bottom[cur]])?;
    }

    let (first, last) = (0, top.len() - 1);
    if sweep.is_closed() {
        add_segment(&mut mesh, centers, [top[last], top[first]], [bottom[last], bottom[first]])?;
    } else {
        mesh.add_quad(top[first], bottom[first], bottom_center, top_center)?;
        mesh.add_quad(bottom_center, bottom[last], top[last], top_center)?;
    }

    debug!(
        r,
        r2,
        bottom_z,
        top_z,
        segments = sweep.segments,
        rotation = sweep.rotation,
        points = mesh.point_count(),
        faces = mesh.face_count(),
        "built cylinder"
    );
    Ok(mesh)
}

// One wedge of the cylinder: top cap triangle, bottom cap triangle, side quad.
fn add_segment(
    mesh: &mut Mesh,
    [top_center, bottom_center]: [MeshPoint; 2],
    [prev_t, cur_t]: [MeshPoint; 2],
    [prev_b, cur_b]: [MeshPoint; 2],
) -> KernelResult<()> {
    mesh.add_tri(cur_t, prev_t, top_center)?;
    mesh.add_tri(prev_b, cur_b, bottom_center)?;
    mesh.add_quad(cur_t, cur_b, prev_b, prev_t)?;
    Ok(())
}

#[cfg(test)]
mod tests;
