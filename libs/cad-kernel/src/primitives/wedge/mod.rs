//! Triangular prisms extruded along Z.

use tracing::{debug, warn};

use super::positive;
use crate::error::{KernelError, KernelResult};
use crate::{Mesh, Point2D};

/// Creates a prism with the triangle `p0 p1 p2` as its end caps at `z = 0`
/// and `z = length`.
///
/// The points may be given in either rotational order.
///
/// # Examples
/// ```
/// use cad_kernel::primitives::wedge;
/// use cad_kernel::Point2D;
///
/// let w = wedge(
///     Point2D::new(0.0, 0.0),
///     Point2D::new(2.0, 0.0),
///     Point2D::new(0.0, 1.0),
///     5.0,
/// )
/// .unwrap();
/// assert_eq!(w.point_count(), 6);
/// assert_eq!(w.face_count(), 5);
/// ```
pub fn wedge(p0: Point2D, p1: Point2D, p2: Point2D, length: f64) -> KernelResult<Mesh> {
    let length = positive("wedge length", length)?;
    let area = (p1 - p0).cross(p2 - p0) * 0.5;
    if !(area.abs() > 0.0) {
        warn!(%p0, %p1, %p2, "rejected collinear wedge profile");
        return Err(KernelError::invalid_parameter(
            "wedge profile points must not be collinear",
        ));
    }
    let profile = if area > 0.0 { [p0, p1, p2] } else { [p0, p2, p1] };

    let mut mesh = Mesh::new();
    let near = profile.map(|p| mesh.add_xyz(p.x, p.y, 0.0));
    let far = profile.map(|p| mesh.add_xyz(p.x, p.y, length));

    mesh.add_tri(near[0], near[2], near[1])?;
    mesh.add_tri(far[0], far[1], far[2])?;
    for i in 0..3 {
        let j = (i + 1) % 3;
        mesh.add_quad(near[i], near[j], far[j], far[i])?;
    }

    debug!(area = area.abs(), length, faces = mesh.face_count(), "built wedge");
    Ok(mesh)
}
