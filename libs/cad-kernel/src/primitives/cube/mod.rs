//! Axis-aligned boxes.

use tracing::{debug, warn};

use super::positive;
use crate::error::{KernelError, KernelResult};
use crate::Mesh;

/// Creates a box of size `x` by `y` by `z` centered on the origin.
///
/// # Examples
/// ```
/// use cad_kernel::primitives::cube;
///
/// let c = cube(2.0, 2.0, 2.0).unwrap();
/// assert_eq!(c.point_count(), 8);
/// let (min, max) = c.bounding_box().unwrap();
/// assert_eq!((min.x, max.z), (-1.0, 1.0));
/// ```
pub fn cube(x: f64, y: f64, z: f64) -> KernelResult<Mesh> {
    let hx = positive("cube x size", x)? * 0.5;
    let hy = positive("cube y size", y)? * 0.5;
    let hz = positive("cube z size", z)? * 0.5;
    let mesh = build_box((-hx, hx), (-hy, hy), (-hz, hz))?;
    debug!(x, y, z, faces = mesh.face_count(), "built cube");
    Ok(mesh)
}

/// Creates a box spanning `(min, max)` along each axis.
///
/// # Examples
/// ```
/// use cad_kernel::primitives::range_cube;
///
/// let c = range_cube((0.0, 4.0), (-1.0, 1.0), (2.0, 3.0)).unwrap();
/// let (min, max) = c.bounding_box().unwrap();
/// assert_eq!((min.x, min.y, min.z), (0.0, -1.0, 2.0));
/// assert_eq!((max.x, max.y, max.z), (4.0, 1.0, 3.0));
/// ```
pub fn range_cube(
    x_range: (f64, f64),
    y_range: (f64, f64),
    z_range: (f64, f64),
) -> KernelResult<Mesh> {
    for (axis, (min, max)) in [("x", x_range), ("y", y_range), ("z", z_range)] {
        if !(max > min) {
            warn!(axis, min, max, "rejected empty box range");
            return Err(KernelError::invalid_parameter(format!(
                "{axis} range must have max > min, got ({min}, {max})"
            )));
        }
    }
    let mesh = build_box(x_range, y_range, z_range)?;
    debug!(?x_range, ?y_range, ?z_range, faces = mesh.face_count(), "built range cube");
    Ok(mesh)
}

fn build_box(
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
    (z0, z1): (f64, f64),
) -> KernelResult<Mesh> {
    let mut mesh = Mesh::new();
    // b = bottom (z0), t = top (z1); corners named looking down the -Z axis
    // with +Y at the top
    let b_tl = mesh.add_xyz(x0, y1, z0);
    let b_tr = mesh.add_xyz(x1, y1, z0);
    let b_br = mesh.add_xyz(x1, y0, z0);
    let b_bl = mesh.add_xyz(x0, y0, z0);

    let t_tl = mesh.add_xyz(x0, y1, z1);
    let t_tr = mesh.add_xyz(x1, y1, z1);
    let t_br = mesh.add_xyz(x1, y0, z1);
    let t_bl = mesh.add_xyz(x0, y0, z1);

    mesh.add_quad(b_tr, b_br, b_bl, b_tl)?;
    mesh.add_quad(t_bl, t_br, t_tr, t_tl)?;
    mesh.add_quad(b_br, b_tr, t_tr, t_br)?;
    mesh.add_quad(b_bl, b_br, t_br, t_bl)?;
    mesh.add_quad(b_tl, b_bl, t_bl, t_tl)?;
    mesh.add_quad(b_tr, b_tl, t_tl, t_tr)?;
    Ok(mesh)
}

#[cfg(test)]
mod tests;
