//! # Indexed Mesh Builder
//!
//! A [`Mesh`] owns an arena of points and a list of triangle/quad faces.
//!
//! Points go through two states:
//!
//! ```text
//! add_point / add_xyz        use_in_face (add_tri, add_quad, add_fan)
//!   ──────────► unindexed ─────────────────────────────► indexed
//!               (moved by transforms)                    (next dense index)
//! ```
//!
//! Only indexed points are handed to the host, in the order they were first
//! used by a face. Every point, indexed or not, follows mesh-wide transforms so
//! that a point referenced later still lines up with the rest.
//!
//! [`MeshPoint`] handles are tied to the mesh that created them. Passing one to
//! another mesh is rejected with [`KernelError::ForeignPoint`].
//!
//! Each mesh takes its id from a process-wide atomic counter. The counter is
//! the crate's only global state; ids are never reused or read back, so meshes
//! built on different threads do not interact.

mod data;
mod face;

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

use crate::core::Point;
use crate::error::{KernelError, KernelResult};
use crate::transform::Transform;

pub use data::MeshData;
pub use face::Face;

static NEXT_MESH_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeshId(u64);

impl MeshId {
    fn next() -> Self {
        MeshId(NEXT_MESH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a point owned by one [`Mesh`].
///
/// Handles are cheap to copy. The point's coordinates and index are read
/// through the owning mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshPoint {
    mesh: MeshId,
    slot: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PointSlot {
    point: Point,
    index: Option<u32>,
}

/// An indexed mesh of triangles and quads.
///
/// Every mesh, including a clone, draws a fresh id from a process-wide
/// counter; handles carry that id.
///
/// # Example
///
/// ```rust
/// use cad_kernel::Mesh;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_xyz(0.0, 0.0, 0.0);
/// let b = mesh.add_xyz(1.0, 0.0, 0.0);
/// let c = mesh.add_xyz(0.0, 1.0, 0.0);
/// let unused = mesh.add_xyz(5.0, 5.0, 5.0);
/// assert_eq!(mesh.add_tri(a, b, c).unwrap(), 0);
///
/// assert_eq!(mesh.point_count(), 3);
/// assert_eq!(mesh.index_of(unused).unwrap(), None);
/// ```
#[derive(Debug)]
pub struct Mesh {
    id: MeshId,
    /// Every point created on this mesh, in creation order.
    all_points: Vec<PointSlot>,
    /// Arena slots of indexed points, in index order.
    points: Vec<u32>,
    faces: Vec<Face>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone is a separate mesh: handles of the source mesh do not resolve on it.
impl Clone for Mesh {
    fn clone(&self) -> Self {
        Self {
            id: MeshId::next(),
            all_points: self.all_points.clone(),
            points: self.points.clone(),
            faces: self.faces.clone(),
        }
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            id: MeshId::next(),
            all_points: Vec::new(),
            points: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Adds a new unindexed point.
    pub fn add_point(&mut self, point: impl Into<Point>) -> MeshPoint {
        let slot = self.all_points.len() as u32;
        self.all_points.push(PointSlot {
            point: point.into(),
            index: None,
        });
        MeshPoint {
            mesh: self.id,
            slot,
        }
    }

    /// Adds a new unindexed point from its coordinates.
    pub fn add_xyz(&mut self, x: f64, y: f64, z: f64) -> MeshPoint {
        self.add_point(Point::new(x, y, z))
    }

    /// Adds a new point at the coordinates of `handle`, a point of `source`.
    ///
    /// # Errors
    /// - [`KernelError::RedundantPoint`] if `handle` already belongs to this mesh
    /// - [`KernelError::ForeignPoint`] if `handle` does not belong to `source`
    pub fn add_mesh_point(&mut self, source: &Mesh, handle: MeshPoint) -> KernelResult<MeshPoint> {
        if handle.mesh == self.id {
            warn!(slot = handle.slot, "point copied into the mesh that owns it");
            return Err(KernelError::RedundantPoint);
        }
        let point = source.point(handle)?;
        Ok(self.add_point(point))
    }

    fn slot(&self, handle: MeshPoint) -> KernelResult<usize> {
        let slot = handle.slot as usize;
        if handle.mesh != self.id || slot >= self.all_points.len() {
            warn!(slot = handle.slot, "mesh point used with a mesh that does not own it");
            return Err(KernelError::ForeignPoint);
        }
        Ok(slot)
    }

    /// Current coordinates of a point.
    pub fn point(&self, handle: MeshPoint) -> KernelResult<Point> {
        let slot = self.slot(handle)?;
        Ok(self.all_points[slot].point)
    }

    /// Index of a point, or `None` while no face uses it. Never assigns one.
    pub fn index_of(&self, handle: MeshPoint) -> KernelResult<Option<u32>> {
        let slot = self.slot(handle)?;
        Ok(self.all_points[slot].index)
    }

    /// Indexes a point for use in a face and returns its index.
    ///
    /// The first call appends the point to the indexed point list; later calls
    /// return the same index.
    pub fn use_in_face(&mut self, handle: MeshPoint) -> KernelResult<u32> {
        let slot = self.slot(handle)?;
        if let Some(index) = self.all_points[slot].index {
            return Ok(index);
        }
        let index = self.points.len() as u32;
        self.all_points[slot].index = Some(index);
        self.points.push(slot as u32);
        Ok(index)
    }

    /// Adds a triangle and returns its position in the face list.
    ///
    /// The winding order is kept as given.
    pub fn add_tri(&mut self, p0: MeshPoint, p1: MeshPoint, p2: MeshPoint) -> KernelResult<usize> {
        self.check_owned(&[p0, p1, p2])?;
        let face = Face::Tri([
            self.use_in_face(p0)?,
            self.use_in_face(p1)?,
            self.use_in_face(p2)?,
        ]);
        Ok(self.push_face(face))
    }

    /// Adds a quad and returns its position in the face list.
    ///
    /// The winding order is kept as given.
    pub fn add_quad(
        &mut self,
        p0: MeshPoint,
        p1: MeshPoint,
        p2: MeshPoint,
        p3: MeshPoint,
    ) -> KernelResult<usize> {
        self.check_owned(&[p0, p1, p2, p3])?;
        let face = Face::Quad([
            self.use_in_face(p0)?,
            self.use_in_face(p1)?,
            self.use_in_face(p2)?,
            self.use_in_face(p3)?,
        ]);
        Ok(self.push_face(face))
    }

    // Rejects the whole face before any of its points get indexed.
    fn check_owned(&self, handles: &[MeshPoint]) -> KernelResult<()> {
        for &handle in handles {
            self.slot(handle)?;
        }
        Ok(())
    }

    fn push_face(&mut self, face: Face) -> usize {
        let position = self.faces.len();
        self.faces.push(face);
        position
    }

    /// Adds triangles fanned out from `center` to each consecutive pair of
    /// `points`. Fewer than two points add nothing.
    pub fn add_fan(
        &mut self,
        center: MeshPoint,
        points: impl IntoIterator<Item = MeshPoint>,
    ) -> KernelResult<()> {
        let mut prev: Option<MeshPoint> = None;
        for p in points {
            if let Some(prev) = prev {
                self.add_tri(center, prev, p)?;
            }
            prev = Some(p);
        }
        Ok(())
    }

    /// Applies `tf` to every point of the mesh, indexed or not.
    pub fn transform(&mut self, tf: &Transform) {
        apply_to_slots(&mut self.all_points, tf);
    }

    /// Rotates the mesh; angles in degrees.
    pub fn rotate(&mut self, x: f64, y: f64, z: f64) {
        self.transform(&Transform::new().rotate(x, y, z));
    }

    /// Rotates the mesh; angles in degrees.
    pub fn rotate_degrees(&mut self, x: f64, y: f64, z: f64) {
        self.transform(&Transform::new().rotate_degrees(x, y, z));
    }

    /// Rotates the mesh; angles in radians.
    pub fn rotate_radians(&mut self, x: f64, y: f64, z: f64) {
        self.transform(&Transform::new().rotate_radians(x, y, z));
    }

    /// Translates the mesh.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.transform(&Transform::new().translate(x, y, z));
    }

    /// Mirrors the mesh across the YZ plane.
    ///
    /// Face windings are reversed so outward faces stay outward.
    pub fn mirror_x(&mut self) {
        self.transform(&Transform::new().mirror_x());
        self.reverse_winding();
    }

    /// Mirrors the mesh across the XZ plane, reversing face windings.
    pub fn mirror_y(&mut self) {
        self.transform(&Transform::new().mirror_y());
        self.reverse_winding();
    }

    /// Mirrors the mesh across the XY plane, reversing face windings.
    pub fn mirror_z(&mut self) {
        self.transform(&Transform::new().mirror_z());
        self.reverse_winding();
    }

    /// Reverses the vertex order of every face.
    pub fn reverse_winding(&mut self) {
        for face in &mut self.faces {
            *face = face.reversed();
        }
    }

    /// Coordinates of the indexed points, in index order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points
            .iter()
            .map(move |&slot| self.all_points[slot as usize].point)
    }

    /// Coordinates of every point ever added, in creation order.
    pub fn all_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.all_points.iter().map(|slot| slot.point)
    }

    /// The faces, in insertion order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of indexed points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Unique edges as `[low, high]` index pairs, in order of first
    /// appearance while walking the faces.
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for face in &self.faces {
            for (a, b) in face.edges() {
                let key = if a < b { [a, b] } else { [b, a] };
                if seen.insert(key) {
                    edges.push(key);
                }
            }
        }
        edges
    }

    /// All faces split into triangles, keeping their winding.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        self.faces.iter().flat_map(|face| face.triangles()).collect()
    }

    /// Axis-aligned bounds of the indexed points as `(min, max)`, or `None`
    /// for a mesh without faces.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let mut points = self.points();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Point::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        });
        Some((min, max))
    }

    /// Checks that every face index refers to an indexed point and that the
    /// indexed point list is dense.
    pub fn validate(&self) -> KernelResult<()> {
        for (position, &slot) in self.points.iter().enumerate() {
            if self.all_points[slot as usize].index != Some(position as u32) {
                return Err(KernelError::InvalidTopology {
                    message: format!("indexed point {position} is out of order"),
                });
            }
        }

        let count = self.points.len() as u32;
        for (position, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.indices().iter().find(|&&i| i >= count) {
                return Err(KernelError::InvalidTopology {
                    message: format!("face {position} references missing point {bad}"),
                });
            }
        }
        Ok(())
    }

    /// Points and faces in the form the host realizes into an object.
    pub fn to_data(&self) -> MeshData {
        MeshData {
            points: self.points().map(<[f64; 3]>::from).collect(),
            faces: self.faces.clone(),
        }
    }
}

#[cfg(feature = "parallel")]
fn apply_to_slots(slots: &mut [PointSlot], tf: &Transform) {
    use rayon::prelude::*;
    slots
        .par_iter_mut()
        .for_each(|slot| slot.point = tf.apply(slot.point));
}

#[cfg(not(feature = "parallel"))]
fn apply_to_slots(slots: &mut [PointSlot], tf: &Transform) {
    for slot in slots {
        slot.point = tf.apply(slot.point);
    }
}
