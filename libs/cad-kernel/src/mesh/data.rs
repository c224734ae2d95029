//! Plain mesh data handed to the host for realization.

use serde::{Deserialize, Serialize};

use super::Face;

/// Ordered point coordinates and face index tuples of a [`super::Mesh`].
///
/// # Example
///
/// ```rust
/// use cad_kernel::primitives::cube;
///
/// let data = cube(2.0, 2.0, 2.0).unwrap().to_data();
/// assert_eq!(data.points.len(), 8);
/// assert_eq!(data.faces.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Point coordinates, position `i` holding the point with index `i`.
    pub points: Vec<[f64; 3]>,
    /// Faces as index tuples into `points`.
    pub faces: Vec<Face>,
}

impl MeshData {
    /// Faces split into triangles, for hosts that only accept triangles.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        self.faces.iter().flat_map(|face| face.triangles()).collect()
    }
}
