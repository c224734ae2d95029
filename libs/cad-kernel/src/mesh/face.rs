//! Mesh faces as ordered vertex index tuples.

use serde::{Deserialize, Serialize};

/// A triangle or quad, listed in winding order.
///
/// Indices refer to positions in the owning mesh's indexed point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Face {
    /// Three vertex indices.
    Tri([u32; 3]),
    /// Four vertex indices.
    Quad([u32; 4]),
}

impl Face {
    /// The vertex indices in winding order.
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Tri(idx) => idx.as_slice(),
            Face::Quad(idx) => idx.as_slice(),
        }
    }

    /// Number of vertices (3 or 4).
    pub fn len(&self) -> usize {
        self.indices().len()
    }

    /// Always false; faces have at least three vertices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The same face with its winding reversed.
    pub fn reversed(&self) -> Face {
        match *self {
            Face::Tri([a, b, c]) => Face::Tri([c, b, a]),
            Face::Quad([a, b, c, d]) => Face::Quad([d, c, b, a]),
        }
    }

    /// Boundary edges as `(from, to)` pairs, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let idx = self.indices();
        (0..idx.len()).map(move |i| (idx[i], idx[(i + 1) % idx.len()]))
    }

    /// Fans the face into triangles. Quads are split along their `0-2`
    /// diagonal.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        match *self {
            Face::Tri(tri) => vec![tri],
            Face::Quad([a, b, c, d]) => vec![[a, b, c], [a, c, d]],
        }
    }
}
