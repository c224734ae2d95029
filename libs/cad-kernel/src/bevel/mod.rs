//! # Edge Bevel Weights
//!
//! Edges are marked while a [`Mesh`] is still being built, using its point
//! handles. Once the host has realized the mesh, [`Beveler::get_bevel_weights`]
//! maps the marks onto the host's edge list by vertex index.
//!
//! Marking an edge indexes both of its endpoints. Marking an edge between
//! points no face uses therefore adds them to the mesh's point list.

use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::config::KernelConfig;
use crate::error::KernelResult;
use crate::mesh::{Mesh, MeshPoint};

/// An edge of a realized mesh, identified by its two vertex indices.
pub trait RealizedEdge {
    /// The edge's endpoint indices, in any order.
    fn vertices(&self) -> [u32; 2];
}

impl RealizedEdge for [u32; 2] {
    fn vertices(&self) -> [u32; 2] {
        *self
    }
}

impl RealizedEdge for (u32, u32) {
    fn vertices(&self) -> [u32; 2] {
        [self.0, self.1]
    }
}

fn edge_key(i0: u32, i1: u32) -> (u32, u32) {
    if i0 < i1 {
        (i0, i1)
    } else {
        (i1, i0)
    }
}

/// Bevel weights keyed by unordered vertex index pairs.
///
/// # Example
///
/// ```rust
/// use cad_kernel::{primitives::cube, Beveler};
///
/// let mesh = cube(2.0, 2.0, 2.0).unwrap();
/// let mut beveler = Beveler::new();
/// beveler.bevel_indices(1, 0, 0.5);
///
/// let weights = beveler.get_bevel_weights(&mesh.edges());
/// assert_eq!(weights.values().copied().collect::<Vec<_>>(), vec![0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Beveler {
    edges: HashMap<(u32, u32), f64>,
    default_weight: f64,
}

impl Default for Beveler {
    fn default() -> Self {
        Self::new()
    }
}

impl Beveler {
    /// Creates an empty beveler using the default weight from
    /// [`KernelConfig::default`].
    pub fn new() -> Self {
        Self::with_config(&KernelConfig::default())
    }

    /// Creates an empty beveler whose [`mark_edge`](Self::mark_edge) uses the
    /// configured bevel weight.
    pub fn with_config(config: &KernelConfig) -> Self {
        Self {
            edges: HashMap::new(),
            default_weight: config.bevel_weight,
        }
    }

    /// Sets the bevel weight of the edge between `p0` and `p1`, indexing both
    /// points in `mesh`.
    ///
    /// # Errors
    /// [`KernelError::ForeignPoint`](crate::KernelError::ForeignPoint) if
    /// `mesh` does not own both points.
    pub fn bevel_edge(
        &mut self,
        mesh: &mut Mesh,
        p0: MeshPoint,
        p1: MeshPoint,
        weight: f64,
    ) -> KernelResult<()> {
        // check both before indexing either
        mesh.point(p0)?;
        mesh.point(p1)?;
        let i0 = mesh.use_in_face(p0)?;
        let i1 = mesh.use_in_face(p1)?;
        self.bevel_indices(i0, i1, weight);
        Ok(())
    }

    /// Marks the edge between `p0` and `p1` with the default weight.
    pub fn mark_edge(&mut self, mesh: &mut Mesh, p0: MeshPoint, p1: MeshPoint) -> KernelResult<()> {
        self.bevel_edge(mesh, p0, p1, self.default_weight)
    }

    /// Sets the bevel weight of the edge between two vertex indices.
    ///
    /// A later call for the same edge replaces the weight.
    pub fn bevel_indices(&mut self, i0: u32, i1: u32, weight: f64) {
        let key = edge_key(i0, i1);
        trace!(?key, weight, "bevel weight");
        self.edges.insert(key, weight);
    }

    /// The stored weight of an edge, in either endpoint order.
    pub fn weight(&self, i0: u32, i1: u32) -> Option<f64> {
        self.edges.get(&edge_key(i0, i1)).copied()
    }

    /// Number of marked edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge is marked.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Maps realized edges to their weights.
    ///
    /// The result is keyed by position in `edges`. Edges without a stored
    /// weight, or with a weight `<= 0`, are left out.
    pub fn get_bevel_weights<E: RealizedEdge>(&self, edges: &[E]) -> BTreeMap<usize, f64> {
        edges
            .iter()
            .enumerate()
            .filter_map(|(position, edge)| {
                let [v0, v1] = edge.vertices();
                let weight = self.weight(v0, v1)?;
                (weight > 0.0).then_some((position, weight))
            })
            .collect()
    }
}
