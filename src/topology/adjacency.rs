//! CSR vertex-to-vertex adjacency derived from a face list.
//!
//! Two vertices are adjacent when they co-occur in at least one face.
//! The adjacency is built in a single pass over the face list and queried
//! as a slice lookup, so region growing pays the construction cost once
//! per pass instead of scanning all faces at every vertex visit.
//!
//! Determinism: neighbor lists are always sorted ascending, deduplicated,
//! and self-free.

use crate::topology::mesh::TriMesh;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// CSR-style vertex adjacency for a triangular mesh.
///
/// Every vertex of the mesh owns a row, including vertices that appear in
/// no retained face; their neighbor slice is simply empty.
#[derive(Debug, Clone)]
pub struct VertexAdjacency {
    /// CSR offsets into `adjncy`, one entry per vertex plus a sentinel.
    xadj: Vec<usize>,
    /// Concatenated neighbor lists.
    adjncy: Vec<usize>,
}

impl VertexAdjacency {
    /// Builds the adjacency over the full face list.
    pub fn build(mesh: &TriMesh) -> Self {
        Self::from_faces(mesh.n_vertices(), mesh.faces().iter())
    }

    /// Builds the adjacency restricted to faces that contain at least one
    /// active vertex.
    ///
    /// `active` must have one flag per mesh vertex. Dropping untouched
    /// faces bounds the construction cost when growing a small seed set on
    /// a large mesh; connectivity *within* the active set is unaffected.
    pub fn build_restricted(mesh: &TriMesh, active: &[bool]) -> Self {
        Self::from_faces(
            mesh.n_vertices(),
            mesh.faces()
                .iter()
                .filter(|f| f.iter().any(|&v| active[v])),
        )
    }

    fn from_faces<'a>(
        n_vertices: usize,
        faces: impl Iterator<Item = &'a [usize; 3]>,
    ) -> Self {
        let mut neigh: Vec<Vec<usize>> = vec![Vec::new(); n_vertices];
        for &[a, b, c] in faces {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                // Degenerate faces may repeat a vertex; no self-loops.
                if u != v {
                    neigh[u].push(v);
                    neigh[v].push(u);
                }
            }
        }

        #[cfg(feature = "rayon")]
        neigh.par_iter_mut().for_each(|list| {
            list.sort_unstable();
            list.dedup();
        });
        #[cfg(not(feature = "rayon"))]
        for list in &mut neigh {
            list.sort_unstable();
            list.dedup();
        }

        let mut xadj = Vec::with_capacity(n_vertices + 1);
        let mut adjncy = Vec::with_capacity(neigh.iter().map(Vec::len).sum());
        xadj.push(0);
        for list in &neigh {
            adjncy.extend(list.iter().copied());
            xadj.push(adjncy.len());
        }

        Self { xadj, adjncy }
    }

    /// Distinct vertices sharing a face with `v`, sorted ascending.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjncy[self.xadj[v]..self.xadj[v + 1]]
    }

    /// Number of neighbors of `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.xadj[v + 1] - self.xadj[v]
    }

    /// Number of vertex rows (equals the mesh vertex count).
    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.xadj.len() - 1
    }
}
