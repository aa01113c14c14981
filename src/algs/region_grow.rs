//! Seeded region growing: partition a vertex subset into maximal
//! connected components.
//!
//! Growth walks the seed-induced subgraph breadth-first, so a component
//! is exactly the set of seed vertices reachable from its origin through
//! faces of the mesh. Components larger than the minimum patch size are
//! accepted and labeled in discovery order; smaller ones stay unlabeled
//! forever.
//!
//! Determinism: seeds are visited in ascending vertex index, so component
//! labels are numbered by each component's minimum vertex index and the
//! largest-region tie-break always keeps the lowest label. Region
//! *membership* does not depend on this choice, only the numeric ids do.

use std::collections::VecDeque;

use crate::data::labels::{LabelArray, RegionId};
use crate::mesh_error::MeshSegmentError;
use crate::topology::adjacency::VertexAdjacency;
use crate::topology::mesh::TriMesh;

/// Result of one growing pass: the per-vertex labels and the id of the
/// largest accepted region (first encountered on ties), if any.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Labels for every mesh vertex; 0 for background, rejected, and
    /// non-seed vertices.
    pub labels: LabelArray,
    /// Largest accepted region, or `None` when no component passed the
    /// size threshold.
    pub largest: Option<RegionId>,
}

/// Partitions `seeds` into maximal connected components under the mesh
/// adjacency and labels each component larger than `min_patch_size`.
///
/// Labels are assigned contiguously from 1 in discovery order. Growth
/// terminates early once the remaining unvisited seed pool has size
/// `<= min_patch_size`, since such a pool cannot yield an accepted
/// component; those seeds stay at label 0.
///
/// Duplicate seeds are ignored. Fails with
/// [`MeshSegmentError::SeedOutOfBounds`] when a seed index is not a mesh
/// vertex. An empty seed set yields an all-zero labeling.
pub fn grow_regions(
    mesh: &TriMesh,
    seeds: impl IntoIterator<Item = usize>,
    min_patch_size: usize,
) -> Result<Segmentation, MeshSegmentError> {
    let n = mesh.n_vertices();
    let mut is_seed = vec![false; n];
    let mut n_seeds = 0usize;
    for v in seeds {
        if v >= n {
            return Err(MeshSegmentError::SeedOutOfBounds {
                vertex: v,
                n_vertices: n,
            });
        }
        if !is_seed[v] {
            is_seed[v] = true;
            n_seeds += 1;
        }
    }

    let mut labels = LabelArray::zeros(n);
    if n_seeds == 0 {
        return Ok(Segmentation {
            labels,
            largest: None,
        });
    }

    // Faces without a seed vertex cannot connect two seeds; drop them
    // before building the adjacency.
    let adjacency = VertexAdjacency::build_restricted(mesh, &is_seed);
    if log::log_enabled!(log::Level::Debug) {
        let retained = mesh
            .faces()
            .iter()
            .filter(|f| f.iter().any(|&v| is_seed[v]))
            .count();
        log::debug!(
            "growing {} seeds: reduced {} faces to {}",
            n_seeds,
            mesh.n_faces(),
            retained
        );
    }

    let mut visited = vec![false; n];
    let mut remaining = n_seeds;
    let mut next_label = 0u32;
    let mut largest = None;
    let mut largest_size = 0usize;
    let mut frontier = VecDeque::new();
    let mut component = Vec::new();

    for origin in 0..n {
        // A pool no larger than the threshold cannot be accepted.
        if remaining <= min_patch_size {
            break;
        }
        if !is_seed[origin] || visited[origin] {
            continue;
        }

        component.clear();
        visited[origin] = true;
        component.push(origin);
        frontier.push_back(origin);
        while let Some(v) = frontier.pop_front() {
            for &u in adjacency.neighbors(v) {
                if is_seed[u] && !visited[u] {
                    visited[u] = true;
                    component.push(u);
                    frontier.push_back(u);
                }
            }
        }
        remaining -= component.len();

        if component.len() > min_patch_size {
            next_label += 1;
            let id = RegionId::new(next_label)?;
            labels.assign(&component, id);
            log::trace!(
                "segmented patch {}: {} vertices, {} seeds remaining",
                id,
                component.len(),
                remaining
            );
            if component.len() > largest_size {
                largest_size = component.len();
                largest = Some(id);
            }
        }
    }

    Ok(Segmentation { labels, largest })
}
