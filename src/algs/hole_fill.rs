//! Topological hole filling for a partial mesh labeling.
//!
//! A "hole" is a connected component of unlabeled vertices. The largest
//! such component is taken to be the true exterior (the background) and
//! is never relabeled; every other hole adopts a label from the regions
//! it touches, which leaves each labeled region simply connected.
//!
//! Fill policy: a hole takes the maximum label found among the full-mesh
//! neighbors of *all* of its vertices, so the result does not depend on
//! the order in which hole vertices or holes are scanned. Holes touching
//! no labeled region stay unlabeled.

use hashbrown::HashMap;

use crate::algs::region_grow::grow_regions;
use crate::data::labels::{LabelArray, RegionId};
use crate::mesh_error::MeshSegmentError;
use crate::topology::adjacency::VertexAdjacency;
use crate::topology::mesh::TriMesh;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Fills labeling holes and returns the updated label array.
///
/// The array is taken by value and handed back; the return value is the
/// authoritative result. Fails with
/// [`MeshSegmentError::LabelLengthMismatch`] when `labels` does not cover
/// every mesh vertex. With no unlabeled vertices, or no labeled region to
/// borrow from, the input comes back unchanged.
pub fn fill_holes(mesh: &TriMesh, labels: LabelArray) -> Result<LabelArray, MeshSegmentError> {
    let n = mesh.n_vertices();
    if labels.len() != n {
        return Err(MeshSegmentError::LabelLengthMismatch {
            expected: n,
            found: labels.len(),
        });
    }

    // Every unlabeled vertex is a hole candidate; no size filtering, so
    // even single-vertex holes are discovered.
    let candidates = labels
        .as_slice()
        .iter()
        .enumerate()
        .filter_map(|(v, &l)| (l == 0).then_some(v));
    let holes = grow_regions(mesh, candidates, 0)?;
    let Some(background) = holes.largest else {
        return Ok(labels);
    };

    // Group hole vertices by component, leaving the background out.
    let mut hole_verts: HashMap<u32, Vec<usize>> = HashMap::new();
    for (v, &h) in holes.labels.as_slice().iter().enumerate() {
        if h != 0 && h != background.get() {
            hole_verts.entry(h).or_default().push(v);
        }
    }
    log::debug!(
        "filling {} holes; background component {} ({} vertices) kept",
        hole_verts.len(),
        background,
        holes.labels.stratum_size(background)
    );

    if hole_verts.is_empty() {
        return Ok(labels);
    }

    let adjacency = VertexAdjacency::build(mesh);
    let mut labels = labels;
    for verts in hole_verts.into_values() {
        // Distinct holes are never adjacent, so neighbor labels read here
        // are always from the original labeling.
        #[cfg(feature = "rayon")]
        let adopted = verts
            .par_iter()
            .flat_map_iter(|&v| adjacency.neighbors(v).iter().map(|&u| labels.get(u)))
            .max()
            .unwrap_or(0);
        #[cfg(not(feature = "rayon"))]
        let adopted = verts
            .iter()
            .flat_map(|&v| adjacency.neighbors(v).iter().map(|&u| labels.get(u)))
            .max()
            .unwrap_or(0);

        if adopted > 0 {
            labels.assign(&verts, RegionId::new(adopted)?);
        }
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_rejected() {
        let mesh = TriMesh::new(vec![[0, 1, 2]], 3).unwrap();
        let err = fill_holes(&mesh, LabelArray::zeros(4)).unwrap_err();
        assert_eq!(
            err,
            MeshSegmentError::LabelLengthMismatch {
                expected: 3,
                found: 4,
            }
        );
    }

    #[test]
    fn fully_labeled_mesh_is_unchanged() {
        let mesh = TriMesh::new(vec![[0, 1, 2]], 3).unwrap();
        let labels = LabelArray::from_vec(vec![1, 1, 1]);
        let filled = fill_holes(&mesh, labels.clone()).unwrap();
        assert_eq!(filled, labels);
    }

    #[test]
    fn all_zero_labels_stay_zero() {
        let mesh = TriMesh::new(vec![[0, 1, 2], [1, 2, 3]], 4).unwrap();
        let filled = fill_holes(&mesh, LabelArray::zeros(4)).unwrap();
        assert_eq!(filled.as_slice(), &[0; 4]);
    }
}
