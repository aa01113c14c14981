//! Sulcus extraction: threshold a per-vertex depth field, grow regions,
//! and fill their holes.
//!
//! This is the thin orchestration layer over [`grow_regions`] and
//! [`fill_holes`]: vertices deeper than the threshold become seeds, and
//! hole filling runs only when at least one region met the size cutoff.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::algs::hole_fill::fill_holes;
use crate::algs::region_grow::grow_regions;
use crate::data::labels::LabelArray;
use crate::mesh_error::MeshSegmentError;
use crate::topology::mesh::TriMesh;

/// Configuration for sulcus extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SulcusConfig {
    /// Vertices with depth strictly above this value become seeds.
    pub depth_threshold: f64,
    /// Minimum vertex count for a region to be kept.
    pub min_sulcus_size: usize,
}

impl Default for SulcusConfig {
    fn default() -> Self {
        Self {
            depth_threshold: 0.2,
            min_sulcus_size: 50,
        }
    }
}

/// Result of [`extract_sulci`].
#[derive(Debug, Clone)]
pub struct SulcusExtraction {
    /// Hole-filled region labels, one per mesh vertex.
    pub labels: LabelArray,
    /// Number of extracted regions (the maximum label value; labels are
    /// contiguous from 1).
    pub n_sulci: u32,
}

/// Extracts labeled sulcus regions from a depth field over the mesh.
///
/// Fails with [`MeshSegmentError::DepthLengthMismatch`] when `depths`
/// does not cover every mesh vertex. A depth field with no vertex above
/// the threshold yields an all-zero labeling and `n_sulci == 0`.
pub fn extract_sulci(
    mesh: &TriMesh,
    depths: &[f64],
    config: &SulcusConfig,
) -> Result<SulcusExtraction, MeshSegmentError> {
    let n = mesh.n_vertices();
    if depths.len() != n {
        return Err(MeshSegmentError::DepthLengthMismatch {
            expected: n,
            found: depths.len(),
        });
    }

    let seeds = depths
        .iter()
        .positions(|&d| d > config.depth_threshold);
    let grown = grow_regions(mesh, seeds, config.min_sulcus_size)?;
    let n_sulci = grown.labels.region_count();
    log::debug!(
        "extracted {} sulci above depth {}",
        n_sulci,
        config.depth_threshold
    );

    // Filling only copies existing labels, so the count is settled here.
    let labels = if grown.largest.is_some() {
        fill_holes(mesh, grown.labels)?
    } else {
        grown.labels
    };

    Ok(SulcusExtraction { labels, n_sulci })
}
