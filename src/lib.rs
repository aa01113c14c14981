//! # mesh-segment
//!
//! mesh-segment partitions the vertices of a triangular surface mesh into
//! labeled contiguous regions from a per-vertex scalar predicate, then
//! closes topological holes in the labeling so each region is simply
//! connected under the mesh connectivity graph. It was built for
//! extracting deep folded regions (sulci) of a cortical surface mesh from
//! per-vertex depth, but the growing and filling core is domain-agnostic.
//!
//! ## Features
//! - Validated face-list meshes with an explicit vertex count
//! - CSR vertex adjacency built once per pass, full or restricted to an
//!   active vertex set
//! - Deterministic seeded region growing with a minimum patch size
//! - Hole filling by neighbor-label adoption, excluding the background
//! - Optional `rayon` feature for the data-parallel pieces
//!
//! ## Determinism
//!
//! Seeds are visited in ascending vertex index, so region labels are
//! reproducible across runs; hole filling is scan-order independent by
//! construction. There is no randomness anywhere in the crate.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mesh-segment = "0.2.1"
//! # Optional features:
//! # features = ["rayon"]
//! ```
//!
//! ```rust
//! use mesh_segment::prelude::*;
//!
//! // A strip of two triangles over four vertices.
//! let mesh = TriMesh::new(vec![[0, 1, 2], [1, 2, 3]], 4)?;
//! let depths = [0.9, 0.9, 0.9, 0.1];
//! let config = SulcusConfig {
//!     depth_threshold: 0.2,
//!     min_sulcus_size: 1,
//! };
//! let out = extract_sulci(&mesh, &depths, &config)?;
//! assert_eq!(out.n_sulci, 1);
//! # Ok::<(), mesh_segment::mesh_error::MeshSegmentError>(())
//! ```

// Re-export our major subsystems:
pub mod algs;
pub mod data;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::hole_fill::fill_holes;
    pub use crate::algs::region_grow::{Segmentation, grow_regions};
    pub use crate::algs::sulci::{SulcusConfig, SulcusExtraction, extract_sulci};
    pub use crate::data::labels::{LabelArray, RegionId};
    pub use crate::mesh_error::MeshSegmentError;
    pub use crate::topology::adjacency::VertexAdjacency;
    pub use crate::topology::mesh::{Face, TriMesh};
}
