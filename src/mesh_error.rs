//! MeshSegmentError: Unified error type for mesh-segment public APIs
//!
//! This error type is used throughout the mesh-segment library to provide
//! robust, non-panicking error handling for all public APIs.

use thiserror::Error;

/// Unified error type for mesh-segment operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshSegmentError {
    /// A face references a vertex index outside `[0, n_vertices)`.
    #[error("face {face} references vertex {vertex}, but the mesh has only {n_vertices} vertices")]
    FaceVertexOutOfBounds {
        /// Index of the offending face in the face list.
        face: usize,
        /// The out-of-range vertex index.
        vertex: usize,
        /// Number of vertices declared for the mesh.
        n_vertices: usize,
    },
    /// A seed vertex lies outside `[0, n_vertices)`.
    #[error("seed vertex {vertex} is out of range for a mesh with {n_vertices} vertices")]
    SeedOutOfBounds {
        /// The out-of-range seed vertex index.
        vertex: usize,
        /// Number of vertices declared for the mesh.
        n_vertices: usize,
    },
    /// A label array does not match the mesh vertex count.
    #[error("label array has length {found}, expected {expected}")]
    LabelLengthMismatch {
        /// Expected length (mesh vertex count).
        expected: usize,
        /// Actual length of the supplied array.
        found: usize,
    },
    /// A depth array does not match the mesh vertex count.
    #[error("depth array has length {found}, expected {expected}")]
    DepthLengthMismatch {
        /// Expected length (mesh vertex count).
        expected: usize,
        /// Actual length of the supplied array.
        found: usize,
    },
    /// Attempted to construct a RegionId with the reserved value 0.
    #[error("RegionId must be non-zero (0 is reserved for unlabeled/background vertices)")]
    InvalidRegionId,
}
