//! `TriMesh`: a validated triangular surface mesh.
//!
//! A mesh here is nothing more than an ordered face list over an implicit
//! vertex array of explicit size. The vertex count is supplied by the
//! caller rather than inferred from the faces, because a vertex may appear
//! in no face at all and must still own a slot in per-vertex arrays.

use crate::mesh_error::MeshSegmentError;

/// One triangle as three vertex indices into the implicit vertex array.
pub type Face = [usize; 3];

/// An immutable triangular mesh: an ordered face list plus the total
/// vertex count.
///
/// Construction validates that every face index lies in
/// `[0, n_vertices)`; downstream algorithms rely on that invariant and
/// index per-vertex arrays without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriMesh {
    faces: Vec<Face>,
    n_vertices: usize,
}

impl TriMesh {
    /// Builds a mesh from a face list and an explicit vertex count.
    ///
    /// Fails fast with [`MeshSegmentError::FaceVertexOutOfBounds`] on the
    /// first face index outside `[0, n_vertices)`.
    pub fn new(faces: Vec<Face>, n_vertices: usize) -> Result<Self, MeshSegmentError> {
        for (face, verts) in faces.iter().enumerate() {
            for &vertex in verts {
                if vertex >= n_vertices {
                    return Err(MeshSegmentError::FaceVertexOutOfBounds {
                        face,
                        vertex,
                        n_vertices,
                    });
                }
            }
        }
        Ok(Self { faces, n_vertices })
    }

    /// The face list, in construction order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Total number of vertices, including vertices that appear in no face.
    #[inline]
    pub const fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    /// Number of faces.
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_mesh_constructs() {
        let mesh = TriMesh::new(vec![[0, 1, 2], [1, 2, 3]], 4).unwrap();
        assert_eq!(mesh.n_vertices(), 4);
        assert_eq!(mesh.n_faces(), 2);
        assert_eq!(mesh.faces()[1], [1, 2, 3]);
    }

    #[test]
    fn out_of_range_face_is_rejected() {
        let err = TriMesh::new(vec![[0, 1, 2], [1, 4, 3]], 4).unwrap_err();
        assert_eq!(
            err,
            MeshSegmentError::FaceVertexOutOfBounds {
                face: 1,
                vertex: 4,
                n_vertices: 4,
            }
        );
    }

    #[test]
    fn empty_mesh_is_fine() {
        let mesh = TriMesh::new(Vec::new(), 0).unwrap();
        assert_eq!(mesh.n_vertices(), 0);
        assert_eq!(mesh.n_faces(), 0);
    }

    #[test]
    fn faceless_vertices_are_allowed() {
        // 10 vertices, only 3 of them used by faces.
        let mesh = TriMesh::new(vec![[0, 1, 2]], 10).unwrap();
        assert_eq!(mesh.n_vertices(), 10);
    }
}
