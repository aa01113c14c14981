//! Shared mesh builders for integration tests.
#![allow(dead_code)]

use mesh_segment::topology::mesh::TriMesh;

/// Triangulated `w x h` vertex grid: two triangles per cell.
///
/// Cell at `(x, y)` with `v = y * w + x` contributes faces
/// `[v, v+1, v+w]` and `[v+1, v+w+1, v+w]`.
pub fn grid_mesh(w: usize, h: usize) -> TriMesh {
    let mut faces = Vec::with_capacity(2 * (w - 1) * (h - 1));
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let v = y * w + x;
            faces.push([v, v + 1, v + w]);
            faces.push([v + 1, v + w + 1, v + w]);
        }
    }
    TriMesh::new(faces, w * h).unwrap()
}

/// Ring band over 8 vertices: faces `(i, i+1, i+2)` mod 8.
pub fn ring_mesh() -> TriMesh {
    let faces = (0..8).map(|i| [i, (i + 1) % 8, (i + 2) % 8]).collect();
    TriMesh::new(faces, 8).unwrap()
}
