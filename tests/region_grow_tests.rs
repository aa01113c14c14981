mod support;

use std::collections::VecDeque;

use mesh_segment::algs::region_grow::grow_regions;
use mesh_segment::data::labels::RegionId;
use mesh_segment::topology::adjacency::VertexAdjacency;
use mesh_segment::topology::mesh::TriMesh;

use support::{grid_mesh, ring_mesh};

fn id(raw: u32) -> RegionId {
    RegionId::new(raw).unwrap()
}

#[test]
fn contiguous_arc_on_ring_is_one_region() {
    // Seeds form one contiguous arc of 6 of the 8 ring vertices.
    let mesh = ring_mesh();
    let seg = grow_regions(&mesh, 0..6, 3).unwrap();
    assert_eq!(seg.labels.as_slice(), &[1, 1, 1, 1, 1, 1, 0, 0]);
    assert_eq!(seg.labels.region_count(), 1);
    assert_eq!(seg.largest, Some(id(1)));
}

#[test]
fn small_cluster_below_threshold_is_dropped() {
    // A 10-vertex strip cluster and a disjoint 3-vertex triangle cluster
    // on a 20-vertex mesh; only the strip survives min_patch_size = 5.
    let mut faces: Vec<[usize; 3]> = (0..8).map(|i| [i, i + 1, i + 2]).collect();
    faces.push([12, 13, 14]);
    let mesh = TriMesh::new(faces, 20).unwrap();

    let seeds = (0..10).chain([12, 13, 14]);
    let seg = grow_regions(&mesh, seeds, 5).unwrap();

    let expected_one: Vec<usize> = (0..10).collect();
    assert_eq!(seg.labels.stratum_points(id(1)), expected_one);
    for v in [12, 13, 14] {
        assert_eq!(seg.labels.get(v), 0);
    }
    assert_eq!(seg.labels.region_count(), 1);
    assert_eq!(seg.largest, Some(id(1)));
}

#[test]
fn partition_covers_the_seed_set_exactly() {
    // With no size filtering, every seed lands in exactly one region and
    // nothing else is labeled.
    let mesh = grid_mesh(6, 5);
    let seeds: Vec<usize> = (0..mesh.n_vertices()).filter(|v| v % 3 != 1).collect();
    let seg = grow_regions(&mesh, seeds.iter().copied(), 0).unwrap();

    for v in 0..mesh.n_vertices() {
        if seeds.contains(&v) {
            assert!(seg.labels.get(v) > 0, "seed {} lost", v);
        } else {
            assert_eq!(seg.labels.get(v), 0, "non-seed {} labeled", v);
        }
    }
}

#[test]
fn labels_are_contiguous_from_one() {
    let mesh = grid_mesh(4, 4);
    // Three disjoint seed clusters: two corners and one interior vertex.
    let seg = grow_regions(&mesh, [0, 1, 15, 10], 0).unwrap();
    let count = seg.labels.region_count();
    assert!(count >= 2);
    for raw in 1..=count {
        assert!(
            seg.labels.stratum_size(id(raw)) > 0,
            "label {} skipped",
            raw
        );
    }
}

#[test]
fn grown_regions_are_connected() {
    let mesh = grid_mesh(7, 7);
    let seeds: Vec<usize> = (0..mesh.n_vertices()).filter(|v| v % 4 != 0).collect();
    let seg = grow_regions(&mesh, seeds, 2).unwrap();
    let adjacency = VertexAdjacency::build(&mesh);

    for raw in 1..=seg.labels.region_count() {
        let members = seg.labels.stratum_points(id(raw));
        assert!(members.len() > 2);

        // BFS within the stratum must reach every member.
        let mut seen = vec![false; mesh.n_vertices()];
        let mut queue = VecDeque::from([members[0]]);
        seen[members[0]] = true;
        let mut reached = 1;
        while let Some(v) = queue.pop_front() {
            for &u in adjacency.neighbors(v) {
                if seg.labels.get(u) == raw && !seen[u] {
                    seen[u] = true;
                    reached += 1;
                    queue.push_back(u);
                }
            }
        }
        assert_eq!(reached, members.len(), "label {} disconnected", raw);
    }
}

#[test]
fn labeling_is_deterministic() {
    let mesh = grid_mesh(5, 5);
    let seeds: Vec<usize> = (0..25).filter(|v| v % 2 == 0).collect();
    let a = grow_regions(&mesh, seeds.iter().copied(), 1).unwrap();
    let b = grow_regions(&mesh, seeds.iter().rev().copied(), 1).unwrap();
    // Seed order does not matter: components are numbered by their
    // minimum vertex index either way.
    assert_eq!(a.labels, b.labels);
    assert_eq!(a.largest, b.largest);
}

#[test]
fn largest_tie_keeps_first_label() {
    // Two disjoint triangles of equal size.
    let mesh = TriMesh::new(vec![[0, 1, 2], [3, 4, 5]], 6).unwrap();
    let seg = grow_regions(&mesh, 0..6, 0).unwrap();
    assert_eq!(seg.largest, Some(id(1)));
}
