use mesh_interop::algs::matching::{match_edges, match_points};
use mesh_interop::topology::patch::Patch;
use mesh_interop::topology::point::PointId;

use proptest::prelude::*;

fn pid(raw: u64) -> PointId {
    PointId::new(raw).expect("nonzero PointId")
}

fn pids(raw: &[u64]) -> Vec<PointId> {
    raw.iter().map(|&r| pid(r)).collect()
}

/// Two triangles over global points 1..=4, sharing the (2,3) edge.
fn two_triangles() -> Patch {
    Patch::from_global_faces(vec![pids(&[1, 2, 3]), pids(&[3, 2, 4])]).unwrap()
}

#[test]
fn matching_a_patch_against_itself_is_the_identity() {
    let patch = two_triangles();
    let (p1_points, p2_points) = match_points(&patch, &patch);
    let identity: Vec<usize> = (0..patch.n_points()).collect();
    assert_eq!(p1_points, identity);
    assert_eq!(p2_points, identity);

    let (p1_edges, p2_edges, orientation) = match_edges(&patch, &patch);
    let identity: Vec<usize> = (0..patch.n_edges()).collect();
    assert_eq!(p1_edges, identity);
    assert_eq!(p2_edges, identity);
    assert!(orientation.iter().all(|&same| same));
}

#[test]
fn matched_point_pairs_refer_to_the_same_global_id() {
    let p1 = two_triangles();
    // Same surface, faces traversed differently: independent local numbering.
    let p2 = Patch::from_global_faces(vec![pids(&[4, 2, 3]), pids(&[3, 2, 1])]).unwrap();

    let (p1_points, p2_points) = match_points(&p1, &p2);
    assert_eq!(p1_points.len(), p2_points.len());
    assert!(p1_points.len() <= p1.n_points().min(p2.n_points()));
    for (&a, &b) in p1_points.iter().zip(&p2_points) {
        assert_eq!(p1.mesh_points()[a], p2.mesh_points()[b]);
    }
    // All four globals are shared here.
    assert_eq!(p1_points.len(), 4);
    // Output preserves p1's local point order.
    assert!(p1_points.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn partially_overlapping_patches_match_only_shared_points() {
    let p1 = Patch::from_global_faces(vec![pids(&[1, 2, 3])]).unwrap();
    let p2 = Patch::from_global_faces(vec![pids(&[3, 2, 9])]).unwrap();
    let (p1_points, p2_points) = match_points(&p1, &p2);
    let globals: Vec<PointId> = p1_points.iter().map(|&a| p1.mesh_points()[a]).collect();
    assert_eq!(globals, pids(&[2, 3]));
    assert_eq!(p1_points.len(), 2);
    assert_eq!(p2_points.len(), 2);
}

#[test]
fn disjoint_patches_match_nothing() {
    let p1 = Patch::from_global_faces(vec![pids(&[1, 2, 3])]).unwrap();
    let p2 = Patch::from_global_faces(vec![pids(&[10, 20, 30])]).unwrap();

    let (p1_points, p2_points) = match_points(&p1, &p2);
    assert!(p1_points.is_empty());
    assert!(p2_points.is_empty());

    let (p1_edges, p2_edges, orientation) = match_edges(&p1, &p2);
    assert!(p1_edges.is_empty());
    assert!(p2_edges.is_empty());
    assert!(orientation.is_empty());
}

#[test]
fn reversed_edge_is_matched_with_opposite_orientation() {
    // patch1 edge runs 5→7; patch2 edge runs 7→5.
    let p1 = Patch::from_global_faces(vec![pids(&[5, 7, 9])]).unwrap();
    let p2 = Patch::from_global_faces(vec![pids(&[7, 5, 11])]).unwrap();

    let (p1_edges, p2_edges, orientation) = match_edges(&p1, &p2);
    assert_eq!(p1_edges, vec![0]);
    assert_eq!(p2_edges, vec![0]);
    assert_eq!(orientation, vec![false]);
}

#[test]
fn aligned_edge_is_matched_with_same_orientation() {
    let p1 = Patch::from_global_faces(vec![pids(&[5, 7, 9])]).unwrap();
    let p2 = Patch::from_global_faces(vec![pids(&[5, 7, 12])]).unwrap();

    let (p1_edges, p2_edges, orientation) = match_edges(&p1, &p2);
    assert_eq!(p1_edges, vec![0]);
    assert_eq!(p2_edges, vec![0]);
    assert_eq!(orientation, vec![true]);
}

#[test]
fn duplicate_global_edge_keeps_first_insertion() {
    // Local points 0..=3 fold onto globals 3,9,3,9: local edges (0,1) and
    // (2,3) both translate to the global pair (3,9). Edge (2,3) must never be
    // reported as a match target.
    let p1 = Patch::from_local_faces(
        vec![vec![0, 1, 4], vec![2, 3, 4]],
        pids(&[3, 9, 3, 9, 5]),
    )
    .unwrap();
    let duplicate_index = p1
        .edges()
        .iter()
        .position(|e| e.start == 2 && e.end == 3)
        .unwrap();

    let p2 = Patch::from_global_faces(vec![pids(&[3, 9, 6])]).unwrap();
    let (p1_edges, p2_edges, orientation) = match_edges(&p1, &p2);
    assert_eq!(p1_edges, vec![0]);
    assert_eq!(p2_edges, vec![0]);
    assert_eq!(orientation, vec![true]);
    assert!(!p1_edges.contains(&duplicate_index));
}

#[test]
fn duplicate_globals_resolve_points_to_first_local_index() {
    let p1 = Patch::from_local_faces(
        vec![vec![0, 1, 4], vec![2, 3, 4]],
        pids(&[3, 9, 3, 9, 5]),
    )
    .unwrap();
    let p2 = Patch::from_global_faces(vec![pids(&[3, 9, 6])]).unwrap();

    // Every p1 point probes once; globals 3 and 9 each resolve to p2's first
    // (and only) local point carrying them.
    let (p1_points, p2_points) = match_points(&p1, &p2);
    assert_eq!(p1_points, vec![0, 1, 2, 3]);
    assert_eq!(p2_points, vec![0, 1, 0, 1]);
}

proptest! {
    /// Two patches over the same global ring, traversed from different start
    /// points, must match every point regardless of local numbering.
    #[test]
    fn rotated_rings_match_completely(n in 3usize..12, rotation in 0usize..12) {
        let globals: Vec<u64> = (1..=n as u64).collect();
        let rotation = rotation % n;
        let mut rotated = globals.clone();
        rotated.rotate_left(rotation);

        let p1 = Patch::from_global_faces(vec![pids(&globals)]).unwrap();
        let p2 = Patch::from_global_faces(vec![pids(&rotated)]).unwrap();

        let (p1_points, p2_points) = match_points(&p1, &p2);
        prop_assert_eq!(p1_points.len(), n);
        for (&a, &b) in p1_points.iter().zip(&p2_points) {
            prop_assert_eq!(p1.mesh_points()[a], p2.mesh_points()[b]);
        }

        let (p1_edges, p2_edges, orientation) = match_edges(&p1, &p2);
        prop_assert_eq!(p1_edges.len(), n);
        prop_assert_eq!(p2_edges.len(), n);
        // A rotation preserves traversal direction, so every matched edge
        // agrees in orientation.
        prop_assert!(orientation.iter().all(|&same| same));
    }

    /// Reversing the ring flips the orientation of every matched edge.
    #[test]
    fn reversed_rings_disagree_on_every_edge(n in 3usize..12) {
        let globals: Vec<u64> = (1..=n as u64).collect();
        let reversed: Vec<u64> = globals.iter().rev().copied().collect();

        let p1 = Patch::from_global_faces(vec![pids(&globals)]).unwrap();
        let p2 = Patch::from_global_faces(vec![pids(&reversed)]).unwrap();

        let (_, _, orientation) = match_edges(&p1, &p2);
        prop_assert_eq!(orientation.len(), n);
        prop_assert!(orientation.iter().all(|&same| !same));
    }
}
