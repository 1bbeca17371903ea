//! Patch correspondence matching.
//!
//! Free algorithms pairing up the points and edges of two patches that share
//! a global numbering. Results are parallel arrays of local indices, plus a
//! relative-orientation flag per matched edge. Both algorithms are linear in
//! the combined entity counts and report nothing when the patches share no
//! entities.

use core::hash::{Hash, Hasher};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::topology::patch::{Edge, Patch};
use crate::topology::point::PointId;

/// Unordered pair of global endpoints.
///
/// Equality and hashing ignore endpoint order; the stored order is retained
/// as the key's canonical orientation, which the orientation flags of
/// [`match_edges`] compare against.
#[derive(Copy, Clone, Debug)]
struct EdgeKey {
    first: PointId,
    second: PointId,
}

impl EdgeKey {
    fn new(first: PointId, second: PointId) -> Self {
        Self { first, second }
    }

    fn normalized(self) -> (PointId, PointId) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for EdgeKey {}

impl Hash for EdgeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

/// Translate a patch edge's endpoints into global numbering, keeping the
/// edge's stored orientation.
fn global_key(patch: &Patch, edge: Edge) -> EdgeKey {
    let points = patch.mesh_points();
    EdgeKey::new(points[edge.start], points[edge.end])
}

/// Find the points shared by two patches.
///
/// Returns parallel arrays of local point indices, one entry per shared
/// point, in `p1`'s local order. Each `p1` point contributes at most one
/// pair, found via a single probe of `p2`'s reverse map. Both arrays are
/// empty when the patches share no points.
pub fn match_points(p1: &Patch, p2: &Patch) -> (Vec<usize>, Vec<usize>) {
    let mut p1_points = Vec::with_capacity(p1.n_points());
    let mut p2_points = Vec::with_capacity(p1.n_points());

    for (local1, &global) in p1.mesh_points().iter().enumerate() {
        if let Some(local2) = p2.local_point(global) {
            p1_points.push(local1);
            p2_points.push(local2);
        }
    }
    (p1_points, p2_points)
}

/// Find the edges shared by two patches, with relative orientation.
///
/// Returns parallel arrays of local edge indices in `p2`'s local order, plus
/// one flag per match: true iff the matched edges list their shared global
/// endpoints in the same order. When two distinct `p1` edges translate to the
/// same global endpoint pair, the first one indexed wins and later ones are
/// never reported.
pub fn match_edges(p1: &Patch, p2: &Patch) -> (Vec<usize>, Vec<usize>, Vec<bool>) {
    let mut edge_to_index: HashMap<EdgeKey, usize> = HashMap::with_capacity(2 * p1.n_edges());
    for (index1, &edge) in p1.edges().iter().enumerate() {
        let key = global_key(p1, edge);
        match edge_to_index.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(index1);
            }
            Entry::Occupied(entry) => {
                log::debug!(
                    "patch1 edges {} and {} share global endpoints ({}, {}); keeping {}",
                    entry.get(),
                    index1,
                    key.first,
                    key.second,
                    entry.get()
                );
            }
        }
    }

    let mut p1_edges = Vec::with_capacity(p2.n_edges());
    let mut p2_edges = Vec::with_capacity(p2.n_edges());
    let mut same_orientation = Vec::with_capacity(p2.n_edges());

    for (index2, &edge) in p2.edges().iter().enumerate() {
        let probe = global_key(p2, edge);
        if let Some((stored, &index1)) = edge_to_index.get_key_value(&probe) {
            p1_edges.push(index1);
            p2_edges.push(index2);
            same_orientation.push(probe.first == stored.first);
        }
    }
    (p1_edges, p2_edges, same_orientation)
}
