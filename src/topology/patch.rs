//! Boundary patches: faces over locally numbered points plus the shared
//! global numbering.
//!
//! A `Patch` stores its faces in *local* point indices together with the
//! local→global `mesh_points` map. The reverse (global→local) lookup and the
//! deduplicated edge list are derived lazily and cached; a patch is immutable
//! after construction, so the caches never go stale.

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use once_cell::sync::OnceCell;

use crate::interop_error::MeshInteropError;
use crate::topology::point::PointId;

/// An edge of a patch: a pair of local point indices in stored orientation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    /// Local index of the first endpoint.
    pub start: usize,
    /// Local index of the second endpoint.
    pub end: usize,
}

impl Edge {
    /// Creates an edge from two local point indices.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The same edge with opposite orientation.
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// True if `other` connects the same two points, in either orientation.
    pub fn same_vertices(self, other: Edge) -> bool {
        self == other || self == other.reversed()
    }
}

/// A face set over locally numbered points with a shared global numbering.
///
/// Two patches being matched are assumed to share the same global numbering
/// scheme but arbitrary, independent local numbering.
#[derive(Debug, Clone)]
pub struct Patch {
    /// Faces as rings of local point indices.
    faces: Vec<Vec<usize>>,
    /// Local→global point map.
    mesh_points: Vec<PointId>,
    /// Lazily built global→local reverse map.
    mesh_point_map: OnceCell<HashMap<PointId, usize>>,
    /// Lazily derived deduplicated edge list.
    edges: OnceCell<Vec<Edge>>,
}

impl Patch {
    /// Build a patch from faces in local numbering plus the local→global map.
    ///
    /// Duplicate global ids in `mesh_points` are accepted; the reverse lookup
    /// then resolves to the first local point registered for that id.
    ///
    /// # Errors
    /// Returns `FacePointOutOfRange` if a face references a local index not
    /// covered by `mesh_points`, or `DegenerateFace` for faces with fewer
    /// than three vertices.
    pub fn from_local_faces(
        faces: Vec<Vec<usize>>,
        mesh_points: Vec<PointId>,
    ) -> Result<Self, MeshInteropError> {
        let patch = Self {
            faces,
            mesh_points,
            mesh_point_map: OnceCell::new(),
            edges: OnceCell::new(),
        };
        patch.validate_invariants()?;
        Ok(patch)
    }

    /// Build a patch from faces given in global numbering.
    ///
    /// Local numbering is derived: points are numbered in order of first
    /// appearance in face traversal, and faces are rewritten to local
    /// indices.
    ///
    /// # Errors
    /// Returns `DegenerateFace` for faces with fewer than three vertices.
    pub fn from_global_faces(global_faces: Vec<Vec<PointId>>) -> Result<Self, MeshInteropError> {
        let mut mesh_points: Vec<PointId> = Vec::new();
        let mut local: HashMap<PointId, usize> = HashMap::new();
        let mut faces = Vec::with_capacity(global_faces.len());
        for (i, face) in global_faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshInteropError::DegenerateFace {
                    face: i,
                    n_vertices: face.len(),
                });
            }
            let mut local_face = Vec::with_capacity(face.len());
            for &global in face {
                let index = *local.entry(global).or_insert_with(|| {
                    mesh_points.push(global);
                    mesh_points.len() - 1
                });
                local_face.push(index);
            }
            faces.push(local_face);
        }
        let patch = Self {
            faces,
            mesh_points,
            mesh_point_map: OnceCell::new(),
            edges: OnceCell::new(),
        };
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        patch.debug_assert_invariants();
        Ok(patch)
    }

    /// Number of points in the patch's local numbering.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.mesh_points.len()
    }

    /// Number of faces.
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of derived edges.
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.edges().len()
    }

    /// Faces as rings of local point indices.
    #[inline]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Local→global point map.
    #[inline]
    pub fn mesh_points(&self) -> &[PointId] {
        &self.mesh_points
    }

    /// Look up the local index for a global point id.
    ///
    /// When a global id appears under more than one local point, the first
    /// registered local point wins.
    #[inline]
    pub fn local_point(&self, global: PointId) -> Option<usize> {
        self.mesh_point_map().get(&global).copied()
    }

    /// The global→local reverse map, built on first use.
    pub fn mesh_point_map(&self) -> &HashMap<PointId, usize> {
        self.mesh_point_map.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.mesh_points.len());
            for (local, &global) in self.mesh_points.iter().enumerate() {
                map.entry(global).or_insert(local);
            }
            map
        })
    }

    /// The deduplicated edge list, derived from face boundaries on first use.
    ///
    /// Edges appear in first-seen traversal order and keep the orientation of
    /// their first appearance; an edge shared by two faces is listed once.
    pub fn edges(&self) -> &[Edge] {
        self.edges.get_or_init(|| self.derive_edges())
    }

    fn derive_edges(&self) -> Vec<Edge> {
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut edges = Vec::new();
        for face in &self.faces {
            for (&a, &b) in face.iter().circular_tuple_windows() {
                let key = if a <= b { (a, b) } else { (b, a) };
                if seen.insert(key) {
                    edges.push(Edge::new(a, b));
                }
            }
        }
        edges
    }

    /// Checks the structural invariants: faces non-degenerate and face
    /// indices within the patch's point range.
    pub fn validate_invariants(&self) -> Result<(), MeshInteropError> {
        for (i, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshInteropError::DegenerateFace {
                    face: i,
                    n_vertices: face.len(),
                });
            }
            for &point in face {
                if point >= self.mesh_points.len() {
                    return Err(MeshInteropError::FacePointOutOfRange {
                        face: i,
                        point,
                        n_points: self.mesh_points.len(),
                    });
                }
            }
        }
        Ok(())
    }

    #[cfg(any(debug_assertions, feature = "check-invariants"))]
    pub(crate) fn debug_assert_invariants(&self) {
        if let Err(err) = self.validate_invariants() {
            panic!("patch invariants violated: {err}");
        }
    }
}
