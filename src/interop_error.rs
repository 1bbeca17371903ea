//! MeshInteropError: unified error type for mesh-interop public APIs
//!
//! This error type is used throughout the mesh-interop library to provide
//! robust, non-panicking error handling for all public constructors.

use thiserror::Error;

/// Unified error type for mesh-interop operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshInteropError {
    /// Attempted to construct a PointId with a zero value (invalid).
    #[error("PointId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidPointId,
    /// A face referenced a local point index outside the patch's point range.
    #[error("face {face} references local point {point}, but the patch has only {n_points} points")]
    FacePointOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range local point index.
        point: usize,
        /// Number of points the patch actually has.
        n_points: usize,
    },
    /// A face had fewer than three vertices.
    #[error("face {face} has {n_vertices} vertices; a patch face needs at least 3")]
    DegenerateFace {
        /// Index of the offending face.
        face: usize,
        /// Vertex count of the offending face.
        n_vertices: usize,
    },
}
