//! # mesh-interop
//!
//! mesh-interop is a small Rust library of interoperability primitives for mesh-based
//! numerical simulation codes. It provides precision-adapting views over numeric field
//! data, so mixed-precision solvers can consume a field at their working precision with
//! zero-copy aliasing whenever the element types already agree, and correspondence
//! matching between independently numbered boundary patches that share a global point
//! numbering.
//!
//! ## Features
//! - `Field` buffers with safe same-type reinterpretation, decided per monomorphization
//! - `ConstPrecisionAdaptor` / `PrecisionAdaptor` for read-only and write-back adaptation
//! - Ownership tokens distinguishing owned working buffers from caller-owned references
//! - `match_points` / `match_edges` correspondence algorithms with orientation detection
//!
//! ## Usage
//! Add `mesh-interop` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mesh-interop = "0.2"
//! ```
//!
//! ## Concurrency
//! Everything here is single-threaded and synchronous. Calls on disjoint inputs are
//! independent and reentrant; there is no shared mutable global state.

pub mod algs;
pub mod data;
pub mod interop_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::matching::{match_edges, match_points};
    pub use crate::data::field::Field;
    pub use crate::data::precision::{ConstPrecisionAdaptor, PrecisionAdaptor};
    pub use crate::data::scalar::{Scalar, ScalarType};
    pub use crate::data::token::{FieldToken, TransientField};
    pub use crate::interop_error::MeshInteropError;
    pub use crate::topology::patch::{Edge, Patch};
    pub use crate::topology::point::PointId;
}
