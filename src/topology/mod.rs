//! Topology module: global point handles and boundary patches.

pub mod patch;
pub mod point;

pub use patch::{Edge, Patch};
pub use point::PointId;
