//! Re-export public algorithms.

pub mod matching;

pub use matching::{match_edges, match_points};
