//! `PointId`: a strong, zero-cost handle for globally numbered mesh points
//!
//! Patches matched against each other keep independent local numbering but
//! share one global point numbering. `PointId` wraps a nonzero `u64` to
//! enforce at compile- and runtime that 0 is reserved as an invalid or
//! sentinel value.
//!
//! This module provides:
//! - A transparent `PointId` newtype around `NonZeroU64` for zero-cost
//!   memory layout guarantees.
//! - Constructors and accessors with safety checks.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing) so `PointId` can be used in maps, sets, and printed easily.

use std::{fmt, num::NonZeroU64};

use crate::interop_error::MeshInteropError;

/// Globally unique point identifier shared across patches.
///
/// # Memory layout
/// This type is `repr(transparent)`, meaning it has the same ABI and
/// alignment as its single field (`NonZeroU64`) and can be passed to FFI
/// exactly like a `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointId(NonZeroU64);

impl PointId {
    /// Creates a new `PointId` from a raw `u64` value.
    ///
    /// # Errors
    /// Returns `Err(InvalidPointId)` if `raw == 0`. We reserve 0 as an
    /// invalid or sentinel value.
    #[inline]
    pub fn new(raw: u64) -> Result<Self, MeshInteropError> {
        NonZeroU64::new(raw)
            .map(PointId)
            .ok_or(MeshInteropError::InvalidPointId)
    }

    /// Returns the inner `u64` value of this `PointId`.
    ///
    /// This is a cheap, const-time getter. Use it when you need to inspect
    /// or print the raw integer, but prefer to work with `PointId` otherwise
    /// for type safety.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Custom `Debug` implementation to display as `PointId(raw_value)`.
impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.get()).finish()
    }
}

/// Custom `Display` implementation to print only the raw integer.
impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
