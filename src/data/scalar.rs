//! Scalar element types accepted by [`Field`](crate::data::field::Field)
//! buffers and the precision adaptors.
//!
//! The set of element types is closed on purpose: precision adaptation only
//! makes sense between numeric types with a defined elementwise cast, and the
//! [`ScalarType`] tag gives each of them a stable label for diagnostics and
//! log output.

use core::fmt;

/// Scalar type tag for field element types.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ScalarType {
    /// 64-bit float.
    F64,
    /// 32-bit float.
    F32,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
}

impl ScalarType {
    /// Returns a stable string label for the scalar type.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::F64 => "f64",
            ScalarType::F32 => "f32",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
        }
    }

    /// Parse a scalar type from a string label.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "f64" => Some(ScalarType::F64),
            "f32" => Some(ScalarType::F32),
            "i32" => Some(ScalarType::I32),
            "i64" => Some(ScalarType::I64),
            "u32" => Some(ScalarType::U32),
            "u64" => Some(ScalarType::U64),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element types storable in a `Field`.
///
/// Each implementor carries its [`ScalarType`] tag as an associated constant,
/// so two `Scalar` types are the same concrete type iff their tags agree.
/// Conversion between scalar types is supplied separately via
/// [`num_traits::AsPrimitive`] bounds on the adaptor constructors.
pub trait Scalar: Copy + Default + PartialEq + fmt::Debug + 'static {
    /// Scalar type tag for this concrete type.
    const SCALAR_TYPE: ScalarType;
}

impl Scalar for f64 {
    const SCALAR_TYPE: ScalarType = ScalarType::F64;
}

impl Scalar for f32 {
    const SCALAR_TYPE: ScalarType = ScalarType::F32;
}

impl Scalar for i32 {
    const SCALAR_TYPE: ScalarType = ScalarType::I32;
}

impl Scalar for i64 {
    const SCALAR_TYPE: ScalarType = ScalarType::I64;
}

impl Scalar for u32 {
    const SCALAR_TYPE: ScalarType = ScalarType::U32;
}

impl Scalar for u64 {
    const SCALAR_TYPE: ScalarType = ScalarType::U64;
}
