//! Data module: fields, scalar tags, ownership tokens, precision adaptation
#![warn(missing_docs)]

pub mod field;
pub mod precision;
pub mod scalar;
pub mod token;

pub use field::{Field, ReinterpretMut};
pub use precision::{ConstPrecisionAdaptor, PrecisionAdaptor};
pub use scalar::{Scalar, ScalarType};
pub use token::{FieldToken, TransientField};
