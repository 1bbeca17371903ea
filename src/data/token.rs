//! Ownership tokens for field storage.
//!
//! [`FieldToken`] records how an adaptor holds its working field: owning a
//! freshly allocated buffer, or referencing caller-owned storage (shared or
//! exclusive). An adaptor commits to one non-empty state at construction and
//! never transitions afterwards; `Empty` is only observable on a default
//! token or after [`FieldToken::take_owned`].
//!
//! [`TransientField`] models a maybe-temporary field passed by value: its
//! buffer can be acquired outright when owned, and must be copied when it is
//! only borrowed. Consumption is by move, so a transient field cannot be
//! consumed twice.

use core::fmt;

use crate::data::field::Field;
use crate::data::scalar::Scalar;

/// Tagged handle over field storage: nothing, an owned buffer, or a reference
/// to caller-owned storage.
pub enum FieldToken<'a, T> {
    /// Holds nothing.
    Empty,
    /// Owns a heap-allocated buffer, released when the token is dropped.
    Owned(Field<T>),
    /// Shared reference to caller-owned storage.
    ConstRef(&'a Field<T>),
    /// Exclusive reference to caller-owned storage.
    MutRef(&'a mut Field<T>),
}

impl<'a, T> FieldToken<'a, T> {
    /// Returns true if the token holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldToken::Empty)
    }

    /// Returns true if the token owns its buffer.
    pub fn is_owner(&self) -> bool {
        matches!(self, FieldToken::Owned(_))
    }

    /// Returns true if the token references caller-owned storage.
    pub fn is_reference(&self) -> bool {
        matches!(self, FieldToken::ConstRef(_) | FieldToken::MutRef(_))
    }

    /// Read access to the held field, `None` when empty.
    pub fn field(&self) -> Option<&Field<T>> {
        match self {
            FieldToken::Empty => None,
            FieldToken::Owned(f) => Some(f),
            FieldToken::ConstRef(f) => Some(f),
            FieldToken::MutRef(f) => Some(f),
        }
    }

    /// Write access to the held field. `None` when empty or when the token
    /// holds a shared reference.
    pub fn field_mut(&mut self) -> Option<&mut Field<T>> {
        match self {
            FieldToken::Empty | FieldToken::ConstRef(_) => None,
            FieldToken::Owned(f) => Some(f),
            FieldToken::MutRef(f) => Some(f),
        }
    }

    /// Release an owned buffer, leaving the token empty. Reference states are
    /// untouched and return `None`.
    pub fn take_owned(&mut self) -> Option<Field<T>> {
        match core::mem::replace(self, FieldToken::Empty) {
            FieldToken::Owned(f) => Some(f),
            other => {
                *self = other;
                None
            }
        }
    }
}

impl<T> Default for FieldToken<'_, T> {
    fn default() -> Self {
        FieldToken::Empty
    }
}

impl<T: Scalar> fmt::Debug for FieldToken<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldToken::Empty => f.write_str("FieldToken::Empty"),
            FieldToken::Owned(inner) => f.debug_tuple("FieldToken::Owned").field(inner).finish(),
            FieldToken::ConstRef(inner) => {
                f.debug_tuple("FieldToken::ConstRef").field(inner).finish()
            }
            FieldToken::MutRef(inner) => f.debug_tuple("FieldToken::MutRef").field(inner).finish(),
        }
    }
}

/// A maybe-temporary field passed by value.
///
/// Adaptors consuming an owned transient field may acquire its buffer without
/// a copy; a borrowed one is aliased or copied as element types dictate.
pub enum TransientField<'a, T> {
    /// The field is owned and its buffer may be moved out.
    Owned(Field<T>),
    /// The field is borrowed from the caller and must be copied if captured.
    Borrowed(&'a Field<T>),
}

impl<'a, T> TransientField<'a, T> {
    /// Read access to the underlying field.
    pub fn field(&self) -> &Field<T> {
        match self {
            TransientField::Owned(f) => f,
            TransientField::Borrowed(f) => f,
        }
    }

    /// Returns true if the buffer is owned (acquirable without a copy).
    pub fn is_owned(&self) -> bool {
        matches!(self, TransientField::Owned(_))
    }
}

impl<T: Clone> TransientField<'_, T> {
    /// Extract an owned field, cloning only when borrowed.
    pub fn into_owned(self) -> Field<T> {
        match self {
            TransientField::Owned(f) => f,
            TransientField::Borrowed(f) => f.clone(),
        }
    }
}

impl<T> From<Field<T>> for TransientField<'_, T> {
    fn from(f: Field<T>) -> Self {
        TransientField::Owned(f)
    }
}

impl<'a, T> From<&'a Field<T>> for TransientField<'a, T> {
    fn from(f: &'a Field<T>) -> Self {
        TransientField::Borrowed(f)
    }
}

impl<T: Scalar> fmt::Debug for TransientField<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransientField::Owned(inner) => {
                f.debug_tuple("TransientField::Owned").field(inner).finish()
            }
            TransientField::Borrowed(inner) => f
                .debug_tuple("TransientField::Borrowed")
                .field(inner)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_token_is_empty() {
        let token = FieldToken::<f64>::default();
        assert!(token.is_empty());
        assert!(!token.is_owner());
        assert!(!token.is_reference());
        assert!(token.field().is_none());
    }

    #[test]
    fn owned_token_grants_write_access() {
        let mut token = FieldToken::Owned(Field::from(vec![1.0f64, 2.0]));
        assert!(token.is_owner());
        token.field_mut().unwrap().as_mut_slice()[0] = 9.0;
        assert_eq!(token.field().unwrap().as_slice(), &[9.0, 2.0]);
    }

    #[test]
    fn mut_ref_token_writes_into_caller_storage() {
        let mut field = Field::from(vec![1.0f64, 2.0]);
        {
            let mut token = FieldToken::MutRef(&mut field);
            assert!(token.is_reference());
            assert!(!token.is_owner());
            token.field_mut().unwrap().as_mut_slice()[1] = 5.0;
        }
        assert_eq!(field.as_slice(), &[1.0, 5.0]);
    }

    #[test]
    fn const_ref_token_is_read_only() {
        let field = Field::from(vec![1.0f64]);
        let mut token = FieldToken::ConstRef(&field);
        assert!(token.is_reference());
        assert!(token.field_mut().is_none());
        assert_eq!(token.field().unwrap().len(), 1);
    }

    #[test]
    fn take_owned_releases_only_owned_buffers() {
        let field = Field::from(vec![1.0f64]);
        let mut borrowed = FieldToken::ConstRef(&field);
        assert!(borrowed.take_owned().is_none());
        assert!(borrowed.is_reference());

        let mut owned = FieldToken::Owned(Field::from(vec![2.0f64]));
        let released = owned.take_owned().unwrap();
        assert_eq!(released.as_slice(), &[2.0]);
        assert!(owned.is_empty());
    }

    #[test]
    fn transient_field_reports_ownership() {
        let field = Field::from(vec![1.0f32, 2.0]);
        let borrowed = TransientField::from(&field);
        assert!(!borrowed.is_owned());
        assert_eq!(borrowed.field().len(), 2);

        let owned = TransientField::from(field);
        assert!(owned.is_owned());
        assert_eq!(owned.into_owned().as_slice(), &[1.0, 2.0]);
    }
}
