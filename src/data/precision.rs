//! Precision adaptors: expose a field of one element type as another.
//!
//! [`ConstPrecisionAdaptor`] gives read access to an input field at the
//! consumer's working precision. When the element types already agree it
//! aliases the input storage outright; otherwise it converts into a freshly
//! allocated working buffer. [`PrecisionAdaptor`] is the writable variant: on
//! top of the same aliasing/conversion choice it copies the working values
//! back into the caller's field when dropped, so mixed-precision solvers can
//! mutate through the adaptor and rely on scope exit to synchronize.
//!
//! The aliasing-vs-conversion choice is made per monomorphization (see
//! [`Field::reinterpret_ref`]); the same-type path performs no allocation and
//! no element copy.

use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use num_traits::AsPrimitive;

use crate::data::field::{Field, ReinterpretMut};
use crate::data::scalar::Scalar;
use crate::data::token::{FieldToken, TransientField};

/// Elementwise static cast from `src` into `dst`.
///
/// Both slices must have equal length.
#[inline]
fn convert_slice<I, T>(src: &[I], dst: &mut [T])
where
    I: AsPrimitive<T>,
    T: Copy + 'static,
{
    debug_assert_eq!(src.len(), dst.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s.as_();
    }
}

/// Read-only view of a `Field<I>` at element type `T`.
///
/// Construction commits the token to exactly one state: a shared reference
/// when `T == I` (zero-copy), or an owned converted buffer otherwise. There
/// are no further transitions and no write-back.
pub struct ConstPrecisionAdaptor<'a, T: Scalar, I: Scalar = T> {
    token: FieldToken<'a, T>,
    _input: PhantomData<&'a Field<I>>,
}

impl<'a, T, I> ConstPrecisionAdaptor<'a, T, I>
where
    T: Scalar,
    I: Scalar + AsPrimitive<T>,
{
    /// Adapt a borrowed input field, copying and converting only when the
    /// element types differ.
    pub fn new(input: &'a Field<I>) -> Self {
        let token = match input.reinterpret_ref::<T>() {
            Some(aliased) => FieldToken::ConstRef(aliased),
            None => FieldToken::Owned(convert_input(input)),
        };
        Self {
            token,
            _input: PhantomData,
        }
    }

    /// Adapt a maybe-temporary input field.
    ///
    /// An owned input whose element type already matches is acquired outright:
    /// no allocation, no element copy, and the source buffer is moved out.
    /// Anything else falls back to the same aliasing/conversion choice as
    /// [`new`](Self::new).
    pub fn from_transient(input: TransientField<'a, I>) -> Self {
        let token = match input {
            TransientField::Owned(mut owned) => match owned.take_reinterpreted::<T>() {
                Some(acquired) => FieldToken::Owned(acquired),
                None => FieldToken::Owned(convert_input(&owned)),
            },
            TransientField::Borrowed(borrowed) => return Self::new(borrowed),
        };
        Self {
            token,
            _input: PhantomData,
        }
    }

    /// One-shot form avoiding adaptor-object overhead: returns `input` itself
    /// when the element types match, otherwise fills `scratch` (resized to
    /// `input`'s length) with converted values and returns it.
    pub fn get(input: &'a Field<I>, scratch: &'a mut Field<T>) -> &'a Field<T> {
        match input.reinterpret_ref::<T>() {
            Some(aliased) => aliased,
            None => {
                scratch.resize(input.len(), T::default());
                convert_slice(input.as_slice(), scratch.as_mut_slice());
                scratch
            }
        }
    }

    /// The adapted field.
    pub fn as_field(&self) -> &Field<T> {
        match self.token.field() {
            Some(field) => field,
            None => unreachable!("adaptor token committed at construction"),
        }
    }

    /// Returns true if the adaptor aliases the caller's storage.
    pub fn is_aliased(&self) -> bool {
        self.token.is_reference()
    }

    /// Returns true if the adaptor owns its working buffer.
    pub fn is_owner(&self) -> bool {
        self.token.is_owner()
    }

    /// Consume the adaptor, returning the adapted values as an owned field.
    /// Free when the adaptor already owns its buffer; clones when aliasing.
    pub fn into_owned(mut self) -> Field<T> {
        match self.token.take_owned() {
            Some(owned) => owned,
            None => match self.token.field() {
                Some(aliased) => aliased.clone(),
                None => unreachable!("adaptor token committed at construction"),
            },
        }
    }
}

impl<T: Scalar, I: Scalar> Deref for ConstPrecisionAdaptor<'_, T, I> {
    type Target = Field<T>;

    fn deref(&self) -> &Field<T> {
        match self.token.field() {
            Some(field) => field,
            None => unreachable!("adaptor token committed at construction"),
        }
    }
}

/// Convert a borrowed input into a fresh working buffer.
fn convert_input<I, T>(input: &Field<I>) -> Field<T>
where
    T: Scalar,
    I: Scalar + AsPrimitive<T>,
{
    let mut work = Field::with_len(input.len(), T::default());
    convert_slice(input.as_slice(), work.as_mut_slice());
    work
}

/// How a writable adaptor holds its working storage.
enum WriteState<'a, T, I> {
    /// Element types matched; the consumer writes straight into the caller's
    /// field, so nothing remains to do at scope exit.
    Aliased(&'a mut Field<T>),
    /// Element types differ; `work` is the owned working buffer and `target`
    /// the caller's field to synchronize on drop.
    Converting {
        work: Field<T>,
        target: &'a mut Field<I>,
    },
}

/// Writable view of a `Field<I>` at element type `T`, with guaranteed
/// write-back.
///
/// In the converting state the drop handler resizes the target to the working
/// buffer's current length and converts every current working value back,
/// whether or not the consumer wrote anything. Callers that skip the forward
/// copy ([`write_only`](Self::write_only)) and then never write will see the
/// target overwritten with the working buffer's contents.
pub struct PrecisionAdaptor<'a, T, I = T>
where
    T: Scalar + AsPrimitive<I>,
    I: Scalar + AsPrimitive<T>,
{
    state: WriteState<'a, T, I>,
}

impl<'a, T, I> PrecisionAdaptor<'a, T, I>
where
    T: Scalar + AsPrimitive<I>,
    I: Scalar + AsPrimitive<T>,
{
    /// Adapt a mutable input field, converting current values in so the
    /// consumer sees them.
    pub fn new(input: &'a mut Field<I>) -> Self {
        Self::with_copy(input, true)
    }

    /// Adapt a mutable input field without the forward conversion; the
    /// working buffer's initial contents are unspecified. Use when the
    /// consumer will only write.
    pub fn write_only(input: &'a mut Field<I>) -> Self {
        Self::with_copy(input, false)
    }

    /// Adapt a mutable input field, converting current values in iff `copy`.
    pub fn with_copy(input: &'a mut Field<I>, copy: bool) -> Self {
        let state = match input.reinterpret_for_write::<T>() {
            ReinterpretMut::Same(aliased) => WriteState::Aliased(aliased),
            ReinterpretMut::Different(target) => {
                let mut work = Field::with_len(target.len(), T::default());
                if copy {
                    convert_slice(target.as_slice(), work.as_mut_slice());
                }
                WriteState::Converting { work, target }
            }
        };
        Self { state }
    }

    /// The adapted field.
    pub fn as_field(&self) -> &Field<T> {
        match &self.state {
            WriteState::Aliased(field) => field,
            WriteState::Converting { work, .. } => work,
        }
    }

    /// Mutable access to the adapted field.
    pub fn as_field_mut(&mut self) -> &mut Field<T> {
        match &mut self.state {
            WriteState::Aliased(field) => field,
            WriteState::Converting { work, .. } => work,
        }
    }

    /// Returns true if the adaptor aliases the caller's storage.
    pub fn is_aliased(&self) -> bool {
        matches!(self.state, WriteState::Aliased(_))
    }
}

impl<T, I> Drop for PrecisionAdaptor<'_, T, I>
where
    T: Scalar + AsPrimitive<I>,
    I: Scalar + AsPrimitive<T>,
{
    fn drop(&mut self) {
        if let WriteState::Converting { work, target } = &mut self.state {
            // The target may have been resized behind our back; bring it to
            // the working length before converting back.
            if target.len() != work.len() {
                log::debug!(
                    "write-back resizing target field from {} to {} elements",
                    target.len(),
                    work.len()
                );
            }
            target.resize(work.len(), I::default());
            convert_slice(work.as_slice(), target.as_mut_slice());
        }
    }
}

impl<T, I> Deref for PrecisionAdaptor<'_, T, I>
where
    T: Scalar + AsPrimitive<I>,
    I: Scalar + AsPrimitive<T>,
{
    type Target = Field<T>;

    fn deref(&self) -> &Field<T> {
        self.as_field()
    }
}

impl<T, I> DerefMut for PrecisionAdaptor<'_, T, I>
where
    T: Scalar + AsPrimitive<I>,
    I: Scalar + AsPrimitive<T>,
{
    fn deref_mut(&mut self) -> &mut Field<T> {
        self.as_field_mut()
    }
}
