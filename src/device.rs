//! The device tuple family and its accessor protocol.
//!
//! Device tuples are the element type of vectorized (column-oriented) storage.
//! They share no traits with native tuples: [`device::Get`](Get) and
//! [`device::TupleSize`](TupleSize) mirror [`tuple::Get`](crate::tuple::Get)
//! and [`tuple::TupleSize`](crate::tuple::TupleSize) but are unrelated to them.
//!
//! Storage hands out proxies, [`DeviceRef`] and [`ZipRef`], rather than
//! references to device tuples. Proxies do not implement the protocol
//! themselves; [`RawReferenceCast`] turns them into the value they denote.

use core::fmt;

use crate::arity::Len;
use crate::RawReferenceCast;

/// Access to element `I` of a device tuple.
pub trait Get<const I: usize> {
    type Output: ?Sized;

    fn get(&self) -> &Self::Output;

    fn get_mut(&mut self) -> &mut Self::Output;
}

/// The number of elements of a device tuple.
///
/// Device tuples are their own normalized form, so every implementor also
/// implements [`RawReferenceCast`], usually as the identity.
pub trait TupleSize: RawReferenceCast {
    type Arity: Len;

    const LEN: usize = <Self::Arity as Len>::LEN;
}

pairlike_macros::device_tuples!(1..=10);

/// A proxy for one value held in device storage.
///
/// Normalizes to the normalized form of the value, so a proxy for a
/// reference casts all the way through to the referenced value.
pub struct DeviceRef<'a, T: ?Sized> {
    value: &'a T,
}

impl<'a, T: ?Sized> DeviceRef<'a, T> {
    #[inline]
    pub fn new(value: &'a T) -> Self {
        DeviceRef { value }
    }
}

impl<T: ?Sized> Clone for DeviceRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for DeviceRef<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for DeviceRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeviceRef").field(&self.value).finish()
    }
}

impl<T: ?Sized + RawReferenceCast> RawReferenceCast for DeviceRef<'_, T> {
    type Raw = T::Raw;

    #[inline]
    fn raw_reference_cast(&self) -> &Self::Raw {
        self.value.raw_reference_cast()
    }
}

/// A proxy for the row at one position of two zipped columns.
///
/// Normalizes to `Tuple2<&A, &B>`, the pair of element references.
pub struct ZipRef<'a, A, B> {
    refs: Tuple2<&'a A, &'a B>,
}

impl<'a, A, B> ZipRef<'a, A, B> {
    #[inline]
    pub fn new(first: &'a A, second: &'a B) -> Self {
        ZipRef {
            refs: Tuple2(first, second),
        }
    }

    /// The row at `index`, if both columns are long enough.
    pub fn at(first: &'a [A], second: &'a [B], index: usize) -> Option<Self> {
        Some(ZipRef::new(first.get(index)?, second.get(index)?))
    }
}

impl<A, B> Clone for ZipRef<'_, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for ZipRef<'_, A, B> {}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for ZipRef<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ZipRef")
            .field(self.refs.0)
            .field(self.refs.1)
            .finish()
    }
}

impl<'a, A, B> RawReferenceCast for ZipRef<'a, A, B> {
    type Raw = Tuple2<&'a A, &'a B>;

    #[inline]
    fn raw_reference_cast(&self) -> &Self::Raw {
        &self.refs
    }
}
