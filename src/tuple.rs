//! The standard accessor protocol.
//!
//! Implemented for native tuples and arrays of up to 12 elements. Other types
//! join the protocol with [`derive(StdTuple)`](crate::StdTuple).

use crate::arity::Len;

/// Access to element `I`.
pub trait Get<const I: usize> {
    type Output: ?Sized;

    fn get(&self) -> &Self::Output;

    fn get_mut(&mut self) -> &mut Self::Output;
}

/// The number of elements reachable through [`Get`].
pub trait TupleSize {
    /// Always [`Arity<N>`](crate::Arity) for an `N`-element type.
    type Arity: Len;

    const LEN: usize = <Self::Arity as Len>::LEN;
}

/// Shorthand for `<T as Get<I>>::Output`.
pub type Element<T, const I: usize> = <T as Get<I>>::Output;

pairlike_macros::std_tuples!(0..=12);
