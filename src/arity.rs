use sealed::sealed;

/// An element count lifted to the type level.
///
/// Accessor protocols expose their arity as `type Arity = Arity<N>` so that
/// bounds can require an exact count, e.g. `TupleSize<Arity = Arity<2>>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity<const N: usize>;

/// Recover the count carried by an [`Arity`].
#[sealed]
pub trait Len {
    const LEN: usize;
}

#[sealed]
impl<const N: usize> Len for Arity<N> {
    const LEN: usize = N;
}
