use crate::tuple::{self, TupleSize};
use crate::{device, Arity, RawReferenceCast};

/// A key-value entry in the standard protocol: elements 0 and 1, and exactly
/// two of them.
///
/// Implemented for every type that qualifies; there is nothing to opt into.
/// Native 2-tuples and `[T; 2]` qualify, longer tuples do not.
pub trait StdPairLike: tuple::Get<0> + tuple::Get<1> + TupleSize<Arity = Arity<2>> {
    #[inline]
    fn key(&self) -> &<Self as tuple::Get<0>>::Output {
        tuple::Get::<0>::get(self)
    }

    #[inline]
    fn value(&self) -> &<Self as tuple::Get<1>>::Output {
        tuple::Get::<1>::get(self)
    }

    #[inline]
    fn key_value(
        &self,
    ) -> (
        &<Self as tuple::Get<0>>::Output,
        &<Self as tuple::Get<1>>::Output,
    ) {
        (tuple::Get::<0>::get(self), tuple::Get::<1>::get(self))
    }
}

impl<T> StdPairLike for T where
    T: ?Sized + tuple::Get<0> + tuple::Get<1> + TupleSize<Arity = Arity<2>>
{
}

/// A device tuple of exactly two elements.
pub trait DevicePair:
    device::Get<0> + device::Get<1> + device::TupleSize<Arity = Arity<2>>
{
}

impl<T> DevicePair for T where
    T: ?Sized + device::Get<0> + device::Get<1> + device::TupleSize<Arity = Arity<2>>
{
}

/// A key-value entry in the device protocol, after normalization.
///
/// `T` qualifies when `Normalized<T>` is a [`DevicePair`]. Device tuples,
/// references to them, and the proxies of device storage all qualify.
pub trait AltPairLike {
    /// The normalized entry.
    type Pair: ?Sized + DevicePair;

    fn unwrap_pair(&self) -> &Self::Pair;

    #[inline]
    fn key(&self) -> &<Self::Pair as device::Get<0>>::Output {
        device::Get::<0>::get(self.unwrap_pair())
    }

    #[inline]
    fn value(&self) -> &<Self::Pair as device::Get<1>>::Output {
        device::Get::<1>::get(self.unwrap_pair())
    }

    #[inline]
    fn key_value(
        &self,
    ) -> (
        &<Self::Pair as device::Get<0>>::Output,
        &<Self::Pair as device::Get<1>>::Output,
    ) {
        let pair = self.unwrap_pair();
        (device::Get::<0>::get(pair), device::Get::<1>::get(pair))
    }
}

impl<T> AltPairLike for T
where
    T: ?Sized + RawReferenceCast,
    T::Raw: DevicePair,
{
    type Pair = T::Raw;

    #[inline]
    fn unwrap_pair(&self) -> &Self::Pair {
        self.raw_reference_cast()
    }
}

/// Whether a type is [`StdPairLike`], as a `const bool`.
///
/// Evaluates to `false`, never to a compile error, for any type that lacks an
/// accessor or has the wrong arity. The type must be concrete: inside generic
/// code where `T: StdPairLike` is not in scope the answer is `false`.
///
/// ```
/// use pairlike::is_std_pair_like;
///
/// const ENTRY: bool = is_std_pair_like!((u64, String));
/// assert!(ENTRY);
/// assert!(is_std_pair_like!([u8; 2]));
/// assert!(!is_std_pair_like!((u64, String, bool)));
/// assert!(!is_std_pair_like!(u64));
/// ```
#[macro_export]
macro_rules! is_std_pair_like {
    ($type:ty) => {{
        use $crate::__private::StdFallback as _;
        <$crate::__private::Check<$type>>::IS_STD_PAIR_LIKE
    }};
}

/// Whether a type is [`AltPairLike`], as a `const bool`.
///
/// The candidate is normalized first, so proxies of device tuples qualify.
/// Like [`is_std_pair_like!`], any failing type yields `false`.
///
/// ```
/// use pairlike::device::{DeviceRef, Tuple2, Tuple3};
/// use pairlike::is_alt_pair_like;
///
/// assert!(is_alt_pair_like!(Tuple2<u32, f32>));
/// assert!(is_alt_pair_like!(DeviceRef<'static, Tuple2<u32, f32>>));
/// assert!(!is_alt_pair_like!(Tuple3<u32, f32, u8>));
/// assert!(!is_alt_pair_like!((u32, f32)));
/// ```
#[macro_export]
macro_rules! is_alt_pair_like {
    ($type:ty) => {{
        use $crate::__private::AltFallback as _;
        <$crate::__private::Check<$type>>::IS_ALT_PAIR_LIKE
    }};
}

// Items named by the predicate macros. They live here, not in the macro
// body, so that no name of a caller's type can resolve to them.
#[doc(hidden)]
pub mod __private {
    use core::marker::PhantomData;

    use crate::{AltPairLike, StdPairLike};

    pub struct Check<T: ?Sized>(PhantomData<T>);

    // An inherent const takes precedence over these trait defaults, but only
    // exists when the bound holds.
    pub trait StdFallback {
        const IS_STD_PAIR_LIKE: bool = false;
    }

    impl<T: ?Sized> StdFallback for T {}

    impl<T: ?Sized + StdPairLike> Check<T> {
        pub const IS_STD_PAIR_LIKE: bool = true;
    }

    pub trait AltFallback {
        const IS_ALT_PAIR_LIKE: bool = false;
    }

    impl<T: ?Sized> AltFallback for T {}

    impl<T: ?Sized + AltPairLike> Check<T> {
        pub const IS_ALT_PAIR_LIKE: bool = true;
    }
}
