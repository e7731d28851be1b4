/// Conversion from a proxy or reference to the value it stands for.
///
/// The cast is applied to every candidate, proxy or not: plain values cast to
/// themselves, and `&T`/`&mut T` cast through to `T`, so [`Normalized<T>`] is
/// never a reference type unless a proxy's `Raw` holds references inside.
pub trait RawReferenceCast {
    type Raw: ?Sized;

    fn raw_reference_cast(&self) -> &Self::Raw;
}

/// The value type a candidate normalizes to.
pub type Normalized<T> = <T as RawReferenceCast>::Raw;

impl<T: RawReferenceCast + ?Sized> RawReferenceCast for &T {
    type Raw = T::Raw;

    #[inline]
    fn raw_reference_cast(&self) -> &Self::Raw {
        (**self).raw_reference_cast()
    }
}

impl<T: RawReferenceCast + ?Sized> RawReferenceCast for &mut T {
    type Raw = T::Raw;

    #[inline]
    fn raw_reference_cast(&self) -> &Self::Raw {
        (**self).raw_reference_cast()
    }
}

impl<T, const N: usize> RawReferenceCast for [T; N] {
    type Raw = Self;

    #[inline]
    fn raw_reference_cast(&self) -> &Self::Raw {
        self
    }
}

macro_rules! identity_cast {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RawReferenceCast for $ty {
                type Raw = Self;

                #[inline]
                fn raw_reference_cast(&self) -> &Self::Raw {
                    self
                }
            }
        )*
    };
}

identity_cast!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
);

#[cfg(feature = "std")]
identity_cast!(String);
