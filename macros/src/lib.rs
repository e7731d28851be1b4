//! Code generation for the `pairlike` tuple protocols.
//!
//! Use the derives through the `pairlike` crate, which re-exports them.

use proc_macro2::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod constant;
mod derive;
mod error;
mod protocol;
mod tuples;

use protocol::Protocol;

/// Implement the standard protocol for native tuples and arrays of each arity
/// in the range, e.g. `std_tuples!(0..=12)`.
///
/// Only meaningful inside the `pairlike` crate: paths are emitted as `crate::`.
#[doc(hidden)]
#[proc_macro]
pub fn std_tuples(args: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(tuples::std_tuples(TokenStream::from(args)))
}

/// Declare the device tuple structs `Tuple1<T0>`, `Tuple2<T0, T1>`, ... for
/// each arity in the range, e.g. `device_tuples!(1..=10)`.
///
/// Only meaningful inside the `pairlike` crate: paths are emitted as `crate::`.
#[doc(hidden)]
#[proc_macro]
pub fn device_tuples(args: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(tuples::device_tuples(TokenStream::from(args)))
}

/// Derive `pairlike::tuple::Get<I>` for every field and `pairlike::tuple::TupleSize`
/// with the number of fields.
///
/// Fields are numbered in declaration order. A struct with exactly two fields
/// becomes `StdPairLike`.
///
/// ```ignore
/// #[derive(pairlike::StdTuple)]
/// struct Entry {
///     key: u64,
///     value: String,
/// }
/// ```
#[proc_macro_derive(StdTuple)]
pub fn derive_std_tuple(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(derive::derive_tuple(
        &Protocol::standard(&derive::krate()),
        input,
    ))
}

/// Derive `pairlike::device::Get<I>` for every field, `pairlike::device::TupleSize`
/// with the number of fields, and an identity `pairlike::RawReferenceCast`.
///
/// A struct with exactly two fields becomes `AltPairLike`.
#[proc_macro_derive(DeviceTuple)]
pub fn derive_device_tuple(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(derive::derive_tuple(&Protocol::device(&derive::krate()), input))
}

fn expand(result: syn::Result<TokenStream>) -> proc_macro::TokenStream {
    result.unwrap_or_else(syn::Error::into_compile_error).into()
}
