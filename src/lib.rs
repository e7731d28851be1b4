//! Structural detection of key-value entry types.
//!
//! A generic associative container wants to accept many shapes of entry in
//! its insert and lookup API: native pairs `(K, V)`, two-element arrays, user
//! structs with two fields, and the elements of vectorized storage. This crate
//! decides, for any type, whether it is such an entry.
//!
//! Two independent protocols are recognised:
//!
//! - the standard protocol, [`tuple::Get`] and [`tuple::TupleSize`], covering
//!   native tuples and arrays. A type with elements 0 and 1 and an arity of
//!   exactly 2 is [`StdPairLike`].
//! - the device protocol, [`device::Get`] and [`device::TupleSize`], covering
//!   the device tuples `device::Tuple1` to `device::Tuple10`. Storage proxies
//!   such as [`device::DeviceRef`] do not implement it themselves, so a
//!   candidate is first normalized by [`RawReferenceCast`]. A type whose
//!   normalized form has elements 0 and 1 and an arity of exactly 2 is
//!   [`AltPairLike`].
//!
//! Generic code names the traits as bounds:
//!
//! ```
//! use pairlike::StdPairLike;
//!
//! fn key_of<E: StdPairLike>(entry: &E) -> &<E as pairlike::tuple::Get<0>>::Output {
//!     entry.key()
//! }
//!
//! assert_eq!(*key_of(&("a", 1)), "a");
//! ```
//!
//! Code that needs an answer rather than a constraint uses the predicates
//! [`is_std_pair_like!`], [`is_alt_pair_like!`] and [`classify!`]. They are
//! `const`, and a type failing a check yields `false` instead of a compile
//! error:
//!
//! ```
//! use pairlike::device::{Tuple2, ZipRef};
//! use pairlike::{classify, is_alt_pair_like, is_std_pair_like, PairKind};
//!
//! assert!(is_std_pair_like!((u32, String)));
//! assert!(!is_std_pair_like!((u32, String, bool)));
//! assert!(is_alt_pair_like!(ZipRef<'static, u32, String>));
//! assert_eq!(classify!(Tuple2<u32, String>), PairKind::Alt);
//! ```
//!
//! Other types join a protocol through [`derive(StdTuple)`](StdTuple) or
//! [`derive(DeviceTuple)`](DeviceTuple):
//!
//! ```
//! use pairlike::{is_std_pair_like, StdPairLike, StdTuple};
//!
//! #[derive(StdTuple)]
//! struct Entry {
//!     id: u64,
//!     name: &'static str,
//! }
//!
//! let entry = Entry { id: 4, name: "four" };
//! assert_eq!(entry.key_value(), (&4, &"four"));
//! assert!(is_std_pair_like!(Entry));
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate self as pairlike;

mod arity;
mod detect;
pub mod device;
mod kind;
mod normalize;
pub mod tuple;

pub use arity::{Arity, Len};
pub use detect::{AltPairLike, DevicePair, StdPairLike};
pub use kind::PairKind;
#[doc(hidden)]
pub use detect::__private;
pub use normalize::{Normalized, RawReferenceCast};

pub use pairlike_macros::{DeviceTuple, StdTuple};
