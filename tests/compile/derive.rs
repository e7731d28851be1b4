#![allow(dead_code)]
use pairlike::device::{self, DeviceRef};
use pairlike::tuple::{Get, TupleSize};
use pairlike::{
    classify, is_alt_pair_like, is_std_pair_like, AltPairLike, DeviceTuple, PairKind,
    StdPairLike, StdTuple,
};

#[derive(StdTuple)]
pub struct Named {
    pub id: u32,
    pub label: String,
}

#[derive(StdTuple)]
pub struct Unnamed<K, V>(pub K, pub V);

#[derive(StdTuple)]
pub struct Borrowed<'a, K: ?Sized>(pub &'a K, pub usize)
where
    K: PartialEq;

#[derive(StdTuple)]
pub struct Single {
    pub only: u8,
}

#[derive(StdTuple)]
pub struct Triple(pub u8, pub u8, pub u8);

#[derive(StdTuple)]
pub struct Marker;

#[derive(DeviceTuple)]
pub struct Column<K, V> {
    pub key: K,
    pub value: V,
}

#[derive(StdTuple, DeviceTuple)]
pub struct Dual(pub u64, pub u64);

#[test]
fn derived_standard_elements() {
    let mut named = Named {
        id: 3,
        label: "three".to_string(),
    };
    assert_eq!(<Named as TupleSize>::LEN, 2);
    assert_eq!(*Get::<0>::get(&named), 3);
    Get::<1>::get_mut(&mut named).push('!');
    assert_eq!(named.label, "three!");

    let unnamed = Unnamed('k', 1.5);
    assert_eq!(StdPairLike::key_value(&unnamed), (&'k', &1.5));

    let text = "key";
    let borrowed = Borrowed(text, 9);
    assert_eq!(*StdPairLike::key(&borrowed), "key");
}

#[test]
fn derived_arity_follows_field_count() {
    assert_eq!(<Marker as TupleSize>::LEN, 0);
    assert_eq!(<Single as TupleSize>::LEN, 1);
    assert_eq!(<Triple as TupleSize>::LEN, 3);
    assert!(is_std_pair_like!(Named));
    assert!(is_std_pair_like!(Unnamed<u8, u8>));
    assert!(is_std_pair_like!(Borrowed<'static, str>));
    assert!(!is_std_pair_like!(Marker));
    assert!(!is_std_pair_like!(Single));
    assert!(!is_std_pair_like!(Triple));
}

#[test]
fn derived_device_elements() {
    let column = Column { key: 1u32, value: 'v' };
    assert_eq!(*device::Get::<0>::get(&column), 1u32);
    assert_eq!(AltPairLike::value(&column), &'v');
    assert!(is_alt_pair_like!(Column<u32, char>));
    assert!(is_alt_pair_like!(DeviceRef<'static, Column<u32, char>>));
    assert!(!is_std_pair_like!(Column<u32, char>));
}

#[test]
fn one_type_in_both_protocols() {
    assert_eq!(classify!(Dual), PairKind::Both);
    let dual = Dual(1, 2);
    assert_eq!(StdPairLike::key(&dual), AltPairLike::key(&dual));
    assert_eq!(StdPairLike::value(&dual), AltPairLike::value(&dual));
}

mod helper_names {
    use pairlike::{classify, is_alt_pair_like, is_std_pair_like, DeviceTuple, PairKind, StdTuple};

    #[derive(StdTuple)]
    pub struct StdFallback(pub u8, pub u8);

    #[derive(DeviceTuple)]
    pub struct AltFallback(pub u8, pub u8);

    #[derive(DeviceTuple)]
    pub struct Fallback(pub u8, pub u8);

    #[derive(StdTuple, DeviceTuple)]
    pub struct Check(pub u8, pub u8);

    pub struct T;

    #[test]
    fn caller_types_may_reuse_helper_names() {
        assert!(is_std_pair_like!(StdFallback));
        assert!(!is_alt_pair_like!(StdFallback));
        assert!(is_alt_pair_like!(AltFallback));
        assert!(is_alt_pair_like!(Fallback));
        assert!(!is_std_pair_like!(Fallback));
        assert_eq!(classify!(Check), PairKind::Both);
        assert!(!is_std_pair_like!(T));
        assert!(!is_alt_pair_like!(T));
    }
}
