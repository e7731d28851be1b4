use pairlike::{DeviceTuple, StdTuple};

#[derive(StdTuple)]
struct Entry {
    key: u64,
    value: String,
}

#[derive(DeviceTuple)]
struct Slot<K, V>(K, V)
where
    K: Copy;

#[derive(StdTuple)]
struct Marker;
