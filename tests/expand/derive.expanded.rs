use pairlike::{DeviceTuple, StdTuple};
struct Entry {
    key: u64,
    value: String,
}
impl ::pairlike::tuple::TupleSize for Entry {
    type Arity = ::pairlike::Arity<2>;
}
impl ::pairlike::tuple::Get<0> for Entry {
    type Output = u64;
    #[inline]
    fn get(&self) -> &Self::Output {
        &self.key
    }
    #[inline]
    fn get_mut(&mut self) -> &mut Self::Output {
        &mut self.key
    }
}
impl ::pairlike::tuple::Get<1> for Entry {
    type Output = String;
    #[inline]
    fn get(&self) -> &Self::Output {
        &self.value
    }
    #[inline]
    fn get_mut(&mut self) -> &mut Self::Output {
        &mut self.value
    }
}
struct Slot<K, V>(K, V)
where
    K: Copy;
impl<K, V> ::pairlike::device::TupleSize for Slot<K, V>
where
    K: Copy,
{
    type Arity = ::pairlike::Arity<2>;
}
impl<K, V> ::pairlike::RawReferenceCast for Slot<K, V>
where
    K: Copy,
{
    type Raw = Self;
    #[inline]
    fn raw_reference_cast(&self) -> &Self::Raw {
        self
    }
}
impl<K, V> ::pairlike::device::Get<0> for Slot<K, V>
where
    K: Copy,
{
    type Output = K;
    #[inline]
    fn get(&self) -> &Self::Output {
        &self.0
    }
    #[inline]
    fn get_mut(&mut self) -> &mut Self::Output {
        &mut self.0
    }
}
impl<K, V> ::pairlike::device::Get<1> for Slot<K, V>
where
    K: Copy,
{
    type Output = V;
    #[inline]
    fn get(&self) -> &Self::Output {
        &self.1
    }
    #[inline]
    fn get_mut(&mut self) -> &mut Self::Output {
        &mut self.1
    }
}
struct Marker;
impl ::pairlike::tuple::TupleSize for Marker {
    type Arity = ::pairlike::Arity<0>;
}
