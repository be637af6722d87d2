//! Hashing composite values through any [`StreamingHash`].
//!
//! [`StructuredHash`] fixes a platform-independent byte encoding for common
//! Rust values, so the same value hashes identically on every target:
//!
//! - integers are little-endian; `usize`/`isize` are widened to 64 bits and
//!   128-bit integers are written as two 64-bit words, low word first
//! - `bool` is one byte, `char` is its `u32` scalar value
//! - strings, slices, arrays and vectors are prefixed with their length as a
//!   `u64` (bytes for strings, elements otherwise)
//! - `Option` writes a tag byte (`0` or `1`) followed by the payload
//!
//! [`StdHasher`] and [`BuildStdHasher`] plug any 32- or 64-bit family into
//! `std::collections::HashMap`.

use core::hash::{BuildHasher, Hasher};
use std::fmt;

use traits::StreamingHash;

/// A value with a fixed streaming encoding.
pub trait StructuredHash {
  /// Write this value's encoding into `state`.
  fn hash_into<H: StreamingHash>(&self, state: &mut H);
}

/// Hash `value` with a fresh `H` keyed by `seed` (the default seed on `None`).
#[inline]
#[must_use]
pub fn hash_value<H: StreamingHash, T: StructuredHash + ?Sized>(seed: Option<H::Seed>, value: &T) -> H::Output {
  let mut state = H::new(seed);
  value.hash_into(&mut state);
  state.finish()
}

macro_rules! impl_unsigned {
  ($($ty:ty => $write:ident),* $(,)?) => {
    $(
      impl StructuredHash for $ty {
        #[inline]
        fn hash_into<H: StreamingHash>(&self, state: &mut H) {
          state.$write(*self);
        }
      }
    )*
  };
}

macro_rules! impl_signed {
  ($($ty:ty => $unsigned:ty),* $(,)?) => {
    $(
      impl StructuredHash for $ty {
        #[inline]
        fn hash_into<H: StreamingHash>(&self, state: &mut H) {
          (*self as $unsigned).hash_into(state);
        }
      }
    )*
  };
}

impl_unsigned!(u8 => write_u8, u16 => write_u16, u32 => write_u32, u64 => write_u64);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => u64);

impl StructuredHash for usize {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    state.write_u64(*self as u64);
  }
}

impl StructuredHash for u128 {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    state.write_u64(*self as u64);
    state.write_u64((*self >> 64) as u64);
  }
}

impl StructuredHash for i128 {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    (*self as u128).hash_into(state);
  }
}

impl StructuredHash for bool {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    state.write_u8(u8::from(*self));
  }
}

impl StructuredHash for char {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    state.write_u32(u32::from(*self));
  }
}

impl StructuredHash for () {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, _state: &mut H) {}
}

impl StructuredHash for str {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    state.write_u64(self.len() as u64);
    state.update(self.as_bytes());
  }
}

impl StructuredHash for String {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    self.as_str().hash_into(state);
  }
}

impl<T: StructuredHash> StructuredHash for [T] {
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    state.write_u64(self.len() as u64);
    for item in self {
      item.hash_into(state);
    }
  }
}

impl<T: StructuredHash, const N: usize> StructuredHash for [T; N] {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    self.as_slice().hash_into(state);
  }
}

impl<T: StructuredHash> StructuredHash for Vec<T> {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    self.as_slice().hash_into(state);
  }
}

impl<T: StructuredHash> StructuredHash for Option<T> {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    match self {
      None => state.write_u8(0),
      Some(value) => {
        state.write_u8(1);
        value.hash_into(state);
      }
    }
  }
}

impl<T: StructuredHash + ?Sized> StructuredHash for &T {
  #[inline]
  fn hash_into<H: StreamingHash>(&self, state: &mut H) {
    (**self).hash_into(state);
  }
}

macro_rules! impl_tuple {
  ($($name:ident)+) => {
    impl<$($name: StructuredHash),+> StructuredHash for ($($name,)+) {
      #[inline]
      #[allow(non_snake_case)]
      fn hash_into<H: StreamingHash>(&self, state: &mut H) {
        let ($($name,)+) = self;
        $($name.hash_into(state);)+
      }
    }
  };
}

impl_tuple!(A);
impl_tuple!(A B);
impl_tuple!(A B C);
impl_tuple!(A B C D);

/// [`Hasher`] over a [`StreamingHash`].
///
/// Integer writes are little-endian on every platform. [`Hasher::finish`]
/// takes `&self`, so it finishes a clone of the running state.
pub struct StdHasher<H> {
  state: H,
}

impl<H: StreamingHash> StdHasher<H> {
  /// Start a hasher keyed with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(seed: H::Seed) -> Self {
    Self {
      state: H::with_seed(seed),
    }
  }

  /// Unwrap the streaming state.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> H {
    self.state
  }
}

impl<H: fmt::Debug> fmt::Debug for StdHasher<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StdHasher").field("state", &self.state).finish()
  }
}

impl<H> Hasher for StdHasher<H>
where
  H: StreamingHash + Clone,
  H::Output: Into<u64>,
{
  #[inline]
  fn finish(&self) -> u64 {
    self.state.clone().finish().into()
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.state.update(bytes);
  }

  #[inline]
  fn write_u8(&mut self, i: u8) {
    self.state.write_u8(i);
  }

  #[inline]
  fn write_u16(&mut self, i: u16) {
    self.state.write_u16(i);
  }

  #[inline]
  fn write_u32(&mut self, i: u32) {
    self.state.write_u32(i);
  }

  #[inline]
  fn write_u64(&mut self, i: u64) {
    self.state.write_u64(i);
  }

  #[inline]
  fn write_usize(&mut self, i: usize) {
    self.state.write_u64(i as u64);
  }
}

/// [`BuildHasher`] producing [`StdHasher`]s that all share one seed.
pub struct BuildStdHasher<H: StreamingHash> {
  seed: H::Seed,
}

impl<H: StreamingHash> BuildStdHasher<H> {
  /// Every built hasher is keyed with `seed`.
  #[inline]
  #[must_use]
  pub const fn new(seed: H::Seed) -> Self {
    Self { seed }
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> H::Seed {
    self.seed
  }
}

/// Keyed with the process-wide default seed of `H`.
impl<H: StreamingHash> Default for BuildStdHasher<H> {
  #[inline]
  fn default() -> Self {
    Self::new(H::default_seed())
  }
}

impl<H: StreamingHash> Clone for BuildStdHasher<H> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<H: StreamingHash> Copy for BuildStdHasher<H> {}

impl<H: StreamingHash> fmt::Debug for BuildStdHasher<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BuildStdHasher")
      .field("algorithm", &H::NAME)
      .field("seed", &self.seed)
      .finish()
  }
}

impl<H> BuildHasher for BuildStdHasher<H>
where
  H: StreamingHash + Clone,
  H::Output: Into<u64>,
{
  type Hasher = StdHasher<H>;

  #[inline]
  fn build_hasher(&self) -> StdHasher<H> {
    StdHasher::with_seed(self.seed)
  }
}

#[cfg(test)]
mod tests {
  use traits::{BlockHash, Combine};

  use super::*;
  use crate::fast::{Murmur3, SipHash13, XxHash64};

  #[test]
  fn integers_encode_little_endian() {
    let direct = Murmur3::hash_with_seed(5, &0x0102_0304u32.to_le_bytes());
    assert_eq!(hash_value::<Murmur3, _>(Some(5), &0x0102_0304u32), direct);
    assert_eq!(hash_value::<Murmur3, _>(Some(5), &-1i16), Murmur3::hash_with_seed(5, &[0xff, 0xff]));
  }

  #[test]
  fn usize_is_widened_to_64_bits() {
    assert_eq!(
      hash_value::<XxHash64, _>(Some(0), &7usize),
      hash_value::<XxHash64, _>(Some(0), &7u64)
    );
  }

  #[test]
  fn strings_are_length_prefixed() {
    let mut expected = 3u64.to_le_bytes().to_vec();
    expected.extend_from_slice(b"abc");
    assert_eq!(hash_value::<Murmur3, _>(Some(1), "abc"), Murmur3::hash_with_seed(1, &expected));
    assert_eq!(
      hash_value::<Murmur3, _>(Some(1), &String::from("abc")),
      hash_value::<Murmur3, _>(Some(1), "abc")
    );
  }

  #[test]
  fn length_prefix_separates_adjacent_fields() {
    let a = hash_value::<SipHash13, _>(Some([1, 2]), &("ab", "c"));
    let b = hash_value::<SipHash13, _>(Some([1, 2]), &("a", "bc"));
    assert_ne!(a, b);
  }

  #[test]
  fn option_tag_distinguishes_none_from_zero() {
    let none = hash_value::<Murmur3, _>(Some(0), &None::<u8>);
    let zero = hash_value::<Murmur3, _>(Some(0), &Some(0u8));
    assert_ne!(none, zero);
    assert_eq!(zero, Murmur3::hash_with_seed(0, &[1, 0]));
  }

  #[test]
  fn build_hasher_is_deterministic_for_a_fixed_seed() {
    let build = BuildStdHasher::<XxHash64>::new(42);
    assert_eq!(build.hash_one("key"), build.hash_one("key"));

    let mut map = std::collections::HashMap::with_hasher(build);
    map.insert("a", 1);
    map.insert("b", 2);
    assert_eq!(map.get("a"), Some(&1));
  }

  #[test]
  fn std_hasher_finish_does_not_consume_state() {
    let mut h = StdHasher::<Murmur3>::with_seed(3);
    h.write_u32(1);
    let first = h.finish();
    assert_eq!(h.finish(), first);
    h.write_u32(2);
    assert_eq!(h.finish(), u64::from(Murmur3::combine_with_seed(3, [1, 2])));
  }
}
