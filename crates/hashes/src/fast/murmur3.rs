//! MurmurHash3, x86 32-bit variant (**NOT CRYPTO**).
//!
//! One `u32` accumulator. Each 4-byte word is scrambled by two odd constants
//! around a 15-bit rotate, folded in, and the accumulator is rotated by 13 and
//! stepped by `h * 5 + 0xe6546b64`. The trailing partial word is scrambled but
//! not stepped; the length is folded in before [`fmix32`].

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{Algorithm, buffer::StreamBuffer, bytes::read_partial_u32_le, fast::unseeded, seed, util::fmix32};

/// Seed of the published MurmurHash3 vectors.
pub const TEST_VECTOR_SEED: u32 = 0;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

#[inline(always)]
const fn scramble(k: u32) -> u32 {
  k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Fold one full word into the accumulator.
#[inline(always)]
pub(crate) const fn mix(h: u32, word: u32) -> u32 {
  (h ^ scramble(word)).rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64)
}

/// Fold the trailing partial word (0 when there is none) and the length.
///
/// `scramble(0) == 0`, so an empty tail is a no-op without a branch.
#[inline(always)]
pub(crate) const fn finish(h: u32, tail: u32, len: u32) -> u32 {
  fmix32(h ^ scramble(tail) ^ len)
}

#[inline]
fn hash_bytes(seed: u32, data: &[u8]) -> u32 {
  let (words, tail) = data.as_chunks::<4>();
  let mut h = seed;
  for word in words {
    h = mix(h, u32::from_le_bytes(*word));
  }
  finish(h, read_partial_u32_le(tail, 0), data.len() as u32)
}

/// Streaming MurmurHash3-x86-32.
#[derive(Clone, Debug)]
pub struct Murmur3 {
  h: u32,
  buffer: StreamBuffer<4>,
  total_len: u64,
}

impl Seedable for Murmur3 {
  type Seed = u32;
  const NAME: &'static str = "murmur3-x86-32";

  #[inline]
  fn default_seed() -> u32 {
    seed::default_for(Algorithm::Murmur3)
  }

  #[inline]
  fn test_vector_seed() -> u32 {
    TEST_VECTOR_SEED
  }
}

impl BlockHash for Murmur3 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    hash_bytes(seed, data)
  }
}

impl StreamingHash for Murmur3 {
  #[inline]
  fn with_seed(seed: u32) -> Self {
    Self {
      h: seed,
      buffer: StreamBuffer::new(),
      total_len: 0,
    }
  }

  fn update(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let h = &mut self.h;
    self.buffer.absorb(data, |word| *h = mix(*h, u32::from_le_bytes(*word)));
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    self.buffer.len()
  }

  #[inline]
  fn finish(self) -> u32 {
    finish(self.h, read_partial_u32_le(self.buffer.filled(), 0), self.total_len as u32)
  }
}

impl Combine for Murmur3 {
  #[inline]
  fn combine_with_seed<const N: usize>(seed: u32, codes: [u32; N]) -> u32 {
    check_arity::<N>();
    let mut h = seed;
    for code in codes {
      h = mix(h, code);
    }
    finish(h, 0, (4 * N) as u32)
  }
}

unseeded! {
  /// MurmurHash3-x86-32 pinned to seed 0.
  Murmur3Unseeded => Murmur3, seed = 0, name = "murmur3-x86-32-unseeded"
}
