//! xxHash32 (**NOT CRYPTO**).
//!
//! Inputs of at least one 16-byte stripe run four independent `u32` lanes over
//! each stripe, then converge them into a scalar. Shorter inputs seed the
//! scalar directly with `seed + PRIME32_5`. Either way the length is added and
//! the remaining bytes are consumed 4 bytes, then 1 byte, at a time.

#![allow(clippy::indexing_slicing)] // Fixed-size lane arrays

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{Algorithm, buffer::StreamBuffer, fast::unseeded, seed};

/// Seed of the published xxHash32 vectors.
pub const TEST_VECTOR_SEED: u32 = 0;

const PRIME32_1: u32 = 0x9E37_79B1;
const PRIME32_2: u32 = 0x85EB_CA77;
const PRIME32_3: u32 = 0xC2B2_AE3D;
const PRIME32_4: u32 = 0x27D4_EB2F;
const PRIME32_5: u32 = 0x1656_67B1;

const STRIPE_LEN: usize = 16;

#[inline(always)]
const fn round(acc: u32, input: u32) -> u32 {
  acc.wrapping_add(input.wrapping_mul(PRIME32_2)).rotate_left(13).wrapping_mul(PRIME32_1)
}

#[inline(always)]
const fn init_lanes(seed: u32) -> [u32; 4] {
  [
    seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
    seed.wrapping_add(PRIME32_2),
    seed,
    seed.wrapping_sub(PRIME32_1),
  ]
}

#[inline(always)]
fn mix_stripe(lanes: &mut [u32; 4], stripe: &[u8; STRIPE_LEN]) {
  let (words, _) = stripe.as_chunks::<4>();
  for (lane, word) in lanes.iter_mut().zip(words) {
    *lane = round(*lane, u32::from_le_bytes(*word));
  }
}

#[inline(always)]
const fn converge(lanes: &[u32; 4]) -> u32 {
  lanes[0]
    .rotate_left(1)
    .wrapping_add(lanes[1].rotate_left(7))
    .wrapping_add(lanes[2].rotate_left(12))
    .wrapping_add(lanes[3].rotate_left(18))
}

#[inline(always)]
const fn tail_word(h: u32, word: u32) -> u32 {
  h.wrapping_add(word.wrapping_mul(PRIME32_3)).rotate_left(17).wrapping_mul(PRIME32_4)
}

#[inline(always)]
const fn tail_byte(h: u32, byte: u8) -> u32 {
  h.wrapping_add((byte as u32).wrapping_mul(PRIME32_5)).rotate_left(11).wrapping_mul(PRIME32_1)
}

#[inline(always)]
const fn avalanche(mut h: u32) -> u32 {
  h ^= h >> 15;
  h = h.wrapping_mul(PRIME32_2);
  h ^= h >> 13;
  h = h.wrapping_mul(PRIME32_3);
  h ^ (h >> 16)
}

/// Consume the sub-stripe remainder (fewer than 16 bytes) and avalanche.
#[inline]
fn finish(mut h: u32, tail: &[u8]) -> u32 {
  let (words, bytes) = tail.as_chunks::<4>();
  for word in words {
    h = tail_word(h, u32::from_le_bytes(*word));
  }
  for &byte in bytes {
    h = tail_byte(h, byte);
  }
  avalanche(h)
}

#[inline]
fn hash_bytes(seed: u32, data: &[u8]) -> u32 {
  let (stripes, tail) = data.as_chunks::<STRIPE_LEN>();
  let h = if stripes.is_empty() {
    seed.wrapping_add(PRIME32_5)
  } else {
    let mut lanes = init_lanes(seed);
    for stripe in stripes {
      mix_stripe(&mut lanes, stripe);
    }
    converge(&lanes)
  };
  finish(h.wrapping_add(data.len() as u32), tail)
}

/// Streaming xxHash32.
#[derive(Clone, Debug)]
pub struct XxHash32 {
  seed: u32,
  lanes: [u32; 4],
  buffer: StreamBuffer<STRIPE_LEN>,
  total_len: u64,
}

impl Seedable for XxHash32 {
  type Seed = u32;
  const NAME: &'static str = "xxhash32";

  #[inline]
  fn default_seed() -> u32 {
    seed::default_for(Algorithm::XxHash32)
  }

  #[inline]
  fn test_vector_seed() -> u32 {
    TEST_VECTOR_SEED
  }
}

impl BlockHash for XxHash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    hash_bytes(seed, data)
  }
}

impl StreamingHash for XxHash32 {
  #[inline]
  fn with_seed(seed: u32) -> Self {
    Self {
      seed,
      lanes: init_lanes(seed),
      buffer: StreamBuffer::new(),
      total_len: 0,
    }
  }

  fn update(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let lanes = &mut self.lanes;
    self.buffer.absorb(data, |stripe| mix_stripe(lanes, stripe));
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    self.buffer.len()
  }

  fn finish(self) -> u32 {
    let h = if self.total_len >= STRIPE_LEN as u64 {
      converge(&self.lanes)
    } else {
      self.seed.wrapping_add(PRIME32_5)
    };
    finish(h.wrapping_add(self.total_len as u32), self.buffer.filled())
  }
}

impl Combine for XxHash32 {
  fn combine_with_seed<const N: usize>(seed: u32, codes: [u32; N]) -> u32 {
    check_arity::<N>();
    let (stripes, rest) = codes.as_chunks::<4>();
    let mut h = if stripes.is_empty() {
      seed.wrapping_add(PRIME32_5)
    } else {
      let mut lanes = init_lanes(seed);
      for stripe in stripes {
        for (lane, &code) in lanes.iter_mut().zip(stripe) {
          *lane = round(*lane, code);
        }
      }
      converge(&lanes)
    };
    h = h.wrapping_add((4 * N) as u32);
    for &code in rest {
      h = tail_word(h, code);
    }
    avalanche(h)
  }
}

unseeded! {
  /// xxHash32 pinned to seed 0.
  XxHash32Unseeded => XxHash32, seed = 0, name = "xxhash32-unseeded"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_constants() {
    assert_eq!(XxHash32::hash_with_seed(0, b""), 0x02CC_5D05);
    assert_eq!(XxHash32Unseeded::hash(None, b""), 0x02CC_5D05);
  }

  #[test]
  fn stripe_boundary_streams_like_block() {
    let data: Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(37)).collect();
    for len in [15usize, 16, 17, 31, 32, 33, 64] {
      let mut h = XxHash32::with_seed(0x1234_5678);
      let (a, b) = data[..len].split_at(len / 3);
      h.update(a);
      h.update(b);
      assert_eq!(h.finish(), XxHash32::hash_with_seed(0x1234_5678, &data[..len]), "len = {len}");
    }
  }

  #[test]
  fn combine_crosses_the_stripe_threshold() {
    let codes = [1u32, 2, 3, 4, 5, 6, 7, 8];
    let bytes: Vec<u8> = codes.iter().flat_map(|c| c.to_le_bytes()).collect();
    assert_eq!(XxHash32::combine_with_seed(9, codes), XxHash32::hash_with_seed(9, &bytes));
    assert_eq!(
      XxHash32::combine_with_seed(9, [1u32, 2, 3, 4, 5]),
      XxHash32::hash_with_seed(9, &bytes[..20])
    );
  }
}
