//! xxHash64 (**NOT CRYPTO**).
//!
//! Same shape as xxHash32 with `u64` lanes over 32-byte stripes. Converged
//! lanes are merged back through one extra round each, and the remainder is
//! consumed 8, 4, then 1 byte at a time.

#![allow(clippy::indexing_slicing)] // Fixed-size lane arrays

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{Algorithm, buffer::StreamBuffer, fast::unseeded, seed, util::pack_pair};

/// Seed of the published xxHash64 vectors.
pub const TEST_VECTOR_SEED: u64 = 0;

const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

const STRIPE_LEN: usize = 32;

#[inline(always)]
const fn round(acc: u64, input: u64) -> u64 {
  acc.wrapping_add(input.wrapping_mul(PRIME64_2)).rotate_left(31).wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn merge_round(acc: u64, lane: u64) -> u64 {
  (acc ^ round(0, lane)).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4)
}

#[inline(always)]
const fn init_lanes(seed: u64) -> [u64; 4] {
  [
    seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
    seed.wrapping_add(PRIME64_2),
    seed,
    seed.wrapping_sub(PRIME64_1),
  ]
}

#[inline(always)]
fn mix_stripe(lanes: &mut [u64; 4], stripe: &[u8; STRIPE_LEN]) {
  let (words, _) = stripe.as_chunks::<8>();
  for (lane, word) in lanes.iter_mut().zip(words) {
    *lane = round(*lane, u64::from_le_bytes(*word));
  }
}

#[inline(always)]
const fn converge(lanes: &[u64; 4]) -> u64 {
  let mut h = lanes[0]
    .rotate_left(1)
    .wrapping_add(lanes[1].rotate_left(7))
    .wrapping_add(lanes[2].rotate_left(12))
    .wrapping_add(lanes[3].rotate_left(18));
  h = merge_round(h, lanes[0]);
  h = merge_round(h, lanes[1]);
  h = merge_round(h, lanes[2]);
  merge_round(h, lanes[3])
}

#[inline(always)]
const fn tail_u64(h: u64, word: u64) -> u64 {
  (h ^ round(0, word)).rotate_left(27).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4)
}

#[inline(always)]
const fn tail_u32(h: u64, word: u32) -> u64 {
  (h ^ (word as u64).wrapping_mul(PRIME64_1))
    .rotate_left(23)
    .wrapping_mul(PRIME64_2)
    .wrapping_add(PRIME64_3)
}

#[inline(always)]
const fn tail_u8(h: u64, byte: u8) -> u64 {
  (h ^ (byte as u64).wrapping_mul(PRIME64_5)).rotate_left(11).wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn avalanche(mut h: u64) -> u64 {
  h ^= h >> 33;
  h = h.wrapping_mul(PRIME64_2);
  h ^= h >> 29;
  h = h.wrapping_mul(PRIME64_3);
  h ^ (h >> 32)
}

/// Consume the sub-stripe remainder (fewer than 32 bytes) and avalanche.
#[inline]
fn finish(mut h: u64, tail: &[u8]) -> u64 {
  let (words, rest) = tail.as_chunks::<8>();
  for word in words {
    h = tail_u64(h, u64::from_le_bytes(*word));
  }
  let (halves, bytes) = rest.as_chunks::<4>();
  for half in halves {
    h = tail_u32(h, u32::from_le_bytes(*half));
  }
  for &byte in bytes {
    h = tail_u8(h, byte);
  }
  avalanche(h)
}

#[inline]
fn hash_bytes(seed: u64, data: &[u8]) -> u64 {
  let (stripes, tail) = data.as_chunks::<STRIPE_LEN>();
  let h = if stripes.is_empty() {
    seed.wrapping_add(PRIME64_5)
  } else {
    let mut lanes = init_lanes(seed);
    for stripe in stripes {
      mix_stripe(&mut lanes, stripe);
    }
    converge(&lanes)
  };
  finish(h.wrapping_add(data.len() as u64), tail)
}

/// Streaming xxHash64.
#[derive(Clone, Debug)]
pub struct XxHash64 {
  seed: u64,
  lanes: [u64; 4],
  buffer: StreamBuffer<STRIPE_LEN>,
  total_len: u64,
}

impl Seedable for XxHash64 {
  type Seed = u64;
  const NAME: &'static str = "xxhash64";

  #[inline]
  fn default_seed() -> u64 {
    seed::default_for(Algorithm::XxHash64)
  }

  #[inline]
  fn test_vector_seed() -> u64 {
    TEST_VECTOR_SEED
  }
}

impl BlockHash for XxHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    hash_bytes(seed, data)
  }
}

impl StreamingHash for XxHash64 {
  #[inline]
  fn with_seed(seed: u64) -> Self {
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

  fn finish(self) -> u64 {
    let h = if self.total_len >= STRIPE_LEN as u64 {
      converge(&self.lanes)
    } else {
      self.seed.wrapping_add(PRIME64_5)
    };
    finish(h.wrapping_add(self.total_len), self.buffer.filled())
  }
}

impl Combine for XxHash64 {
  fn combine_with_seed<const N: usize>(seed: u64, codes: [u32; N]) -> u64 {
    check_arity::<N>();
    let (pairs, odd) = codes.as_chunks::<2>();
    let mut h = if pairs.len() == 4 {
      let mut lanes = init_lanes(seed);
      for (lane, pair) in lanes.iter_mut().zip(pairs) {
        *lane = round(*lane, pack_pair(pair[0], pair[1]));
      }
      converge(&lanes).wrapping_add(STRIPE_LEN as u64)
    } else {
      let mut h = seed.wrapping_add(PRIME64_5).wrapping_add((4 * N) as u64);
      for pair in pairs {
        h = tail_u64(h, pack_pair(pair[0], pair[1]));
      }
      h
    };
    for &code in odd {
      h = tail_u32(h, code);
    }
    avalanche(h)
  }
}

unseeded! {
  /// xxHash64 pinned to seed 0.
  XxHash64Unseeded => XxHash64, seed = 0, name = "xxhash64-unseeded"
}
