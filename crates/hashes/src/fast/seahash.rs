//! SeaHash (**NOT CRYPTO**).
//!
//! Four `u64` lanes. The `k`-th little-endian 8-byte word (the last one
//! zero-extended) is XORed into lane `k mod 4`, which is then diffused with a
//! multiply / data-dependent shift / multiply permutation. The lanes are XORed
//! together with the byte length and diffused once more.
//!
//! [`SeaHash`] uses the standard lane keys; [`SeaHashSeeded`] takes all four.

#![allow(clippy::indexing_slicing)] // Lane index is always `k % 4`

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{
  Algorithm, buffer::StreamBuffer, bytes::read_partial_u64_le, fast::unseeded, seed, util::pack_pair,
};

/// Lane keys of the standard (unseeded) SeaHash.
pub const DEFAULT_KEYS: [u64; 4] = [
  0x16f1_1fe8_9b0d_677c,
  0xb480_a793_d8e6_c86c,
  0x6fe2_e5aa_f078_ebc9,
  0x14f9_94a4_c525_9381,
];

const PCG: u64 = 0x6eed_0e9d_a4d9_4a4f;
const BLOCK_LEN: usize = 32;

/// Bijective diffusion: multiply, shift by a value-dependent amount, multiply.
#[inline(always)]
pub const fn diffuse(mut x: u64) -> u64 {
  x = x.wrapping_mul(PCG);
  let a = x >> 32;
  let b = x >> 60;
  x ^= a >> b;
  x.wrapping_mul(PCG)
}

#[derive(Clone, Copy, Debug)]
struct Lanes {
  v: [u64; 4],
  words: u64,
}

impl Lanes {
  #[inline(always)]
  const fn new(keys: [u64; 4]) -> Self {
    Self { v: keys, words: 0 }
  }

  #[inline(always)]
  fn push(&mut self, word: u64) {
    let lane = &mut self.v[(self.words % 4) as usize];
    *lane = diffuse(*lane ^ word);
    self.words = self.words.wrapping_add(1);
  }

  #[inline(always)]
  fn push_block(&mut self, block: &[u8; BLOCK_LEN]) {
    let (words, _) = block.as_chunks::<8>();
    for word in words {
      self.push(u64::from_le_bytes(*word));
    }
  }

  /// Absorb the final partial words, then fold in the length.
  #[inline]
  fn finish(mut self, tail: &[u8], len: u64) -> u64 {
    let (words, rest) = tail.as_chunks::<8>();
    for word in words {
      self.push(u64::from_le_bytes(*word));
    }
    if !rest.is_empty() {
      self.push(read_partial_u64_le(rest, 0));
    }
    let [a, b, c, d] = self.v;
    diffuse(a ^ b ^ c ^ d ^ len)
  }
}

#[inline]
fn hash_bytes(keys: [u64; 4], data: &[u8]) -> u64 {
  let mut lanes = Lanes::new(keys);
  let (blocks, tail) = data.as_chunks::<BLOCK_LEN>();
  for block in blocks {
    lanes.push_block(block);
  }
  lanes.finish(tail, data.len() as u64)
}

/// Streaming SeaHash keyed with four lane keys.
#[derive(Clone, Debug)]
pub struct SeaHashSeeded {
  lanes: Lanes,
  buffer: StreamBuffer<BLOCK_LEN>,
  total_len: u64,
}

impl Seedable for SeaHashSeeded {
  type Seed = [u64; 4];
  const NAME: &'static str = "seahash-seeded";

  #[inline]
  fn default_seed() -> [u64; 4] {
    seed::default_for(Algorithm::SeaHash)
  }

  #[inline]
  fn test_vector_seed() -> [u64; 4] {
    DEFAULT_KEYS
  }
}

impl BlockHash for SeaHashSeeded {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn hash_with_seed(seed: [u64; 4], data: &[u8]) -> u64 {
    hash_bytes(seed, data)
  }
}

impl StreamingHash for SeaHashSeeded {
  #[inline]
  fn with_seed(seed: [u64; 4]) -> Self {
    Self {
      lanes: Lanes::new(seed),
      buffer: StreamBuffer::new(),
      total_len: 0,
    }
  }

  fn update(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let lanes = &mut self.lanes;
    self.buffer.absorb(data, |block| lanes.push_block(block));
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    self.buffer.len()
  }

  #[inline]
  fn finish(self) -> u64 {
    self.lanes.finish(self.buffer.filled(), self.total_len)
  }
}

impl Combine for SeaHashSeeded {
  fn combine_with_seed<const N: usize>(seed: [u64; 4], codes: [u32; N]) -> u64 {
    check_arity::<N>();
    let mut lanes = Lanes::new(seed);
    let (pairs, odd) = codes.as_chunks::<2>();
    for &[lo, hi] in pairs {
      lanes.push(pack_pair(lo, hi));
    }
    for &code in odd {
      lanes.push(pack_pair(code, 0));
    }
    let [a, b, c, d] = lanes.v;
    diffuse(a ^ b ^ c ^ d ^ (4 * N) as u64)
  }
}

unseeded! {
  /// SeaHash with the standard lane keys.
  SeaHash => SeaHashSeeded, seed = DEFAULT_KEYS, name = "seahash"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reference_vector() {
    assert_eq!(SeaHash::hash(None, b"to be or not to be"), 1_988_685_042_348_123_509);
  }

  #[test]
  fn diffuse_is_not_identity_on_small_values() {
    assert_eq!(diffuse(0), 0);
    assert_ne!(diffuse(1), 1);
  }

  #[test]
  fn streaming_matches_block_for_every_tail() {
    let data: Vec<u8> = (0..100u8).map(|i| i ^ 0x5a).collect();
    for len in 0..data.len() {
      let mut h = SeaHashSeeded::with_seed([1, 2, 3, 4]);
      for chunk in data[..len].chunks(11) {
        h.update(chunk);
      }
      assert_eq!(h.finish(), SeaHashSeeded::hash_with_seed([1, 2, 3, 4], &data[..len]), "len = {len}");
    }
  }

  #[test]
  fn combine_matches_block_of_le_codes() {
    let codes = [5u32, 6, 7, 8, 9, 10, 11];
    let bytes: Vec<u8> = codes.iter().flat_map(|c| c.to_le_bytes()).collect();
    assert_eq!(SeaHash::combine(None, codes), SeaHash::hash(None, &bytes));
  }
}
