//! SpookyHash V2 (**NOT CRYPTO**).
//!
//! 128-bit output from a 128-bit seed. Messages shorter than 192 bytes use a
//! four-lane "short" hash over 32-byte groups. Longer messages drive a
//! twelve-lane state over 96-byte blocks; the final partial block is
//! zero-padded with its length in the last byte, added into the state, and
//! three rounds of the end permutation follow.

#![allow(clippy::indexing_slicing)] // Fixed 12-lane state; indices are reduced mod 12

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{
  Algorithm,
  buffer::StreamBuffer,
  bytes::{codes_to_le_bytes, read_partial_u64_le, read_u64_le},
  seed,
};

/// Seed of the published SpookyV2 vectors.
pub const TEST_VECTOR_SEED: [u64; 2] = [0, 0];

const SC_CONST: u64 = 0xdead_beef_dead_beef;
const LANES: usize = 12;
const BLOCK_LEN: usize = LANES * 8;
const SHORT_LIMIT: usize = 2 * BLOCK_LEN;

const MIX_ROT: [u32; LANES] = [11, 32, 43, 31, 17, 28, 39, 57, 55, 54, 22, 46];
const END_ROT: [u32; LANES] = [44, 15, 34, 21, 38, 33, 10, 13, 38, 53, 42, 54];

/// `(rotate, i, j, k)`: `h[i] = rotl(h[i], r) + h[j]; h[k] ^= h[i]`.
const SHORT_MIX: [(u32, usize, usize, usize); 12] = [
  (50, 2, 3, 0),
  (52, 3, 0, 1),
  (30, 0, 1, 2),
  (41, 1, 2, 3),
  (54, 2, 3, 0),
  (48, 3, 0, 1),
  (38, 0, 1, 2),
  (37, 1, 2, 3),
  (62, 2, 3, 0),
  (34, 3, 0, 1),
  (5, 0, 1, 2),
  (36, 1, 2, 3),
];

/// `(i, j, rotate)`: `h[i] ^= h[j]; h[j] = rotl(h[j], r); h[i] += h[j]`.
const SHORT_END: [(usize, usize, u32); 11] = [
  (3, 2, 15),
  (0, 3, 52),
  (1, 0, 26),
  (2, 1, 51),
  (3, 2, 28),
  (0, 3, 9),
  (1, 0, 47),
  (2, 1, 54),
  (3, 2, 32),
  (0, 3, 25),
  (1, 0, 63),
];

#[inline(always)]
fn short_mix(h: &mut [u64; 4]) {
  for (r, i, j, k) in SHORT_MIX {
    h[i] = h[i].rotate_left(r).wrapping_add(h[j]);
    h[k] ^= h[i];
  }
}

#[inline(always)]
fn short_end(h: &mut [u64; 4]) {
  for (i, j, r) in SHORT_END {
    h[i] ^= h[j];
    h[j] = h[j].rotate_left(r);
    h[i] = h[i].wrapping_add(h[j]);
  }
}

fn short_hash(seed: [u64; 2], data: &[u8]) -> (u64, u64) {
  let len = data.len();
  let mut h = [seed[0], seed[1], SC_CONST, SC_CONST];
  let mut offset = 0;
  let mut remainder = len % 32;

  if len > 15 {
    let (groups, _) = data.as_chunks::<32>();
    for group in groups {
      h[2] = h[2].wrapping_add(read_u64_le(group, 0));
      h[3] = h[3].wrapping_add(read_u64_le(group, 8));
      short_mix(&mut h);
      h[0] = h[0].wrapping_add(read_u64_le(group, 16));
      h[1] = h[1].wrapping_add(read_u64_le(group, 24));
    }
    offset = groups.len() * 32;
    if remainder >= 16 {
      h[2] = h[2].wrapping_add(read_u64_le(data, offset));
      h[3] = h[3].wrapping_add(read_u64_le(data, offset + 8));
      short_mix(&mut h);
      offset += 16;
      remainder -= 16;
    }
  }

  h[3] = h[3].wrapping_add((len as u64) << 56);
  if remainder == 0 {
    h[2] = h[2].wrapping_add(SC_CONST);
    h[3] = h[3].wrapping_add(SC_CONST);
  } else {
    h[2] = h[2].wrapping_add(read_partial_u64_le(data, offset));
    h[3] = h[3].wrapping_add(read_partial_u64_le(data, offset + 8));
  }
  short_end(&mut h);
  (h[0], h[1])
}

#[inline(always)]
const fn init_long(seed: [u64; 2]) -> [u64; LANES] {
  let [a, b] = seed;
  [a, b, SC_CONST, a, b, SC_CONST, a, b, SC_CONST, a, b, SC_CONST]
}

#[inline(always)]
fn mix(s: &mut [u64; LANES], block: &[u8; BLOCK_LEN]) {
  let (words, _) = block.as_chunks::<8>();
  for (i, word) in words.iter().enumerate() {
    s[i] = s[i].wrapping_add(u64::from_le_bytes(*word));
    s[(i + 2) % LANES] ^= s[(i + 10) % LANES];
    s[(i + 11) % LANES] ^= s[i];
    s[i] = s[i].rotate_left(MIX_ROT[i]);
    s[(i + 11) % LANES] = s[(i + 11) % LANES].wrapping_add(s[(i + 1) % LANES]);
  }
}

#[inline(always)]
fn end_partial(h: &mut [u64; LANES]) {
  for (i, r) in END_ROT.into_iter().enumerate() {
    h[(i + 11) % LANES] = h[(i + 11) % LANES].wrapping_add(h[(i + 1) % LANES]);
    h[(i + 2) % LANES] ^= h[(i + 11) % LANES];
    h[(i + 1) % LANES] = h[(i + 1) % LANES].rotate_left(r);
  }
}

/// Fold the final (possibly empty) partial block and run the end rounds.
fn end(mut h: [u64; LANES], tail: &[u8]) -> (u64, u64) {
  let mut block = [0u8; BLOCK_LEN];
  for (dst, src) in block.iter_mut().zip(tail) {
    *dst = *src;
  }
  block[BLOCK_LEN - 1] = tail.len() as u8;
  let (words, _) = block.as_chunks::<8>();
  for (lane, word) in h.iter_mut().zip(words) {
    *lane = lane.wrapping_add(u64::from_le_bytes(*word));
  }
  end_partial(&mut h);
  end_partial(&mut h);
  end_partial(&mut h);
  (h[0], h[1])
}

#[inline(always)]
const fn join(halves: (u64, u64)) -> u128 {
  (halves.0 as u128) | ((halves.1 as u128) << 64)
}

fn hash128(seed: [u64; 2], data: &[u8]) -> u128 {
  if data.len() < SHORT_LIMIT {
    return join(short_hash(seed, data));
  }
  let mut h = init_long(seed);
  let (blocks, tail) = data.as_chunks::<BLOCK_LEN>();
  for block in blocks {
    mix(&mut h, block);
  }
  join(end(h, tail))
}

/// Low 64 bits of the 128-bit hash seeded with `[seed, seed]`.
#[inline]
#[must_use]
pub fn hash64(seed: u64, data: &[u8]) -> u64 {
  hash128([seed, seed], data) as u64
}

/// Low 32 bits of the 128-bit hash seeded with `[seed, seed]`.
#[inline]
#[must_use]
pub fn hash32(seed: u32, data: &[u8]) -> u32 {
  let seed = u64::from(seed);
  hash128([seed, seed], data) as u32
}

/// Streaming SpookyHash V2.
///
/// Bytes are staged in a 192-byte short buffer; once it fills, the hasher
/// switches to the twelve-lane state and streams 96-byte blocks.
#[derive(Clone, Debug)]
pub struct SpookyV2 {
  seed: [u64; 2],
  short: StreamBuffer<SHORT_LIMIT>,
  state: Option<[u64; LANES]>,
  block: StreamBuffer<BLOCK_LEN>,
}

impl Seedable for SpookyV2 {
  type Seed = [u64; 2];
  const NAME: &'static str = "spookyv2";

  #[inline]
  fn default_seed() -> [u64; 2] {
    seed::default_for(Algorithm::SpookyV2)
  }

  #[inline]
  fn test_vector_seed() -> [u64; 2] {
    TEST_VECTOR_SEED
  }
}

impl BlockHash for SpookyV2 {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;

  #[inline]
  fn hash_with_seed(seed: [u64; 2], data: &[u8]) -> u128 {
    hash128(seed, data)
  }
}

impl StreamingHash for SpookyV2 {
  #[inline]
  fn with_seed(seed: [u64; 2]) -> Self {
    Self {
      seed,
      short: StreamBuffer::new(),
      state: None,
      block: StreamBuffer::new(),
    }
  }

  fn update(&mut self, mut data: &[u8]) {
    if self.state.is_none() {
      let taken = self.short.append(data, 0);
      data = data.get(taken..).unwrap_or_default();
      if !self.short.is_full() {
        return;
      }
      let mut h = init_long(self.seed);
      let (halves, _) = self.short.as_array().as_chunks::<BLOCK_LEN>();
      for half in halves {
        mix(&mut h, half);
      }
      self.short.clear();
      self.state = Some(h);
    }
    if let Some(h) = self.state.as_mut() {
      self.block.absorb(data, |block| mix(h, block));
    }
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    self.short.len() + self.block.len()
  }

  fn finish(self) -> u128 {
    match self.state {
      None => join(short_hash(self.seed, self.short.filled())),
      Some(h) => join(end(h, self.block.filled())),
    }
  }
}

impl Combine for SpookyV2 {
  fn combine_with_seed<const N: usize>(seed: [u64; 2], codes: [u32; N]) -> u128 {
    check_arity::<N>();
    let (image, len) = codes_to_le_bytes(codes);
    join(short_hash(seed, image.get(..len).unwrap_or_default()))
  }
}
