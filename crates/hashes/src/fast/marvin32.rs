//! Marvin32 (**NOT CRYPTO**).
//!
//! Two `u32` registers keyed from a 64-bit seed (low half in `p0`, high half
//! in `p1`). Each 4-byte word is added to `p0` and run through one ARX block.
//! The tail is padded with a single `0x80` byte, added, and followed by two
//! blocks. The length is not folded in separately; the padding marker encodes
//! where the message ends.

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{Algorithm, buffer::StreamBuffer, bytes::read_partial_u32_le, seed};

/// Seed of the published Marvin vectors.
pub const TEST_VECTOR_SEED: u64 = 0x004F_B61A_001B_DBCC;

#[derive(Clone, Copy, Debug)]
struct State {
  p0: u32,
  p1: u32,
}

impl State {
  #[inline(always)]
  const fn new(seed: u64) -> Self {
    Self {
      p0: seed as u32,
      p1: (seed >> 32) as u32,
    }
  }

  #[inline(always)]
  const fn block(&mut self) {
    self.p1 ^= self.p0;
    self.p0 = self.p0.rotate_left(20);
    self.p0 = self.p0.wrapping_add(self.p1);
    self.p1 = self.p1.rotate_left(9);
    self.p1 ^= self.p0;
    self.p0 = self.p0.rotate_left(27);
    self.p0 = self.p0.wrapping_add(self.p1);
    self.p1 = self.p1.rotate_left(19);
  }

  #[inline(always)]
  const fn word(&mut self, w: u32) {
    self.p0 = self.p0.wrapping_add(w);
    self.block();
  }

  /// `tail` holds fewer than 4 bytes.
  #[inline(always)]
  fn finish(mut self, tail: &[u8]) -> u64 {
    let marker = 0x80u32 << (8 * tail.len());
    self.p0 = self.p0.wrapping_add(read_partial_u32_le(tail, 0) | marker);
    self.block();
    self.block();
    (u64::from(self.p1) << 32) | u64::from(self.p0)
  }
}

#[inline]
fn hash_full(seed: u64, data: &[u8]) -> u64 {
  let mut state = State::new(seed);
  let (words, tail) = data.as_chunks::<4>();
  for word in words {
    state.word(u32::from_le_bytes(*word));
  }
  state.finish(tail)
}

#[inline(always)]
const fn fold(full: u64) -> u32 {
  (full >> 32) as u32 ^ full as u32
}

/// Both registers of the final state, `p1` in the high half.
///
/// This is the 64-bit form used by .NET's reference vectors; the 32-bit
/// [`Marvin32`] output is its two halves XORed together.
#[inline]
#[must_use]
pub fn hash_u64(seed: u64, data: &[u8]) -> u64 {
  hash_full(seed, data)
}

/// Streaming Marvin32.
#[derive(Clone, Debug)]
pub struct Marvin32 {
  state: State,
  buffer: StreamBuffer<4>,
}

impl Seedable for Marvin32 {
  type Seed = u64;
  const NAME: &'static str = "marvin32";

  #[inline]
  fn default_seed() -> u64 {
    seed::default_for(Algorithm::Marvin32)
  }

  #[inline]
  fn test_vector_seed() -> u64 {
    TEST_VECTOR_SEED
  }
}

impl BlockHash for Marvin32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u32 {
    fold(hash_full(seed, data))
  }
}

impl StreamingHash for Marvin32 {
  #[inline]
  fn with_seed(seed: u64) -> Self {
    Self {
      state: State::new(seed),
      buffer: StreamBuffer::new(),
    }
  }

  fn update(&mut self, data: &[u8]) {
    let state = &mut self.state;
    self.buffer.absorb(data, |word| state.word(u32::from_le_bytes(*word)));
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    self.buffer.len()
  }

  #[inline]
  fn finish(self) -> u32 {
    fold(self.state.finish(self.buffer.filled()))
  }
}

impl Combine for Marvin32 {
  fn combine_with_seed<const N: usize>(seed: u64, codes: [u32; N]) -> u32 {
    check_arity::<N>();
    let mut state = State::new(seed);
    for code in codes {
      state.word(code);
    }
    fold(state.finish(&[]))
  }
}
