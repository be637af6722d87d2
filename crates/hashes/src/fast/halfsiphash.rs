//! HalfSipHash (**NOT CRYPTO**).
//!
//! The 32-bit sibling of SipHash: four `u32` state words, 4-byte message
//! words, a 64-bit key and a 32-bit output. Intended for hash tables on
//! targets where 64-bit arithmetic is expensive.

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{Algorithm, buffer::StreamBuffer, bytes::read_partial_u32_le, seed};

/// Key `00 01 .. 07` of the reference HalfSipHash vectors.
pub const TEST_VECTOR_SEED: [u32; 2] = [0x0302_0100, 0x0706_0504];

const C2: u32 = 0x6c79_6765;
const C3: u32 = 0x7465_6462;

#[derive(Clone, Copy, Debug)]
struct State {
  v0: u32,
  v1: u32,
  v2: u32,
  v3: u32,
}

impl State {
  #[inline(always)]
  const fn new(key: [u32; 2]) -> Self {
    Self {
      v0: key[0],
      v1: key[1],
      v2: C2 ^ key[0],
      v3: C3 ^ key[1],
    }
  }

  #[inline(always)]
  fn sip_round(&mut self) {
    self.v0 = self.v0.wrapping_add(self.v1);
    self.v1 = self.v1.rotate_left(5);
    self.v1 ^= self.v0;
    self.v0 = self.v0.rotate_left(16);

    self.v2 = self.v2.wrapping_add(self.v3);
    self.v3 = self.v3.rotate_left(8);
    self.v3 ^= self.v2;

    self.v0 = self.v0.wrapping_add(self.v3);
    self.v3 = self.v3.rotate_left(7);
    self.v3 ^= self.v0;

    self.v2 = self.v2.wrapping_add(self.v1);
    self.v1 = self.v1.rotate_left(13);
    self.v1 ^= self.v2;
    self.v2 = self.v2.rotate_left(16);
  }

  #[inline(always)]
  fn compress<const C: usize>(&mut self, m: u32) {
    self.v3 ^= m;
    for _ in 0..C {
      self.sip_round();
    }
    self.v0 ^= m;
  }

  #[inline(always)]
  fn finish<const C: usize, const D: usize>(mut self, tail: u32, len: u64) -> u32 {
    self.compress::<C>((((len & 0xff) as u32) << 24) | tail);
    self.v2 ^= 0xff;
    for _ in 0..D {
      self.sip_round();
    }
    self.v1 ^ self.v3
  }
}

#[inline]
fn hash_bytes<const C: usize, const D: usize>(key: [u32; 2], data: &[u8]) -> u32 {
  let mut state = State::new(key);
  let (words, tail) = data.as_chunks::<4>();
  for word in words {
    state.compress::<C>(u32::from_le_bytes(*word));
  }
  state.finish::<C, D>(read_partial_u32_le(tail, 0), data.len() as u64)
}

/// Streaming HalfSipHash-C-D.
#[derive(Clone, Debug)]
pub struct HalfSipHasher<const C: usize, const D: usize> {
  state: State,
  buffer: StreamBuffer<4>,
  total_len: u64,
}

/// HalfSipHash-1-3.
pub type HalfSipHash13 = HalfSipHasher<1, 3>;

/// HalfSipHash-2-4.
pub type HalfSipHash24 = HalfSipHasher<2, 4>;

impl Seedable for HalfSipHash13 {
  type Seed = [u32; 2];
  const NAME: &'static str = "halfsiphash13";

  #[inline]
  fn default_seed() -> [u32; 2] {
    seed::default_for(Algorithm::HalfSipHash13)
  }

  #[inline]
  fn test_vector_seed() -> [u32; 2] {
    TEST_VECTOR_SEED
  }
}

impl Seedable for HalfSipHash24 {
  type Seed = [u32; 2];
  const NAME: &'static str = "halfsiphash24";

  #[inline]
  fn default_seed() -> [u32; 2] {
    seed::default_for(Algorithm::HalfSipHash24)
  }

  #[inline]
  fn test_vector_seed() -> [u32; 2] {
    TEST_VECTOR_SEED
  }
}

impl<const C: usize, const D: usize> BlockHash for HalfSipHasher<C, D>
where
  Self: Seedable<Seed = [u32; 2]>,
{
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn hash_with_seed(seed: [u32; 2], data: &[u8]) -> u32 {
    hash_bytes::<C, D>(seed, data)
  }
}

impl<const C: usize, const D: usize> StreamingHash for HalfSipHasher<C, D>
where
  Self: Seedable<Seed = [u32; 2]>,
{
  #[inline]
  fn with_seed(seed: [u32; 2]) -> Self {
    Self {
      state: State::new(seed),
      buffer: StreamBuffer::new(),
      total_len: 0,
    }
  }

  fn update(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let state = &mut self.state;
    self.buffer.absorb(data, |word| state.compress::<C>(u32::from_le_bytes(*word)));
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    self.buffer.len()
  }

  #[inline]
  fn finish(self) -> u32 {
    self
      .state
      .finish::<C, D>(read_partial_u32_le(self.buffer.filled(), 0), self.total_len)
  }
}

impl<const C: usize, const D: usize> Combine for HalfSipHasher<C, D>
where
  Self: Seedable<Seed = [u32; 2]>,
{
  fn combine_with_seed<const N: usize>(seed: [u32; 2], codes: [u32; N]) -> u32 {
    check_arity::<N>();
    let mut state = State::new(seed);
    for code in codes {
      state.compress::<C>(code);
    }
    state.finish::<C, D>(0, (4 * N) as u64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn reference_message(len: usize) -> Vec<u8> {
    (0..len as u8).collect()
  }

  #[test]
  fn reference_vectors_halfsiphash24() {
    let cases: [(usize, u32); 5] = [
      (0, 0x5b9f_35a9),
      (1, 0xb85a_4727),
      (7, 0xc563_cf8b),
      (8, 0x8f84_b8d0),
      (15, 0x972b_fe74),
    ];
    for (len, expected) in cases {
      assert_eq!(
        HalfSipHash24::hash_with_seed(TEST_VECTOR_SEED, &reference_message(len)),
        expected,
        "len = {len}"
      );
    }
  }

  #[test]
  fn streaming_matches_block_for_every_tail() {
    let data = reference_message(40);
    for len in 0..data.len() {
      let mut h = HalfSipHash13::with_seed([9, 10]);
      let (a, b) = data[..len].split_at(len / 2);
      h.update(a);
      h.update(b);
      assert_eq!(h.finish(), HalfSipHash13::hash_with_seed([9, 10], &data[..len]));
    }
  }

  #[test]
  fn combine_matches_block_of_le_codes() {
    let codes = [u32::MAX, 0, 0x8000_0000, 17];
    let bytes: Vec<u8> = codes.iter().flat_map(|c| c.to_le_bytes()).collect();
    assert_eq!(
      HalfSipHash24::combine_with_seed([1, 2], codes),
      HalfSipHash24::hash_with_seed([1, 2], &bytes)
    );
  }
}
