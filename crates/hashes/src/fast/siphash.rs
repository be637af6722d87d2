//! SipHash (**NOT CRYPTO**).
//!
//! SipHash is a *keyed* hash designed to defend hash tables against collision
//! attacks on untrusted inputs. It is not a cryptographic MAC.
//!
//! `SipHasher<C, D>` runs `C` compression rounds per 8-byte word and `D`
//! finalization rounds; [`SipHash13`] and [`SipHash24`] are the two standard
//! parameterizations.

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{Algorithm, buffer::StreamBuffer, bytes::read_partial_u64_le, seed, util::pack_pair};

/// Key `00 01 02 .. 0f` of the reference SipHash vectors.
pub const TEST_VECTOR_SEED: [u64; 2] = [0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908];

const C0: u64 = 0x736f_6d65_7073_6575;
const C1: u64 = 0x646f_7261_6e64_6f6d;
const C2: u64 = 0x6c79_6765_6e65_7261;
const C3: u64 = 0x7465_6462_7974_6573;

#[derive(Clone, Copy, Debug)]
struct State {
  v0: u64,
  v1: u64,
  v2: u64,
  v3: u64,
}

impl State {
  #[inline(always)]
  const fn new(key: [u64; 2]) -> Self {
    Self {
      v0: C0 ^ key[0],
      v1: C1 ^ key[1],
      v2: C2 ^ key[0],
      v3: C3 ^ key[1],
    }
  }

  #[inline(always)]
  fn sip_round(&mut self) {
    self.v0 = self.v0.wrapping_add(self.v1);
    self.v1 = self.v1.rotate_left(13);
    self.v1 ^= self.v0;
    self.v0 = self.v0.rotate_left(32);

    self.v2 = self.v2.wrapping_add(self.v3);
    self.v3 = self.v3.rotate_left(16);
    self.v3 ^= self.v2;

    self.v0 = self.v0.wrapping_add(self.v3);
    self.v3 = self.v3.rotate_left(21);
    self.v3 ^= self.v0;

    self.v2 = self.v2.wrapping_add(self.v1);
    self.v1 = self.v1.rotate_left(17);
    self.v1 ^= self.v2;
    self.v2 = self.v2.rotate_left(32);
  }

  #[inline(always)]
  fn compress<const C: usize>(&mut self, m: u64) {
    self.v3 ^= m;
    for _ in 0..C {
      self.sip_round();
    }
    self.v0 ^= m;
  }

  /// The length's low byte goes in the top byte of the final word.
  #[inline(always)]
  fn finish<const C: usize, const D: usize>(mut self, tail: u64, len: u64) -> u64 {
    self.compress::<C>(((len & 0xff) << 56) | tail);
    self.v2 ^= 0xff;
    for _ in 0..D {
      self.sip_round();
    }
    self.v0 ^ self.v1 ^ self.v2 ^ self.v3
  }
}

#[inline]
fn hash_bytes<const C: usize, const D: usize>(key: [u64; 2], data: &[u8]) -> u64 {
  let mut state = State::new(key);
  let (blocks, tail) = data.as_chunks::<8>();
  for block in blocks {
    state.compress::<C>(u64::from_le_bytes(*block));
  }
  state.finish::<C, D>(read_partial_u64_le(tail, 0), data.len() as u64)
}

/// Streaming SipHash-C-D.
#[derive(Clone, Debug)]
pub struct SipHasher<const C: usize, const D: usize> {
  state: State,
  buffer: StreamBuffer<8>,
  total_len: u64,
}

/// SipHash-1-3.
pub type SipHash13 = SipHasher<1, 3>;

/// SipHash-2-4.
pub type SipHash24 = SipHasher<2, 4>;

impl Seedable for SipHash13 {
  type Seed = [u64; 2];
  const NAME: &'static str = "siphash13";

  #[inline]
  fn default_seed() -> [u64; 2] {
    seed::default_for(Algorithm::SipHash13)
  }

  #[inline]
  fn test_vector_seed() -> [u64; 2] {
    TEST_VECTOR_SEED
  }
}

impl Seedable for SipHash24 {
  type Seed = [u64; 2];
  const NAME: &'static str = "siphash24";

  #[inline]
  fn default_seed() -> [u64; 2] {
    seed::default_for(Algorithm::SipHash24)
  }

  #[inline]
  fn test_vector_seed() -> [u64; 2] {
    TEST_VECTOR_SEED
  }
}

impl<const C: usize, const D: usize> BlockHash for SipHasher<C, D>
where
  Self: Seedable<Seed = [u64; 2]>,
{
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn hash_with_seed(seed: [u64; 2], data: &[u8]) -> u64 {
    hash_bytes::<C, D>(seed, data)
  }
}

impl<const C: usize, const D: usize> StreamingHash for SipHasher<C, D>
where
  Self: Seedable<Seed = [u64; 2]>,
{
  #[inline]
  fn with_seed(seed: [u64; 2]) -> Self {
    Self {
      state: State::new(seed),
      buffer: StreamBuffer::new(),
      total_len: 0,
    }
  }

  fn update(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let state = &mut self.state;
    self.buffer.absorb(data, |block| state.compress::<C>(u64::from_le_bytes(*block)));
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    self.buffer.len()
  }

  #[inline]
  fn finish(self) -> u64 {
    self
      .state
      .finish::<C, D>(read_partial_u64_le(self.buffer.filled(), 0), self.total_len)
  }
}

impl<const C: usize, const D: usize> Combine for SipHasher<C, D>
where
  Self: Seedable<Seed = [u64; 2]>,
{
  fn combine_with_seed<const N: usize>(seed: [u64; 2], codes: [u32; N]) -> u64 {
    check_arity::<N>();
    let mut state = State::new(seed);
    let (pairs, odd) = codes.as_chunks::<2>();
    for &[lo, hi] in pairs {
      state.compress::<C>(pack_pair(lo, hi));
    }
    let tail = odd.first().map_or(0, |&code| u64::from(code));
    state.finish::<C, D>(tail, (4 * N) as u64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn reference_message(len: usize) -> Vec<u8> {
    (0..len as u8).collect()
  }

  #[test]
  fn reference_vectors_siphash24() {
    // From the SipHash paper / reference implementation (key 00..0f, message 00..len-1).
    assert_eq!(SipHash24::hash_with_seed(TEST_VECTOR_SEED, b""), 0x726f_db47_dd0e_0e31);
    assert_eq!(
      SipHash24::hash_with_seed(TEST_VECTOR_SEED, &reference_message(15)),
      0xa129_ca61_49be_45e5
    );
  }

  #[test]
  fn streaming_matches_block_for_every_tail() {
    let data = reference_message(64);
    for len in 0..data.len() {
      let mut h13 = SipHash13::with_seed([1, 2]);
      let mut h24 = SipHash24::with_seed([1, 2]);
      for &b in &data[..len] {
        h13.write_u8(b);
        h24.write_u8(b);
      }
      assert_eq!(h13.finish(), SipHash13::hash_with_seed([1, 2], &data[..len]));
      assert_eq!(h24.finish(), SipHash24::hash_with_seed([1, 2], &data[..len]));
    }
  }

  #[test]
  fn combine_odd_arity_uses_partial_tail() {
    let codes = [10u32, 20, 30];
    let bytes: Vec<u8> = codes.iter().flat_map(|c| c.to_le_bytes()).collect();
    assert_eq!(
      SipHash13::combine_with_seed([3, 4], codes),
      SipHash13::hash_with_seed([3, 4], &bytes)
    );
  }
}
