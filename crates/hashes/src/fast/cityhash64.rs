//! CityHash64, v1.1 (**NOT CRYPTO**).
//!
//! Inputs up to 64 bytes take a length-specialized path (0..=16, 17..=32,
//! 33..=64). Longer inputs keep 56 bytes of state (`x`, `y`, `z` and two
//! 16-byte "weak" pairs `v`, `w`) seeded from the last 64 bytes, then walk the
//! message in 64-byte chunks. The final chunk is re-read from the tail, so the
//! streaming form keeps the whole message and hashes it on `finish`.
//!
//! [`CityHash64WithSeeds`] folds two seeds into the unseeded digest.

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{
  Algorithm,
  bytes::{codes_to_le_bytes, read_u32_le, read_u64_le},
  seed,
  util::{bswap64, rotr64, shift_mix},
};

/// Seeds of the published `CityHash64WithSeeds` vectors.
pub const TEST_VECTOR_SEEDS: [u64; 2] = [1_234_567, K0];

const K0: u64 = 0xc3a5_c85c_97cb_3127;
const K1: u64 = 0xb492_b66f_be98_f273;
const K2: u64 = 0x9ae1_6a3b_2f90_404f;
const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

/// Murmur-inspired 128-to-64 bit reduction.
#[inline(always)]
const fn hash_len16(u: u64, v: u64, mul: u64) -> u64 {
  let a = shift_mix((u ^ v).wrapping_mul(mul));
  let b = shift_mix((v ^ a).wrapping_mul(mul));
  b.wrapping_mul(mul)
}

#[inline(always)]
const fn hash128_to_64(u: u64, v: u64) -> u64 {
  hash_len16(u, v, K_MUL)
}

#[inline(always)]
const fn len_mul(n: usize) -> u64 {
  K2.wrapping_add((n as u64).wrapping_mul(2))
}

fn len_0_to_16(s: &[u8]) -> u64 {
  let n = s.len();
  if n >= 8 {
    let mul = len_mul(n);
    let a = read_u64_le(s, 0).wrapping_add(K2);
    let b = read_u64_le(s, n - 8);
    let c = rotr64(b, 37).wrapping_mul(mul).wrapping_add(a);
    let d = rotr64(a, 25).wrapping_add(b).wrapping_mul(mul);
    return hash_len16(c, d, mul);
  }
  if n >= 4 {
    let mul = len_mul(n);
    let a = u64::from(read_u32_le(s, 0));
    return hash_len16((n as u64).wrapping_add(a << 3), u64::from(read_u32_le(s, n - 4)), mul);
  }
  match (s.first(), s.get(n >> 1), s.last()) {
    (Some(&a), Some(&b), Some(&c)) => {
      let y = u32::from(a).wrapping_add(u32::from(b) << 8);
      let z = (n as u32).wrapping_add(u32::from(c) << 2);
      shift_mix(u64::from(y).wrapping_mul(K2) ^ u64::from(z).wrapping_mul(K0)).wrapping_mul(K2)
    }
    _ => K2,
  }
}

fn len_17_to_32(s: &[u8]) -> u64 {
  let n = s.len();
  let mul = len_mul(n);
  let a = read_u64_le(s, 0).wrapping_mul(K1);
  let b = read_u64_le(s, 8);
  let c = read_u64_le(s, n - 8).wrapping_mul(mul);
  let d = read_u64_le(s, n - 16).wrapping_mul(K2);
  hash_len16(
    rotr64(a.wrapping_add(b), 43).wrapping_add(rotr64(c, 30)).wrapping_add(d),
    a.wrapping_add(rotr64(b.wrapping_add(K2), 18)).wrapping_add(c),
    mul,
  )
}

/// Two 64-bit halves mixed from 32 bytes at `offset` plus seeds `a`, `b`.
#[inline(always)]
fn weak_hash32(s: &[u8], offset: usize, a: u64, b: u64) -> (u64, u64) {
  let w = read_u64_le(s, offset);
  let x = read_u64_le(s, offset + 8);
  let y = read_u64_le(s, offset + 16);
  let z = read_u64_le(s, offset + 24);

  let mut a = a.wrapping_add(w);
  let mut b = rotr64(b.wrapping_add(a).wrapping_add(z), 21);
  let c = a;
  a = a.wrapping_add(x).wrapping_add(y);
  b = b.wrapping_add(rotr64(a, 44));
  (a.wrapping_add(z), b.wrapping_add(c))
}

fn len_33_to_64(s: &[u8]) -> u64 {
  let n = s.len();
  let mul = len_mul(n);
  let a = read_u64_le(s, 0).wrapping_mul(K2);
  let b = read_u64_le(s, 8);
  let c = read_u64_le(s, n - 24);
  let d = read_u64_le(s, n - 32);
  let e = read_u64_le(s, 16).wrapping_mul(K2);
  let f = read_u64_le(s, 24).wrapping_mul(9);
  let g = read_u64_le(s, n - 8);
  let h = read_u64_le(s, n - 16).wrapping_mul(mul);

  let u = rotr64(a.wrapping_add(g), 43).wrapping_add(rotr64(b, 30).wrapping_add(c).wrapping_mul(9));
  let v = (a.wrapping_add(g) ^ d).wrapping_add(f).wrapping_add(1);
  let w = bswap64(u.wrapping_add(v).wrapping_mul(mul)).wrapping_add(h);
  let x = rotr64(e.wrapping_add(f), 42).wrapping_add(c);
  let y = bswap64(v.wrapping_add(w).wrapping_mul(mul)).wrapping_add(g).wrapping_mul(mul);
  let z = e.wrapping_add(f).wrapping_add(c);
  let a = bswap64(x.wrapping_add(z).wrapping_mul(mul).wrapping_add(y)).wrapping_add(b);
  let b = shift_mix(z.wrapping_add(a).wrapping_mul(mul).wrapping_add(d).wrapping_add(h)).wrapping_mul(mul);
  b.wrapping_add(x)
}

fn len_over_64(s: &[u8]) -> u64 {
  let n = s.len();
  let mut x = read_u64_le(s, n - 40);
  let mut y = read_u64_le(s, n - 16).wrapping_add(read_u64_le(s, n - 56));
  let mut z = hash128_to_64(read_u64_le(s, n - 48).wrapping_add(n as u64), read_u64_le(s, n - 24));
  let mut v = weak_hash32(s, n - 64, n as u64, z);
  let mut w = weak_hash32(s, n - 32, y.wrapping_add(K1), x);
  x = x.wrapping_mul(K1).wrapping_add(read_u64_le(s, 0));

  // Every 64-byte chunk strictly before the last (possibly partial) one.
  let chunks = (n - 1) / 64;
  for chunk in 0..chunks {
    let o = chunk * 64;
    x = rotr64(x.wrapping_add(y).wrapping_add(v.0).wrapping_add(read_u64_le(s, o + 8)), 37).wrapping_mul(K1);
    y = rotr64(y.wrapping_add(v.1).wrapping_add(read_u64_le(s, o + 48)), 42).wrapping_mul(K1);
    x ^= w.1;
    y = y.wrapping_add(v.0).wrapping_add(read_u64_le(s, o + 40));
    z = rotr64(z.wrapping_add(w.0), 33).wrapping_mul(K1);
    v = weak_hash32(s, o, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
    w = weak_hash32(s, o + 32, z.wrapping_add(w.1), y.wrapping_add(read_u64_le(s, o + 16)));
    core::mem::swap(&mut z, &mut x);
  }

  hash128_to_64(
    hash128_to_64(v.0, w.0)
      .wrapping_add(shift_mix(y).wrapping_mul(K1))
      .wrapping_add(z),
    hash128_to_64(v.1, w.1).wrapping_add(x),
  )
}

/// CityHash64 of `data`.
#[must_use]
pub fn city_hash64(data: &[u8]) -> u64 {
  match data.len() {
    0..=16 => len_0_to_16(data),
    17..=32 => len_17_to_32(data),
    33..=64 => len_33_to_64(data),
    _ => len_over_64(data),
  }
}

/// CityHash64 of `data` with two seeds folded in.
#[inline]
#[must_use]
pub fn city_hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
  hash128_to_64(city_hash64(data).wrapping_sub(seed0), seed1)
}

/// Streaming CityHash64. Buffers the message until `finish`.
#[derive(Clone, Debug, Default)]
pub struct CityHash64 {
  data: Vec<u8>,
}

impl Seedable for CityHash64 {
  type Seed = ();
  const NAME: &'static str = "cityhash64";

  #[inline]
  fn default_seed() {}

  #[inline]
  fn test_vector_seed() {}
}

impl BlockHash for CityHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn hash_with_seed(_seed: (), data: &[u8]) -> u64 {
    city_hash64(data)
  }
}

impl StreamingHash for CityHash64 {
  #[inline]
  fn with_seed(_seed: ()) -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.data.extend_from_slice(data);
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    0
  }

  #[inline]
  fn finish(self) -> u64 {
    city_hash64(&self.data)
  }
}

impl Combine for CityHash64 {
  fn combine_with_seed<const N: usize>(_seed: (), codes: [u32; N]) -> u64 {
    check_arity::<N>();
    let (image, len) = codes_to_le_bytes(codes);
    city_hash64(image.get(..len).unwrap_or_default())
  }
}

/// Streaming `CityHash64WithSeeds`, keyed by `[seed0, seed1]`.
#[derive(Clone, Debug)]
pub struct CityHash64WithSeeds {
  seeds: [u64; 2],
  inner: CityHash64,
}

impl Seedable for CityHash64WithSeeds {
  type Seed = [u64; 2];
  const NAME: &'static str = "cityhash64-seeded";

  #[inline]
  fn default_seed() -> [u64; 2] {
    seed::default_for(Algorithm::CityHash64)
  }

  #[inline]
  fn test_vector_seed() -> [u64; 2] {
    TEST_VECTOR_SEEDS
  }
}

impl BlockHash for CityHash64WithSeeds {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn hash_with_seed([seed0, seed1]: [u64; 2], data: &[u8]) -> u64 {
    city_hash64_with_seeds(data, seed0, seed1)
  }
}

impl StreamingHash for CityHash64WithSeeds {
  #[inline]
  fn with_seed(seeds: [u64; 2]) -> Self {
    Self {
      seeds,
      inner: CityHash64::default(),
    }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.inner.update(data);
  }

  #[inline]
  fn buffered_len(&self) -> usize {
    0
  }

  #[inline]
  fn finish(self) -> u64 {
    let [seed0, seed1] = self.seeds;
    hash128_to_64(self.inner.finish().wrapping_sub(seed0), seed1)
  }
}

impl Combine for CityHash64WithSeeds {
  fn combine_with_seed<const N: usize>([seed0, seed1]: [u64; 2], codes: [u32; N]) -> u64 {
    hash128_to_64(CityHash64::combine_with_seed((), codes).wrapping_sub(seed0), seed1)
  }
}
