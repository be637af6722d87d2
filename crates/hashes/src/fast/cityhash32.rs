//! CityHash32, v1.1 (**NOT CRYPTO**).
//!
//! Unseeded. Short inputs take one of three length-specialized paths (up to 4,
//! 12 and 24 bytes); longer inputs run three interleaved Murmur-style
//! accumulators over 20-byte groups after pre-mixing the last 20 bytes.
//!
//! The long path reads the *end* of the message before its start, so the
//! streaming form keeps the whole message and hashes it on `finish`.

use traits::{BlockHash, Combine, Seedable, StreamingHash, check_arity};

use crate::{
  bytes::{codes_to_le_bytes, read_u32_le},
  util::{bswap32, fmix32, rotr32},
};

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const STEP: u32 = 0xe654_6b64;

/// Murmur-style step with right rotations.
#[inline(always)]
const fn mur(a: u32, h: u32) -> u32 {
  let a = rotr32(a.wrapping_mul(C1), 17).wrapping_mul(C2);
  rotr32(h ^ a, 19).wrapping_mul(5).wrapping_add(STEP)
}

#[inline(always)]
const fn premix(x: u32) -> u32 {
  rotr32(x.wrapping_mul(C1), 17).wrapping_mul(C2)
}

fn len_0_to_4(s: &[u8]) -> u32 {
  let mut b: u32 = 0;
  let mut c: u32 = 9;
  for &byte in s {
    // Bytes are sign-extended, as by the reference `signed char` loop.
    b = b.wrapping_mul(C1).wrapping_add(byte as i8 as u32);
    c ^= b;
  }
  fmix32(mur(b, mur(s.len() as u32, c)))
}

fn len_5_to_12(s: &[u8]) -> u32 {
  let n = s.len();
  let a = (n as u32).wrapping_add(read_u32_le(s, 0));
  let b = (n as u32).wrapping_mul(5).wrapping_add(read_u32_le(s, n - 4));
  let c = 9u32.wrapping_add(read_u32_le(s, (n >> 1) & 4));
  let d = (n as u32).wrapping_mul(5);
  fmix32(mur(c, mur(b, mur(a, d))))
}

fn len_13_to_24(s: &[u8]) -> u32 {
  let n = s.len();
  let a = read_u32_le(s, (n >> 1) - 4);
  let b = read_u32_le(s, 4);
  let c = read_u32_le(s, n - 8);
  let d = read_u32_le(s, n >> 1);
  let e = read_u32_le(s, 0);
  let f = read_u32_le(s, n - 4);
  let h = n as u32;
  fmix32(mur(f, mur(e, mur(d, mur(c, mur(b, mur(a, h)))))))
}

#[inline(always)]
const fn step(x: u32, y: u32, r: u32) -> u32 {
  rotr32(x ^ y, r).wrapping_mul(5).wrapping_add(STEP)
}

fn len_over_24(s: &[u8]) -> u32 {
  let n = s.len();
  let mut h = n as u32;
  let mut g = (n as u32).wrapping_mul(C1);
  let mut f = g;

  let a0 = premix(read_u32_le(s, n - 4));
  let a1 = premix(read_u32_le(s, n - 8));
  let a2 = premix(read_u32_le(s, n - 16));
  let a3 = premix(read_u32_le(s, n - 12));
  let a4 = premix(read_u32_le(s, n - 20));
  h = step(h, a0, 19);
  h = step(h, a2, 19);
  g = step(g, a1, 19);
  g = step(g, a3, 19);
  f = rotr32(f.wrapping_add(a4), 19).wrapping_mul(5).wrapping_add(STEP);

  let groups = (n - 1) / 20;
  let mut offset = 0;
  for _ in 0..groups {
    let a0 = premix(read_u32_le(s, offset));
    let a1 = read_u32_le(s, offset + 4);
    let a2 = premix(read_u32_le(s, offset + 8));
    let a3 = premix(read_u32_le(s, offset + 12));
    let a4 = read_u32_le(s, offset + 16);

    h = step(h, a0, 18);
    f = rotr32(f.wrapping_add(a1), 19).wrapping_mul(C1);
    g = rotr32(g.wrapping_add(a2), 18).wrapping_mul(5).wrapping_add(STEP);
    h = step(h, a3.wrapping_add(a1), 19);
    g = bswap32(g ^ a4).wrapping_mul(5);
    h = bswap32(h.wrapping_add(a4.wrapping_mul(5)));
    f = f.wrapping_add(a0);

    // Rotate the roles: (f, h, g) <- (g, f, h).
    (f, h, g) = (g, f, h);
    offset += 20;
  }

  g = rotr32(rotr32(g, 11).wrapping_mul(C1), 17).wrapping_mul(C1);
  f = rotr32(rotr32(f, 11).wrapping_mul(C1), 17).wrapping_mul(C1);
  h = rotr32(h.wrapping_add(g), 19).wrapping_mul(5).wrapping_add(STEP);
  h = rotr32(h, 17).wrapping_mul(C1);
  h = rotr32(h.wrapping_add(f), 19).wrapping_mul(5).wrapping_add(STEP);
  rotr32(h, 17).wrapping_mul(C1)
}

/// CityHash32 of `data`.
#[must_use]
pub fn city_hash32(data: &[u8]) -> u32 {
  match data.len() {
    0..=4 => len_0_to_4(data),
    5..=12 => len_5_to_12(data),
    13..=24 => len_13_to_24(data),
    _ => len_over_24(data),
  }
}

/// Streaming CityHash32. Buffers the message until `finish`.
#[derive(Clone, Debug, Default)]
pub struct CityHash32 {
  data: Vec<u8>,
}

impl Seedable for CityHash32 {
  type Seed = ();
  const NAME: &'static str = "cityhash32";

  #[inline]
  fn default_seed() {}

  #[inline]
  fn test_vector_seed() {}
}

impl BlockHash for CityHash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn hash_with_seed(_seed: (), data: &[u8]) -> u32 {
    city_hash32(data)
  }
}

impl StreamingHash for CityHash32 {
  #[inline]
  fn with_seed(_seed: ()) -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.data.extend_from_slice(data);
  }

  /// Always 0: nothing is mixed before `finish`, so nothing is pending.
  #[inline]
  fn buffered_len(&self) -> usize {
    0
  }

  #[inline]
  fn finish(self) -> u32 {
    city_hash32(&self.data)
  }
}

impl Combine for CityHash32 {
  fn combine_with_seed<const N: usize>(_seed: (), codes: [u32; N]) -> u32 {
    check_arity::<N>();
    let (image, len) = codes_to_le_bytes(codes);
    city_hash32(image.get(..len).unwrap_or_default())
  }
}
