//! Bit-mixing primitives shared by the algorithm cores.

#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

#[inline(always)]
pub const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

#[inline(always)]
pub const fn bswap32(x: u32) -> u32 {
  x.swap_bytes()
}

#[inline(always)]
pub const fn bswap64(x: u64) -> u64 {
  x.swap_bytes()
}

/// `x ^ (x >> 47)`, CityHash's high-bit fold.
#[inline(always)]
pub const fn shift_mix(x: u64) -> u64 {
  x ^ (x >> 47)
}

/// Murmur3's 32-bit finalizer, also used by CityHash32.
#[inline(always)]
pub const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^ (h >> 16)
}

/// Pack little-endian pairs of 32-bit codes into 64-bit lanes.
///
/// An odd trailing code lands in the low half of a lane whose high half is 0.
#[inline(always)]
pub const fn pack_pair(lo: u32, hi: u32) -> u64 {
  (lo as u64) | ((hi as u64) << 32)
}
