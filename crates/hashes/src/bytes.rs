//! Bounds-aware little-endian word decoding.
//!
//! Every algorithm reads its input through these helpers. The partial readers
//! are the single place where block-mode tails and streaming-mode tails are
//! decoded, which is what keeps the two modes bit-identical.

/// Read the little-endian `u32` at `offset`.
///
/// Falls back to [`read_partial_u32_le`] when fewer than 4 bytes remain, so it
/// never reads past `data.len()`.
#[inline(always)]
#[must_use]
pub fn read_u32_le(data: &[u8], offset: usize) -> u32 {
  match data.get(offset..).and_then(<[u8]>::first_chunk::<4>) {
    Some(word) => u32::from_le_bytes(*word),
    None => read_partial_u32_le(data, offset),
  }
}

/// Read the little-endian `u64` at `offset`.
///
/// Falls back to [`read_partial_u64_le`] when fewer than 8 bytes remain.
#[inline(always)]
#[must_use]
pub fn read_u64_le(data: &[u8], offset: usize) -> u64 {
  match data.get(offset..).and_then(<[u8]>::first_chunk::<8>) {
    Some(word) => u64::from_le_bytes(*word),
    None => read_partial_u64_le(data, offset),
  }
}

/// Decode up to 4 bytes starting at `start`, zero-extending the rest.
///
/// The declared length is `data.len()`: `start >= data.len()` yields 0,
/// otherwise `min(4, data.len() - start)` bytes are read.
#[inline]
#[must_use]
pub fn read_partial_u32_le(data: &[u8], start: usize) -> u32 {
  let mut word = [0u8; 4];
  if let Some(rest) = data.get(start..) {
    for (dst, src) in word.iter_mut().zip(rest) {
      *dst = *src;
    }
  }
  u32::from_le_bytes(word)
}

/// Decode up to 8 bytes starting at `start`, zero-extending the rest.
///
/// Same contract as [`read_partial_u32_le`] with an 8-byte word.
#[inline]
#[must_use]
pub fn read_partial_u64_le(data: &[u8], start: usize) -> u64 {
  let mut word = [0u8; 8];
  if let Some(rest) = data.get(start..) {
    for (dst, src) in word.iter_mut().zip(rest) {
      *dst = *src;
    }
  }
  u64::from_le_bytes(word)
}

/// Pack 32-bit codes into a little-endian byte image.
///
/// Returns the scratch array and the number of meaningful bytes (`4 * N`).
#[inline]
#[must_use]
pub(crate) fn codes_to_le_bytes<const N: usize>(codes: [u32; N]) -> ([u8; 32], usize) {
  let mut out = [0u8; 32];
  for (chunk, code) in out.chunks_exact_mut(4).zip(codes) {
    chunk.copy_from_slice(&code.to_le_bytes());
  }
  (out, 4 * N)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> [u8; 16] {
    core::array::from_fn(|i| (0xa0 + i) as u8)
  }

  #[test]
  fn partial_u32_every_remaining_length() {
    let data = sample();
    for remaining in 0..=4usize {
      let slice = &data[..remaining];
      let mut expected = [0u8; 4];
      expected[..remaining].copy_from_slice(slice);
      assert_eq!(
        read_partial_u32_le(slice, 0),
        u32::from_le_bytes(expected),
        "remaining = {remaining}"
      );
    }
  }

  #[test]
  fn partial_u64_every_remaining_length() {
    let data = sample();
    for remaining in 0..=8usize {
      let slice = &data[..remaining];
      let mut expected = [0u8; 8];
      expected[..remaining].copy_from_slice(slice);
      assert_eq!(
        read_partial_u64_le(slice, 0),
        u64::from_le_bytes(expected),
        "remaining = {remaining}"
      );
    }
  }

  #[test]
  fn partial_reads_at_every_start_offset() {
    let data = sample();
    for len in 0..=data.len() {
      let declared = &data[..len];
      for start in 0..=len + 2 {
        let mut w32 = [0u8; 4];
        let mut w64 = [0u8; 8];
        for i in 0..8 {
          if start + i < len {
            if i < 4 {
              w32[i] = declared[start + i];
            }
            w64[i] = declared[start + i];
          }
        }
        assert_eq!(read_partial_u32_le(declared, start), u32::from_le_bytes(w32));
        assert_eq!(read_partial_u64_le(declared, start), u64::from_le_bytes(w64));
      }
    }
  }

  #[test]
  fn start_past_declared_length_is_zero() {
    let data = sample();
    assert_eq!(read_partial_u32_le(&data[..3], 3), 0);
    assert_eq!(read_partial_u32_le(&data[..3], 100), 0);
    assert_eq!(read_partial_u64_le(&[], 0), 0);
    assert_eq!(read_partial_u64_le(&data, usize::MAX), 0);
  }

  #[test]
  fn partial_never_reads_past_declared_length() {
    // Bytes after the declared length must not leak into the word.
    let data = [1u8, 2, 3, 0xff, 0xff, 0xff, 0xff, 0xff];
    assert_eq!(read_partial_u32_le(&data[..3], 0), 0x0003_0201);
    assert_eq!(read_partial_u64_le(&data[..3], 1), 0x0302);
  }

  #[test]
  fn full_reads_are_unaligned_safe() {
    let data = sample();
    for offset in 0..=data.len() - 8 {
      assert_eq!(
        read_u64_le(&data, offset),
        u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
      );
      assert_eq!(
        read_u32_le(&data, offset),
        u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
      );
    }
    assert_eq!(read_u32_le(&data, 14), read_partial_u32_le(&data, 14));
    assert_eq!(read_u64_le(&data, 16), 0);
  }

  #[test]
  fn codes_pack_little_endian() {
    let (bytes, len) = codes_to_le_bytes([0x0403_0201, 0x0807_0605]);
    assert_eq!(len, 8);
    assert_eq!(&bytes[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(bytes[8..].iter().all(|&b| b == 0));
  }
}
