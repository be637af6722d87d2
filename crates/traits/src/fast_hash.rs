//! Fast non-cryptographic hash traits (**NOT CRYPTO**).
//!
//! These hashes are suitable for hash tables, sharding, fingerprints, and other
//! non-adversarial settings. Only the keyed SipHash family offers any
//! resistance to collision flooding, and none of them are MACs.

use core::{fmt::Debug, hash::Hash, ops::Range};

use crate::{HashError, Seed};

/// Largest number of codes accepted by [`Combine`].
pub const MAX_COMBINE_ARITY: usize = 8;

/// Compile-time guard for combiner arity.
///
/// Instantiating this with `N == 0` or `N > 8` fails to compile.
#[inline(always)]
pub const fn check_arity<const N: usize>() {
  const { assert!(N >= 1 && N <= MAX_COMBINE_ARITY, "combiners accept between 1 and 8 codes") };
}

/// Validate `offset..offset + length` against a buffer of `buffer_len` bytes.
///
/// A zero-length range starting one past the end is valid and yields an empty
/// range; nothing is ever clamped.
#[inline]
pub const fn checked_range(buffer_len: usize, offset: usize, length: usize) -> Result<Range<usize>, HashError> {
  match offset.checked_add(length) {
    Some(end) if end <= buffer_len => Ok(offset..end),
    _ => Err(HashError::RangeOutOfBounds {
      offset,
      length,
      buffer_len,
    }),
  }
}

/// Seed shape and seed sources of a hash family.
pub trait Seedable {
  /// Keying material. `()` for unseeded variants.
  type Seed: Seed;

  /// Stable algorithm name.
  const NAME: &'static str;

  /// The process-wide default seed.
  ///
  /// Drawn once from the system CSPRNG (or an injected source) and immutable
  /// for the rest of the process.
  fn default_seed() -> Self::Seed;

  /// Fixed published seed used to reproduce test vectors.
  fn test_vector_seed() -> Self::Seed;
}

/// One-shot hashing of a complete byte range.
pub trait BlockHash: Seedable {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Hash + Debug + Send + Sync + 'static;

  /// Compute the hash of `data` under `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;

  /// Compute the hash of `data`, falling back to [`Seedable::default_seed`].
  #[inline]
  #[must_use]
  fn hash(seed: Option<Self::Seed>, data: &[u8]) -> Self::Output {
    Self::hash_with_seed(seed.unwrap_or_else(Self::default_seed), data)
  }

  /// Hash `length` bytes of `data` starting at `offset`.
  ///
  /// # Errors
  ///
  /// [`HashError::RangeOutOfBounds`] if the range does not fit in `data`. The
  /// check happens before any byte is read.
  #[inline]
  fn hash_range(
    seed: Option<Self::Seed>,
    data: &[u8],
    offset: usize,
    length: usize,
  ) -> Result<Self::Output, HashError> {
    let range = checked_range(data.len(), offset, length)?;
    let bytes = data.get(range).ok_or(HashError::RangeOutOfBounds {
      offset,
      length,
      buffer_len: data.len(),
    })?;
    Ok(Self::hash(seed, bytes))
  }
}

/// Incremental hashing: `new → write* → finish`.
///
/// For a fixed seed, any sequence of writes that concatenates to the same
/// bytes produces the same output as [`BlockHash::hash_with_seed`] over those
/// bytes. [`finish`](Self::finish) consumes the hasher, so it cannot be called
/// twice; clone the hasher first to take an intermediate result.
pub trait StreamingHash: BlockHash + Sized {
  /// Start a hasher keyed with `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Start a hasher, falling back to [`Seedable::default_seed`].
  #[inline]
  #[must_use]
  fn new(seed: Option<Self::Seed>) -> Self {
    Self::with_seed(seed.unwrap_or_else(Self::default_seed))
  }

  /// Absorb `data`, staging partial words through the accumulator.
  fn update(&mut self, data: &[u8]);

  /// Number of bytes held in the accumulator that have not been mixed yet.
  fn buffered_len(&self) -> usize;

  /// Bulk write that requires an empty accumulator.
  ///
  /// # Errors
  ///
  /// [`HashError::UnflushedBytes`] if a previous sub-word write left bytes in
  /// the accumulator. Nothing is absorbed in that case.
  #[inline]
  fn write_bytes(&mut self, data: &[u8]) -> Result<(), HashError> {
    let buffered = self.buffered_len();
    if buffered != 0 {
      return Err(HashError::UnflushedBytes { buffered });
    }
    self.update(data);
    Ok(())
  }

  #[inline]
  fn write_u8(&mut self, value: u8) {
    self.update(&[value]);
  }

  #[inline]
  fn write_u16(&mut self, value: u16) {
    self.update(&value.to_le_bytes());
  }

  #[inline]
  fn write_u32(&mut self, value: u32) {
    self.update(&value.to_le_bytes());
  }

  #[inline]
  fn write_u64(&mut self, value: u64) {
    self.update(&value.to_le_bytes());
  }

  #[inline]
  fn write_i32(&mut self, value: i32) {
    self.update(&value.to_le_bytes());
  }

  #[inline]
  fn write_i64(&mut self, value: i64) {
    self.update(&value.to_le_bytes());
  }

  /// Fold in the trailing partial word and the total length.
  #[must_use]
  fn finish(self) -> Self::Output;
}

/// Fixed-arity combination of precomputed 32-bit codes.
///
/// `combine_with_seed(seed, [v1, .., vN])` equals streaming `v1..vN` as
/// little-endian 32-bit words into a hasher keyed with `seed`.
pub trait Combine: BlockHash {
  /// Fold `N` codes (1 to 8) under `seed`.
  #[must_use]
  fn combine_with_seed<const N: usize>(seed: Self::Seed, codes: [u32; N]) -> Self::Output;

  #[inline]
  #[must_use]
  fn combine<const N: usize>(seed: Option<Self::Seed>, codes: [u32; N]) -> Self::Output {
    Self::combine_with_seed(seed.unwrap_or_else(Self::default_seed), codes)
  }

  #[inline]
  #[must_use]
  fn combine_1(v1: u32) -> Self::Output {
    Self::combine(None, [v1])
  }

  #[inline]
  #[must_use]
  fn combine_2(v1: u32, v2: u32) -> Self::Output {
    Self::combine(None, [v1, v2])
  }

  #[inline]
  #[must_use]
  fn combine_3(v1: u32, v2: u32, v3: u32) -> Self::Output {
    Self::combine(None, [v1, v2, v3])
  }

  #[inline]
  #[must_use]
  fn combine_4(v1: u32, v2: u32, v3: u32, v4: u32) -> Self::Output {
    Self::combine(None, [v1, v2, v3, v4])
  }

  #[inline]
  #[must_use]
  fn combine_5(v1: u32, v2: u32, v3: u32, v4: u32, v5: u32) -> Self::Output {
    Self::combine(None, [v1, v2, v3, v4, v5])
  }

  #[inline]
  #[must_use]
  fn combine_6(v1: u32, v2: u32, v3: u32, v4: u32, v5: u32, v6: u32) -> Self::Output {
    Self::combine(None, [v1, v2, v3, v4, v5, v6])
  }

  #[inline]
  #[must_use]
  #[allow(clippy::too_many_arguments)] // arity is the API
  fn combine_7(v1: u32, v2: u32, v3: u32, v4: u32, v5: u32, v6: u32, v7: u32) -> Self::Output {
    Self::combine(None, [v1, v2, v3, v4, v5, v6, v7])
  }

  #[inline]
  #[must_use]
  #[allow(clippy::too_many_arguments)] // arity is the API
  fn combine_8(v1: u32, v2: u32, v3: u32, v4: u32, v5: u32, v6: u32, v7: u32, v8: u32) -> Self::Output {
    Self::combine(None, [v1, v2, v3, v4, v5, v6, v7, v8])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte-sum "hash" used to exercise the provided trait methods.
  #[derive(Clone, Debug)]
  struct Sum {
    seed: u32,
    acc: u32,
    pending: usize,
  }

  impl Seedable for Sum {
    type Seed = u32;
    const NAME: &'static str = "sum";

    fn default_seed() -> u32 {
      7
    }

    fn test_vector_seed() -> u32 {
      0
    }
  }

  impl BlockHash for Sum {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
      data.iter().fold(seed, |acc, &b| acc.wrapping_add(u32::from(b)))
    }
  }

  impl StreamingHash for Sum {
    fn with_seed(seed: u32) -> Self {
      Self {
        seed,
        acc: 0,
        pending: 0,
      }
    }

    fn update(&mut self, data: &[u8]) {
      self.acc = Self::hash_with_seed(self.acc, data);
      self.pending = (self.pending + data.len()) % 4;
    }

    fn buffered_len(&self) -> usize {
      self.pending
    }

    fn finish(self) -> u32 {
      self.seed.wrapping_add(self.acc)
    }
  }

  #[test]
  fn hash_without_seed_uses_default() {
    assert_eq!(Sum::hash(None, &[1, 2, 3]), 13);
    assert_eq!(Sum::hash(Some(0), &[1, 2, 3]), 6);
  }

  #[test]
  fn hash_range_checks_bounds_before_hashing() {
    let data = [1u8, 2, 3, 4];
    assert_eq!(Sum::hash_range(Some(0), &data, 1, 2), Ok(5));
    assert_eq!(Sum::hash_range(Some(0), &data, 4, 0), Ok(0));
    assert_eq!(
      Sum::hash_range(Some(0), &data, 3, 2),
      Err(HashError::RangeOutOfBounds {
        offset: 3,
        length: 2,
        buffer_len: 4
      })
    );
    assert!(Sum::hash_range(Some(0), &data, usize::MAX, 2).is_err());
    assert!(Sum::hash_range(Some(0), &data, 5, 0).is_err());
  }

  #[test]
  fn write_bytes_rejects_pending_accumulator() {
    let mut h = Sum::new(Some(0));
    h.write_u8(1);
    assert_eq!(h.write_bytes(&[1, 2]), Err(HashError::UnflushedBytes { buffered: 1 }));
    h.write_u8(1);
    h.write_u16(1);
    assert_eq!(h.write_bytes(&[5]), Ok(()));
    assert_eq!(h.finish(), 8);
  }

  #[test]
  fn integer_writes_are_little_endian() {
    let mut h = Sum::new(Some(0));
    h.write_u32(0x0102_0304);
    h.write_i64(-1);
    assert_eq!(h.finish(), 10 + 8 * 255);
  }

  #[test]
  fn checked_range_edges() {
    assert_eq!(checked_range(0, 0, 0), Ok(0..0));
    assert_eq!(checked_range(10, 10, 0), Ok(10..10));
    assert!(checked_range(10, 11, 0).is_err());
    assert!(checked_range(10, 1, usize::MAX).is_err());
  }
}
