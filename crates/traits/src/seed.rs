//! Seed shapes and their little-endian byte layouts.
//!
//! | Shape | Bytes | Used by |
//! |-------|-------|---------|
//! | `()` | 0 | unseeded variants |
//! | `u32` | 4 | Murmur3-x86-32, xxHash32 |
//! | `u64` | 8 | xxHash64, Marvin32 |
//! | `[u32; 2]` | 8 | HalfSipHash |
//! | `[u64; 2]` | 16 | SipHash, SpookyV2, CityHash64 with seeds |
//! | `[u64; 4]` | 32 | seeded SeaHash |

use core::fmt::Debug;

use crate::HashError;

/// Keying material with a fixed little-endian byte layout.
pub trait Seed: Copy + Eq + Debug + Send + Sync + 'static {
  /// Encoded length in bytes.
  const LEN: usize;

  /// Write the little-endian layout into `out`.
  ///
  /// # Errors
  ///
  /// [`HashError::SeedLength`] unless `out.len() == Self::LEN`.
  fn encode_le(&self, out: &mut [u8]) -> Result<(), HashError>;

  /// Read a seed from its little-endian layout.
  ///
  /// # Errors
  ///
  /// [`HashError::SeedLength`] unless `bytes.len() == Self::LEN`.
  fn decode_le(bytes: &[u8]) -> Result<Self, HashError>;
}

#[inline]
const fn check_len(expected: usize, actual: usize) -> Result<(), HashError> {
  if expected == actual {
    Ok(())
  } else {
    Err(HashError::SeedLength { expected, actual })
  }
}

impl Seed for () {
  const LEN: usize = 0;

  #[inline]
  fn encode_le(&self, out: &mut [u8]) -> Result<(), HashError> {
    check_len(Self::LEN, out.len())
  }

  #[inline]
  fn decode_le(bytes: &[u8]) -> Result<Self, HashError> {
    check_len(Self::LEN, bytes.len())
  }
}

macro_rules! word_seed {
  ($($word:ty),*) => {$(
    impl Seed for $word {
      const LEN: usize = size_of::<$word>();

      #[inline]
      fn encode_le(&self, out: &mut [u8]) -> Result<(), HashError> {
        check_len(Self::LEN, out.len())?;
        out.copy_from_slice(&self.to_le_bytes());
        Ok(())
      }

      #[inline]
      fn decode_le(bytes: &[u8]) -> Result<Self, HashError> {
        let array = <[u8; size_of::<$word>()]>::try_from(bytes).map_err(|_| HashError::SeedLength {
          expected: Self::LEN,
          actual: bytes.len(),
        })?;
        Ok(<$word>::from_le_bytes(array))
      }
    }

    impl<const N: usize> Seed for [$word; N] {
      const LEN: usize = N * size_of::<$word>();

      fn encode_le(&self, out: &mut [u8]) -> Result<(), HashError> {
        check_len(Self::LEN, out.len())?;
        for (word, chunk) in self.iter().zip(out.chunks_exact_mut(size_of::<$word>())) {
          word.encode_le(chunk)?;
        }
        Ok(())
      }

      fn decode_le(bytes: &[u8]) -> Result<Self, HashError> {
        check_len(Self::LEN, bytes.len())?;
        let mut words = [0 as $word; N];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(size_of::<$word>())) {
          *word = <$word>::decode_le(chunk)?;
        }
        Ok(words)
      }
    }
  )*};
}

word_seed!(u32, u64);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unit_seed_is_empty() {
    assert_eq!(<() as Seed>::LEN, 0);
    assert_eq!(<()>::decode_le(&[]), Ok(()));
    assert_eq!(
      <()>::decode_le(&[0]),
      Err(HashError::SeedLength { expected: 0, actual: 1 })
    );
  }

  #[test]
  fn word_layouts_are_little_endian() {
    let mut out = [0u8; 4];
    0x0403_0201u32.encode_le(&mut out).unwrap();
    assert_eq!(out, [1, 2, 3, 4]);
    assert_eq!(u32::decode_le(&[1, 2, 3, 4]), Ok(0x0403_0201));

    let mut out = [0u8; 8];
    0x0807_0605_0403_0201u64.encode_le(&mut out).unwrap();
    assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
  }

  #[test]
  fn pair_layouts_place_first_word_first() {
    let seed = [0x0403_0201u32, 0x0807_0605];
    let mut out = [0u8; 8];
    seed.encode_le(&mut out).unwrap();
    assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(<[u32; 2]>::decode_le(&out), Ok(seed));

    let seed = [0x0706_0504_0302_0100u64, 0x0f0e_0d0c_0b0a_0908];
    let mut out = [0u8; 16];
    seed.encode_le(&mut out).unwrap();
    let expected: [u8; 16] = core::array::from_fn(|i| i as u8);
    assert_eq!(out, expected);
    assert_eq!(<[u64; 2]>::decode_le(&expected), Ok(seed));
  }

  #[test]
  fn lengths() {
    assert_eq!(<u32 as Seed>::LEN, 4);
    assert_eq!(<u64 as Seed>::LEN, 8);
    assert_eq!(<[u32; 2] as Seed>::LEN, 8);
    assert_eq!(<[u64; 2] as Seed>::LEN, 16);
    assert_eq!(<[u64; 4] as Seed>::LEN, 32);
  }

  #[test]
  fn wrong_lengths_are_rejected() {
    let mut short = [0u8; 3];
    assert_eq!(
      7u32.encode_le(&mut short),
      Err(HashError::SeedLength { expected: 4, actual: 3 })
    );
    assert_eq!(
      <[u64; 2]>::decode_le(&[0u8; 15]),
      Err(HashError::SeedLength {
        expected: 16,
        actual: 15
      })
    );
  }
}
