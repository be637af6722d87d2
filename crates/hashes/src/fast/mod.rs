//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security. SipHash and HalfSipHash resist hash-flooding when keyed with a
//! secret seed; the others do not.
//!
//! | Type | Seed | Output | Streaming block |
//! |------|------|--------|-----------------|
//! | [`Murmur3`] | `u32` | `u32` | 4 bytes |
//! | [`XxHash32`] | `u32` | `u32` | 16-byte stripe |
//! | [`XxHash64`] | `u64` | `u64` | 32-byte stripe |
//! | [`SipHash13`], [`SipHash24`] | `[u64; 2]` | `u64` | 8 bytes |
//! | [`HalfSipHash13`], [`HalfSipHash24`] | `[u32; 2]` | `u32` | 4 bytes |
//! | [`CityHash32`] | `()` | `u32` | whole message |
//! | [`CityHash64`], [`CityHash64WithSeeds`] | `()`, `[u64; 2]` | `u64` | whole message |
//! | [`SeaHash`], [`SeaHashSeeded`] | `()`, `[u64; 4]` | `u64` | 32 bytes |
//! | [`SpookyV2`] | `[u64; 2]` | `u128` | 192 bytes, then 96-byte blocks |
//! | [`Marvin32`] | `u64` | `u32` | 4 bytes |

/// Define an unseeded variant that pins a seeded family to a fixed seed.
macro_rules! unseeded {
  ($(#[$meta:meta])* $name:ident => $inner:ty, seed = $seed:expr, name = $label:literal) => {
    $(#[$meta])*
    #[derive(Clone, Debug)]
    pub struct $name($inner);

    impl ::traits::Seedable for $name {
      type Seed = ();
      const NAME: &'static str = $label;

      #[inline]
      fn default_seed() -> Self::Seed {}

      #[inline]
      fn test_vector_seed() -> Self::Seed {}
    }

    impl ::traits::BlockHash for $name {
      const OUTPUT_SIZE: usize = <$inner as ::traits::BlockHash>::OUTPUT_SIZE;
      type Output = <$inner as ::traits::BlockHash>::Output;

      #[inline]
      fn hash_with_seed(_seed: (), data: &[u8]) -> Self::Output {
        <$inner as ::traits::BlockHash>::hash_with_seed($seed, data)
      }
    }

    impl ::traits::StreamingHash for $name {
      #[inline]
      fn with_seed(_seed: ()) -> Self {
        Self(<$inner as ::traits::StreamingHash>::with_seed($seed))
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        ::traits::StreamingHash::update(&mut self.0, data);
      }

      #[inline]
      fn buffered_len(&self) -> usize {
        ::traits::StreamingHash::buffered_len(&self.0)
      }

      #[inline]
      fn finish(self) -> Self::Output {
        ::traits::StreamingHash::finish(self.0)
      }
    }

    impl ::traits::Combine for $name {
      #[inline]
      fn combine_with_seed<const N: usize>(_seed: (), codes: [u32; N]) -> Self::Output {
        <$inner as ::traits::Combine>::combine_with_seed($seed, codes)
      }
    }
  };
}

pub(crate) use unseeded;

pub mod cityhash32;
pub mod cityhash64;
pub mod halfsiphash;
pub mod marvin32;
pub mod murmur3;
pub mod seahash;
pub mod siphash;
pub mod spooky;
pub mod xxhash32;
pub mod xxhash64;

pub use cityhash32::CityHash32;
pub use cityhash64::{CityHash64, CityHash64WithSeeds};
pub use halfsiphash::{HalfSipHash13, HalfSipHash24};
pub use marvin32::Marvin32;
pub use murmur3::{Murmur3, Murmur3Unseeded};
pub use seahash::{SeaHash, SeaHashSeeded};
pub use siphash::{SipHash13, SipHash24};
pub use spooky::SpookyV2;
pub use xxhash32::{XxHash32, XxHash32Unseeded};
pub use xxhash64::{XxHash64, XxHash64Unseeded};
