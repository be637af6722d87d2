//! Non-cryptographic hash functions with interchangeable calling conventions.
//!
//! `rshash` bundles Murmur3, xxHash, SipHash, HalfSipHash, CityHash, SeaHash,
//! SpookyV2 and Marvin32 behind one trait vocabulary. For a fixed seed, a
//! one-shot hash, any chunking of a streaming hash, and a combiner over 32-bit
//! codes all produce the same value.
//!
//! # Quick Start
//!
//! ```
//! use rshash::{BlockHash, Combine, StreamingHash, XxHash32};
//!
//! // One-shot computation
//! let code = XxHash32::hash_with_seed(0, b"");
//! assert_eq!(code, 0x02CC_5D05);
//!
//! // Streaming computation, any chunking
//! let mut h = XxHash32::with_seed(9);
//! h.write_u32(1);
//! h.write_u32(2);
//! assert_eq!(h.finish(), XxHash32::combine_with_seed(9, [1, 2]));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `structured` | Yes | `StructuredHash`, `StdHasher` and `BuildStdHasher` |
//!
//! # Default seeds
//!
//! Passing `None` for a seed uses a per-process default drawn from the system
//! CSPRNG on first use. Set `RSHASH_SEED_SOURCE=fixed` to use the published
//! test-vector seeds instead, or [`install`] a [`SeedProvider`] before the
//! first hash is computed.

// =============================================================================
// Traits
// =============================================================================

pub use traits::{BlockHash, Combine, HashError, MAX_COMBINE_ARITY, Seed, Seedable, StreamingHash};

// =============================================================================
// Algorithms
// =============================================================================

pub use hashes::fast::{
  CityHash32, CityHash64, CityHash64WithSeeds, HalfSipHash13, HalfSipHash24, Marvin32, Murmur3, Murmur3Unseeded,
  SeaHash, SeaHashSeeded, SipHash13, SipHash24, SpookyV2, XxHash32, XxHash32Unseeded, XxHash64, XxHash64Unseeded,
};

/// Every algorithm module, including free functions such as
/// [`spooky::hash64`](hashes::fast::spooky::hash64) and the test-vector seeds.
pub mod fast {
  pub use ::hashes::fast::*;
}

// =============================================================================
// Seeds
// =============================================================================

pub use hashes::{
  Algorithm, ParseAlgorithmError, SeedError, SeedProvider, SeedSource, SeedValue,
  config::{SeedConfig, SeedSourceKind},
  seed::{FixedSeeds, SystemRandom, default_seed, install, test_vector_seed},
};

// =============================================================================
// Structured hashing
// =============================================================================

#[cfg(feature = "structured")]
pub use hashes::structured::{BuildStdHasher, StdHasher, StructuredHash, hash_value};
