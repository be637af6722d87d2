//! Default seed provisioning.
//!
//! Each seedable family gets one default seed per process, drawn lazily from a
//! [`SeedSource`] the first time it is needed and immutable afterwards. The
//! process-wide [`SeedProvider`] is built from [`SeedConfig::current`] unless a
//! provider was [`install`]ed first, which is how tests and binaries inject
//! fixed seeds.
//!
//! A failing system CSPRNG is fatal: [`SeedProvider::seed`] panics rather than
//! fall back to a weak or fixed seed.

#![allow(clippy::indexing_slicing)] // Slot table indexed by enum discriminant; seed bytes bounded by MAX_SEED_LEN

use std::{fmt, sync::OnceLock};

use thiserror::Error;
use tracing::{debug, error};
use traits::{HashError, Seed};

use crate::{
  Algorithm,
  config::{SeedConfig, SeedSourceKind},
  fast::{cityhash64, halfsiphash, marvin32, murmur3, seahash, siphash, spooky, xxhash32, xxhash64},
};

/// Largest seed layout (seeded SeaHash, four `u64` keys).
pub const MAX_SEED_LEN: usize = 32;

type SeedBytes = [u8; MAX_SEED_LEN];

/// Seed provisioning failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SeedError {
  /// The system CSPRNG could not supply bytes.
  #[error("system entropy source failed: {0}")]
  Entropy(#[source] getrandom::Error),

  /// [`install`] was called after the global provider was already in use.
  #[error("the global seed provider is already initialized")]
  AlreadyInitialized,

  /// Seed bytes did not match the requested seed shape.
  #[error(transparent)]
  Decode(#[from] HashError),
}

/// A seed of any seedable family, for algorithm-indexed access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedValue {
  U32(u32),
  U64(u64),
  PairU32([u32; 2]),
  PairU64([u64; 2]),
  QuadU64([u64; 4]),
}

impl SeedValue {
  /// Decode `bytes` in the seed layout of `algorithm`.
  ///
  /// # Errors
  ///
  /// [`HashError::SeedLength`] if `bytes` is not exactly `algorithm.seed_len()` long.
  pub fn decode(algorithm: Algorithm, bytes: &[u8]) -> Result<Self, HashError> {
    Ok(match algorithm {
      Algorithm::Murmur3 | Algorithm::XxHash32 => Self::U32(u32::decode_le(bytes)?),
      Algorithm::XxHash64 | Algorithm::Marvin32 => Self::U64(u64::decode_le(bytes)?),
      Algorithm::HalfSipHash13 | Algorithm::HalfSipHash24 => Self::PairU32(<[u32; 2]>::decode_le(bytes)?),
      Algorithm::SipHash13 | Algorithm::SipHash24 | Algorithm::CityHash64 | Algorithm::SpookyV2 => {
        Self::PairU64(<[u64; 2]>::decode_le(bytes)?)
      }
      Algorithm::SeaHash => Self::QuadU64(<[u64; 4]>::decode_le(bytes)?),
    })
  }

  /// Encoded length in bytes.
  #[must_use]
  pub const fn len(&self) -> usize {
    match self {
      Self::U32(_) => 4,
      Self::U64(_) | Self::PairU32(_) => 8,
      Self::PairU64(_) => 16,
      Self::QuadU64(_) => 32,
    }
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    false
  }

  /// Write the little-endian layout into `out`.
  ///
  /// # Errors
  ///
  /// [`HashError::SeedLength`] unless `out.len() == self.len()`.
  pub fn encode_le(&self, out: &mut [u8]) -> Result<(), HashError> {
    match self {
      Self::U32(v) => v.encode_le(out),
      Self::U64(v) => v.encode_le(out),
      Self::PairU32(v) => v.encode_le(out),
      Self::PairU64(v) => v.encode_le(out),
      Self::QuadU64(v) => v.encode_le(out),
    }
  }
}

/// The published seed used to reproduce test vectors for `algorithm`.
#[must_use]
pub const fn test_vector_seed(algorithm: Algorithm) -> SeedValue {
  match algorithm {
    Algorithm::Murmur3 => SeedValue::U32(murmur3::TEST_VECTOR_SEED),
    Algorithm::XxHash32 => SeedValue::U32(xxhash32::TEST_VECTOR_SEED),
    Algorithm::XxHash64 => SeedValue::U64(xxhash64::TEST_VECTOR_SEED),
    Algorithm::SipHash13 | Algorithm::SipHash24 => SeedValue::PairU64(siphash::TEST_VECTOR_SEED),
    Algorithm::HalfSipHash13 | Algorithm::HalfSipHash24 => SeedValue::PairU32(halfsiphash::TEST_VECTOR_SEED),
    Algorithm::CityHash64 => SeedValue::PairU64(cityhash64::TEST_VECTOR_SEEDS),
    Algorithm::SeaHash => SeedValue::QuadU64(seahash::DEFAULT_KEYS),
    Algorithm::SpookyV2 => SeedValue::PairU64(spooky::TEST_VECTOR_SEED),
    Algorithm::Marvin32 => SeedValue::U64(marvin32::TEST_VECTOR_SEED),
  }
}

/// A source of seed bytes.
pub trait SeedSource: Send + Sync {
  /// Short name for diagnostics.
  fn name(&self) -> &'static str;

  /// Fill `out` (exactly `algorithm.seed_len()` bytes) with seed material.
  ///
  /// # Errors
  ///
  /// Any failure to produce bytes. The provider treats it as fatal.
  fn fill(&self, algorithm: Algorithm, out: &mut [u8]) -> Result<(), SeedError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl SeedSource for SystemRandom {
  fn name(&self) -> &'static str {
    SeedSourceKind::System.as_str()
  }

  fn fill(&self, _algorithm: Algorithm, out: &mut [u8]) -> Result<(), SeedError> {
    getrandom::fill(out).map_err(SeedError::Entropy)
  }
}

/// The published test-vector seeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSeeds;

impl SeedSource for FixedSeeds {
  fn name(&self) -> &'static str {
    SeedSourceKind::Fixed.as_str()
  }

  fn fill(&self, algorithm: Algorithm, out: &mut [u8]) -> Result<(), SeedError> {
    Ok(test_vector_seed(algorithm).encode_le(out)?)
  }
}

/// Lazily provisioned, immutable default seeds.
pub struct SeedProvider {
  source: Box<dyn SeedSource>,
  slots: [OnceLock<SeedBytes>; Algorithm::COUNT],
}

impl fmt::Debug for SeedProvider {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let provisioned = self.slots.iter().filter(|slot| slot.get().is_some()).count();
    f.debug_struct("SeedProvider")
      .field("source", &self.source.name())
      .field("provisioned", &provisioned)
      .finish()
  }
}

impl SeedProvider {
  #[must_use]
  pub fn new(source: impl SeedSource + 'static) -> Self {
    Self {
      source: Box::new(source),
      slots: [const { OnceLock::new() }; Algorithm::COUNT],
    }
  }

  /// Provider backed by the system CSPRNG.
  #[must_use]
  pub fn system() -> Self {
    Self::new(SystemRandom)
  }

  /// Provider that hands out the test-vector seeds.
  #[must_use]
  pub fn fixed() -> Self {
    Self::new(FixedSeeds)
  }

  #[must_use]
  pub fn from_config(config: SeedConfig) -> Self {
    match config.source {
      SeedSourceKind::System => Self::system(),
      SeedSourceKind::Fixed => Self::fixed(),
    }
  }

  /// Name of the underlying source.
  #[must_use]
  pub fn source_name(&self) -> &'static str {
    self.source.name()
  }

  fn bytes(&self, algorithm: Algorithm) -> Result<&[u8], SeedError> {
    let len = algorithm.seed_len();
    let slot = &self.slots[algorithm.index()];
    if let Some(bytes) = slot.get() {
      return Ok(&bytes[..len]);
    }

    let mut fresh = [0u8; MAX_SEED_LEN];
    self.source.fill(algorithm, &mut fresh[..len])?;
    // A concurrent provisioner may have won the race; everyone observes its bytes.
    let bytes = slot.get_or_init(|| {
      debug!(
        algorithm = algorithm.name(),
        seed_len = len,
        source = self.source.name(),
        "provisioned default seed"
      );
      fresh
    });
    Ok(&bytes[..len])
  }

  /// The default seed of `algorithm`, decoded as `S`.
  ///
  /// # Errors
  ///
  /// [`SeedError::Entropy`] if the source fails, [`SeedError::Decode`] if `S`
  /// is not the seed shape of `algorithm`.
  pub fn try_seed<S: Seed>(&self, algorithm: Algorithm) -> Result<S, SeedError> {
    if S::LEN != algorithm.seed_len() {
      return Err(SeedError::Decode(HashError::SeedLength {
        expected: algorithm.seed_len(),
        actual: S::LEN,
      }));
    }
    Ok(S::decode_le(self.bytes(algorithm)?)?)
  }

  /// The default seed of `algorithm`.
  ///
  /// # Panics
  ///
  /// If the seed source fails. Hashing without a seed would silently weaken
  /// every table keyed by this process.
  #[must_use]
  pub fn seed<S: Seed>(&self, algorithm: Algorithm) -> S {
    match self.try_seed(algorithm) {
      Ok(seed) => seed,
      Err(err) => {
        error!(algorithm = algorithm.name(), source = self.source.name(), %err, "seed provisioning failed");
        panic!("cannot provision default seed for {algorithm}: {err}");
      }
    }
  }

  /// The default seed of `algorithm` as a [`SeedValue`].
  ///
  /// # Panics
  ///
  /// If the seed source fails.
  #[must_use]
  pub fn value(&self, algorithm: Algorithm) -> SeedValue {
    match self.bytes(algorithm).and_then(|bytes| Ok(SeedValue::decode(algorithm, bytes)?)) {
      Ok(value) => value,
      Err(err) => {
        error!(algorithm = algorithm.name(), source = self.source.name(), %err, "seed provisioning failed");
        panic!("cannot provision default seed for {algorithm}: {err}");
      }
    }
  }
}

static GLOBAL: OnceLock<SeedProvider> = OnceLock::new();

/// The process-wide provider, built from [`SeedConfig::current`] on first use.
#[must_use]
pub fn global() -> &'static SeedProvider {
  GLOBAL.get_or_init(|| SeedProvider::from_config(SeedConfig::current()))
}

/// Install `provider` as the process-wide provider.
///
/// # Errors
///
/// [`SeedError::AlreadyInitialized`] if a provider was installed, or a default
/// seed was requested, before this call.
pub fn install(provider: SeedProvider) -> Result<(), SeedError> {
  GLOBAL.set(provider).map_err(|_| SeedError::AlreadyInitialized)
}

/// The process default seed of `algorithm`.
#[must_use]
pub fn default_seed(algorithm: Algorithm) -> SeedValue {
  global().value(algorithm)
}

/// Typed default seed lookup used by the `Seedable` impls.
#[inline]
pub(crate) fn default_for<S: Seed>(algorithm: Algorithm) -> S {
  global().seed(algorithm)
}

#[cfg(test)]
mod tests {
  use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
  };

  use super::*;

  #[derive(Default)]
  struct Counting {
    calls: Arc<AtomicUsize>,
  }

  impl SeedSource for Counting {
    fn name(&self) -> &'static str {
      "counting"
    }

    fn fill(&self, _algorithm: Algorithm, out: &mut [u8]) -> Result<(), SeedError> {
      let n = self.calls.fetch_add(1, Ordering::SeqCst) as u8;
      out.fill(n.wrapping_add(1));
      Ok(())
    }
  }

  struct Broken;

  impl SeedSource for Broken {
    fn name(&self) -> &'static str {
      "broken"
    }

    fn fill(&self, _algorithm: Algorithm, _out: &mut [u8]) -> Result<(), SeedError> {
      Err(SeedError::Entropy(getrandom::Error::UNSUPPORTED))
    }
  }

  #[test]
  fn seeds_are_drawn_once_and_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = SeedProvider::new(Counting { calls: calls.clone() });
    let a: u32 = provider.seed(Algorithm::Murmur3);
    let b: u32 = provider.seed(Algorithm::Murmur3);
    assert_eq!(a, b);
    assert_eq!(a, 0x0101_0101);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let c: [u64; 2] = provider.seed(Algorithm::SipHash24);
    assert_eq!(c, [0x0202_0202_0202_0202; 2]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
  }

  #[test]
  fn fixed_provider_returns_test_vector_seeds() {
    let provider = SeedProvider::fixed();
    for alg in Algorithm::ALL {
      assert_eq!(provider.value(alg), test_vector_seed(alg), "{alg}");
    }
    let sip: [u64; 2] = provider.seed(Algorithm::SipHash13);
    assert_eq!(sip, [0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908]);
  }

  #[test]
  fn wrong_shape_is_a_decode_error() {
    let provider = SeedProvider::fixed();
    assert_eq!(
      provider.try_seed::<u64>(Algorithm::Murmur3),
      Err(SeedError::Decode(HashError::SeedLength { expected: 4, actual: 8 }))
    );
  }

  #[test]
  fn broken_source_reports_entropy_error() {
    let provider = SeedProvider::new(Broken);
    assert_eq!(
      provider.try_seed::<u32>(Algorithm::XxHash32),
      Err(SeedError::Entropy(getrandom::Error::UNSUPPORTED))
    );
  }

  #[test]
  #[should_panic(expected = "cannot provision default seed")]
  fn broken_source_is_fatal() {
    let provider = SeedProvider::new(Broken);
    let _: u32 = provider.seed(Algorithm::XxHash32);
  }

  #[test]
  fn system_seeds_are_shared_across_threads() {
    let provider = Arc::new(SeedProvider::system());
    let handles: Vec<_> = (0..8)
      .map(|_| {
        let provider = Arc::clone(&provider);
        std::thread::spawn(move || provider.seed::<[u64; 2]>(Algorithm::SpookyV2))
      })
      .collect();
    let seeds: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(seeds.windows(2).all(|w| w[0] == w[1]));
  }

  #[test]
  fn seed_values_round_trip_through_layout() {
    for alg in Algorithm::ALL {
      let value = test_vector_seed(alg);
      assert_eq!(value.len(), alg.seed_len());
      let mut bytes = [0u8; MAX_SEED_LEN];
      value.encode_le(&mut bytes[..value.len()]).unwrap();
      assert_eq!(SeedValue::decode(alg, &bytes[..value.len()]), Ok(value));
    }
  }
}
