//! Enumeration of the seedable hash families.

use core::{fmt, str::FromStr};

use thiserror::Error;

/// A seedable hash family.
///
/// Unseeded variants (`CityHash32`, plain `CityHash64`, the `*Unseeded`
/// types, unseeded `SeaHash`) have no slot here: their seed is `()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
  Murmur3,
  XxHash32,
  XxHash64,
  SipHash13,
  SipHash24,
  HalfSipHash13,
  HalfSipHash24,
  /// CityHash64 with two explicit seeds.
  CityHash64,
  /// SeaHash with four explicit lane keys.
  SeaHash,
  SpookyV2,
  Marvin32,
}

impl Algorithm {
  pub const COUNT: usize = 11;

  pub const ALL: [Self; Self::COUNT] = [
    Self::Murmur3,
    Self::XxHash32,
    Self::XxHash64,
    Self::SipHash13,
    Self::SipHash24,
    Self::HalfSipHash13,
    Self::HalfSipHash24,
    Self::CityHash64,
    Self::SeaHash,
    Self::SpookyV2,
    Self::Marvin32,
  ];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Murmur3 => "murmur3-x86-32",
      Self::XxHash32 => "xxhash32",
      Self::XxHash64 => "xxhash64",
      Self::SipHash13 => "siphash13",
      Self::SipHash24 => "siphash24",
      Self::HalfSipHash13 => "halfsiphash13",
      Self::HalfSipHash24 => "halfsiphash24",
      Self::CityHash64 => "cityhash64",
      Self::SeaHash => "seahash",
      Self::SpookyV2 => "spookyv2",
      Self::Marvin32 => "marvin32",
    }
  }

  /// Length of the little-endian seed layout in bytes.
  #[must_use]
  pub const fn seed_len(self) -> usize {
    match self {
      Self::Murmur3 | Self::XxHash32 => 4,
      Self::XxHash64 | Self::Marvin32 | Self::HalfSipHash13 | Self::HalfSipHash24 => 8,
      Self::SipHash13 | Self::SipHash24 | Self::CityHash64 | Self::SpookyV2 => 16,
      Self::SeaHash => 32,
    }
  }

  /// Position in [`Self::ALL`].
  #[must_use]
  pub const fn index(self) -> usize {
    self as usize
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// An algorithm name that matches no seedable family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hash algorithm `{0}`")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
  type Err = ParseAlgorithmError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim();
    Self::ALL
      .into_iter()
      .find(|alg| alg.name().eq_ignore_ascii_case(wanted))
      .or_else(|| match wanted.to_ascii_lowercase().as_str() {
        "murmur3" | "murmur3_32" => Some(Self::Murmur3),
        "xxh32" => Some(Self::XxHash32),
        "xxh64" => Some(Self::XxHash64),
        "spooky" => Some(Self::SpookyV2),
        _ => None,
      })
      .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_is_indexed_by_discriminant() {
    for (i, alg) in Algorithm::ALL.into_iter().enumerate() {
      assert_eq!(alg.index(), i);
    }
  }

  #[test]
  fn names_round_trip() {
    for alg in Algorithm::ALL {
      assert_eq!(alg.name().parse::<Algorithm>(), Ok(alg));
      assert_eq!(alg.to_string(), alg.name());
    }
  }

  #[test]
  fn aliases_and_errors() {
    assert_eq!(" XXH64 ".parse::<Algorithm>(), Ok(Algorithm::XxHash64));
    assert_eq!("spooky".parse::<Algorithm>(), Ok(Algorithm::SpookyV2));
    assert_eq!(
      "md5".parse::<Algorithm>(),
      Err(ParseAlgorithmError("md5".to_owned()))
    );
  }

  #[test]
  fn seed_lengths_fit_slot() {
    for alg in Algorithm::ALL {
      assert!(alg.seed_len() <= crate::seed::MAX_SEED_LEN);
    }
  }
}
