//! Seed source configuration (environment overrides).
//!
//! The process-wide seed provider is built from [`SeedConfig::current`], which
//! reads `RSHASH_SEED_SOURCE` once:
//!
//! | Value | Effect |
//! |-------|--------|
//! | unset, empty, `system`, `os`, `random` | default seeds come from the system CSPRNG |
//! | `fixed`, `test`, `test-vector` | default seeds are the published test-vector seeds |
//!
//! Unrecognized values are ignored (with a warning) and the system source is
//! used. There is no automatic fallback from the system source.

use std::sync::OnceLock;

use tracing::warn;

/// Environment variable selecting the default seed source.
pub const SEED_SOURCE_ENV: &str = "RSHASH_SEED_SOURCE";

/// Where default seeds come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedSourceKind {
  /// The operating system CSPRNG.
  #[default]
  System,
  /// The fixed test-vector seeds. Reproducible, and therefore predictable.
  Fixed,
}

impl SeedSourceKind {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::System => "system",
      Self::Fixed => "fixed",
    }
  }

  /// Parse an override value. `None` for unrecognized input.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty()
      || value.eq_ignore_ascii_case("system")
      || value.eq_ignore_ascii_case("os")
      || value.eq_ignore_ascii_case("random")
    {
      return Some(Self::System);
    }
    if value.eq_ignore_ascii_case("fixed")
      || value.eq_ignore_ascii_case("test")
      || value.eq_ignore_ascii_case("test-vector")
    {
      return Some(Self::Fixed);
    }
    None
  }
}

/// Seed provider configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SeedConfig {
  pub source: SeedSourceKind,
}

impl SeedConfig {
  /// Build a configuration from an optional override value.
  #[must_use]
  pub fn from_override(value: Option<&str>) -> Self {
    let source = match value {
      None => SeedSourceKind::System,
      Some(raw) => SeedSourceKind::parse(raw).unwrap_or_else(|| {
        warn!(env = SEED_SOURCE_ENV, value = raw, "ignoring unrecognized seed source override");
        SeedSourceKind::System
      }),
    };
    if source == SeedSourceKind::Fixed {
      warn!(env = SEED_SOURCE_ENV, "default seeds are the fixed test-vector seeds");
    }
    Self { source }
  }

  /// Read `RSHASH_SEED_SOURCE` from the environment.
  #[must_use]
  pub fn from_env() -> Self {
    let value = std::env::var(SEED_SOURCE_ENV).ok();
    Self::from_override(value.as_deref())
  }

  /// The configuration read once per process.
  #[must_use]
  pub fn current() -> Self {
    static CONFIG: OnceLock<SeedConfig> = OnceLock::new();
    *CONFIG.get_or_init(Self::from_env)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!(SeedSourceKind::parse(""), Some(SeedSourceKind::System));
    assert_eq!(SeedSourceKind::parse(" System "), Some(SeedSourceKind::System));
    assert_eq!(SeedSourceKind::parse("random"), Some(SeedSourceKind::System));
    assert_eq!(SeedSourceKind::parse("FIXED"), Some(SeedSourceKind::Fixed));
    assert_eq!(SeedSourceKind::parse("test-vector"), Some(SeedSourceKind::Fixed));
    assert_eq!(SeedSourceKind::parse("zeros"), None);
  }

  #[test]
  fn override_defaults_to_system() {
    assert_eq!(SeedConfig::from_override(None).source, SeedSourceKind::System);
    assert_eq!(SeedConfig::from_override(Some("bogus")).source, SeedSourceKind::System);
    assert_eq!(SeedConfig::from_override(Some("fixed")).source, SeedSourceKind::Fixed);
  }

  #[test]
  fn as_str_round_trips() {
    for kind in [SeedSourceKind::System, SeedSourceKind::Fixed] {
      assert_eq!(SeedSourceKind::parse(kind.as_str()), Some(kind));
    }
  }
}
