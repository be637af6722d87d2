//! Error types shared by every hash family.
//!
//! Hashing itself is total: wrapping arithmetic over validated input never
//! fails. Errors only arise at the API boundary, before any byte is read.

use thiserror::Error;

/// Error raised by the hashing API boundary.
///
/// # Examples
///
/// ```
/// use traits::{HashError, checked_range};
///
/// let data = [0u8; 8];
/// assert_eq!(checked_range(data.len(), 8, 0), Ok(8..8));
/// assert_eq!(
///   checked_range(data.len(), 4, 5),
///   Err(HashError::RangeOutOfBounds { offset: 4, length: 5, buffer_len: 8 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum HashError {
  /// `offset + length` does not fit inside the caller's buffer.
  #[error("range {offset}+{length} is out of bounds for a buffer of {buffer_len} bytes")]
  RangeOutOfBounds {
    /// Requested start offset.
    offset: usize,
    /// Requested length.
    length: usize,
    /// Length of the buffer the range was checked against.
    buffer_len: usize,
  },

  /// The bulk write path was used while the accumulator still held bytes.
  #[error("bulk write rejected: {buffered} unflushed bytes remain in the accumulator")]
  UnflushedBytes {
    /// Number of bytes waiting in the accumulator.
    buffered: usize,
  },

  /// A seed was decoded from (or encoded into) a slice of the wrong length.
  #[error("seed layout expects {expected} bytes, got {actual}")]
  SeedLength {
    /// Byte length of the seed shape.
    expected: usize,
    /// Byte length supplied by the caller.
    actual: usize,
  },
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn display_names_the_offending_range() {
    let err = HashError::RangeOutOfBounds {
      offset: 3,
      length: 9,
      buffer_len: 10,
    };
    assert_eq!(
      err.to_string(),
      "range 3+9 is out of bounds for a buffer of 10 bytes"
    );
  }

  #[test]
  fn display_unflushed() {
    let err = HashError::UnflushedBytes { buffered: 3 };
    assert_eq!(
      err.to_string(),
      "bulk write rejected: 3 unflushed bytes remain in the accumulator"
    );
  }

  #[test]
  fn display_seed_length() {
    let err = HashError::SeedLength { expected: 16, actual: 4 };
    assert_eq!(err.to_string(), "seed layout expects 16 bytes, got 4");
  }

  #[test]
  fn is_copy_and_comparable() {
    let a = HashError::UnflushedBytes { buffered: 1 };
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, HashError::UnflushedBytes { buffered: 2 });
  }

  #[test]
  fn implements_core_error() {
    fn assert_error<E: core::error::Error>() {}
    assert_error::<HashError>();
  }
}
