//! Fixed-capacity streaming accumulator.
//!
//! One `StreamBuffer<N>` stages sub-block writes for a streaming hasher whose
//! native block is `N` bytes. Full blocks are handed to the algorithm's mix
//! step; the partial block left at `finish` is read through
//! [`crate::bytes`].

/// Byte accumulator with a fill cursor.
#[derive(Clone, Debug)]
pub struct StreamBuffer<const N: usize> {
  bytes: [u8; N],
  len: usize,
}

impl<const N: usize> Default for StreamBuffer<N> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> StreamBuffer<N> {
  /// Capacity in bytes.
  pub const CAPACITY: usize = N;

  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { bytes: [0u8; N], len: 0 }
  }

  /// Number of staged bytes (the fill cursor).
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[inline]
  #[must_use]
  pub const fn is_full(&self) -> bool {
    self.len == N
  }

  /// Copy as many bytes of `value[offset..]` as fit; returns the count copied.
  ///
  /// A full buffer, or an `offset` at or past the end of `value`, copies
  /// nothing and returns 0.
  #[inline]
  pub fn append(&mut self, value: &[u8], offset: usize) -> usize {
    let (Some(src), Some(dst)) = (value.get(offset..), self.bytes.get_mut(self.len..)) else {
      return 0;
    };
    let mut copied = 0;
    for (d, s) in dst.iter_mut().zip(src) {
      *d = *s;
      copied += 1;
    }
    self.len += copied;
    copied
  }

  /// Zero the bytes past the fill cursor.
  #[inline]
  pub fn zero_unused(&mut self) {
    if let Some(tail) = self.bytes.get_mut(self.len..) {
      tail.fill(0);
    }
  }

  /// The staged bytes.
  #[inline]
  #[must_use]
  pub fn filled(&self) -> &[u8] {
    self.bytes.get(..self.len).unwrap_or_default()
  }

  /// The whole backing array, including bytes past the cursor.
  #[inline]
  #[must_use]
  pub const fn as_array(&self) -> &[u8; N] {
    &self.bytes
  }

  /// Reset the cursor without touching the bytes.
  #[inline]
  pub fn clear(&mut self) {
    self.len = 0;
  }

  /// Feed `data` through the accumulator.
  ///
  /// `mix` sees every complete `N`-byte block in input order: first the block
  /// completed from previously staged bytes, then whole blocks read directly
  /// from `data`. Whatever is left over (fewer than `N` bytes) stays staged.
  #[inline]
  pub fn absorb(&mut self, mut data: &[u8], mut mix: impl FnMut(&[u8; N])) {
    if !self.is_empty() {
      let taken = self.append(data, 0);
      data = data.get(taken..).unwrap_or_default();
      if !self.is_full() {
        return;
      }
      mix(&self.bytes);
      self.len = 0;
    }

    let (blocks, rest) = data.as_chunks::<N>();
    for block in blocks {
      mix(block);
    }
    self.append(rest, 0);
  }
}
