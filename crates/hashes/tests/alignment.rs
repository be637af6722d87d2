//! `hash_range` reads the same bytes at every offset, and rejects ranges that
//! leave the buffer before hashing anything.

use hashes::fast::{
  CityHash32, CityHash64, CityHash64WithSeeds, HalfSipHash24, Marvin32, Murmur3, SeaHash, SipHash13, SpookyV2,
  XxHash32, XxHash64,
};
use hashes::{BlockHash, HashError};

const PAYLOAD_LENS: [usize; 9] = [0, 1, 3, 4, 15, 31, 64, 97, 300];

fn payload(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
}

/// The payload copied at every offset in `0..16` of a larger buffer hashes the
/// same as the standalone payload.
fn check_offsets<H: BlockHash>() {
  let seed = H::test_vector_seed();
  for len in PAYLOAD_LENS {
    let data = payload(len);
    let expected = H::hash_with_seed(seed, &data);
    for offset in 0..16 {
      let mut padded = vec![0xA5u8; offset + len + 16];
      padded[offset..offset + len].copy_from_slice(&data);
      assert_eq!(
        H::hash_range(Some(seed), &padded, offset, len),
        Ok(expected),
        "{}: len {len} at offset {offset}",
        H::NAME
      );
    }
  }
}

fn check_bounds<H: BlockHash>() {
  let seed = Some(H::test_vector_seed());
  let data = payload(32);

  assert_eq!(
    H::hash_range(seed, &data, 0, 0),
    Ok(H::hash_with_seed(H::test_vector_seed(), &[])),
    "{}",
    H::NAME
  );
  assert_eq!(
    H::hash_range(seed, &data, 32, 0),
    Ok(H::hash_with_seed(H::test_vector_seed(), &[])),
    "{}: empty range at the end",
    H::NAME
  );
  assert_eq!(
    H::hash_range(seed, &data, 30, 3),
    Err(HashError::RangeOutOfBounds {
      offset: 30,
      length: 3,
      buffer_len: 32
    }),
    "{}",
    H::NAME
  );
  assert_eq!(
    H::hash_range(seed, &data, 33, 0),
    Err(HashError::RangeOutOfBounds {
      offset: 33,
      length: 0,
      buffer_len: 32
    }),
    "{}",
    H::NAME
  );
  assert!(H::hash_range(seed, &data, usize::MAX, 2).is_err(), "{}: overflow", H::NAME);
  assert!(H::hash_range(seed, &data, 1, usize::MAX).is_err(), "{}: overflow", H::NAME);
}

macro_rules! alignment_tests {
  ($($name:ident => $ty:ty),* $(,)?) => {
    $(
      mod $name {
        use super::*;

        #[test]
        fn offsets_do_not_change_the_result() {
          check_offsets::<$ty>();
        }

        #[test]
        fn out_of_bounds_ranges_are_rejected() {
          check_bounds::<$ty>();
        }
      }
    )*
  };
}

alignment_tests! {
  murmur3 => Murmur3,
  xxhash32 => XxHash32,
  xxhash64 => XxHash64,
  siphash13 => SipHash13,
  halfsiphash24 => HalfSipHash24,
  cityhash32 => CityHash32,
  cityhash64 => CityHash64,
  cityhash64_seeded => CityHash64WithSeeds,
  seahash => SeaHash,
  spookyv2 => SpookyV2,
  marvin32 => Marvin32,
}
