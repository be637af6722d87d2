use hashes::fast::{XxHash32, XxHash64};
use hashes::{BlockHash, Combine, StreamingHash};
use proptest::prelude::*;

fn xxh32_ref(seed: u32, data: &[u8]) -> u32 {
  twox_hash::XxHash32::oneshot(seed, data)
}

fn xxh64_ref(seed: u64, data: &[u8]) -> u64 {
  twox_hash::XxHash64::oneshot(seed, data)
}

/// Cross-checked against `xxhash-rust` as well.
fn xxh32_ref_checked(seed: u32, data: &[u8]) -> u32 {
  let expected = xxh32_ref(seed, data);
  assert_eq!(xxhash_rust::xxh32::xxh32(data, seed), expected);
  expected
}

fn xxh64_ref_checked(seed: u64, data: &[u8]) -> u64 {
  let expected = xxh64_ref(seed, data);
  assert_eq!(xxhash_rust::xxh64::xxh64(data, seed), expected);
  expected
}

proptest! {
  #[test]
  fn xxhash32_matches_twox_hash(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = XxHash32::hash_with_seed(seed, &data);
    let expected = xxh32_ref_checked(seed, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn xxhash64_matches_twox_hash(seed in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = XxHash64::hash_with_seed(seed, &data);
    let expected = xxh64_ref_checked(seed, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn xxhash64_streaming_matches_twox_hash(
    seed in any::<u64>(),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    chunk in 1usize..100
  ) {
    let mut h = XxHash64::with_seed(seed);
    for piece in data.chunks(chunk) {
      h.update(piece);
    }
    prop_assert_eq!(h.finish(), xxh64_ref(seed, &data));
  }

  #[test]
  fn xxhash_combine8_matches_twox_hash(seed in any::<u32>(), codes in any::<[u32; 8]>()) {
    let bytes: Vec<u8> = codes.iter().flat_map(|c| c.to_le_bytes()).collect();
    prop_assert_eq!(XxHash32::combine_with_seed(seed, codes), xxh32_ref(seed, &bytes));
    prop_assert_eq!(XxHash64::combine_with_seed(u64::from(seed), codes), xxh64_ref(u64::from(seed), &bytes));
  }
}
