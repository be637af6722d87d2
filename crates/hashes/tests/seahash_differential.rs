use hashes::fast::{SeaHash, SeaHashSeeded};
use hashes::{BlockHash, StreamingHash};
use proptest::prelude::*;

fn seahash_ref(keys: [u64; 4], data: &[u8]) -> u64 {
  seahash::hash_seeded(data, keys[0], keys[1], keys[2], keys[3])
}

proptest! {
  #[test]
  fn seahash_matches_seahash_crate(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(SeaHash::hash(None, &data), seahash::hash(&data));
  }

  #[test]
  fn seeded_seahash_matches_seahash_crate(keys in any::<[u64; 4]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = SeaHashSeeded::hash_with_seed(keys, &data);
    let expected = seahash_ref(keys, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn seahash_streaming_matches_seahash_crate(
    keys in any::<[u64; 4]>(),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    chunk in 1usize..80
  ) {
    let mut h = SeaHashSeeded::with_seed(keys);
    for piece in data.chunks(chunk) {
      h.update(piece);
    }
    prop_assert_eq!(h.finish(), seahash_ref(keys, &data));
  }
}
