use hashes::fast::{SipHash13, SipHash24};
use hashes::{BlockHash, StreamingHash};
use proptest::prelude::*;

fn siphasher13_ref(key: [u64; 2], data: &[u8]) -> u64 {
  use core::hash::Hasher as _;
  let mut h = siphasher::sip::SipHasher13::new_with_keys(key[0], key[1]);
  h.write(data);
  h.finish()
}

fn siphasher24_ref(key: [u64; 2], data: &[u8]) -> u64 {
  use core::hash::Hasher as _;
  let mut h = siphasher::sip::SipHasher24::new_with_keys(key[0], key[1]);
  h.write(data);
  h.finish()
}

proptest! {
  #[test]
  fn siphash13_matches_siphasher(key in any::<[u64; 2]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = SipHash13::hash_with_seed(key, &data);
    let expected = siphasher13_ref(key, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn siphash24_matches_siphasher(key in any::<[u64; 2]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = SipHash24::hash_with_seed(key, &data);
    let expected = siphasher24_ref(key, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn siphash24_streaming_matches_siphasher(
    key in any::<[u64; 2]>(),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    chunk in 1usize..64
  ) {
    let mut h = SipHash24::with_seed(key);
    for piece in data.chunks(chunk) {
      h.update(piece);
    }
    prop_assert_eq!(h.finish(), siphasher24_ref(key, &data));
  }

  #[test]
  fn siphash24_combine_matches_siphasher(key in any::<[u64; 2]>(), codes in any::<[u32; 5]>()) {
    use hashes::Combine as _;
    let bytes: Vec<u8> = codes.iter().flat_map(|c| c.to_le_bytes()).collect();
    prop_assert_eq!(SipHash24::combine_with_seed(key, codes), siphasher24_ref(key, &bytes));
  }
}
