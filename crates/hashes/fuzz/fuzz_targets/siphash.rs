#![no_main]

use hashes::fast::{SipHash13, SipHash24};
use hashes::{BlockHash, StreamingHash};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let (key_bytes, data) = input.split_at(core::cmp::min(16, input.len()));
  let mut key = [0u64; 2];
  for (i, &b) in key_bytes.iter().enumerate() {
    key[i / 8] |= (b as u64) << ((i % 8) * 8);
  }

  use core::hash::Hasher as _;
  let mut h13 = siphasher::sip::SipHasher13::new_with_keys(key[0], key[1]);
  h13.write(data);
  let exp13 = h13.finish();

  let mut h24 = siphasher::sip::SipHasher24::new_with_keys(key[0], key[1]);
  h24.write(data);
  let exp24 = h24.finish();

  assert_eq!(SipHash13::hash_with_seed(key, data), exp13);
  assert_eq!(SipHash24::hash_with_seed(key, data), exp24);

  // Split at the midpoint to cross the 8-byte block boundary mid-word.
  let (head, tail) = data.split_at(data.len() / 2);
  let mut ours = SipHash24::with_seed(key);
  ours.update(head);
  ours.update(tail);
  assert_eq!(ours.finish(), exp24);
});
