//! Differential fuzzing against the reference xxHash and SeaHash crates.

#![no_main]

use hashes::BlockHash as _;
use hashes::fast::{SeaHash, SeaHashSeeded, XxHash32, XxHash64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(8, input.len()));
  let mut seed = 0u64;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= (b as u64) << (i * 8);
  }

  let ours32 = XxHash32::hash_with_seed(seed as u32, data);
  let ref32 = twox_hash::XxHash32::oneshot(seed as u32, data);
  assert_eq!(ours32, ref32);

  let ours64 = XxHash64::hash_with_seed(seed, data);
  let ref64 = twox_hash::XxHash64::oneshot(seed, data);
  assert_eq!(ours64, ref64);

  assert_eq!(SeaHash::hash_with_seed((), data), seahash::hash(data));

  let keys = [seed, seed.rotate_left(16), !seed, seed.swap_bytes()];
  let ref_sea = seahash::hash_seeded(data, keys[0], keys[1], keys[2], keys[3]);
  assert_eq!(SeaHashSeeded::hash_with_seed(keys, data), ref_sea);
});
