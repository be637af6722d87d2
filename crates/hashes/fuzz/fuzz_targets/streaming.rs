//! Fuzz target for the streaming API.
//!
//! Arbitrary sequences of update calls must produce the block result for
//! every family.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{
  CityHash32, CityHash64, CityHash64WithSeeds, HalfSipHash13, HalfSipHash24, Marvin32, Murmur3, SeaHash, SeaHashSeeded,
  SipHash13, SipHash24, SpookyV2, XxHash32, XxHash64,
};
use hashes::{BlockHash, StreamingHash};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let sizes = &input.chunk_sizes;

  check::<Murmur3>(data, sizes);
  check::<XxHash32>(data, sizes);
  check::<XxHash64>(data, sizes);
  check::<SipHash13>(data, sizes);
  check::<SipHash24>(data, sizes);
  check::<HalfSipHash13>(data, sizes);
  check::<HalfSipHash24>(data, sizes);
  check::<CityHash32>(data, sizes);
  check::<CityHash64>(data, sizes);
  check::<CityHash64WithSeeds>(data, sizes);
  check::<SeaHash>(data, sizes);
  check::<SeaHashSeeded>(data, sizes);
  check::<SpookyV2>(data, sizes);
  check::<Marvin32>(data, sizes);
});

fn check<H: StreamingHash>(data: &[u8], chunk_sizes: &[usize]) {
  let seed = H::test_vector_seed();
  let expected = H::hash_with_seed(seed, data);

  let mut hasher = H::with_seed(seed);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finish(), expected, "{} streaming mismatch", H::NAME);
}
