//! Fuzz target for the code combiners.
//!
//! Combining up to eight 32-bit codes must equal streaming them with
//! `write_u32` and hashing their little-endian image.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{
  CityHash32, CityHash64, HalfSipHash24, Marvin32, Murmur3, SeaHash, SipHash13, SpookyV2, XxHash32, XxHash64,
};
use hashes::{Combine, StreamingHash};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  codes: [u32; 8],
  arity: u8,
}

fuzz_target!(|input: Input| {
  match input.arity % 8 {
    0 => check_all::<1>(&input.codes),
    1 => check_all::<2>(&input.codes),
    2 => check_all::<3>(&input.codes),
    3 => check_all::<4>(&input.codes),
    4 => check_all::<5>(&input.codes),
    5 => check_all::<6>(&input.codes),
    6 => check_all::<7>(&input.codes),
    _ => check_all::<8>(&input.codes),
  }
});

fn check_all<const N: usize>(codes: &[u32; 8]) {
  let mut picked = [0u32; N];
  picked.copy_from_slice(&codes[..N]);

  check::<Murmur3, N>(picked);
  check::<XxHash32, N>(picked);
  check::<XxHash64, N>(picked);
  check::<SipHash13, N>(picked);
  check::<HalfSipHash24, N>(picked);
  check::<CityHash32, N>(picked);
  check::<CityHash64, N>(picked);
  check::<SeaHash, N>(picked);
  check::<SpookyV2, N>(picked);
  check::<Marvin32, N>(picked);
}

fn check<H: Combine + StreamingHash, const N: usize>(codes: [u32; N]) {
  let seed = H::test_vector_seed();
  let combined = H::combine_with_seed(seed, codes);

  let mut hasher = H::with_seed(seed);
  let mut bytes = Vec::with_capacity(4 * N);
  for code in codes {
    hasher.write_u32(code);
    bytes.extend_from_slice(&code.to_le_bytes());
  }

  assert_eq!(combined, hasher.finish(), "{} combine vs streaming", H::NAME);
  assert_eq!(combined, H::hash_with_seed(seed, &bytes), "{} combine vs block", H::NAME);
}
