//! Fast non-cryptographic hashes with interchangeable calling conventions.
//!
//! Every family under [`fast`] is one concrete type implementing
//! [`BlockHash`], [`StreamingHash`] and [`Combine`]. For a fixed seed the three
//! conventions agree bit for bit, however the input is chunked.
//!
//! # Modules
//!
//! - [`fast`] - Murmur3, xxHash, SipHash, HalfSipHash, CityHash, SeaHash, SpookyV2, Marvin32 (**NOT CRYPTO**).
//! - [`seed`] - Process-wide default seeds and the injectable seed provider.
//! - [`config`] - Environment overrides for the seed source.
//! - [`structured`] - Hashing composite values through any streaming hasher.
//! - [`bytes`] / [`buffer`] - The shared tail decoder and streaming accumulator.
//!
//! # Example
//!
//! ```
//! use hashes::fast::Murmur3;
//! use hashes::{BlockHash, Combine, StreamingHash};
//!
//! assert_eq!(Murmur3::hash(Some(1), b""), 0x514E_28B7);
//!
//! let mut h = Murmur3::new(Some(7));
//! h.write_u32(10);
//! h.write_u32(20);
//! assert_eq!(h.finish(), Murmur3::combine(Some(7), [10, 20]));
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

pub mod buffer;
pub mod bytes;
pub mod config;
pub mod fast;
pub mod seed;
pub mod structured;

mod algorithm;
mod util;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use seed::{SeedError, SeedProvider, SeedSource, SeedValue};
pub use traits::{BlockHash, Combine, HashError, Seed, Seedable, StreamingHash};
