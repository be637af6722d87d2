//! Core hashing traits for rshash.
//!
//! This crate provides the vocabulary every hash family in the workspace
//! conforms to. It is `no_std` compatible; its only dependency is `thiserror`
//! (with default features disabled).
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Calling convention |
//! |-------|---------|--------------------|
//! | [`Seedable`] | Seed shape, default and test-vector seeds | - |
//! | [`BlockHash`] | One-shot hashing of a complete byte range | `hash(seed, data)` |
//! | [`StreamingHash`] | Incremental hashing of arbitrarily chunked input | `new → write* → finish` |
//! | [`Combine`] | Folding 1..=8 precomputed 32-bit codes | `combine_1 .. combine_8` |
//!
//! # Error Types
//!
//! - [`HashError`] - range, protocol and seed-layout violations
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
mod seed;

pub use error::HashError;
pub use fast_hash::{BlockHash, Combine, MAX_COMBINE_ARITY, Seedable, StreamingHash, check_arity, checked_range};
pub use seed::Seed;
