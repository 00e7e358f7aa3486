//! Hash-based whitening of raw batches.
//!
//! This module converts biased raw samples into uniformly distributed
//! pool bits by hashing fixed-size chunks with a cryptographic hash and
//! appending each digest's bits to the pool. The hash's avalanche
//! property does the extraction work.

mod hash;
mod whitener;

pub use hash::{ChunkHasher, HashAlgorithm, DIGEST_BITS};
pub use whitener::{WhitenOutcome, Whitener};
