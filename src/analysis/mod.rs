//! Distribution and entropy estimation.
//!
//! This module measures the 1/0 distribution of each ingested batch,
//! derives a binary Shannon entropy estimate, and converts that estimate
//! into the chunk size the whitener must consume per digest. These are
//! quality estimates, not cryptographic proofs of entropy.

mod correction;
mod statistics;

pub use correction::{corrected_chunk_size, BASELINE_CHUNK_BITS};
pub use statistics::{BatchStatistics, DegenerateDistribution};
