//! Motion Entropy Library
//!
//! An entropy pool engine that turns noisy binary samples (positions of
//! moving objects tracked by a camera) into a pool of statistically
//! whitened random bits, consumable for dice rolls, integer draws, and
//! similar operations.
//!
//! # Architecture
//!
//! The system follows an explicit data flow, run once per ingested batch:
//!
//! ```text
//! batch → analysis (distribution / entropy / chunk correction)
//!       → whitening (hash extraction)
//!       → pool → consume (dice, integers, eight-ball, coin-flip)
//! ```
//!
//! # Design Principles
//!
//! - **Typed failures**: an exhausted pool is an error, never a short result
//! - **Owned state**: the pool lives inside an engine value, not a global
//! - **Standard primitives**: BLAKE3/SHA-256 for whitening
//! - **No cryptographic claims**: entropy estimates are quality signals,
//!   not certification of output randomness
//!
//! # Example
//!
//! ```
//! use motion_entropy::{BitBatch, EntropyEngine};
//!
//! let mut engine = EntropyEngine::default();
//!
//! // Ingest a batch of tracked-motion samples
//! let batch = BitBatch::from_bits((0..600).map(|i| (i % 2) as u8).collect()).unwrap();
//! let report = engine.ingest(&batch).unwrap();
//! assert_eq!(report.chunks_whitened, 2);
//!
//! // Draw from the pool
//! let rolls = engine.roll_dice(5, 3).unwrap();
//! assert_eq!(rolls.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod batch;
pub mod consume;
pub mod engine;
pub mod pool;
pub mod whitening;

// Re-export commonly used types at crate root
pub use analysis::{BatchStatistics, DegenerateDistribution};
pub use batch::{BatchError, BitBatch};
pub use consume::DrawError;
pub use engine::{DegeneratePolicy, EngineConfig, EntropyEngine, IngestReport};
pub use pool::{PoolError, RandomPool};
pub use whitening::{HashAlgorithm, Whitener};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
