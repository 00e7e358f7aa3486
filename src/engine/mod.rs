//! Pipeline orchestration.
//!
//! The engine owns the pool and the whitener, runs the per-batch
//! estimation → correction → whitening pipeline, and exposes the query,
//! export, and consumption surfaces to collaborators.

mod config;
mod core;

pub use config::{ConfigError, DegeneratePolicy, EngineConfig};
pub use core::{EntropyEngine, IngestReport};
