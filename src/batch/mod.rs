//! Raw sample ingestion.
//!
//! This module defines the batch type handed to the engine by the
//! acquisition side (the camera/tracking pipeline) and the text import
//! path used when batches arrive from files.

mod bitbatch;

pub use bitbatch::{BatchError, BitBatch};
