//! Entropy-driven chunk size correction.
//!
//! The whitener consumes a fixed number of raw samples per digest. When
//! the source degrades, each raw sample carries less entropy, so more
//! samples are needed per unit of trustworthy output. The correction
//! scales linearly around a 256-bit baseline: a perfect source (entropy
//! 1.0) costs 256 raw bits per digest, a near-degenerate source costs
//! close to 512.

/// Raw bits per digest for a source at full entropy.
pub const BASELINE_CHUNK_BITS: usize = 256;

/// Derives the chunk size for a batch from its entropy estimate.
///
/// `256 + (256 - ceil(256 · entropy))`, always in [256, 512] for
/// entropy in [0, 1]. Monotonically non-increasing in entropy.
pub fn corrected_chunk_size(entropy_bits: f64) -> usize {
    let entropy = entropy_bits.clamp(0.0, 1.0);
    let trusted = (BASELINE_CHUNK_BITS as f64 * entropy).ceil() as usize;
    BASELINE_CHUNK_BITS + (BASELINE_CHUNK_BITS - trusted)
}
