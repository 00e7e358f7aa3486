//! Chunked whitening of raw batches into the pool.

use super::hash::{ChunkHasher, HashAlgorithm, DIGEST_BITS};
use crate::batch::BitBatch;
use crate::pool::RandomPool;

/// Accounting for one whitening pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitenOutcome {
    /// Full chunks consumed.
    pub chunks: usize,
    /// Bits appended to the pool (`chunks * DIGEST_BITS`).
    pub appended_bits: usize,
    /// Trailing raw bits dropped because they did not fill a chunk.
    pub dropped_bits: usize,
}

/// Whitens raw batches into pool bits.
///
/// Each batch is partitioned into chunks of the entropy-corrected size
/// current at ingestion time. Every full chunk is serialized as ASCII
/// `'0'`/`'1'` text, hashed independently, and the digest's bits are
/// appended to the pool most-significant-bit first. A trailing partial
/// chunk is dropped, not whitened.
pub struct Whitener {
    hasher: ChunkHasher,
}

impl Whitener {
    /// Creates a whitener using the given hash algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            hasher: ChunkHasher::new(algorithm),
        }
    }

    /// Whitens one batch into the pool at the given chunk size.
    ///
    /// Deterministic: the appended bits depend only on the batch
    /// contents, the chunk size, and the configured algorithm.
    pub fn whiten(
        &self,
        batch: &BitBatch,
        chunk_bits: usize,
        pool: &mut RandomPool,
    ) -> WhitenOutcome {
        debug_assert!(chunk_bits > 0);

        let mut chunks = 0;
        for chunk in batch.bits().chunks_exact(chunk_bits) {
            let text = serialize_chunk(chunk);
            let digest = self.hasher.digest(&text);
            pool.append(&digest_bits(&digest));
            chunks += 1;
        }

        let outcome = WhitenOutcome {
            chunks,
            appended_bits: chunks * DIGEST_BITS,
            dropped_bits: batch.len() % chunk_bits,
        };

        tracing::debug!(
            chunks = outcome.chunks,
            appended_bits = outcome.appended_bits,
            dropped_bits = outcome.dropped_bits,
            pool_size = pool.len(),
            "Whitened batch into pool"
        );

        outcome
    }
}

impl Default for Whitener {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

/// Serializes a chunk's samples as ASCII `'0'`/`'1'` bytes.
fn serialize_chunk(chunk: &[u8]) -> Vec<u8> {
    chunk.iter().map(|&b| b + b'0').collect()
}

/// Expands a digest into individual bits, fixed width, MSB first.
///
/// Fixed-width rendering keeps leading zero bits of the digest, so
/// every chunk contributes exactly [`DIGEST_BITS`] pool bits.
fn digest_bits(digest: &[u8; 32]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(DIGEST_BITS);
    for byte in digest {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternating(len: usize) -> BitBatch {
        BitBatch::from_bits((0..len).map(|i| (i % 2) as u8).collect()).unwrap()
    }

    #[test]
    fn test_exact_multiple_drops_nothing() {
        let whitener = Whitener::default();
        let mut pool = RandomPool::new();
        let batch = alternating(3 * 256);

        let outcome = whitener.whiten(&batch, 256, &mut pool);

        assert_eq!(outcome.chunks, 3);
        assert_eq!(outcome.dropped_bits, 0);
        assert_eq!(pool.len(), 3 * DIGEST_BITS);
    }

    #[test]
    fn test_trailing_partial_chunk_dropped() {
        let whitener = Whitener::default();
        let mut pool = RandomPool::new();
        let batch = alternating(2 * 256 + 77);

        let outcome = whitener.whiten(&batch, 256, &mut pool);

        assert_eq!(outcome.chunks, 2);
        assert_eq!(outcome.dropped_bits, 77);
        assert_eq!(pool.len(), 2 * DIGEST_BITS);
    }

    #[test]
    fn test_short_batch_whitens_nothing() {
        let whitener = Whitener::default();
        let mut pool = RandomPool::new();
        let batch = alternating(255);

        let outcome = whitener.whiten(&batch, 256, &mut pool);

        assert_eq!(outcome.chunks, 0);
        assert_eq!(outcome.dropped_bits, 255);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_whitening_is_deterministic() {
        let whitener = Whitener::new(HashAlgorithm::Sha256);
        let batch = alternating(512);

        let mut pool_a = RandomPool::new();
        let mut pool_b = RandomPool::new();
        whitener.whiten(&batch, 256, &mut pool_a);
        whitener.whiten(&batch, 256, &mut pool_b);

        assert_eq!(pool_a.snapshot(), pool_b.snapshot());
    }

    #[test]
    fn test_chunks_hash_independently() {
        // Two identical chunks must yield identical digests: no hash
        // state carries over between chunks.
        let whitener = Whitener::default();
        let bits: Vec<u8> = (0..256).map(|i| (i % 2) as u8).collect();
        let doubled: Vec<u8> = bits.iter().chain(bits.iter()).copied().collect();

        let mut pool = RandomPool::new();
        whitener.whiten(&BitBatch::from_bits(doubled).unwrap(), 256, &mut pool);

        let snapshot = pool.snapshot();
        assert_eq!(snapshot[..DIGEST_BITS], snapshot[DIGEST_BITS..]);
    }

    #[test]
    fn test_digest_bits_fixed_width() {
        let digest = [0u8; 32];
        let bits = digest_bits(&digest);

        // Leading zeros are kept, never trimmed
        assert_eq!(bits.len(), DIGEST_BITS);
        assert!(bits.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_digest_bits_msb_first() {
        let mut digest = [0u8; 32];
        digest[0] = 0b1000_0001;

        let bits = digest_bits(&digest);
        assert_eq!(bits[0], 1);
        assert_eq!(bits[7], 1);
        assert!(bits[1..7].iter().all(|&b| b == 0));
    }
}
