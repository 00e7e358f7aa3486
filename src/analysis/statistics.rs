//! Per-batch distribution statistics and entropy estimation.

use super::correction::corrected_chunk_size;
use crate::batch::BitBatch;
use thiserror::Error;

/// Error raised when a batch is all-ones or all-zeros.
///
/// Binary Shannon entropy is undefined when either proportion is zero
/// (log of zero), so a degenerate batch is reported as a typed failure
/// rather than computed into a NaN.
#[derive(Debug, Clone, Error)]
#[error("degenerate bit distribution: batch is all-{symbol}s, entropy undefined")]
pub struct DegenerateDistribution {
    /// The only symbol present in the batch (0 or 1).
    pub symbol: u8,
}

/// Statistics derived from one ingested batch.
///
/// Recomputed on every ingestion; values describe the most recent batch
/// only, with no smoothing across batches.
#[derive(Debug, Clone)]
pub struct BatchStatistics {
    /// Fraction of one-valued samples, in (0, 1).
    pub percent_ones: f64,
    /// Fraction of zero-valued samples, in (0, 1).
    pub percent_zeros: f64,
    /// Binary Shannon entropy of the distribution, in [0, 1].
    pub entropy_bits: f64,
    /// Raw bits the whitener must consume per digest for this batch.
    pub corrected_chunk_size: usize,
}

impl BatchStatistics {
    /// Analyzes a batch: distribution, entropy, and chunk correction.
    pub fn analyze(batch: &BitBatch) -> Result<Self, DegenerateDistribution> {
        let ones = batch.count_ones();
        let total = batch.len();

        if ones == 0 {
            return Err(DegenerateDistribution { symbol: 0 });
        }
        if ones == total {
            return Err(DegenerateDistribution { symbol: 1 });
        }

        let percent_ones = ones as f64 / total as f64;
        let percent_zeros = 1.0 - percent_ones;
        let entropy_bits = binary_entropy(percent_ones, percent_zeros);

        Ok(Self {
            percent_ones,
            percent_zeros,
            entropy_bits,
            corrected_chunk_size: corrected_chunk_size(entropy_bits),
        })
    }

    /// Builds statistics from an assumed entropy value.
    ///
    /// Used by the floor-entropy ingestion policy when a degenerate batch
    /// is whitened anyway with a substituted entropy estimate.
    pub fn with_floor_entropy(batch: &BitBatch, entropy_bits: f64) -> Self {
        let percent_ones = batch.count_ones() as f64 / batch.len() as f64;
        Self {
            percent_ones,
            percent_zeros: 1.0 - percent_ones,
            entropy_bits,
            corrected_chunk_size: corrected_chunk_size(entropy_bits),
        }
    }
}

/// Binary Shannon entropy `-p1·log2(p1) - p0·log2(p0)`.
///
/// Both proportions must be strictly positive.
fn binary_entropy(p1: f64, p0: f64) -> f64 {
    debug_assert!(p1 > 0.0 && p0 > 0.0);
    -p1 * p1.log2() - p0 * p0.log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_balanced_batch_full_entropy() {
        let batch = BitBatch::from_bits(vec![0, 1, 0, 1, 0, 1]).unwrap();
        let stats = BatchStatistics::analyze(&batch).unwrap();

        assert_eq!(stats.percent_ones, 0.5);
        assert_eq!(stats.percent_zeros, 0.5);
        assert_eq!(stats.entropy_bits, 1.0);
        assert_eq!(stats.corrected_chunk_size, 256);
    }

    #[test]
    fn test_percentages_sum_to_one() {
        let batch = BitBatch::from_bits(vec![1, 1, 1, 0]).unwrap();
        let stats = BatchStatistics::analyze(&batch).unwrap();

        assert!((stats.percent_ones + stats.percent_zeros - 1.0).abs() < 1e-12);
        assert_eq!(stats.percent_ones, 0.75);
    }

    #[test]
    fn test_all_zeros_degenerate() {
        let batch = BitBatch::from_bits(vec![0; 100]).unwrap();
        let err = BatchStatistics::analyze(&batch).unwrap_err();
        assert_eq!(err.symbol, 0);
    }

    #[test]
    fn test_all_ones_degenerate() {
        let batch = BitBatch::from_bits(vec![1; 100]).unwrap();
        let err = BatchStatistics::analyze(&batch).unwrap_err();
        assert_eq!(err.symbol, 1);
    }

    #[test]
    fn test_skewed_batch_lower_entropy() {
        // 1 one in 8 samples: strongly biased, entropy well below 1
        let batch = BitBatch::from_bits(vec![1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let stats = BatchStatistics::analyze(&batch).unwrap();

        assert!(stats.entropy_bits > 0.0);
        assert!(stats.entropy_bits < 0.6);
        assert!(stats.corrected_chunk_size > 256);
    }

    proptest! {
        #[test]
        fn prop_entropy_in_unit_range(ones in 1usize..256, zeros in 1usize..256) {
            let mut bits = vec![1u8; ones];
            bits.extend(std::iter::repeat(0u8).take(zeros));
            let batch = BitBatch::from_bits(bits).unwrap();

            let stats = BatchStatistics::analyze(&batch).unwrap();
            prop_assert!(stats.entropy_bits > 0.0);
            prop_assert!(stats.entropy_bits <= 1.0);
        }

        #[test]
        fn prop_full_entropy_only_when_balanced(ones in 1usize..256, zeros in 1usize..256) {
            let mut bits = vec![1u8; ones];
            bits.extend(std::iter::repeat(0u8).take(zeros));
            let batch = BitBatch::from_bits(bits).unwrap();

            let stats = BatchStatistics::analyze(&batch).unwrap();
            if ones == zeros {
                prop_assert_eq!(stats.entropy_bits, 1.0);
            } else {
                prop_assert!(stats.entropy_bits < 1.0);
            }
        }
    }
}
