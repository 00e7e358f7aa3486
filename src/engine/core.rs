//! The entropy engine.

use super::config::{DegeneratePolicy, EngineConfig};
use crate::analysis::{BatchStatistics, DegenerateDistribution};
use crate::batch::BitBatch;
use crate::consume::{self, DrawError};
use crate::pool::{PoolError, RandomPool};
use crate::whitening::Whitener;

/// Accounting for one ingestion.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Statistics computed for the batch.
    pub statistics: BatchStatistics,
    /// Full chunks whitened into the pool.
    pub chunks_whitened: usize,
    /// Bits appended to the pool.
    pub appended_bits: usize,
    /// Trailing raw bits dropped.
    pub dropped_bits: usize,
}

/// The entropy pool engine.
///
/// Owns the single process-wide pool along with the whitener and the
/// most recent batch statistics. Each ingestion runs estimation, chunk
/// correction, and whitening synchronously on the calling thread;
/// consumption runs on demand, independent of ingestion.
///
/// Single-threaded by design: a caller that needs shared access wraps
/// the whole engine in one mutex so that appends, pops, and stirs stay
/// atomic relative to each other.
pub struct EntropyEngine {
    pool: RandomPool,
    whitener: Whitener,
    statistics: Option<BatchStatistics>,
    config: EngineConfig,
}

impl EntropyEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            pool: RandomPool::new(),
            whitener: Whitener::new(config.algorithm),
            statistics: None,
            config,
        }
    }

    /// Ingests one batch: estimation → chunk correction → whitening.
    ///
    /// On a degenerate batch the configured policy applies: `Skip`
    /// propagates the error without touching the pool, `Floor`
    /// substitutes the configured entropy and whitens anyway.
    pub fn ingest(&mut self, batch: &BitBatch) -> Result<IngestReport, DegenerateDistribution> {
        let statistics = match BatchStatistics::analyze(batch) {
            Ok(stats) => stats,
            Err(degenerate) => match self.config.degenerate_policy {
                DegeneratePolicy::Skip => return Err(degenerate),
                DegeneratePolicy::Floor(entropy) => {
                    tracing::warn!(
                        symbol = degenerate.symbol,
                        floor_entropy = entropy,
                        "Degenerate batch, whitening with floor entropy"
                    );
                    BatchStatistics::with_floor_entropy(batch, entropy)
                }
            },
        };

        let outcome =
            self.whitener
                .whiten(batch, statistics.corrected_chunk_size, &mut self.pool);

        tracing::debug!(
            batch_len = batch.len(),
            entropy = statistics.entropy_bits,
            chunk_size = statistics.corrected_chunk_size,
            chunks = outcome.chunks,
            pool_size = self.pool.len(),
            "Ingested batch"
        );

        self.statistics = Some(statistics.clone());
        Ok(IngestReport {
            statistics,
            chunks_whitened: outcome.chunks,
            appended_bits: outcome.appended_bits,
            dropped_bits: outcome.dropped_bits,
        })
    }

    /// Returns the current pool size in bits.
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Returns the statistics of the most recently analyzed batch.
    pub fn current_statistics(&self) -> Option<&BatchStatistics> {
        self.statistics.as_ref()
    }

    /// Returns the chunk size current for the next whitening pass.
    ///
    /// `None` before the first successful ingestion.
    pub fn corrected_chunk_size(&self) -> Option<usize> {
        self.statistics.as_ref().map(|s| s.corrected_chunk_size)
    }

    /// Returns a non-destructive snapshot of the pool for persistence.
    pub fn export_pool(&self) -> Vec<u8> {
        self.pool.snapshot()
    }

    /// XOR-folds the pool's halves, halving its length.
    pub fn stir(&mut self) -> Result<(), PoolError> {
        self.pool.stir()
    }

    /// Rolls `count` dice with faces 0..=`max_value`.
    pub fn roll_dice(&mut self, max_value: u64, count: usize) -> Result<Vec<u64>, DrawError> {
        consume::roll_dice(&mut self.pool, max_value, count, self.config.rejection_budget)
    }

    /// Draws a fixed-width unsigned integer.
    pub fn draw_int(&mut self, width: usize) -> Result<u64, DrawError> {
        consume::draw_int(&mut self.pool, width)
    }

    /// Draws an eight-ball response.
    pub fn eight_ball(&mut self) -> Result<&'static str, DrawError> {
        let category = consume::draw_category(&mut self.pool)?;
        // A 4-bit draw always lands inside the 20-entry table
        Ok(consume::eight_ball_response(category)
            .unwrap_or(consume::EIGHT_BALL_RESPONSES[0]))
    }

    /// Draws the 4-symbol coin-flip string.
    pub fn coin_flip(&mut self) -> Result<String, DrawError> {
        consume::draw_symbol_string(&mut self.pool)
    }
}

impl Default for EntropyEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whitening::DIGEST_BITS;

    fn alternating(len: usize) -> BitBatch {
        BitBatch::from_bits((0..len).map(|i| (i % 2) as u8).collect()).unwrap()
    }

    #[test]
    fn test_alternating_600_bit_scenario() {
        let mut engine = EntropyEngine::default();
        let report = engine.ingest(&alternating(600)).unwrap();

        assert_eq!(report.statistics.percent_ones, 0.5);
        assert_eq!(report.statistics.percent_zeros, 0.5);
        assert_eq!(report.statistics.entropy_bits, 1.0);
        assert_eq!(report.statistics.corrected_chunk_size, 256);

        // 600 = 2 * 256 + 88: two chunks whitened, 88 bits dropped
        assert_eq!(report.chunks_whitened, 2);
        assert_eq!(report.dropped_bits, 88);
        assert_eq!(engine.pool_size(), 2 * DIGEST_BITS);
    }

    #[test]
    fn test_degenerate_batch_skipped_by_default() {
        let mut engine = EntropyEngine::default();
        let batch = BitBatch::from_bits(vec![1; 600]).unwrap();

        assert!(engine.ingest(&batch).is_err());
        // Pool untouched, statistics not recorded
        assert_eq!(engine.pool_size(), 0);
        assert!(engine.current_statistics().is_none());
    }

    #[test]
    fn test_degenerate_batch_floor_policy_whitens() {
        let config = EngineConfig {
            degenerate_policy: DegeneratePolicy::Floor(0.0),
            ..Default::default()
        };
        let mut engine = EntropyEngine::new(config);
        let batch = BitBatch::from_bits(vec![1; 512]).unwrap();

        let report = engine.ingest(&batch).unwrap();
        // Floor entropy 0.0 corrects the chunk size to 512
        assert_eq!(report.statistics.corrected_chunk_size, 512);
        assert_eq!(report.chunks_whitened, 1);
        assert_eq!(engine.pool_size(), DIGEST_BITS);
    }

    #[test]
    fn test_chunk_size_overwritten_per_batch() {
        let mut engine = EntropyEngine::default();

        engine.ingest(&alternating(512)).unwrap();
        assert_eq!(engine.corrected_chunk_size(), Some(256));

        // Skewed batch: lower entropy, larger chunk
        let mut bits = vec![0u8; 500];
        bits.extend(std::iter::repeat(1u8).take(12));
        engine.ingest(&BitBatch::from_bits(bits).unwrap()).unwrap();
        assert!(engine.corrected_chunk_size().unwrap() > 256);
    }

    #[test]
    fn test_export_does_not_consume() {
        let mut engine = EntropyEngine::default();
        engine.ingest(&alternating(512)).unwrap();

        let first = engine.export_pool();
        let second = engine.export_pool();
        assert_eq!(first, second);
        assert_eq!(engine.pool_size(), first.len());
    }

    #[test]
    fn test_consumption_shrinks_pool() {
        let mut engine = EntropyEngine::default();
        engine.ingest(&alternating(512)).unwrap();
        let before = engine.pool_size();

        engine.draw_int(8).unwrap();
        assert_eq!(engine.pool_size(), before - 8);

        engine.coin_flip().unwrap();
        assert_eq!(engine.pool_size(), before - 12);

        engine.eight_ball().unwrap();
        assert_eq!(engine.pool_size(), before - 16);
    }

    #[test]
    fn test_dice_roll_count_contract() {
        // Documented contract: exactly `count` values, the historical
        // extra value is not produced.
        let mut engine = EntropyEngine::default();
        engine.ingest(&alternating(2 * 512)).unwrap();

        let rolls = engine.roll_dice(5, 3).unwrap();
        assert_eq!(rolls.len(), 3);
        assert!(rolls.iter().all(|&v| v <= 5));
    }

    #[test]
    fn test_stir_halves_engine_pool() {
        let mut engine = EntropyEngine::default();
        engine.ingest(&alternating(512)).unwrap();
        let before = engine.pool_size();

        engine.stir().unwrap();
        assert_eq!(engine.pool_size(), before / 2);
    }

    #[test]
    fn test_draw_on_empty_pool_fails() {
        let mut engine = EntropyEngine::default();
        assert!(matches!(
            engine.draw_int(4),
            Err(DrawError::Pool(PoolError::Exhausted))
        ));
    }
}
