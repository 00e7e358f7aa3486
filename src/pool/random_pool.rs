//! Destructively-consumable store of whitened bits.

use thiserror::Error;

/// Errors raised by pool operations.
#[derive(Debug, Clone, Error)]
pub enum PoolError {
    /// A pop was attempted on an empty pool.
    #[error("pool exhausted")]
    Exhausted,
    /// A stir was attempted on an odd-length pool.
    #[error("cannot stir pool of odd length {len}")]
    OddLength { len: usize },
}

/// The pool of whitened random bits.
///
/// Ordered and mutable: the whitener appends at the tail, consumers pop
/// from the tail (LIFO). The length only grows through whitening, only
/// shrinks through consumption, or is halved by an explicit stir. An
/// owned value, not a global: callers hold it directly (usually inside
/// the engine) so independent pools can coexist in tests.
#[derive(Debug, Clone, Default)]
pub struct RandomPool {
    bits: Vec<u8>,
}

impl RandomPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends whitened bits at the tail.
    ///
    /// Used only by the whitener.
    pub fn append(&mut self, bits: &[u8]) {
        self.bits.extend_from_slice(bits);
        tracing::trace!(appended = bits.len(), pool_size = self.bits.len(), "Pool grew");
    }

    /// Removes and returns the most-recently-appended bit.
    ///
    /// Fails with [`PoolError::Exhausted`] on an empty pool; never
    /// substitutes a default value.
    pub fn pop_one(&mut self) -> Result<u8, PoolError> {
        self.bits.pop().ok_or(PoolError::Exhausted)
    }

    /// XOR-folds the two halves of the pool, halving its length.
    ///
    /// The first half is XORed position-wise with the second half and
    /// the result replaces the pool. Requires an even length; must be
    /// invoked explicitly, never automatically.
    pub fn stir(&mut self) -> Result<(), PoolError> {
        let len = self.bits.len();
        if len % 2 != 0 {
            return Err(PoolError::OddLength { len });
        }

        let half = len / 2;
        for i in 0..half {
            self.bits[i] ^= self.bits[half + i];
        }
        self.bits.truncate(half);

        tracing::debug!(pool_size = half, "Pool stirred");
        Ok(())
    }

    /// Returns the current number of bits in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the pool holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns a non-destructive copy of the pool contents, in order.
    ///
    /// The export path for persistence: repeated calls with no
    /// intervening mutation return identical sequences.
    pub fn snapshot(&self) -> Vec<u8> {
        self.bits.clone()
    }
}
