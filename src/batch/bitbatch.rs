//! Bit batch type for ingested samples.

use thiserror::Error;

/// Errors that can occur while constructing a batch.
#[derive(Debug, Clone, Error)]
pub enum BatchError {
    #[error("batch contains no samples")]
    Empty,
    #[error("invalid sample value {value} at position {position} (expected 0 or 1)")]
    InvalidBit { position: usize, value: u8 },
    #[error("invalid symbol {found:?} at position {position} (expected '0' or '1')")]
    InvalidSymbol { position: usize, found: char },
}

/// An ordered batch of binary samples ingested at one time.
///
/// Batches are produced by the acquisition collaborator (one bit per
/// tracked-object observation) and are immutable once constructed.
/// Each batch is consumed exactly once by the estimation/whitening
/// pipeline.
#[derive(Clone)]
pub struct BitBatch {
    /// Samples, each 0 or 1.
    bits: Vec<u8>,
}

impl BitBatch {
    /// Creates a batch from raw 0/1 values.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self, BatchError> {
        if bits.is_empty() {
            return Err(BatchError::Empty);
        }
        if let Some(position) = bits.iter().position(|&b| b > 1) {
            return Err(BatchError::InvalidBit {
                position,
                value: bits[position],
            });
        }
        Ok(Self { bits })
    }

    /// Parses a batch from text of `'0'`/`'1'` characters.
    ///
    /// This is the file import path: ASCII whitespace (line breaks,
    /// spaces) is skipped, any other character is rejected with its
    /// position in the input.
    pub fn parse(text: &str) -> Result<Self, BatchError> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, ch) in text.char_indices() {
            match ch {
                '0' => bits.push(0),
                '1' => bits.push(1),
                c if c.is_ascii_whitespace() => {}
                c => return Err(BatchError::InvalidSymbol { position, found: c }),
            }
        }
        if bits.is_empty() {
            return Err(BatchError::Empty);
        }
        Ok(Self { bits })
    }

    /// Returns the samples.
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the batch holds no samples.
    ///
    /// Always false for a constructed batch; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Counts the one-valued samples (for distribution analysis).
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }
}

impl std::fmt::Debug for BitBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitBatch")
            .field("len", &self.bits.len())
            .field("ones", &self.count_ones())
            .finish()
    }
}
