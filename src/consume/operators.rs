//! Draw operators over the random pool.

use crate::pool::{PoolError, RandomPool};
use thiserror::Error;

/// Default cap on candidate draws per `roll_dice` call.
///
/// Rejection sampling discards roughly half the candidates in the worst
/// non-degenerate case, so this leaves generous headroom for realistic
/// counts while still bounding the loop.
pub const DEFAULT_REJECTION_BUDGET: usize = 4096;

/// Errors raised by consumption operators.
#[derive(Debug, Clone, Error)]
pub enum DrawError {
    /// The pool emptied before the draw completed.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// Rejection sampling hit its attempt budget before collecting
    /// enough accepted values.
    #[error("rejection budget exhausted after {attempts} candidate draws ({accepted}/{requested} accepted)")]
    RejectionBudget {
        attempts: usize,
        accepted: usize,
        requested: usize,
    },
    /// Requested bit width cannot be assembled into a u64.
    #[error("unsupported draw width {width} (expected 1..=64)")]
    InvalidWidth { width: usize },
}

/// Pops `width` bits and assembles them into an unsigned integer.
///
/// The first popped bit becomes the most significant. No bias
/// correction is applied: values are naturally biased when the caller's
/// intended range is not a power of two.
pub fn draw_int(pool: &mut RandomPool, width: usize) -> Result<u64, DrawError> {
    if width == 0 || width > 64 {
        return Err(DrawError::InvalidWidth { width });
    }

    let mut value = 0u64;
    for _ in 0..width {
        value = (value << 1) | pool.pop_one()? as u64;
    }
    Ok(value)
}

/// Rolls dice via rejection sampling.
///
/// Draws candidates at `width = bit_length(max_value)` and accepts only
/// values ≤ `max_value`, until `count` values are collected. The loop
/// is bounded by `budget` candidate draws; exceeding it fails with
/// [`DrawError::RejectionBudget`], and pool exhaustion mid-draw
/// propagates as [`PoolError::Exhausted`].
pub fn roll_dice(
    pool: &mut RandomPool,
    max_value: u64,
    count: usize,
    budget: usize,
) -> Result<Vec<u64>, DrawError> {
    let width = bit_length(max_value);
    let mut accepted = Vec::with_capacity(count);
    let mut attempts = 0;

    while accepted.len() < count {
        if attempts >= budget {
            return Err(DrawError::RejectionBudget {
                attempts,
                accepted: accepted.len(),
                requested: count,
            });
        }
        attempts += 1;

        let candidate = draw_int(pool, width)?;
        if candidate <= max_value {
            accepted.push(candidate);
        } else {
            tracing::trace!(candidate, max_value, "Rejected dice candidate");
        }
    }

    Ok(accepted)
}

/// Draws a category index in [0, 15] for the eight-ball.
pub fn draw_category(pool: &mut RandomPool) -> Result<u8, DrawError> {
    Ok(draw_int(pool, 4)? as u8)
}

/// Pops 4 bits and concatenates them as characters, in pop order.
///
/// Despite the coin-flip name this is literally a 4-symbol string, not
/// a single binary flip; the contract is preserved as-is.
pub fn draw_symbol_string(pool: &mut RandomPool) -> Result<String, DrawError> {
    let mut symbols = String::with_capacity(4);
    for _ in 0..4 {
        symbols.push((pool.pop_one()? + b'0') as char);
    }
    Ok(symbols)
}

/// Number of bits needed to represent `value` (1 for zero).
fn bit_length(value: u64) -> usize {
    (64 - value.leading_zeros() as usize).max(1)
}
