//! Consumable pool of whitened bits.

mod random_pool;

pub use random_pool::{PoolError, RandomPool};
