//! Pool sampling for names, addresses and medical history lists.

use crate::pools::HistoryPool;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Pick one item from a non-empty pool. Returns an empty string for an empty pool.
pub fn pick<R: Rng>(rng: &mut R, pool: &[String]) -> String {
    pool.choose(rng).cloned().unwrap_or_default()
}

/// Sample between 0 and `max_items` distinct items from a pool.
pub fn sample_unique<R: Rng>(rng: &mut R, pool: &[String], max_items: usize) -> Vec<String> {
    if pool.is_empty() || max_items == 0 {
        return vec![];
    }

    // Clamp to pool size for unique sampling
    let effective_max = max_items.min(pool.len());
    let length = rng.random_range(0..=effective_max);

    // Shuffle and take first `length` items
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(length);
    shuffled
}

/// Sample one medical-history category.
///
/// With probability `none_probability` the result is the category's sentinel
/// alone; otherwise 0..=`max_items` distinct real items. The sentinel never
/// appears next to real items.
pub fn sample_history<R: Rng>(
    rng: &mut R,
    pool: &HistoryPool,
    max_items: usize,
    none_probability: f64,
) -> Vec<String> {
    if rng.random_bool(none_probability) {
        return vec![pool.sentinel.clone()];
    }
    sample_unique(rng, &pool.items, max_items)
}
