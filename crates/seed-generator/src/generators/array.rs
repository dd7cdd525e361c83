//! Selection from fixed pools.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one element uniformly from a pool.
///
/// The pool must not be empty; vocabularies are validated before a
/// generator is built.
pub fn pick<'a, R: Rng, T>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Generate a list of distinct items sampled from a pool.
///
/// The length is drawn from `min_length..=max_length`, clamped to the pool
/// size since items cannot repeat.
pub fn generate_unique_sample<R: Rng>(
    rng: &mut R,
    pool: &[String],
    min_length: usize,
    max_length: usize,
) -> Vec<String> {
    if pool.is_empty() || max_length == 0 {
        return vec![];
    }

    let effective_max = max_length.min(pool.len());
    let effective_min = min_length.min(effective_max);

    let length = rng.gen_range(effective_min..=effective_max);

    // Shuffle and take first `length` items
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(length);
    shuffled
}
