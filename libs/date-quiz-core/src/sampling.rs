//! Random sampling helpers. All take the random source as an argument.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Draw `n` elements independently and uniformly, with replacement.
///
/// Returns an empty vector when `pool` is empty.
pub fn sample_with_replacement<T: Clone, R: Rng + ?Sized>(pool: &[T], n: usize, rng: &mut R) -> Vec<T> {
    if pool.is_empty() {
        return Vec::new();
    }
    (0..n)
        .filter_map(|_| pool.choose(rng).cloned())
        .collect()
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Fair coin.
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}
