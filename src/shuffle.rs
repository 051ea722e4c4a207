//! Unbiased shuffling.

use rand::Rng;

/// Return a uniformly random permutation of `items`.
///
/// Fisher–Yates: walking from the last index down, each position is swapped
/// with a uniformly chosen position at or below it, so every one of the
/// `n!` orderings is equally likely. The input slice is left untouched.
///
/// # Example
///
/// ```rust
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use stagegate::shuffle::shuffled;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let original = [1, 2, 3, 4];
/// let mut out = shuffled(&original, &mut rng);
///
/// out.sort();
/// assert_eq!(out, original);
/// ```
pub fn shuffled<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
