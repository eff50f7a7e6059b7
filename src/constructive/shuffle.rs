//! Random permutation construction.

use crate::random::RandomSource;

/// Builds a random permutation of `0..n`.
///
/// Starting from the identity, position `y` is swapped with a uniformly drawn
/// position for every `y` in `0..n`: exactly `n` draws, each from the full
/// range. Unlike the textbook Fisher-Yates shuffle the draw is not restricted
/// to the untouched suffix, so the permutations are not equiprobable.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::constructive::random_permutation;
/// use u_tsp_ga::random::ScriptedSource;
///
/// // Swaps (0,1), (1,0), (2,3), (3,3)
/// let mut src = ScriptedSource::new(vec![1, 0, 3, 3]);
/// assert_eq!(random_permutation(4, &mut src), vec![0, 1, 3, 2]);
/// ```
pub fn random_permutation<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for y in 0..n {
        let r = rng.next_index(n);
        perm.swap(y, r);
    }
    perm
}
