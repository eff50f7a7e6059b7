//! Segment inversion mutation.
//!
//! Reversing `order[x1..=x2]` replaces the edges `(x1-1, x1)` and `(x2, x2+1)`
//! with `(x1-1, x2)` and `(x1, x2+1)`: a 2-opt move. Inversion is its own
//! inverse, so applying it twice with the same bounds restores the order.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::random::RandomSource;

/// Draws two distinct positions in `0..n`, returned as `(low, high)` with
/// `low < high`.
///
/// The second position is redrawn until it differs from the first.
///
/// # Panics
///
/// Panics if `n < 2`.
pub(crate) fn distinct_bounds<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let x1 = rng.next_index(n);
    let mut x2 = rng.next_index(n);
    while x2 == x1 {
        x2 = rng.next_index(n);
    }
    if x1 < x2 {
        (x1, x2)
    } else {
        (x2, x1)
    }
}

/// Returns a copy of `order` with the closed segment `[x1, x2]` reversed.
///
/// The prefix `order[..x1]` and the suffix `order[x2 + 1..]` are copied
/// unchanged.
///
/// # Panics
///
/// Panics if `x1 > x2` or `x2 >= order.len()`.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::tour::invert_segment;
///
/// assert_eq!(invert_segment(&[0, 1, 2, 3, 4], 1, 3), vec![0, 3, 2, 1, 4]);
/// ```
pub fn invert_segment(order: &[usize], x1: usize, x2: usize) -> Vec<usize> {
    assert!(
        x1 <= x2 && x2 < order.len(),
        "segment [{x1}, {x2}] out of range for length {}",
        order.len()
    );
    let mut out = order.to_vec();
    out[x1..=x2].reverse();
    out
}
