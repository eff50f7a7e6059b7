//! Nearest-neighbor tour refinement.
//!
//! Keeps the first city of an existing order and rebuilds the rest greedily:
//! each position receives the unplaced city closest to the one before it.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//! for the Traveling Salesman Problem", *SIAM J. Computing* 6(3), 563-581.

use crate::models::Proximity;

/// Reorders `order` in place with the nearest-neighbor rule.
///
/// For each position `i` in `1..n`, the suffix `order[i..]` is scanned for
/// the city with the smallest proximity to `order[i - 1]`, which is then
/// swapped into position `i`. On ties the earliest candidate wins.
///
/// The result is a permutation of the same cities. It is locally greedy,
/// not optimal.
///
/// # Panics
///
/// Panics if `order` contains an index outside `cities`.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::models::City;
/// use u_tsp_ga::constructive::nearest_neighbor_refine;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(2.0, 0.0),
///     City::new(3.0, 0.0),
/// ];
/// let mut order = vec![0, 3, 1, 2];
/// nearest_neighbor_refine(&mut order, &cities);
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
pub fn nearest_neighbor_refine<C: Proximity>(order: &mut [usize], cities: &[C]) {
    let n = order.len();
    for i in 1..n {
        let current = &cities[order[i - 1]];
        let mut best = i;
        let mut best_dist = current.proximity(&cities[order[i]]);
        for j in (i + 1)..n {
            let d = current.proximity(&cities[order[j]]);
            if d < best_dist {
                best = j;
                best_dist = d;
            }
        }
        order.swap(i, best);
    }
}
