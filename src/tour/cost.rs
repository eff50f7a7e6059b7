//! Tour length and cost ordering.

use crate::models::Proximity;

use super::chromosome::Tour;

/// Length of the closed tour visiting `cities` in `order`.
///
/// Sums the edges `order[i] → order[i + 1]` and the closing edge
/// `order[n - 1] → order[0]`. Empty and single-city orders cost 0.
///
/// # Panics
///
/// Panics if `order` contains an index outside `cities`.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::models::City;
/// use u_tsp_ga::tour::tour_cost;
///
/// let square = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// assert!((tour_cost(&[0, 1, 2, 3], &square) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_cost<C: Proximity>(order: &[usize], cities: &[C]) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let path: f64 = order
        .windows(2)
        .map(|w| cities[w[0]].proximity(&cities[w[1]]))
        .sum();
    path + cities[order[0]].proximity(&cities[order[order.len() - 1]])
}

/// Sorts the first `k` tours by ascending cost.
///
/// The sort is stable: tours with equal cost keep their relative order.
/// Entries from `k` onwards are left untouched. `k` larger than the slice
/// is treated as the slice length.
pub fn sort_by_cost<C, R>(tours: &mut [Tour<'_, C, R>], k: usize) {
    let k = k.min(tours.len());
    tours[..k].sort_by(|a, b| a.cost().total_cmp(&b.cost()));
}
