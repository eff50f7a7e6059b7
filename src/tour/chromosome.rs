//! Tour chromosome.
//!
//! A tour encodes a TSP candidate as a permutation of city indices. It keeps
//! its cycle length cached and owns the random source it mutates with.

use std::fmt;

use log::trace;
use u_metaheur::ga::Individual;

use crate::constructive::{nearest_neighbor_refine, random_permutation};
use crate::models::Proximity;
use crate::random::RandomSource;

use super::cost::tour_cost;
use super::error::TourError;
use super::mutation::{distinct_bounds, invert_segment};

/// A closed tour over a borrowed set of cities.
///
/// The order is always a permutation of `0..cities.len()` and the cached
/// cost always equals [`tour_cost`] of that order.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::models::City;
/// use u_tsp_ga::random::ScriptedSource;
/// use u_tsp_ga::tour::Tour;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let mut tour = Tour::from_order(&cities, vec![0, 1, 2, 3], ScriptedSource::new(vec![1, 2]))
///     .unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// assert_eq!(tour.mutate(), vec![0, 2, 1, 3]);
/// assert_eq!(tour.order(), &[0, 1, 2, 3]);
/// ```
pub struct Tour<'a, C, R> {
    cities: &'a [C],
    order: Vec<usize>,
    cost: f64,
    rng: R,
}

impl<'a, C: Proximity, R: RandomSource> Tour<'a, C, R> {
    /// Creates a tour visiting `cities` in random order.
    ///
    /// See [`random_permutation`] for the shuffle.
    pub fn random(cities: &'a [C], mut rng: R) -> Self {
        let order = random_permutation(cities.len(), &mut rng);
        Self::from_valid_order(cities, order, rng)
    }

    /// Creates a random tour and refines it with the nearest-neighbor rule.
    ///
    /// See [`nearest_neighbor_refine`].
    pub fn nearest_neighbor(cities: &'a [C], mut rng: R) -> Self {
        let mut order = random_permutation(cities.len(), &mut rng);
        nearest_neighbor_refine(&mut order, cities);
        trace!("nearest-neighbor seed starting at city {:?}", order.first());
        Self::from_valid_order(cities, order, rng)
    }

    /// Creates a tour from an existing order.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is not a permutation of
    /// `0..cities.len()`.
    pub fn from_order(cities: &'a [C], order: Vec<usize>, rng: R) -> Result<Self, TourError> {
        validate_order(&order, cities.len())?;
        Ok(Self::from_valid_order(cities, order, rng))
    }

    /// Creates a tour from an order already known to be a valid permutation.
    pub(crate) fn from_valid_order(cities: &'a [C], order: Vec<usize>, rng: R) -> Self {
        debug_assert!(validate_order(&order, cities.len()).is_ok());
        let cost = tour_cost(&order, cities);
        Self {
            cities,
            order,
            cost,
            rng,
        }
    }

    /// Recomputes the tour length from scratch.
    ///
    /// Always equal to [`cost`](Self::cost).
    pub fn calculate_cost(&self) -> f64 {
        tour_cost(&self.order, self.cities)
    }

    /// Produces a mutated copy of the order by reversing a random segment.
    ///
    /// Two distinct positions are drawn from the tour's random source and
    /// the closed segment between them is reversed. The tour itself is left
    /// unchanged; wrap the result in a new tour (or pass it to
    /// [`set_cities`](Self::set_cities)) to accept it.
    ///
    /// Tours with fewer than two cities return an unchanged copy without
    /// drawing.
    pub fn mutate(&mut self) -> Vec<usize> {
        if self.order.len() <= 1 {
            return self.order.clone();
        }
        let (x1, x2) = distinct_bounds(self.order.len(), &mut self.rng);
        invert_segment(&self.order, x1, x2)
    }

    /// Replaces the whole order.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the tour unchanged, if `order` is not a
    /// permutation of the tour's cities.
    pub fn set_cities(&mut self, order: Vec<usize>) -> Result<(), TourError> {
        validate_order(&order, self.cities.len())?;
        self.replace_order(order);
        Ok(())
    }

    /// Places city `value` at position `index`.
    ///
    /// The city previously at `index` moves to the position `value` held,
    /// so the order stays a permutation.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` or `value` is out of range.
    pub fn set_city(&mut self, index: usize, value: usize) -> Result<(), TourError> {
        let len = self.order.len();
        if index >= len {
            return Err(TourError::IndexOutOfRange { index, len });
        }
        if value >= len {
            return Err(TourError::CityOutOfRange {
                city: value,
                count: len,
            });
        }
        if self.order[index] != value {
            if let Some(from) = self.order.iter().position(|&c| c == value) {
                self.order.swap(index, from);
                self.cost = tour_cost(&self.order, self.cities);
            }
        }
        Ok(())
    }

    /// Installs an order already known to be a valid permutation.
    pub(crate) fn replace_order(&mut self, order: Vec<usize>) {
        debug_assert!(validate_order(&order, self.cities.len()).is_ok());
        self.cost = tour_cost(&order, self.cities);
        self.order = order;
    }
}

impl<'a, C, R> Tour<'a, C, R> {
    /// Cached length of the closed tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// City visited at position `i`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::IndexOutOfRange`] if `i >= len()`.
    pub fn city(&self, i: usize) -> Result<usize, TourError> {
        self.order.get(i).copied().ok_or(TourError::IndexOutOfRange {
            index: i,
            len: self.order.len(),
        })
    }

    /// Replaces the tour's random source.
    ///
    /// Clones share their parent's generator state; reseeding keeps their
    /// mutation streams apart.
    pub(crate) fn reseed(&mut self, rng: R) {
        self.rng = rng;
    }

    /// The cities this tour visits.
    pub fn cities(&self) -> &'a [C] {
        self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Checks that `order` is a permutation of `0..count`.
fn validate_order(order: &[usize], count: usize) -> Result<(), TourError> {
    if order.len() != count {
        return Err(TourError::LengthMismatch {
            expected: count,
            found: order.len(),
        });
    }
    let mut seen = vec![false; count];
    for &city in order {
        if city >= count {
            return Err(TourError::CityOutOfRange { city, count });
        }
        if seen[city] {
            return Err(TourError::DuplicateCity { city });
        }
        seen[city] = true;
    }
    Ok(())
}

// Manual impls: the cities are borrowed, so `C` itself needs no bounds.
impl<C, R: Clone> Clone for Tour<'_, C, R> {
    fn clone(&self) -> Self {
        Self {
            cities: self.cities,
            order: self.order.clone(),
            cost: self.cost,
            rng: self.rng.clone(),
        }
    }
}

impl<C, R> fmt::Debug for Tour<'_, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tour")
            .field("order", &self.order)
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

impl<C, R> Individual for Tour<'_, C, R>
where
    C: Proximity + Sync,
    R: RandomSource + Clone + Send + Sync,
{
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.cost
    }

    /// The cost is maintained by the tour itself; the framework only ever
    /// reports back the value computed from the same order.
    fn set_fitness(&mut self, fitness: f64) {
        debug_assert!(
            (fitness - self.cost).abs() <= 1e-9 * self.cost.abs().max(1.0),
            "fitness {fitness} disagrees with cached cost {}",
            self.cost
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;
    use crate::random::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_square() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ]
    }

    fn scripted(values: &[usize]) -> ScriptedSource {
        ScriptedSource::new(values.to_vec())
    }

    fn is_permutation(perm: &[usize], n: usize) -> bool {
        let mut sorted = perm.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_from_order_cost() {
        let cities = unit_square();
        let t = Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[0, 1])).expect("valid");
        assert!((t.cost() - 4.0).abs() < 1e-10);
        let t = Tour::from_order(&cities, vec![0, 2, 1, 3], scripted(&[0, 1])).expect("valid");
        assert!((t.cost() - (4.0 + 2.0 * 2f64.sqrt() - 2.0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_order_rejects_wrong_length() {
        let cities = unit_square();
        let err = Tour::from_order(&cities, vec![0, 1, 2], scripted(&[0, 1])).unwrap_err();
        assert_eq!(
            err,
            TourError::LengthMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_from_order_rejects_duplicate() {
        let cities = unit_square();
        let err = Tour::from_order(&cities, vec![0, 1, 1, 3], scripted(&[0, 1])).unwrap_err();
        assert_eq!(err, TourError::DuplicateCity { city: 1 });
    }

    #[test]
    fn test_from_order_rejects_out_of_range() {
        let cities = unit_square();
        let err = Tour::from_order(&cities, vec![0, 1, 4, 3], scripted(&[0, 1])).unwrap_err();
        assert_eq!(err, TourError::CityOutOfRange { city: 4, count: 4 });
    }

    #[test]
    fn test_random_is_permutation() {
        let cities: Vec<City> = (0..25).map(|i| City::new(i as f64, (i * i) as f64)).collect();
        for seed in 0..20 {
            let t = Tour::random(&cities, StdRng::seed_from_u64(seed));
            assert!(is_permutation(t.order(), 25));
            assert!((t.cost() - t.calculate_cost()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_random_scripted_shuffle() {
        let cities = unit_square();
        let t = Tour::random(&cities, scripted(&[2, 2, 0, 3]));
        // (0,2): [2,1,0,3]  (1,2): [2,0,1,3]  (2,0): [1,0,2,3]  (3,3)
        assert_eq!(t.order(), &[1, 0, 2, 3]);
    }

    #[test]
    fn test_nearest_neighbor_on_line() {
        let cities: Vec<City> = (0..8).map(|i| City::new(i as f64, 0.0)).collect();
        // Identity shuffle leaves city 0 first; the greedy pass walks the line.
        let t = Tour::nearest_neighbor(&cities, scripted(&[0, 1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(t.order(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert!((t.cost() - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_nearest_neighbor_keeps_shuffled_start() {
        let cities: Vec<City> = (0..30)
            .map(|i| City::new(((i * 37) % 11) as f64, ((i * 53) % 13) as f64))
            .collect();
        for seed in 0..10 {
            let random = Tour::random(&cities, StdRng::seed_from_u64(seed));
            let greedy = Tour::nearest_neighbor(&cities, StdRng::seed_from_u64(seed));
            assert!(is_permutation(greedy.order(), 30));
            assert_eq!(greedy.order()[0], random.order()[0]);
        }
    }

    #[test]
    fn test_empty_and_single() {
        let none: Vec<City> = vec![];
        let mut t = Tour::random(&none, scripted(&[0, 1]));
        assert!(t.is_empty());
        assert_eq!(t.cost(), 0.0);
        assert!(t.mutate().is_empty());

        let one = vec![City::new(3.0, 3.0)];
        let mut src = scripted(&[0, 1]);
        let order = random_permutation(1, &mut src);
        let mut t = Tour::from_order(&one, order, scripted(&[0, 1])).expect("valid");
        assert_eq!(t.cost(), 0.0);
        assert_eq!(t.mutate(), vec![0]);
    }

    #[test]
    fn test_mutate_adjacent_swap() {
        let cities = unit_square();
        let mut t =
            Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[1, 2])).expect("valid");
        assert_eq!(t.mutate(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_mutate_leaves_tour_unchanged() {
        let cities = unit_square();
        let mut t =
            Tour::from_order(&cities, vec![0, 2, 1, 3], scripted(&[0, 3])).expect("valid");
        let before = t.cost();
        let mutated = t.mutate();
        assert_eq!(mutated, vec![3, 1, 2, 0]);
        assert_eq!(t.order(), &[0, 2, 1, 3]);
        assert_eq!(t.cost(), before);
    }

    #[test]
    fn test_mutate_twice_same_bounds_restores() {
        let cities: Vec<City> = (0..6).map(|i| City::new(i as f64, 1.0)).collect();
        let original = vec![4, 0, 5, 2, 1, 3];
        let mut t = Tour::from_order(&cities, original.clone(), scripted(&[4, 1])).expect("valid");
        let once = t.mutate();
        assert_ne!(once, original);
        t.set_cities(once).expect("mutation keeps permutation");
        assert_eq!(t.mutate(), original);
    }

    #[test]
    fn test_mutate_redraws_equal_bounds() {
        let cities = unit_square();
        let mut t =
            Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[2, 2, 2, 3])).expect("valid");
        assert_eq!(t.mutate(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_mutate_two_value_script_never_redraws() {
        let cities = unit_square();
        let mut t = Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[0, 1])).expect("valid");
        for _ in 0..10 {
            assert_eq!(t.mutate(), vec![1, 0, 2, 3]);
        }
        assert_eq!(t.rng.draws(), 20);
    }

    #[test]
    fn test_reseed_splits_clone_streams() {
        let cities = unit_square();
        let parent =
            Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[1, 2])).expect("valid");
        let mut a = parent.clone();
        let mut b = parent.clone();
        b.reseed(scripted(&[0, 3]));
        assert_eq!(a.mutate(), vec![0, 2, 1, 3]);
        assert_eq!(b.mutate(), vec![3, 2, 1, 0]);
        assert_eq!(a.order(), b.order());
    }

    #[test]
    fn test_city_access() {
        let cities = unit_square();
        let t = Tour::from_order(&cities, vec![3, 1, 0, 2], scripted(&[0, 1])).expect("valid");
        assert_eq!(t.city(0), Ok(3));
        assert_eq!(t.city(3), Ok(2));
        assert_eq!(
            t.city(4),
            Err(TourError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_set_cities_recomputes_cost() {
        let cities = unit_square();
        let mut t = Tour::from_order(&cities, vec![0, 2, 1, 3], scripted(&[0, 1])).expect("valid");
        t.set_cities(vec![0, 1, 2, 3]).expect("valid");
        assert!((t.cost() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_set_cities_invalid_leaves_tour() {
        let cities = unit_square();
        let mut t = Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[0, 1])).expect("valid");
        assert!(t.set_cities(vec![0, 0, 2, 3]).is_err());
        assert_eq!(t.order(), &[0, 1, 2, 3]);
        assert!((t.cost() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_set_city_swaps_displaced() {
        let cities = unit_square();
        let mut t = Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[0, 1])).expect("valid");
        t.set_city(1, 2).expect("in range");
        assert_eq!(t.order(), &[0, 2, 1, 3]);
        assert!((t.cost() - t.calculate_cost()).abs() < 1e-12);
        t.set_city(1, 2).expect("no-op");
        assert_eq!(t.order(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_set_city_out_of_range() {
        let cities = unit_square();
        let mut t = Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[0, 1])).expect("valid");
        assert_eq!(
            t.set_city(4, 0),
            Err(TourError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            t.set_city(0, 7),
            Err(TourError::CityOutOfRange { city: 7, count: 4 })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let cities = unit_square();
        let t = Tour::from_order(&cities, vec![0, 1, 2, 3], scripted(&[1, 2])).expect("valid");
        let mut c = t.clone();
        c.set_city(0, 3).expect("in range");
        assert_eq!(t.order(), &[0, 1, 2, 3]);
        assert_eq!(c.order(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_individual_fitness_is_cost() {
        let cities = unit_square();
        let t = Tour::from_order(&cities, vec![0, 1, 2, 3], StdRng::seed_from_u64(1))
            .expect("valid");
        assert_eq!(t.fitness(), t.cost());
    }
}
