//! GA problem definition for the TSP.
//!
//! Implements the [`GaProblem`](u_metaheur::ga::GaProblem) trait with
//! [`Tour`] individuals so the generic GA engine can evolve tours.
//!
//! # Operators
//!
//! - **Initialization**: Random shuffle, optionally nearest-neighbor refined
//! - **Mutation**: Segment inversion ([`Tour::mutate`])
//! - **Crossover**: None; offspring are copies of the first parent
//! - **Evaluation**: Closed-tour length

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_metaheur::ga::GaProblem;

use crate::evolve::Initialization;
use crate::models::Proximity;
use crate::tour::Tour;

/// GA problem for the traveling salesman.
///
/// Each individual owns a [`StdRng`] seeded from the framework's generator,
/// which it uses for its inversion mutations. The generator is reseeded from
/// the framework before every mutation, so offspring cloned from the same
/// parent draw different segments.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::models::City;
/// use u_tsp_ga::ga::TspGaProblem;
/// use u_metaheur::ga::{GaConfig, GaRunner};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let problem = TspGaProblem::new(&cities);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).expect("valid GA config");
/// assert!(result.best_fitness < f64::INFINITY);
/// ```
pub struct TspGaProblem<'a, C> {
    cities: &'a [C],
    initialization: Initialization,
}

impl<'a, C> TspGaProblem<'a, C> {
    /// Creates a problem over `cities` with random initialization.
    pub fn new(cities: &'a [C]) -> Self {
        Self {
            cities,
            initialization: Initialization::Random,
        }
    }

    /// Sets the construction mode of new individuals.
    pub fn with_initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }

    /// Returns the number of cities.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }
}

impl<'a, C: Proximity + Sync> GaProblem for TspGaProblem<'a, C> {
    type Individual = Tour<'a, C, StdRng>;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour<'a, C, StdRng> {
        let tour_rng = StdRng::seed_from_u64(rng.random());
        match self.initialization {
            Initialization::Random => Tour::random(self.cities, tour_rng),
            Initialization::NearestNeighbor => Tour::nearest_neighbor(self.cities, tour_rng),
        }
    }

    fn evaluate(&self, individual: &Tour<'a, C, StdRng>) -> f64 {
        individual.calculate_cost()
    }

    fn mutate<R: Rng>(&self, individual: &mut Tour<'a, C, StdRng>, rng: &mut R) {
        // Offspring are clones of their parent, generator state included.
        individual.reseed(StdRng::seed_from_u64(rng.random()));
        let order = individual.mutate();
        individual.replace_order(order);
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        debug!("generation {generation}: best cost {best_fitness:.4}");
    }
}
