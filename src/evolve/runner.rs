//! Elitist mutation loop.
//!
//! [`Evolver`] repeats: sort by cost → mutate elites → accept shorter
//! offspring → record the best, until the generation or stagnation limit.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_numflow::random::create_rng;

use super::config::{EvolutionConfig, Initialization};
use super::error::EvolutionError;
use crate::models::Proximity;
use crate::tour::{sort_by_cost, Tour};

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<'a, C> {
    /// The shortest tour found.
    pub best: Tour<'a, C, StdRng>,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because of stagnation.
    pub stagnated: bool,

    /// Best cost after initialization and after each generation.
    ///
    /// Never increases.
    pub cost_history: Vec<f64>,
}

/// Evolves a population of tours with inversion mutation and elitist
/// survivor selection.
///
/// Each generation the population is sorted by cost. Every slot then
/// receives a child mutated from an elite (elite slots mutate their own
/// tour, the others a uniformly chosen elite), and the child replaces the
/// slot's tour only if it is strictly shorter.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::models::City;
/// use u_tsp_ga::evolve::{EvolutionConfig, Evolver};
///
/// let cities: Vec<City> = (0..8)
///     .map(|i| {
///         let a = i as f64 * std::f64::consts::TAU / 8.0;
///         City::new(a.cos(), a.sin())
///     })
///     .collect();
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_elite_count(4)
///     .with_max_generations(200)
///     .with_seed(42);
///
/// let result = Evolver::run(&cities, &config).unwrap();
/// assert_eq!(result.best.len(), 8);
/// assert!(result.best_cost <= result.cost_history[0]);
/// ```
pub struct Evolver;

impl Evolver {
    /// Runs the evolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or `cities` is
    /// empty.
    pub fn run<'a, C: Proximity>(
        cities: &'a [C],
        config: &EvolutionConfig,
    ) -> Result<EvolutionResult<'a, C>, EvolutionError> {
        config.validate().map_err(EvolutionError::InvalidConfig)?;
        if cities.is_empty() {
            return Err(EvolutionError::NoCities);
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        info!(
            "evolving {} cities: population {}, elites {}, up to {} generations (seed {seed})",
            cities.len(),
            config.population_size,
            config.elite_count,
            config.max_generations
        );

        // 1. Initialize population
        let mut population: Vec<Tour<'a, C, StdRng>> = (0..config.population_size)
            .map(|_| spawn(cities, config.initialization, &mut rng))
            .collect();
        sort_by_cost(&mut population, config.population_size);

        let mut best_cost = population[0].cost();
        let mut cost_history = Vec::with_capacity(config.max_generations + 1);
        cost_history.push(best_cost);

        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut generations = config.max_generations;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            breed(&mut population, config.elite_count, &mut rng);
            sort_by_cost(&mut population, config.population_size);

            let gen_best = population[0].cost();
            if gen_best < best_cost {
                debug!("generation {}: best cost {best_cost:.4} -> {gen_best:.4}", gen + 1);
                best_cost = gen_best;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            cost_history.push(best_cost);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                generations = gen + 1;
                break;
            }
        }

        // Slot 0 holds the best tour: elites are only replaced by shorter tours.
        let best = population.swap_remove(0);
        info!(
            "evolution finished after {generations} generations: best cost {:.4}{}",
            best.cost(),
            if stagnated { " (stagnated)" } else { "" }
        );

        Ok(EvolutionResult {
            best_cost: best.cost(),
            best,
            generations,
            stagnated,
            cost_history,
        })
    }
}

/// Builds one tour with its own generator seeded from `rng`.
fn spawn<'a, C: Proximity, R: Rng>(
    cities: &'a [C],
    init: Initialization,
    rng: &mut R,
) -> Tour<'a, C, StdRng> {
    let tour_rng = StdRng::seed_from_u64(rng.random());
    match init {
        Initialization::Random => Tour::random(cities, tour_rng),
        Initialization::NearestNeighbor => Tour::nearest_neighbor(cities, tour_rng),
    }
}

/// Offers every slot a child of an elite and keeps it if strictly shorter.
///
/// `population[..elite_count]` must hold the elites, sorted by cost.
fn breed<'a, C: Proximity, R: Rng>(
    population: &mut [Tour<'a, C, StdRng>],
    elite_count: usize,
    rng: &mut R,
) {
    for slot in 0..population.len() {
        let parent = if slot < elite_count {
            slot
        } else {
            rng.random_range(0..elite_count)
        };
        let order = population[parent].mutate();
        let cities = population[parent].cities();
        let child = Tour::from_valid_order(cities, order, StdRng::seed_from_u64(rng.random()));
        if child.cost() < population[slot].cost() {
            population[slot] = child;
        }
    }
}
