//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the elitist
//! mutation loop.

use serde::{Deserialize, Serialize};

/// How the initial population is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Initialization {
    /// Shuffled tours.
    #[default]
    Random,
    /// Shuffled tours refined with the nearest-neighbor rule.
    NearestNeighbor,
}

/// Configuration for [`Evolver`](super::Evolver).
///
/// # Defaults
///
/// ```
/// use u_tsp_ga::evolve::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_count, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp_ga::evolve::{EvolutionConfig, Initialization};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(60)
///     .with_elite_count(6)
///     .with_initialization(Initialization::NearestNeighbor)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of tours in the population.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Number of best tours that act as parents each generation.
    ///
    /// Elites are only ever replaced by strictly shorter offspring.
    pub elite_count: usize,

    /// Generations without a strictly shorter best tour before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Construction mode for the initial population.
    pub initialization: Initialization,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            elite_count: 10,
            stagnation_limit: 200,
            initialization: Initialization::Random,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the construction mode of the initial population.
    pub fn with_initialization(mut self, init: Initialization) -> Self {
        self.initialization = init;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.elite_count == 0 {
            return Err("elite_count must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must be smaller than population_size".into());
        }
        Ok(())
    }
}
