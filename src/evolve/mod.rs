//! Elitist evolution driver.
//!
//! A mutation-only evolutionary loop over [`Tour`](crate::tour::Tour)s:
//! the best `elite_count` tours breed by segment inversion and offspring
//! survive only when shorter than the tour they would replace.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Population size, elites, termination, seeding
//! - [`Evolver`]: Executes the loop
//! - [`EvolutionResult`]: Best tour and cost history

mod config;
mod error;
mod runner;

pub use config::{EvolutionConfig, Initialization};
pub use error::EvolutionError;
pub use runner::{EvolutionResult, Evolver};
