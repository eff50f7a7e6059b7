//! Genetic algorithm bridge.
//!
//! - [`TspGaProblem`] — [`GaProblem`](u_metaheur::ga::GaProblem) implementation
//!   evolving [`Tour`](crate::tour::Tour)s with [`GaRunner`](u_metaheur::ga::GaRunner)

mod problem;

pub use problem::TspGaProblem;
