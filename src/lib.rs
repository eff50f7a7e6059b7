//! # u-tsp-ga
//!
//! Genetic-algorithm heuristics for the traveling salesman problem, built
//! around a permutation chromosome with segment-inversion mutation.
//!
//! ## Modules
//!
//! - [`models`] — City locations and the `Proximity` trait
//! - [`random`] — Pluggable random index sources
//! - [`tour`] — Tour chromosome, cost evaluation, inversion mutation, sorting
//! - [`constructive`] — Random shuffle and nearest-neighbor refinement
//! - [`evolve`] — Elitist mutation-only evolution driver
//! - [`ga`] — Bridge to the `u-metaheur` GA framework

pub mod constructive;
pub mod evolve;
pub mod ga;
pub mod models;
pub mod random;
pub mod tour;
