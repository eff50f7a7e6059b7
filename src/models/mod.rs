//! Domain model types for the traveling salesman problem.
//!
//! Cities are points on the plane. Tours only ever ask them for pairwise
//! distance through the [`Proximity`] trait.

mod city;

pub use city::{City, Proximity};
