//! Constructive procedures for seeding tours.
//!
//! - [`random_permutation`] — N-swap shuffle of `0..n`, O(n)
//! - [`nearest_neighbor_refine`] — Greedy nearest-neighbor reordering, O(n²)

mod nearest_neighbor;
mod shuffle;

pub use nearest_neighbor::nearest_neighbor_refine;
pub use shuffle::random_permutation;
