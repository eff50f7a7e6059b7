//! Tour chromosome and its operators.
//!
//! - [`Tour`] — Permutation of city indices with cached cycle length
//! - [`tour_cost`] — Closed-tour length of an order
//! - [`sort_by_cost`] — Stable ascending sort of a tour prefix
//! - [`invert_segment`] — Segment reversal used by [`Tour::mutate`]

mod chromosome;
mod cost;
mod error;
mod mutation;

pub use chromosome::Tour;
pub use cost::{sort_by_cost, tour_cost};
pub use error::TourError;
pub use mutation::invert_segment;
