//! City locations and the proximity contract.

use serde::{Deserialize, Serialize};

/// Pairwise distance between two locations.
///
/// Implementations must be non-negative and commutative:
/// `a.proximity(b) == b.proximity(a)`. [`Tour`](crate::tour::Tour) relies on
/// symmetry when it treats a tour and its reversal as the same cycle.
pub trait Proximity {
    /// Distance from `self` to `other`.
    fn proximity(&self, other: &Self) -> f64;
}

/// A city on the plane.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::models::{City, Proximity};
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0);
/// assert!((a.proximity(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Proximity for City {
    /// Euclidean distance.
    fn proximity(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
