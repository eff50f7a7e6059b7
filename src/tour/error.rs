//! Tour contract violations.

use std::fmt;

/// Error raised when a caller hands a [`Tour`](super::Tour) an invalid order
/// or position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// The order length differs from the number of cities.
    LengthMismatch { expected: usize, found: usize },
    /// The order names a city that does not exist.
    CityOutOfRange { city: usize, count: usize },
    /// The order visits a city more than once.
    DuplicateCity { city: usize },
    /// A position outside `0..len` was accessed.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "order has {found} entries, expected {expected}")
            }
            Self::CityOutOfRange { city, count } => {
                write!(f, "city {city} out of range for {count} cities")
            }
            Self::DuplicateCity { city } => write!(f, "city {city} appears more than once"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "position {index} out of range for tour of length {len}")
            }
        }
    }
}

impl std::error::Error for TourError {}
