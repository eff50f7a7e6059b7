use std::fmt;

/// Error returned by [`Evolver::run`](super::Evolver::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionError {
    /// The configuration failed [`validate`](super::EvolutionConfig::validate).
    InvalidConfig(String),
    /// There are no cities to tour.
    NoCities,
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(reason) => write!(f, "invalid evolution config: {reason}"),
            Self::NoCities => f.write_str("no cities to tour"),
        }
    }
}

impl std::error::Error for EvolutionError {}
