//! Random index sources.
//!
//! Every [`Tour`](crate::tour::Tour) owns a [`RandomSource`]. Any
//! [`rand::Rng`] is one; [`ScriptedSource`] replays fixed values so shuffles
//! and mutation bounds can be pinned in tests.

use rand::Rng;

/// Produces uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..upper`.
    ///
    /// `upper` must be positive.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// A source that cycles through a fixed list of values.
///
/// Each value is reduced modulo the requested bound.
///
/// [`Tour::mutate`](crate::tour::Tour::mutate) redraws its second bound until
/// it differs from the first, so a script driving mutation must contain at
/// least two values that stay distinct modulo the tour length. A script whose
/// values all coincide makes that redraw loop forever.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::random::{RandomSource, ScriptedSource};
///
/// let mut src = ScriptedSource::new(vec![1, 7]);
/// assert_eq!(src.next_index(4), 1);
/// assert_eq!(src.next_index(4), 3);
/// assert_eq!(src.next_index(4), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a scripted source.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<usize>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}
