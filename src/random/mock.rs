//! Scripted random source for testing

use super::RandomSource;
use std::collections::VecDeque;

/// Deterministic implementation of `RandomSource` for testing
///
/// Replays a queue of values, reducing each one modulo the requested bound.
/// Once the queue is empty every draw returns `0`. The bound of every call is
/// recorded so tests can assert how many draws were made and with which
/// ranges.
///
/// # Example
/// ```
/// use pwgen::random::{RandomSource, ScriptedRandom};
///
/// let mut source = ScriptedRandom::new([3, 7]);
/// assert_eq!(source.below(5), 3);
/// assert_eq!(source.below(5), 2);
/// assert_eq!(source.below(5), 0);
/// assert_eq!(source.bounds(), &[5, 5, 5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<usize>,
    bounds: Vec<usize>,
}

impl ScriptedRandom {
    /// Create a source that replays `values` in order
    #[must_use]
    pub fn new<I: IntoIterator<Item = usize>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    /// Create a source that always returns `0`
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Bounds passed to every `below` call so far
    #[must_use]
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Number of values not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "random bound must be positive");
        self.bounds.push(bound);
        self.values.pop_front().map_or(0, |value| value % bound)
    }
}
