//! Cryptographically secure random source

use super::RandomSource;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng as _, RngCore};

/// Production implementation of `RandomSource`
///
/// Only generators marked `CryptoRng` are accepted. Draws use
/// `Rng::gen_range`, which rejects biased samples instead of reducing
/// modulo `bound`.
#[derive(Debug, Clone)]
pub struct CryptoRandom<R> {
    rng: R,
}

impl CryptoRandom<OsRng> {
    /// Create a source backed by the operating system CSPRNG
    #[must_use]
    pub const fn os() -> Self {
        return Self { rng: OsRng };
    }
}

impl<R: RngCore + CryptoRng> CryptoRandom<R> {
    /// Wrap an existing cryptographically secure generator
    #[must_use]
    pub const fn new(rng: R) -> Self {
        return Self { rng };
    }
}

impl Default for CryptoRandom<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore + CryptoRng> RandomSource for CryptoRandom<R> {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
