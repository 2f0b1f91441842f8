//! Random source abstraction for password generation
//!
//! Every random decision the generator makes (shuffle swap indices and
//! alphabet indices) goes through the `RandomSource` trait, so tests can
//! swap the operating system CSPRNG for a scripted or seeded source.

pub mod mock;
pub mod real;

pub use mock::ScriptedRandom;
pub use real::CryptoRandom;

/// Source of uniformly distributed integers
///
/// # Implementations
/// - `CryptoRandom`: Production implementation over any `RngCore + CryptoRng`
/// - `ScriptedRandom`: Test implementation replaying a fixed sequence
pub trait RandomSource {
    /// Return a uniformly distributed integer in `[0, bound)`
    ///
    /// # Panics
    ///
    /// Implementations may panic when `bound` is zero.
    fn below(&mut self, bound: usize) -> usize;
}
