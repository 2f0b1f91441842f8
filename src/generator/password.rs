//! Password assembly

use crate::generator::charset::Charset;
use crate::generator::slots::{generate_slots, shuffle};
use crate::options::Options;
use crate::random::{CryptoRandom, RandomSource};
use tracing::trace;

/// Build a password for normalized `options` using `rng` for every draw
///
/// Reserved slots guarantee the per-class minimums, the slot order is
/// shuffled and then each slot draws one character uniformly from its
/// alphabet.
///
/// # Panics
///
/// Panics if `options` enables no class, which the normalizer never produces.
#[must_use]
pub fn build(options: &Options, rng: &mut dyn RandomSource) -> String {
    let charset = Charset::new(options);
    let mut slots = generate_slots(options);
    trace!(
        slots = slots.len(),
        reserved = options.reserved_slots(),
        "Laying out password slots"
    );

    shuffle(&mut slots, rng);

    slots
        .into_iter()
        .map(|slot| {
            let alphabet = charset.for_slot(slot);
            alphabet[rng.below(alphabet.len())]
        })
        .collect()
}

/// Build a password with the operating system CSPRNG
#[must_use]
#[inline]
pub fn generate(options: &Options) -> String {
    build(options, &mut CryptoRandom::os())
}
