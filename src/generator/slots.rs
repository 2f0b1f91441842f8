//! Slot layout and shuffling

use crate::options::{CharClass, Options};
use crate::random::RandomSource;

/// The alphabet one output position draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Guaranteed character of a specific class
    Reserved(CharClass),
    /// Character from the union of enabled alphabets
    Wildcard,
}

/// Lay out the unshuffled slots for `options`
///
/// Reserved slots come first in class order, followed by wildcards up to
/// `options.length`. If `length` is below the reserved count (which the
/// normalizer rules out) the reserved slots are still all emitted.
#[must_use]
pub fn generate_slots(options: &Options) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(options.length.max(options.reserved_slots()));

    for class in CharClass::ALL {
        let count = options.min_for(class);
        slots.extend(std::iter::repeat_n(Slot::Reserved(class), count));
    }

    let wildcards = options.length.saturating_sub(slots.len());
    slots.extend(std::iter::repeat_n(Slot::Wildcard, wildcards));

    slots
}

/// Uniform in-place Fisher-Yates shuffle
///
/// For `i` from the last index down to `1`, swaps `items[i]` with
/// `items[j]` where `j` is drawn uniformly from `[0, i]`.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_single_class_has_one_reserved_slot() {
        let slots = generate_slots(&Options::only(CharClass::Lowercase, 1));
        assert_eq!(slots, vec![Slot::Reserved(CharClass::Lowercase)]);
    }

    #[test]
    fn test_reserved_then_wildcards() {
        let slots = generate_slots(&Options::all(6));
        assert_eq!(
            slots,
            vec![
                Slot::Reserved(CharClass::Lowercase),
                Slot::Reserved(CharClass::Uppercase),
                Slot::Reserved(CharClass::Number),
                Slot::Reserved(CharClass::Special),
                Slot::Wildcard,
                Slot::Wildcard,
            ]
        );
    }

    #[test]
    fn test_higher_minimums_repeat_reserved_slots() {
        let mut options = Options::only(CharClass::Number, 5);
        options.min_number = 3;
        let slots = generate_slots(&options);
        assert_eq!(
            slots
                .iter()
                .filter(|slot| **slot == Slot::Reserved(CharClass::Number))
                .count(),
            3
        );
        assert_eq!(slots.len(), 5);
    }

    #[test]
    fn test_shuffle_draws_from_shrinking_ranges() {
        let mut items = [0, 1, 2, 3, 4];
        let mut rng = ScriptedRandom::zeros();
        shuffle(&mut items, &mut rng);
        assert_eq!(rng.bounds(), &[5, 4, 3, 2]);
    }

    #[test]
    fn test_shuffle_swaps_are_deterministic() {
        // i=3 swaps with 0, i=2 with 2, i=1 with 0
        let mut items = ['a', 'b', 'c', 'd'];
        let mut rng = ScriptedRandom::new([0, 2, 0]);
        shuffle(&mut items, &mut rng);
        assert_eq!(items, ['b', 'd', 'c', 'a']);
    }

    #[test]
    fn test_shuffle_identity_when_drawing_top_index() {
        let mut items = [1, 2, 3, 4];
        let mut rng = ScriptedRandom::new([3, 2, 1]);
        shuffle(&mut items, &mut rng);
        assert_eq!(items, [1, 2, 3, 4]);
    }

    #[test]
    fn test_shuffle_short_slices_draw_nothing() {
        let mut rng = ScriptedRandom::zeros();
        shuffle::<u8>(&mut [], &mut rng);
        shuffle(&mut [7], &mut rng);
        assert!(rng.bounds().is_empty());
    }
}
