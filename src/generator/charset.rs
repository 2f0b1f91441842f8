//! Character alphabets

use crate::generator::slots::Slot;
use crate::options::{CharClass, Options};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SPECIAL: &str = "~!@#$%^&*()_-+=:;<,>.?/";

/// Characters dropped when ambiguous characters are excluded
pub const AMBIGUOUS: [char; 5] = ['l', 'I', 'O', '0', '1'];

/// Base alphabet of a class, before any exclusion
#[must_use]
pub const fn base_alphabet(class: CharClass) -> &'static str {
    match class {
        CharClass::Lowercase => LOWERCASE,
        CharClass::Uppercase => UPPERCASE,
        CharClass::Number => NUMBERS,
        CharClass::Special => SPECIAL,
    }
}

/// Alphabet of a class, optionally without the ambiguous characters
#[must_use]
pub fn alphabet(class: CharClass, ambiguous: bool) -> Vec<char> {
    base_alphabet(class)
        .chars()
        .filter(|c| ambiguous || !AMBIGUOUS.contains(c))
        .collect()
}

/// Alphabets resolved for one set of options
///
/// Disabled classes get an empty alphabet. The wildcard alphabet is the
/// concatenation of the enabled class alphabets in class order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    classes: [Vec<char>; 4],
    wildcard: Vec<char>,
}

impl Charset {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let classes = CharClass::ALL.map(|class| {
            if options.is_enabled(class) {
                alphabet(class, options.ambiguous)
            } else {
                Vec::new()
            }
        });
        let wildcard = classes.concat();
        Self { classes, wildcard }
    }

    /// Alphabet for a single class
    #[must_use]
    pub fn class(&self, class: CharClass) -> &[char] {
        &self.classes[class_index(class)]
    }

    /// Union of every enabled class alphabet
    #[must_use]
    pub fn wildcard(&self) -> &[char] {
        &self.wildcard
    }

    /// Alphabet a slot draws from
    #[must_use]
    pub fn for_slot(&self, slot: Slot) -> &[char] {
        match slot {
            Slot::Reserved(class) => self.class(class),
            Slot::Wildcard => self.wildcard(),
        }
    }
}

const fn class_index(class: CharClass) -> usize {
    match class {
        CharClass::Lowercase => 0,
        CharClass::Uppercase => 1,
        CharClass::Number => 2,
        CharClass::Special => 3,
    }
}
