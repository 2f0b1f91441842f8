//! Core option types
//!
//! This module defines the character classes, the raw (unvalidated) flags
//! coming from the command line and the normalized `Options` record the
//! generator consumes.

use std::fmt::{self, Display, Formatter};

/// Built-in password length when neither `--length` nor a positional length is given
pub const DEFAULT_LENGTH: usize = 32;

/// Upper bound on the password length, including the sum of per-class minimums
pub const MAX_LENGTH: usize = 10_000_000;

/// One of the four character categories a password can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Number,
    Special,
}

impl CharClass {
    /// Every class, in the order slots and alphabets are assembled
    pub const ALL: [Self; 4] = [
        Self::Lowercase,
        Self::Uppercase,
        Self::Number,
        Self::Special,
    ];

    /// Human-readable class name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Number => "number",
            Self::Special => "special",
        }
    }
}

impl Display for CharClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unvalidated input gathered from the command line
///
/// Class flags are `None` when the user did not pass them. The length is
/// kept as the raw token so the normalizer can report exactly what was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFlags {
    pub lowercase: Option<bool>,
    pub uppercase: Option<bool>,
    pub number: Option<bool>,
    pub special: Option<bool>,

    /// Raw `--length` token
    pub length: Option<String>,

    /// Remove visually confusable characters from the alphabets
    pub avoid_ambiguous: bool,

    pub min_lowercase: Option<usize>,
    pub min_uppercase: Option<usize>,
    pub min_number: Option<usize>,
    pub min_special: Option<usize>,
}

/// Immutable defaults, constructed once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// Length used when no length token is supplied
    pub length: usize,
}

impl Defaults {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        return Self { length };
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

/// Fully-populated generator options
///
/// Produced by [`normalize`](crate::options::normalize). The generator relies
/// on the normalizer's guarantees: at least one class is enabled, disabled
/// classes have a minimum of `0`, enabled classes a minimum of at least `1`,
/// and `length` is never below [`Options::reserved_slots`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of characters in the generated password
    pub length: usize,

    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,

    /// Keep visually confusable characters (`l`, `I`, `O`, `0`, `1`)
    pub ambiguous: bool,

    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_number: usize,
    pub min_special: usize,
}

impl Options {
    /// Options with every class enabled and one guaranteed slot per class
    #[must_use]
    pub fn all(length: usize) -> Self {
        Self {
            length: length.max(CharClass::ALL.len()),
            lowercase: true,
            uppercase: true,
            number: true,
            special: true,
            ambiguous: true,
            min_lowercase: 1,
            min_uppercase: 1,
            min_number: 1,
            min_special: 1,
        }
    }

    /// Options with a single enabled class
    #[must_use]
    pub fn only(class: CharClass, length: usize) -> Self {
        let mut options = Self {
            length: length.max(1),
            lowercase: false,
            uppercase: false,
            number: false,
            special: false,
            ambiguous: true,
            min_lowercase: 0,
            min_uppercase: 0,
            min_number: 0,
            min_special: 0,
        };
        options.set_class(class, true, 1);
        options
    }

    /// Whether `class` is enabled
    #[must_use]
    pub const fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Number => self.number,
            CharClass::Special => self.special,
        }
    }

    /// Guaranteed number of characters of `class`
    #[must_use]
    pub const fn min_for(&self, class: CharClass) -> usize {
        match class {
            CharClass::Lowercase => self.min_lowercase,
            CharClass::Uppercase => self.min_uppercase,
            CharClass::Number => self.min_number,
            CharClass::Special => self.min_special,
        }
    }

    /// Enabled classes in canonical order
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    /// Total number of slots reserved for specific classes
    #[must_use]
    pub fn reserved_slots(&self) -> usize {
        CharClass::ALL
            .into_iter()
            .map(|class| self.min_for(class))
            .sum()
    }

    /// Total reserved slots, or `None` if the minimums overflow `usize`
    #[must_use]
    pub fn checked_reserved_slots(&self) -> Option<usize> {
        CharClass::ALL
            .into_iter()
            .try_fold(0_usize, |total, class| total.checked_add(self.min_for(class)))
    }

    pub(crate) fn set_class(&mut self, class: CharClass, enabled: bool, min: usize) {
        let (flag, minimum) = match class {
            CharClass::Lowercase => (&mut self.lowercase, &mut self.min_lowercase),
            CharClass::Uppercase => (&mut self.uppercase, &mut self.min_uppercase),
            CharClass::Number => (&mut self.number, &mut self.min_number),
            CharClass::Special => (&mut self.special, &mut self.min_special),
        };
        *flag = enabled;
        *minimum = min;
    }
}
