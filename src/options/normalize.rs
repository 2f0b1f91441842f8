//! Option normalization
//!
//! Turns raw command-line input into a validated [`Options`] record.

use crate::error::PwError;
use crate::options::types::{CharClass, Defaults, MAX_LENGTH, Options, RawFlags};
use tracing::{debug, warn};

/// Normalize raw flags and positional input into generator options
///
/// Class flags default to `false`; when none is enabled every class is
/// enabled. The length comes from `--length`, else the first positional
/// argument, else `defaults.length`, and is raised to the number of reserved
/// slots when it is too short.
///
/// # Errors
///
/// Returns an error if:
/// - The chosen length token is not a non-negative integer
/// - The length or the sum of per-class minimums exceeds `MAX_LENGTH`
#[inline]
pub fn normalize(
    flags: &RawFlags,
    positional: &[String],
    defaults: &Defaults,
) -> Result<Options, PwError> {
    let mut enabled = [
        flags.lowercase.unwrap_or(false),
        flags.uppercase.unwrap_or(false),
        flags.number.unwrap_or(false),
        flags.special.unwrap_or(false),
    ];

    if !enabled.iter().any(|on| *on) {
        debug!("No character class selected, enabling all of them");
        enabled = [true; 4];
    }

    let length = resolve_length(flags.length.as_deref(), positional, defaults)?;

    let mut options = Options {
        length,
        lowercase: false,
        uppercase: false,
        number: false,
        special: false,
        ambiguous: !flags.avoid_ambiguous,
        min_lowercase: 0,
        min_uppercase: 0,
        min_number: 0,
        min_special: 0,
    };

    for (class, on) in CharClass::ALL.into_iter().zip(enabled) {
        let requested = requested_min(flags, class);
        if !on && requested.is_some() {
            warn!("Ignoring minimum for {class} characters because the class is not enabled");
        }
        options.set_class(class, on, resolve_min(on, requested));
    }

    let required = options
        .checked_reserved_slots()
        .filter(|total| *total <= MAX_LENGTH)
        .ok_or_else(|| PwError::length_too_large(MAX_LENGTH))?;
    if options.length > MAX_LENGTH {
        return Err(PwError::length_too_large(MAX_LENGTH));
    }
    if options.length < required {
        debug!(
            requested = options.length,
            required, "Raising length so every enabled class fits"
        );
        options.length = required;
    }

    Ok(options)
}

/// Parse a length token as a non-negative integer
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The trimmed token is not a valid `usize`
#[inline]
pub fn parse_length(token: &str) -> Result<usize, PwError> {
    token
        .trim()
        .parse::<usize>()
        .map_err(|_| PwError::invalid_length(token))
}

/// Pick the length source by priority and parse it
fn resolve_length(
    explicit: Option<&str>,
    positional: &[String],
    defaults: &Defaults,
) -> Result<usize, PwError> {
    match explicit.or_else(|| positional.first().map(String::as_str)) {
        Some(token) => parse_length(token),
        None => Ok(defaults.length),
    }
}

const fn requested_min(flags: &RawFlags, class: CharClass) -> Option<usize> {
    match class {
        CharClass::Lowercase => flags.min_lowercase,
        CharClass::Uppercase => flags.min_uppercase,
        CharClass::Number => flags.min_number,
        CharClass::Special => flags.min_special,
    }
}

fn resolve_min(enabled: bool, requested: Option<usize>) -> usize {
    if enabled {
        requested.unwrap_or(1).max(1)
    } else {
        0
    }
}
