use crate::options::{DEFAULT_LENGTH, Defaults, RawFlags};
use clap::Parser;

const AFTER_HELP: &str = "\
Notes:
  With no character class flags every class is enabled.
  The default length is 32 (override with PW_DEFAULT_LENGTH).
  Lengths shorter than the guaranteed characters are raised to fit.

Examples:
  pwgen
  pwgen -u -l 18
  pwgen -s --length 25
  pwgen -ul";

/// Command-line arguments for pwgen
#[derive(Parser, Debug, Clone)]
#[command(name = "pwgen")]
#[command(about = "A CLI tool for generating random passwords")]
#[command(long_about = None)]
#[command(after_help = AFTER_HELP)]
#[command(version)]
pub struct Args {
    /// Include uppercase characters
    #[arg(short, long)]
    pub uppercase: bool,

    /// Include lowercase characters
    #[arg(short, long)]
    pub lowercase: bool,

    /// Include numeric characters
    #[arg(short, long)]
    pub number: bool,

    /// Include special characters
    #[arg(short, long)]
    pub special: bool,

    /// Length of the password (takes precedence over the positional LENGTH)
    #[arg(long, value_name = "LENGTH", allow_negative_numbers = true)]
    pub length: Option<String>,

    /// Length of the password; only the first value is used
    #[arg(value_name = "LENGTH", allow_negative_numbers = true)]
    pub input: Vec<String>,

    /// Exclude visually confusable characters (l I O 0 1)
    #[arg(short, long)]
    pub avoid_ambiguous: bool,

    /// Minimum lowercase characters when lowercase is enabled
    #[arg(long, value_name = "N")]
    pub min_lowercase: Option<usize>,

    /// Minimum uppercase characters when uppercase is enabled
    #[arg(long, value_name = "N")]
    pub min_uppercase: Option<usize>,

    /// Minimum numeric characters when numbers are enabled
    #[arg(long, value_name = "N")]
    pub min_number: Option<usize>,

    /// Minimum special characters when special characters are enabled
    #[arg(long, value_name = "N")]
    pub min_special: Option<usize>,

    /// Length used when none is given
    #[arg(
        long,
        value_name = "LENGTH",
        env = "PW_DEFAULT_LENGTH",
        default_value_t = DEFAULT_LENGTH,
        hide = true
    )]
    pub default_length: usize,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Collect the raw flags for the normalizer
    #[must_use]
    pub fn raw_flags(&self) -> RawFlags {
        RawFlags {
            lowercase: self.lowercase.then_some(true),
            uppercase: self.uppercase.then_some(true),
            number: self.number.then_some(true),
            special: self.special.then_some(true),
            length: self.length.clone(),
            avoid_ambiguous: self.avoid_ambiguous,
            min_lowercase: self.min_lowercase,
            min_uppercase: self.min_uppercase,
            min_number: self.min_number,
            min_special: self.min_special,
        }
    }

    /// Defaults configured for this invocation
    #[must_use]
    pub const fn defaults(&self) -> Defaults {
        Defaults::new(self.default_length)
    }
}
