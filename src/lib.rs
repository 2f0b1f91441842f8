//! `pwgen` - A CLI tool for generating random passwords
//!
//! This library normalizes command-line options into a validated
//! [`options::Options`] record and builds passwords from the enabled
//! character classes, guaranteeing every enabled class appears and
//! shuffling positions with a cryptographically secure random source.

pub mod cli;
pub mod error;
pub mod generator;
pub mod options;
pub mod random;

use anyhow::Result;
use cli::Args;
use options::normalize;
use random::{CryptoRandom, RandomSource};
use tracing::debug;

/// Main entry point for the pwgen library
///
/// # Errors
///
/// Returns an error if:
/// - The length token is not a non-negative integer
pub fn run(args: &Args) -> Result<()> {
    let password = generate_password(args, &mut CryptoRandom::os())?;

    // Output to stdout (not using logging)
    println!("{password}");

    Ok(())
}

/// Normalize `args` and build one password with `rng`
///
/// # Errors
///
/// Returns an error if:
/// - The length token is not a non-negative integer
pub fn generate_password(args: &Args, rng: &mut dyn RandomSource) -> Result<String> {
    let options = normalize(&args.raw_flags(), &args.input, &args.defaults())?;
    let classes: Vec<_> = options.enabled_classes().collect();
    debug!(
        length = options.length,
        ?classes,
        ambiguous = options.ambiguous,
        "Generating password"
    );

    Ok(generator::build(&options, rng))
}
