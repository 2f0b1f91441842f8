//! # `pwgen`
//!
//! `pwgen` is a command-line tool for generating random passwords.
//! It draws from lowercase, uppercase, numeric and special characters,
//! guarantees at least one character of every enabled class and shuffles
//! positions with the operating system CSPRNG.
//!
//! ## Usage
//!
//! **Every class, default length:**
//! ```sh
//! pwgen
//! ```
//!
//! **Letters only, 18 characters:**
//! ```sh
//! pwgen -ul 18
//! ```
//!
//! See `pwgen --help` for more options and details.

use clap::Parser as _;
use pwgen::cli::Args;
use pwgen::error::PwError;
use std::io::{self, IsTerminal as _};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Keep stderr quiet unless asked; stdout only ever carries the password
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();

    match pwgen::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<PwError>()
                    .map_or(1, PwError::exit_code),
            );
        }
    }
}
