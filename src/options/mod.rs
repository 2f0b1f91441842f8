//! Option handling
//!
//! This module holds the option types and the normalizer that validates raw
//! command-line input into generator options.

pub mod normalize;
pub mod types;

pub use normalize::*;
pub use types::*;
