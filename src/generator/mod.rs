//! Password generation
//!
//! This module lays out the reserved and wildcard slots, shuffles them and
//! fills each one from the matching alphabet.

pub mod charset;
pub mod password;
pub mod slots;

pub use charset::{Charset, alphabet};
pub use password::{build, generate};
pub use slots::{Slot, generate_slots, shuffle};
