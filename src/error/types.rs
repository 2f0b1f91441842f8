//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for pwgen operations
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PwError {
    /// A supplied length token is not a non-negative integer
    #[error("Received non-integer length: \"{input}\"")]
    InvalidLength { input: String },

    /// The requested length or the per-class minimums exceed the supported maximum
    #[error("Password length exceeds the maximum of {max} characters")]
    LengthTooLarge { max: usize },
}

impl PwError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::InvalidLength { .. } | Self::LengthTooLarge { .. } => 1,
        }
    }

    /// Create an invalid length error
    #[inline]
    pub fn invalid_length<S: Into<String>>(input: S) -> Self {
        Self::InvalidLength {
            input: input.into(),
        }
    }

    /// Create a length too large error
    #[inline]
    pub const fn length_too_large(max: usize) -> Self {
        Self::LengthTooLarge { max }
    }
}
