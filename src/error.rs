//! # Bitstring Errors
//!
//! Errors raised when constructing, addressing, or (de)serializing a
//! [`Bitstring`](crate::Bitstring).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for bitstring operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Bitstring error codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter has the wrong shape, or mutually exclusive parameters were
    /// supplied together (or not at all).
    #[error("{0}")]
    InvalidArgument(String),

    /// A bit position lies outside `0..length`.
    #[error("position {position} is out of range 0..{}", .length.saturating_sub(1))]
    OutOfRange {
        /// The offending position.
        position: usize,

        /// Length of the addressed bitstring in bits.
        length: usize,
    },

    /// A compressed or encoded payload could not be decoded.
    #[error("{0}")]
    Format(String),
}

impl Error {
    /// Short, machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Format(_) => "format_error",
        }
    }

    /// Transform error to `BitstringError` compatible json format.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(BitstringError::from(self)).unwrap_or_default()
    }
}

impl Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BitstringError::from(self).serialize(serializer)
    }
}

/// Error response for bitstring operations.
#[derive(Debug, Deserialize, Serialize)]
pub struct BitstringError {
    /// Error code.
    pub error: String,

    /// Error description.
    pub error_description: String,
}

impl From<&Error> for BitstringError {
    fn from(err: &Error) -> Self {
        Self {
            error: err.code().to_string(),
            error_description: err.to_string(),
        }
    }
}
