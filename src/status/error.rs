//! Status list errors.
//!
//! Each variant corresponds to one of the processing errors a verifier reports
//! when checking a credential against a published list, and serializes as an
//! [RFC 9457] problem detail.
//!
//! [RFC 9457]: https://www.rfc-editor.org/rfc/rfc9457

use serde::{Deserialize, Serialize};
use thiserror::Error;

const TYPE_BASE: &str = "https://www.w3.org/ns/credentials/status-list#";

/// Status list processing errors.
///
/// [Processing Errors](https://www.w3.org/TR/vc-bitstring-status-list/#processing-errors)
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The list, its configuration, or a logged status value is malformed.
    #[error("status verification error: {0}")]
    Verification(String),

    /// The expanded list holds fewer than [`MIN_ENTRIES`](super::MIN_ENTRIES)
    /// entries.
    #[error("status list length error: {0}")]
    ListLength(String),

    /// An entry index lies past the end of the list.
    #[error("range error: {0}")]
    Range(String),
}

impl Error {
    /// Problem detail code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Verification(_) => -129,
            Self::ListLength(_) => -130,
            Self::Range(_) => -67,
        }
    }

    const fn title(&self) -> &'static str {
        match self {
            Self::Verification(_) => "status verification error",
            Self::ListLength(_) => "status list length error",
            Self::Range(_) => "range error",
        }
    }

    fn detail(&self) -> &str {
        match self {
            Self::Verification(d) | Self::ListLength(d) | Self::Range(d) => d,
        }
    }

    /// Problem detail for the error.
    #[must_use]
    pub fn to_validation_error(&self) -> ValidationError {
        ValidationError {
            type_: format!("{TYPE_BASE}{}", self.code()),
            code: self.code(),
            title: Some(self.title().to_string()),
            detail: Some(self.detail().to_string()),
        }
    }

    /// Problem detail for the error as json.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.to_validation_error()).unwrap_or_default()
    }
}

impl From<crate::Error> for Error {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::OutOfRange { .. } => Self::Range(err.to_string()),
            crate::Error::InvalidArgument(_) | crate::Error::Format(_) => {
                Self::Verification(err.to_string())
            }
        }
    }
}

impl Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_validation_error().serialize(serializer)
    }
}

/// Problem detail describing a failed status check.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    /// `https://www.w3.org/ns/credentials/status-list#` followed by the code.
    #[serde(rename = "type")]
    pub type_: String,

    /// Negative integer code, e.g. `-67` for a range error.
    pub code: i32,

    /// Short summary of the error kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// What went wrong for this particular list or entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
