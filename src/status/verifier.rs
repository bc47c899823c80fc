//! # Status (Verifier)
//!
//! Expanding a published `encodedList` and reading a credential's status from
//! it.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{Error, ListConfig, Result, StatusPurpose, MIN_ENTRIES};
use crate::{BitOrder, Bitstring};

/// An expanded status list.
#[derive(Clone, Debug)]
pub struct StatusList {
    bits: Bitstring,
    size: usize,
}

impl StatusList {
    /// Expands an `encodedList` whose entries are `size` bits wide.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Verification`] if the list cannot be decoded or `size`
    /// is not in `1..=8`, and [`Error::ListLength`] if the list holds fewer
    /// than [`MIN_ENTRIES`] entries.
    #[instrument(level = "debug", skip(encoded))]
    pub fn from_encoded(encoded: &str, size: usize) -> Result<Self> {
        if !(1..=8).contains(&size) {
            return Err(Error::Verification(format!(
                "`size` must be between 1 and 8, got {size}"
            )));
        }

        let bits = Bitstring::from_encoded(encoded, BitOrder::Msb0)?;
        let entries = bits.len() / size;
        if entries < MIN_ENTRIES {
            tracing::warn!(entries, "status list too short");
            return Err(Error::ListLength(format!(
                "list has {entries} entries, at least {MIN_ENTRIES} are required"
            )));
        }

        tracing::debug!(entries, "status list expanded");
        Ok(Self { bits, size })
    }

    /// Number of entries in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.len() / self.size
    }

    /// Always `false` for a list built with [`StatusList::from_encoded`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the status value of the entry at `index`, most-significant bit
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Range`] if `index` is past the end of the list.
    pub fn status(&self, index: usize) -> Result<u8> {
        if index >= self.len() {
            return Err(Error::Range(format!(
                "status index {index} is out of range 0..{}",
                self.len() - 1
            )));
        }

        let position = index * self.size;
        let mut value = 0u8;
        for i in 0..self.size {
            value = (value << 1) | u8::from(self.bits.get(position + i)?);
        }
        Ok(value)
    }
}

/// Outcome of checking a credential against a status list.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct StatusResult {
    /// Raw status value.
    pub status: u8,

    /// Purpose of the list the status was read from.
    pub purpose: StatusPurpose,

    /// `true` when the status value is 0.
    pub valid: bool,

    /// Message for the status value, for message lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Resolves the status of the credential at `index` in a published list.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the list cannot be
/// expanded, or `index` is out of range.
#[instrument(level = "debug", skip(config, encoded), fields(purpose = %config.purpose))]
pub fn resolve(config: &ListConfig, encoded: &str, index: usize) -> Result<StatusResult> {
    config.validate()?;
    let list = StatusList::from_encoded(encoded, config.size)?;
    let status = list.status(index)?;

    let message = match config.purpose {
        StatusPurpose::Message => config.message(status).map(ToString::to_string),
        StatusPurpose::Revocation | StatusPurpose::Suspension => None,
    };

    Ok(StatusResult {
        status,
        purpose: config.purpose,
        valid: status == 0,
        message,
    })
}
