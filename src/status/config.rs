//! # Configurations for status lists
//!
//! Types for describing a published status list.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Error, Result, DEFAULT_TTL};

/// Purpose of a status list entry.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum StatusPurpose {
    /// Cancel the validity of a credential. Cannot be reversed.
    #[default]
    Revocation,

    /// Temporarily prevent the acceptance of a credential.
    Suspension,

    /// Convey an arbitrary message related to the status of the credential.
    Message,
}

impl fmt::Display for StatusPurpose {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Revocation => write!(f, "revocation"),
            Self::Suspension => write!(f, "suspension"),
            Self::Message => write!(f, "message"),
        }
    }
}

/// A message associated with a status value.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct StatusMessage {
    /// Hexadecimal status value, e.g. `0x0`.
    pub status: String,

    /// Human-readable message for the status value.
    pub message: String,
}

/// Configuration for a status list for a credential.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    /// Type of status
    pub purpose: StatusPurpose,

    /// List identifier.
    pub list: usize,

    /// Number of bits used to represent each status.
    ///
    /// Must be 1 for [`StatusPurpose::Revocation`] or
    /// [`StatusPurpose::Suspension`]. For [`StatusPurpose::Message`] there
    /// will be `2^size` possible messages.
    pub size: usize,

    /// Status messages.
    ///
    /// Valid for [`StatusPurpose::Message`] only. Number of entries will be
    /// `2^size`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<StatusMessage>>,

    /// URL to reference information for the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Cache time-to-live in milliseconds for the published list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

impl ListConfig {
    /// Checks the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Verification`] describing the first inconsistency.
    pub fn validate(&self) -> Result<()> {
        if !(1..=8).contains(&self.size) {
            return Err(Error::Verification(format!(
                "`size` must be between 1 and 8, got {}",
                self.size
            )));
        }

        match self.purpose {
            StatusPurpose::Revocation | StatusPurpose::Suspension => {
                if self.size != 1 {
                    return Err(Error::Verification(format!(
                        "`size` must be 1 for {} lists",
                        self.purpose
                    )));
                }
            }
            StatusPurpose::Message => {
                let expected = 1 << self.size;
                let count = self.messages.as_ref().map_or(0, Vec::len);
                if count != expected {
                    return Err(Error::Verification(format!(
                        "`messages` must have {expected} entries, got {count}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Message for a status value, if this is a message list.
    #[must_use]
    pub fn message(&self, status: u8) -> Option<&str> {
        let messages = self.messages.as_ref()?;
        messages
            .iter()
            .find(|m| parse_hex(&m.status) == Some(status))
            .map(|m| m.message.as_str())
    }

    /// Time-to-live for the published list, falling back to [`DEFAULT_TTL`].
    #[must_use]
    pub fn ttl(&self) -> u64 {
        self.ttl.unwrap_or(DEFAULT_TTL)
    }
}

fn parse_hex(value: &str) -> Option<u8> {
    let digits = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"))?;
    u8::from_str_radix(digits, 16).ok()
}
