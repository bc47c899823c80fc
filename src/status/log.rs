//! # Log
//!
//! Records of the statuses an issuer has assigned. [`issuer::encoded_list`]
//! renders a slice of these into a published list.
//!
//! [`issuer::encoded_list`]: super::issuer::encoded_list

use serde::{Deserialize, Serialize};

use super::StatusPurpose;

/// Statuses assigned to one issued credential.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::module_name_repetitions)]
pub struct StatusLogEntry {
    /// Credential identifier. Appears in error details when an entry cannot
    /// be written.
    pub credential_id: String,

    /// Holder, or an opaque claim standing in for the holder.
    pub subject_id: String,

    /// One value per list the credential is published in.
    pub status: Vec<StatusValue>,
}

/// A credential's value in one status list.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusValue {
    /// Selects the list. Only values whose purpose matches
    /// [`ListConfig::purpose`](super::ListConfig::purpose) are written.
    pub purpose: StatusPurpose,

    /// Entry number in the list. With entries `size` bits wide, the value
    /// occupies bits `list_index * size..(list_index + 1) * size`.
    pub list_index: usize,

    /// Value written into the entry, most-significant bit first. Must fit in
    /// `size` bits: 0 or 1 for revocation and suspension lists, an index into
    /// [`ListConfig::messages`](super::ListConfig::messages) for message lists.
    pub value: u8,
}
