//! # Status
//!
//! Helpers for publishing and checking credential status with a bitstring
//! status list. An issuer keeps a log of the statuses it has assigned and
//! periodically renders that log to an `encodedList`; a verifier expands the
//! `encodedList` and reads the entry at a credential's `statusListIndex`.
//!
//! [Bitstring Status List v1.0](https://www.w3.org/TR/vc-bitstring-status-list/)

mod config;
pub mod error;
pub mod issuer;
mod log;
pub mod verifier;

pub use self::config::{ListConfig, StatusMessage, StatusPurpose};
pub use self::error::Error;
pub use self::log::{StatusLogEntry, StatusValue};

/// Minimum number of entries in a published list, for herd privacy.
pub const MIN_ENTRIES: usize = 131_072;

/// Default time-to-live in milliseconds for a status list credential.
pub const DEFAULT_TTL: u64 = 300_000;

/// Result type for status list operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
