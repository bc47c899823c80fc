//! Fixed-length bitstrings with lossless GZIP + base64url serialization.
//!
//! A [`Bitstring`] owns a byte buffer and exposes positional bit access under
//! one of two [`BitOrder`]s. The [`codec`] functions turn the raw buffer into
//! GZIP-compressed bytes or unpadded base64url text (and back), in the format
//! used by the [Bitstring Status List v1.0] `encodedList` property.
//!
//! The [`status`] module builds and reads status lists on top of both.
//!
//! # Example
//!
//! ```
//! use status_bitstring::{codec, Bitstring};
//!
//! let mut bitstring = Bitstring::with_length(8)?;
//! bitstring.set(1, true)?;
//! bitstring.set(4, true)?;
//!
//! let encoded = bitstring.encode_bits()?;
//! assert_eq!(codec::decode(&encoded)?, vec![0b0100_1000]);
//! # Ok::<(), status_bitstring::Error>(())
//! ```
//!
//! [Bitstring Status List v1.0]: https://www.w3.org/TR/vc-bitstring-status-list

mod bitstring;
pub mod codec;
mod error;
pub mod status;

pub use crate::bitstring::{BitOrder, Bitstring, Options, Source};
pub use crate::error::{BitstringError, Error, Result};
