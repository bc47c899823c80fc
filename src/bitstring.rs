//! # Bitstring
//!
//! A fixed-length sequence of bits backed by an owned byte buffer.
//!
//! Bytes are always stored in ascending order: byte 0 holds positions `0..8`,
//! byte 1 holds positions `8..16`, and so on. [`BitOrder`] only decides which
//! bit *within* a byte a position lands on.
//!
//! ```text
//!             byte 0                    byte 1
//! Msb0   [0 1 2 3 4 5 6 7]      [ 8  9 10 11 12 13 14 15]
//! Lsb0   [7 6 5 4 3 2 1 0]      [15 14 13 12 11 10  9  8]
//!         ^ most-significant bit
//! ```

use std::fmt;
use std::str::FromStr;

use bitvec::order::{Lsb0, Msb0};
use bitvec::view::BitView;
use serde::{Deserialize, Serialize};

use crate::{codec, Error, Result};

/// Placement of bit positions within each byte.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BitOrder {
    /// Position `8n` is the most-significant bit of byte `n` (mask
    /// `1 << (7 - position % 8)`).
    ///
    /// This is the left-to-right ordering used by published status lists.
    #[default]
    Msb0,

    /// Position `8n` is the least-significant bit of byte `n` (mask
    /// `1 << (position % 8)`).
    Lsb0,
}

impl fmt::Display for BitOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Msb0 => write!(f, "msb0"),
            Self::Lsb0 => write!(f, "lsb0"),
        }
    }
}

impl FromStr for BitOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "msb0" => Ok(Self::Msb0),
            "lsb0" => Ok(Self::Lsb0),
            _ => Err(Error::InvalidArgument(format!(
                "`bit_order` must be one of \"msb0\" or \"lsb0\", got {s:?}"
            ))),
        }
    }
}

/// Where the bits of a new [`Bitstring`] come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Allocate a zeroed buffer with room for this many bits.
    Length(usize),

    /// Adopt these bytes verbatim. The bitstring will be `8 * len` bits long.
    Buffer(Vec<u8>),
}

/// Loosely-typed construction parameters, as found in configuration or
/// request payloads.
///
/// Exactly one of `length` or `buffer` must be set.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Number of bits to allocate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// Existing bytes to adopt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Vec<u8>>,

    /// Bit order. Defaults to [`BitOrder::Msb0`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_order: Option<BitOrder>,
}

impl TryFrom<Options> for Bitstring {
    type Error = Error;

    fn try_from(options: Options) -> Result<Self> {
        let source = match (options.length, options.buffer) {
            (Some(length), None) => Source::Length(length),
            (None, Some(buffer)) => Source::Buffer(buffer),
            (Some(_), Some(_)) => {
                return Err(Error::InvalidArgument(
                    "only one of `length` or `buffer` must be given".into(),
                ));
            }
            (None, None) => {
                return Err(Error::InvalidArgument(
                    "one of `length` or `buffer` must be given".into(),
                ));
            }
        };
        Self::new(source, options.bit_order.unwrap_or_default())
    }
}

/// A fixed-length, mutable sequence of bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitstring {
    bits: Vec<u8>,
    length: usize,
    order: BitOrder,
}

impl Bitstring {
    /// Creates a bitstring from a [`Source`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the source would produce a
    /// bitstring with no addressable positions.
    pub fn new(source: Source, order: BitOrder) -> Result<Self> {
        match source {
            Source::Length(0) => {
                Err(Error::InvalidArgument("`length` must be a positive integer".into()))
            }
            Source::Length(length) => Ok(Self {
                bits: vec![0; length.div_ceil(8)],
                length,
                order,
            }),
            Source::Buffer(bits) if bits.is_empty() => {
                Err(Error::InvalidArgument("`buffer` must not be empty".into()))
            }
            Source::Buffer(bits) => Ok(Self {
                length: bits.len() * 8,
                bits,
                order,
            }),
        }
    }

    /// Creates a zeroed, [`BitOrder::Msb0`] bitstring of `length` bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `length` is 0.
    pub fn with_length(length: usize) -> Result<Self> {
        Self::new(Source::Length(length), BitOrder::default())
    }

    /// Creates a [`BitOrder::Msb0`] bitstring over existing bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `bytes` is empty.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Self::new(Source::Buffer(bytes.into()), BitOrder::default())
    }

    /// Rebuilds a bitstring from its GZIP-compressed bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `compressed` is not valid GZIP, or
    /// [`Error::InvalidArgument`] if it decompresses to nothing.
    pub fn from_compressed(compressed: &[u8], order: BitOrder) -> Result<Self> {
        Self::new(Source::Buffer(codec::decompress(compressed)?), order)
    }

    /// Rebuilds a bitstring from its base64url-encoded, GZIP-compressed text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `encoded` cannot be decoded, or
    /// [`Error::InvalidArgument`] if it decodes to nothing.
    pub fn from_encoded(encoded: &str, order: BitOrder) -> Result<Self> {
        Self::new(Source::Buffer(codec::decode(encoded)?), order)
    }

    /// Number of addressable bits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Always `false`: a bitstring has at least one position.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Bit order fixed at construction.
    #[must_use]
    pub const fn bit_order(&self) -> BitOrder {
        self.order
    }

    /// The underlying bytes, including any unaddressed trailing bits.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Consumes the bitstring, returning the underlying bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bits
    }

    /// Returns whether the bit at `position` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `position >= self.len()`.
    pub fn get(&self, position: usize) -> Result<bool> {
        self.check(position)?;
        let bits = self.bits.as_slice();
        let bit = match self.order {
            BitOrder::Msb0 => bits.view_bits::<Msb0>()[position],
            BitOrder::Lsb0 => bits.view_bits::<Lsb0>()[position],
        };
        Ok(bit)
    }

    /// Sets (`true`) or clears (`false`) the bit at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `position >= self.len()`. The
    /// bitstring is left untouched.
    pub fn set(&mut self, position: usize, value: bool) -> Result<()> {
        self.check(position)?;
        let bits = self.bits.as_mut_slice();
        match self.order {
            BitOrder::Msb0 => bits.view_bits_mut::<Msb0>().set(position, value),
            BitOrder::Lsb0 => bits.view_bits_mut::<Lsb0>().set(position, value),
        }
        Ok(())
    }

    /// Number of set bits among the addressable positions.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        let bits = self.bits.as_slice();
        match self.order {
            BitOrder::Msb0 => bits.view_bits::<Msb0>()[..self.length].count_ones(),
            BitOrder::Lsb0 => bits.view_bits::<Lsb0>()[..self.length].count_ones(),
        }
    }

    /// GZIP-compresses the underlying bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if compression fails.
    pub fn compress_bits(&self) -> Result<Vec<u8>> {
        codec::compress(&self.bits)
    }

    /// Compresses and base64url-encodes the underlying bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if compression fails.
    pub fn encode_bits(&self) -> Result<String> {
        codec::encode(&self.bits)
    }

    const fn check(&self, position: usize) -> Result<()> {
        if position >= self.length {
            return Err(Error::OutOfRange {
                position,
                length: self.length,
            });
        }
        Ok(())
    }
}
