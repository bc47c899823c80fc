//! # Bitstring Codec
//!
//! Stateless conversions between a raw bitstring buffer, its GZIP-compressed
//! form [RFC1952], and the base64url (no padding) text form of the compressed
//! bytes [RFC4648].
//!
//! The codec only ever sees bytes. Bit length and bit order are properties of
//! a [`Bitstring`](crate::Bitstring) and are not carried by either form.
//!
//! [RFC1952]: https://www.rfc-editor.org/rfc/rfc1952
//! [RFC4648]: https://www.rfc-editor.org/rfc/rfc4648#section-5

use std::io::{Read, Write};

use base64ct::{Base64UrlUnpadded, Encoding};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::instrument;

use crate::{Error, Result};

/// GZIP-compresses `bytes`.
///
/// # Errors
///
/// Returns a [`Error::Format`] if the encoder fails to write the stream.
#[instrument(level = "debug", skip_all)]
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut gz_encoder = GzEncoder::new(Vec::new(), Compression::default());
    gz_encoder.write_all(bytes).map_err(|e| format_error("compress", &e))?;
    let compressed = gz_encoder.finish().map_err(|e| format_error("compress", &e))?;

    tracing::debug!(uncompressed = bytes.len(), compressed = compressed.len(), "compressed");
    Ok(compressed)
}

/// Decompresses a GZIP stream produced by [`compress`] or any conformant
/// GZIP producer.
///
/// Every member of a multi-member stream is decompressed, in order.
///
/// # Errors
///
/// Returns a [`Error::Format`] if `compressed` is not a valid GZIP stream,
/// including when a member is followed by bytes that are not another member.
#[instrument(level = "debug", skip_all)]
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    MultiGzDecoder::new(compressed)
        .read_to_end(&mut bytes)
        .map_err(|e| format_error("compressed", &e))?;

    tracing::debug!(compressed = compressed.len(), uncompressed = bytes.len(), "decompressed");
    Ok(bytes)
}

/// Compresses `bytes` and encodes the result as unpadded base64url text.
///
/// # Errors
///
/// Returns a [`Error::Format`] if compression fails.
#[instrument(level = "debug", skip_all)]
pub fn encode(bytes: &[u8]) -> Result<String> {
    let compressed = compress(bytes)?;
    Ok(Base64UrlUnpadded::encode_string(&compressed))
}

/// Decodes unpadded base64url `encoded` text and decompresses the result.
///
/// # Errors
///
/// Returns a [`Error::Format`] if `encoded` is not unpadded base64url or does
/// not wrap a valid GZIP stream.
#[instrument(level = "debug", skip_all)]
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let compressed =
        Base64UrlUnpadded::decode_vec(encoded).map_err(|e| format_error("encoded", &e))?;
    decompress(&compressed)
}

fn format_error(name: &str, err: &dyn std::fmt::Display) -> Error {
    tracing::warn!("`{name}` could not be processed: {err}");
    Error::Format(format!("`{name}` is not valid: {err}"))
}
