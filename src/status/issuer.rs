//! # Status (Issuer)
//!
//! Rendering an issuer's status log to a published `encodedList`.

use tracing::instrument;

use super::{Error, ListConfig, Result, StatusLogEntry, MIN_ENTRIES};
use crate::{codec, BitOrder, Bitstring, Source};

/// Generates a compressed, encoded bitstring representing the status list for
/// the given issued credentials and the purpose implied by a list configuration.
///
/// The bitstring holds [`MIN_ENTRIES`] entries of `config.size` bits each. The
/// first index is the left-most (most-significant) bit of the first byte, and
/// multi-bit values are written most-significant bit first.
///
/// Note: This function scans the entire status log presented to construct a
/// bitstring from scratch rather than applying a single update.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a status position is out
/// of range of the bitstring size, a value does not fit in `config.size` bits,
/// or there is a compression problem.
#[instrument(level = "debug", skip_all, fields(purpose = %config.purpose, list = config.list))]
pub fn encoded_list(config: &ListConfig, issued: &[StatusLogEntry]) -> Result<String> {
    config.validate()?;

    let mut bits = Bitstring::new(Source::Length(MIN_ENTRIES * config.size), BitOrder::Msb0)?;
    for entry in issued {
        for status in entry.status.iter().filter(|s| s.purpose == config.purpose) {
            if u32::from(status.value) >> config.size != 0 {
                return Err(Error::Verification(format!(
                    "status value {} for credential {} does not fit in {} bit(s)",
                    status.value, entry.credential_id, config.size
                )));
            }

            let Some(position) = status
                .list_index
                .checked_mul(config.size)
                .filter(|p| p.checked_add(config.size).is_some_and(|end| end <= bits.len()))
            else {
                return Err(Error::Range(format!(
                    "status index {} is out of range 0..{}",
                    status.list_index,
                    MIN_ENTRIES - 1
                )));
            };
            write_value(&mut bits, position, config.size, status.value)?;
        }
    }

    tracing::debug!(length = bits.len(), set = bits.count_ones(), "status list generated");
    let encoded = codec::encode(bits.as_bytes())?;

    Ok(encoded)
}

// most-significant bit of `value` goes to `position`
fn write_value(bits: &mut Bitstring, position: usize, size: usize, value: u8) -> Result<()> {
    for i in 0..size {
        let on = (value >> (size - 1 - i)) & 1 == 1;
        bits.set(position + i, on)?;
    }
    Ok(())
}
