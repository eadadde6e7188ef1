//! Reverse scan for the trailing hash segment.

use crate::b64;
use crate::consts::{DELIMITER, HASH_LEN};
use crate::error::ParamsError;
use crate::utils::strip_nul;
use tracing::debug;

/// Borrow the segment after the rightmost `$`.
///
/// A single trailing NUL byte is ignored. No bytes are copied; the returned slice
/// points into `encoded`.
///
/// # Errors
///
/// - [`ParamsError::Decode`] - `encoded` contains no `$` at all
///
/// # Example
///
/// ```
/// use argon2_params::extract_hash;
///
/// let encoded = b"$argon2id$v=19$m=65536,t=3,p=4$c29tZXNhbHQ$aGFzaGRhdGExMjM0NTY3ODkwMTIzNDU2";
/// assert_eq!(extract_hash(encoded)?, b"aGFzaGRhdGExMjM0NTY3ODkwMTIzNDU2");
/// # Ok::<(), argon2_params::ParamsError>(())
/// ```
pub fn extract_hash(encoded: &[u8]) -> Result<&[u8], ParamsError> {
    let input = strip_nul(encoded);
    match input.iter().rposition(|&b| b == DELIMITER) {
        Some(pos) => Ok(&input[pos + 1..]),
        None => {
            debug!(len = input.len(), "rejected encoded hash: no delimiter");
            Err(ParamsError::Decode("no '$' delimiter in encoded hash".into()))
        }
    }
}

/// Decode the trailing hash segment into `out`.
///
/// The segment may be padded or unpadded base64.
///
/// # Errors
///
/// - [`ParamsError::LengthMismatch`] - `out` is not exactly [`HASH_LEN`] bytes
/// - [`ParamsError::Decode`] - No delimiter, invalid base64, or a payload that does not
///   decode to exactly [`HASH_LEN`] bytes
pub fn decode_hash(encoded: &[u8], out: &mut [u8]) -> Result<(), ParamsError> {
    if out.len() != HASH_LEN {
        return Err(ParamsError::length_mismatch(HASH_LEN, out.len()));
    }

    let segment = extract_hash(encoded)?;
    let raw = b64::decode_lenient_exact::<HASH_LEN>(segment).map_err(|e| {
        debug!(segment_len = segment.len(), "rejected encoded hash: bad hash segment");
        e
    })?;
    out.copy_from_slice(&raw);
    Ok(())
}
