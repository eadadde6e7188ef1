//! Base64 helpers.
//!
//! Thin layer over the `base64` crate: exact-length arithmetic for both directions and
//! fixed-size encode/decode against caller buffers. Salts are always written and read
//! without padding; hash segments are written without padding and read either way.

use crate::error::ParamsError;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Standard alphabet, no padding on encode, padding optional on decode.
const LENIENT_PAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Exact number of base64 characters produced for `bytes_len` input bytes.
pub const fn encoded_len(bytes_len: usize, padding: bool) -> usize {
    let full = bytes_len / 3 * 4;
    match (bytes_len % 3, padding) {
        (0, _) => full,
        (_, true) => full + 4,
        (1, false) => full + 2,
        _ => full + 3,
    }
}

/// Exact number of bytes an encoded run of `encoded_len` characters decodes to.
///
/// Trailing `=` must already be stripped. Returns `None` for lengths no valid base64
/// string can have (`len % 4 == 1`).
pub const fn decoded_len(encoded_len: usize) -> Option<usize> {
    let full = encoded_len / 4 * 3;
    match encoded_len % 4 {
        0 => Some(full),
        2 => Some(full + 1),
        3 => Some(full + 2),
        _ => None,
    }
}

/// Encode `input` without padding into `out`, which must be exactly sized.
pub fn encode_nopad_into(input: &[u8], out: &mut [u8]) -> Result<(), ParamsError> {
    let expected = encoded_len(input.len(), false);
    if out.len() != expected {
        return Err(ParamsError::length_mismatch(expected, out.len()));
    }
    STANDARD_NO_PAD
        .encode_slice(input, out)
        .map_err(|_| ParamsError::length_mismatch(expected, out.len()))?;
    Ok(())
}

/// Decode an unpadded base64 run into exactly `N` bytes.
pub fn decode_nopad_exact<const N: usize>(input: &[u8]) -> Result<[u8; N], ParamsError> {
    decode_exact(&STANDARD_NO_PAD, input)
}

/// Decode a base64 run, padded or not, into exactly `N` bytes.
pub fn decode_lenient_exact<const N: usize>(input: &[u8]) -> Result<[u8; N], ParamsError> {
    decode_exact(&LENIENT_PAD, input)
}

fn decode_exact<E: Engine, const N: usize>(
    engine: &E,
    input: &[u8],
) -> Result<[u8; N], ParamsError> {
    let unpadded_len = input.iter().rposition(|&b| b != b'=').map_or(0, |i| i + 1);
    if decoded_len(unpadded_len) != Some(N) {
        return Err(ParamsError::Decode(format!(
            "base64 payload of {} chars cannot hold exactly {N} bytes",
            input.len()
        )));
    }

    let decoded = engine
        .decode(input)
        .map_err(|e| ParamsError::Decode(format!("invalid base64: {e}")))?;

    <[u8; N]>::try_from(decoded.as_slice()).map_err(|_| {
        ParamsError::Decode(format!(
            "base64 payload decoded to {} bytes, expected {N}",
            decoded.len()
        ))
    })
}
