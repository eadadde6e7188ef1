//! Exact-length text codec for [`Argon2Params`].
//!
//! Encoding never allocates more than [`Argon2Params::encoded_len`] bytes and refuses
//! any destination that is not exactly that long. Decoding is a single bounded
//! left-to-right scan over the `$`-delimited fields.

use crate::b64;
use crate::consts::{ARGON2_VERSION, DELIMITER, HASH_LEN, SALT_LEN};
use crate::error::ParamsError;
use crate::params::Argon2Params;
use crate::utils::{decimal_len, parse_u32, strip_nul};
use crate::variant::Variant;
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

const SALT_B64_LEN: usize = b64::encoded_len(SALT_LEN, false);
const HASH_B64_LEN: usize = b64::encoded_len(HASH_LEN, false);

impl Argon2Params {
    /// Exact byte length of the encoded form. No terminator is counted.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        1 + self.variant.tag().len()
            + "$v=".len()
            + decimal_len(ARGON2_VERSION)
            + "$m=".len()
            + decimal_len(self.memory_cost)
            + ",t=".len()
            + decimal_len(self.time_cost)
            + ",p=".len()
            + decimal_len(self.parallelism)
            + 1
            + SALT_B64_LEN
    }

    /// Exact byte length of a full Encoded Hash String built on these parameters:
    /// the parameter string, one delimiter and the unpadded hash segment.
    #[must_use]
    pub const fn encoded_hash_len(&self) -> usize {
        self.encoded_len() + 1 + HASH_B64_LEN
    }

    /// Write the canonical string into `out`.
    ///
    /// Does not validate; callers encode what they have already validated.
    ///
    /// # Errors
    ///
    /// - [`ParamsError::LengthMismatch`] - `out.len() != self.encoded_len()`
    pub fn encode_into(&self, out: &mut [u8]) -> Result<(), ParamsError> {
        let expected = self.encoded_len();
        if out.len() != expected {
            return Err(ParamsError::length_mismatch(expected, out.len()));
        }

        let (text, salt_out) = out.split_at_mut(expected - SALT_B64_LEN);
        let mut cursor: &mut [u8] = text;
        let formatted = write!(
            cursor,
            "${}$v={}$m={},t={},p={}$",
            self.variant.tag(),
            ARGON2_VERSION,
            self.memory_cost,
            self.time_cost,
            self.parallelism,
        );
        if formatted.is_err() || !cursor.is_empty() {
            return Err(ParamsError::length_mismatch(
                expected,
                expected - cursor.len(),
            ));
        }

        b64::encode_nopad_into(&self.salt, salt_out)
    }

    /// Encode into a freshly allocated string of exactly [`encoded_len`](Self::encoded_len) bytes.
    pub fn encode(&self) -> Result<String, ParamsError> {
        let mut buf = vec![0u8; self.encoded_len()];
        self.encode_into(&mut buf)?;
        String::from_utf8(buf).map_err(|_| ParamsError::Decode("encoded form is not ASCII".into()))
    }

    /// Decode an Encoded Parameter String.
    ///
    /// A single trailing NUL byte is ignored. The version field must be `v=<uint>` but its
    /// value is not compared with [`ARGON2_VERSION`]; use
    /// [`decode_strict`](Self::decode_strict) for that. The result is not validated.
    ///
    /// # Errors
    ///
    /// - [`ParamsError::Decode`] - Wrong field count, unknown tag, malformed numeric
    ///   segment, or a salt that does not decode to exactly 16 bytes
    ///
    /// # Example
    ///
    /// ```
    /// use argon2_params::{Argon2Params, Variant};
    ///
    /// let params = Argon2Params::decode(b"$argon2i$v=19$m=4096,t=3,p=1$AAAAAAAAAAAAAAAAAAAAAA")?;
    /// assert_eq!(params.variant, Variant::Argon2i);
    /// assert_eq!(params.memory_cost, 4096);
    /// assert_eq!(params.salt, [0u8; 16]);
    /// # Ok::<(), argon2_params::ParamsError>(())
    /// ```
    pub fn decode(encoded: &[u8]) -> Result<Self, ParamsError> {
        decode_fields(encoded, 0).map(|(params, _)| params)
    }

    /// [`decode`](Self::decode), then reject any version other than [`ARGON2_VERSION`].
    ///
    /// # Errors
    ///
    /// - [`ParamsError::Decode`] - As for [`decode`](Self::decode)
    /// - [`ParamsError::UnsupportedVersion`] - The `v=` field holds another revision
    pub fn decode_strict(encoded: &[u8]) -> Result<Self, ParamsError> {
        let (params, version) = decode_fields(encoded, 0)?;
        if version != ARGON2_VERSION {
            debug!(version, "rejected encoded parameters: unsupported version");
            return Err(ParamsError::UnsupportedVersion(version));
        }
        Ok(params)
    }

    /// Decode the parameter prefix of a full Encoded Hash String.
    ///
    /// Exactly one field must follow the salt; its content is not inspected here (see
    /// [`decode_hash`](crate::decode_hash)).
    pub fn from_encoded_hash(encoded: &[u8]) -> Result<Self, ParamsError> {
        decode_fields(encoded, 1).map(|(params, _)| params)
    }
}

impl FromStr for Argon2Params {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s.as_bytes())
    }
}

fn reject(reason: impl Into<String>) -> ParamsError {
    let reason = reason.into();
    debug!(%reason, "rejected encoded parameters");
    ParamsError::Decode(reason)
}

/// Split `encoded` into its fields and populate a struct.
///
/// `trailing` is the number of fields allowed after the salt (0 for a parameter
/// string, 1 for a full hash string). Returns the parsed version alongside.
fn decode_fields(encoded: &[u8], trailing: usize) -> Result<(Argon2Params, u32), ParamsError> {
    let input = strip_nul(encoded);
    let mut fields = input.split(|&b| b == DELIMITER);

    match fields.next() {
        Some([]) => {}
        _ => return Err(reject("encoded string must start with '$'")),
    }

    let mut next_field =
        |name: &str| fields.next().ok_or_else(|| reject(format!("missing {name} field")));
    let tag = next_field("variant")?;
    let version = next_field("version")?;
    let numeric = next_field("parameters")?;
    let salt = next_field("salt")?;

    let extra = fields.count();
    if extra != trailing {
        return Err(reject(format!(
            "expected {trailing} fields after the salt, found {extra}"
        )));
    }

    let variant = Variant::from_tag(tag).ok_or_else(|| reject("unrecognized variant tag"))?;
    let version = version
        .strip_prefix(b"v=")
        .and_then(parse_u32)
        .ok_or_else(|| reject("malformed version field"))?;
    let (memory_cost, time_cost, parallelism) = parse_numeric(numeric)?;
    let salt = b64::decode_nopad_exact::<SALT_LEN>(salt)
        .map_err(|e| reject(format!("bad salt: {e}")))?;

    Ok((
        Argon2Params {
            variant,
            time_cost,
            memory_cost,
            parallelism,
            salt,
        },
        version,
    ))
}

/// Parse exactly `m=<uint>,t=<uint>,p=<uint>`.
fn parse_numeric(segment: &[u8]) -> Result<(u32, u32, u32), ParamsError> {
    let mut parts = segment.split(|&b| b == b',');
    let mut next_value = |key: &'static [u8]| {
        parts
            .next()
            .and_then(|part| part.strip_prefix(key))
            .and_then(parse_u32)
            .ok_or_else(|| {
                reject(format!(
                    "malformed parameters segment: expected {}<uint>",
                    String::from_utf8_lossy(key)
                ))
            })
    };

    let m = next_value(b"m=".as_slice())?;
    let t = next_value(b"t=".as_slice())?;
    let p = next_value(b"p=".as_slice())?;
    if parts.next().is_some() {
        return Err(reject("malformed parameters segment: unexpected extra field"));
    }
    Ok((m, t, p))
}
