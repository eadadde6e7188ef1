//! # Hashing and Verification
//!
//! The one place that calls the Argon2 primitive (the `argon2` crate). Parameters are
//! validated before every computation, and the variant is dispatched through a single
//! exhaustive `match`.
//!
//! Output can be shaped three ways, selected by [`HashEncoding`]:
//! - [`HashEncoding::Standard`] - the full Encoded Hash String
//! - [`HashEncoding::Raw`] - the 32 raw hash bytes
//! - [`HashEncoding::HashOnly`] - only the trailing base64 hash segment

use crate::aliases::RawHash32;
use crate::b64;
use crate::consts::{ARGON2_VERSION, DELIMITER, HASH_LEN};
use crate::error::ParamsError;
use crate::hash::{decode_hash, extract_hash};
use crate::params::Argon2Params;
use crate::variant::Variant;
use argon2::{Algorithm, Argon2, Block, Params, Version};
use secure_gate::conversions::SecureConversionsExt;
use tracing::{debug, trace};

/// Output shape of [`hash_password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HashEncoding {
    #[default]
    Standard = 0,
    Raw = 1,
    HashOnly = 2,
}

impl TryFrom<i64> for HashEncoding {
    type Error = ParamsError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HashEncoding::Standard),
            1 => Ok(HashEncoding::Raw),
            2 => Ok(HashEncoding::HashOnly),
            other => Err(ParamsError::Validation(format!(
                "invalid hash encoding {other}"
            ))),
        }
    }
}

/// Compute the raw hash of `password` into `out`.
///
/// # Errors
///
/// - [`ParamsError::Validation`] - `params` is out of range
/// - [`ParamsError::LengthMismatch`] - `out` is not exactly [`HASH_LEN`] bytes
/// - [`ParamsError::Hash`] - The primitive rejected the parameters, the working memory
///   could not be allocated, or the computation failed
pub fn hash_raw(params: &Argon2Params, password: &[u8], out: &mut [u8]) -> Result<(), ParamsError> {
    params.validate()?;
    if out.len() != HASH_LEN {
        return Err(ParamsError::length_mismatch(HASH_LEN, out.len()));
    }

    let algorithm = match params.variant {
        Variant::Argon2d => Algorithm::Argon2d,
        Variant::Argon2i => Algorithm::Argon2i,
        Variant::Argon2id => Algorithm::Argon2id,
    };
    let version =
        Version::try_from(ARGON2_VERSION).map_err(|e| ParamsError::Hash(e.to_string()))?;
    let costs = Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(HASH_LEN),
    )
    .map_err(|e| ParamsError::Hash(e.to_string()))?;

    trace!(
        variant = %params.variant,
        t_cost = params.time_cost,
        m_cost = params.memory_cost,
        p_cost = params.parallelism,
        "computing argon2 hash"
    );
    let blocks = alloc_blocks(costs.block_count())?;
    Argon2::new(algorithm, version, costs)
        .hash_password_into_with_memory(password, &params.salt, out, blocks)
        .map_err(|e| ParamsError::Hash(e.to_string()))
}

/// Working memory for one computation. Stored strings pick `m`, so an allocation the
/// host cannot satisfy must come back as an error instead of aborting.
fn alloc_blocks(count: usize) -> Result<Vec<Block>, ParamsError> {
    let mut blocks = Vec::new();
    blocks.try_reserve_exact(count).map_err(|e| {
        debug!(blocks = count, "argon2 working memory allocation failed");
        ParamsError::Hash(format!("cannot allocate {count} memory blocks: {e}"))
    })?;
    blocks.resize(count, Block::default());
    Ok(blocks)
}

/// Hash `password` and write the full Encoded Hash String into `out`.
///
/// # Errors
///
/// - [`ParamsError::LengthMismatch`] - `out.len() != params.encoded_hash_len()`
/// - Anything [`hash_raw`] returns
pub fn hash_encoded_into(
    params: &Argon2Params,
    password: &[u8],
    out: &mut [u8],
) -> Result<(), ParamsError> {
    let expected = params.encoded_hash_len();
    if out.len() != expected {
        return Err(ParamsError::length_mismatch(expected, out.len()));
    }

    let mut raw = RawHash32::new([0u8; HASH_LEN]);
    hash_raw(params, password, raw.expose_secret_mut())?;

    let (prefix, rest) = out.split_at_mut(params.encoded_len());
    params.encode_into(prefix)?;
    let (delimiter, segment) = rest.split_at_mut(1);
    delimiter[0] = DELIMITER;
    b64::encode_nopad_into(raw.expose_secret(), segment)
}

/// Hash `password` into a freshly allocated Encoded Hash String.
pub fn hash_encoded(params: &Argon2Params, password: &[u8]) -> Result<String, ParamsError> {
    let mut buf = vec![0u8; params.encoded_hash_len()];
    hash_encoded_into(params, password, &mut buf)?;
    String::from_utf8(buf).map_err(|_| ParamsError::Decode("encoded hash is not ASCII".into()))
}

/// Hash `password` and shape the output per `encoding`.
///
/// # Example
///
/// ```
/// use argon2_params::{hash_password, verify_password, Argon2Params, HashEncoding, MIN_PARAMS};
///
/// let params = Argon2Params { salt: [7u8; 16], ..MIN_PARAMS };
/// let encoded = hash_password(&params, b"hunter2", HashEncoding::Standard)?;
/// assert!(verify_password(&encoded, b"hunter2")?);
/// assert!(!verify_password(&encoded, b"hunter3")?);
/// # Ok::<(), argon2_params::ParamsError>(())
/// ```
pub fn hash_password(
    params: &Argon2Params,
    password: &[u8],
    encoding: HashEncoding,
) -> Result<Vec<u8>, ParamsError> {
    match encoding {
        HashEncoding::Standard => hash_encoded(params, password).map(String::into_bytes),
        HashEncoding::Raw => {
            let mut out = vec![0u8; HASH_LEN];
            hash_raw(params, password, &mut out)?;
            Ok(out)
        }
        HashEncoding::HashOnly => {
            let encoded = hash_encoded(params, password)?;
            Ok(extract_hash(encoded.as_bytes())?.to_vec())
        }
    }
}

/// A stored Encoded Hash String, decoded once and checked against many passwords.
///
/// Parsing validates the embedded parameters, since stored strings are
/// attacker-influenced.
pub struct StoredHash {
    params: Argon2Params,
    hash: RawHash32,
}

impl StoredHash {
    /// Decode and validate a full Encoded Hash String.
    ///
    /// # Errors
    ///
    /// - [`ParamsError::Decode`] - The string is malformed
    /// - [`ParamsError::Validation`] - The embedded parameters are out of range
    pub fn parse(encoded: &[u8]) -> Result<Self, ParamsError> {
        let params = Argon2Params::from_encoded_hash(encoded)?;
        params.validate().map_err(|e| {
            debug!("rejected stored hash: parameters out of range");
            e
        })?;

        let mut hash = RawHash32::new([0u8; HASH_LEN]);
        decode_hash(encoded, hash.expose_secret_mut())?;
        Ok(Self { params, hash })
    }

    #[must_use]
    pub fn params(&self) -> &Argon2Params {
        &self.params
    }

    /// Recompute the hash of `password` and compare in constant time.
    ///
    /// A wrong password is `Ok(false)`; errors are reserved for primitive failures.
    pub fn verify(&self, password: &[u8]) -> Result<bool, ParamsError> {
        let mut computed = RawHash32::new([0u8; HASH_LEN]);
        hash_raw(&self.params, password, computed.expose_secret_mut())?;
        let computed_slice: &[u8] = computed.expose_secret();
        Ok(computed_slice.ct_eq(self.hash.expose_secret()))
    }
}

/// Parse `encoded` and check `password` against it.
pub fn verify_password(encoded: &[u8], password: &[u8]) -> Result<bool, ParamsError> {
    StoredHash::parse(encoded)?.verify(password)
}
