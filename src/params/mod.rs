//! # Argon2 Parameters
//!
//! [`Argon2Params`] is the in-memory form of one parameter set. It is encoded to and
//! decoded from the canonical text form in [`codec`], and range-checked in [`validate`].
//!
//! ## Format
//!
//! ```text
//! $<variant-tag>$v=<version>$m=<memory_cost>,t=<time_cost>,p=<parallelism>$<salt-base64>
//! ```
//!
//! ## Example
//!
//! ```
//! use argon2_params::{Argon2Params, Variant};
//!
//! let params = Argon2Params::set(b"id", 3, 65536, 4)?;
//! assert_eq!(params.variant, Variant::Argon2id);
//!
//! let encoded = params.encode()?;
//! assert_eq!(encoded.len(), params.encoded_len());
//! assert_eq!(Argon2Params::decode(encoded.as_bytes())?, params);
//! # Ok::<(), argon2_params::ParamsError>(())
//! ```

pub mod codec;
pub mod validate;

use crate::consts::{DEFAULT_PARAMS, SALT_LEN};
use crate::crypto::rng::{salt_from, SecureRng};
use crate::error::ParamsError;
use crate::variant::Variant;
use rand::TryRngCore;

/// One set of Argon2 hashing parameters.
///
/// Plain data: cheap to copy, compared field-for-field (salt bytes included).
/// A value built from caller input or decoded from storage must pass
/// [`validate`](Argon2Params::validate) before it is used for hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argon2Params {
    pub variant: Variant,
    /// Number of passes over memory.
    pub time_cost: u32,
    /// Memory usage in KiB.
    pub memory_cost: u32,
    /// Lane count.
    pub parallelism: u32,
    /// Per-hash salt. Not secret, never reused.
    pub salt: [u8; SALT_LEN],
}

impl Argon2Params {
    /// Replace the salt with fresh bytes from the OS CSPRNG.
    ///
    /// On failure the previous salt is left untouched.
    ///
    /// # Errors
    ///
    /// - [`ParamsError::Entropy`] - The OS entropy source is unavailable
    pub fn gensalt(&mut self) -> Result<(), ParamsError> {
        self.gensalt_with(&mut SecureRng::new())
    }

    /// [`gensalt`](Self::gensalt) with a caller-supplied generator.
    pub fn gensalt_with<R>(&mut self, rng: &mut R) -> Result<(), ParamsError>
    where
        R: TryRngCore + ?Sized,
    {
        self.salt = salt_from(rng)?;
        Ok(())
    }

    /// Generate a fresh salt and return the resulting parameter string.
    ///
    /// An entropy failure aborts before anything is encoded, so a stale or zeroed
    /// salt is never emitted.
    pub fn encode_with_fresh_salt(&mut self) -> Result<String, ParamsError> {
        self.encode_with_fresh_salt_from(&mut SecureRng::new())
    }

    /// [`encode_with_fresh_salt`](Self::encode_with_fresh_salt) drawing from `rng`.
    pub fn encode_with_fresh_salt_from<R>(&mut self, rng: &mut R) -> Result<String, ParamsError>
    where
        R: TryRngCore + ?Sized,
    {
        self.gensalt_with(rng)?;
        self.encode()
    }
}

impl Default for Argon2Params {
    /// [`DEFAULT_PARAMS`] with an all-zero salt. Call [`gensalt`](Self::gensalt) before use.
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::rng::tests::DeadRng;
    use crate::MIN_PARAMS;

    #[test]
    fn entropy_failure_keeps_salt_and_encodes_nothing() {
        let mut params = Argon2Params { salt: [0x5a; SALT_LEN], ..MIN_PARAMS };

        let err = params.gensalt_with(&mut DeadRng).unwrap_err();
        assert!(matches!(err, ParamsError::Entropy(_)));
        assert_eq!(params.salt, [0x5a; SALT_LEN]);

        let encoded = params.encode_with_fresh_salt_from(&mut DeadRng);
        assert!(matches!(encoded, Err(ParamsError::Entropy(_))));
        assert_eq!(params.salt, [0x5a; SALT_LEN]);
    }

    #[test]
    fn fresh_salt_is_encoded() {
        let mut params = Argon2Params { salt: [0; SALT_LEN], ..MIN_PARAMS };
        let encoded = params.encode_with_fresh_salt().unwrap();
        assert_ne!(params.salt, [0; SALT_LEN]);
        assert_eq!(Argon2Params::decode(encoded.as_bytes()).unwrap(), params);
    }
}
