//! Salt generation from the OS CSPRNG.
//!
//! Unlike an infallible `fill_bytes`, every call here surfaces entropy-source failure so
//! that a zeroed or stale salt is never encoded.

use crate::consts::SALT_LEN;
use crate::error::ParamsError;
use rand::{rngs::OsRng, TryRngCore};

/// Handle onto the operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRng(OsRng);

impl SecureRng {
    #[inline]
    pub fn new() -> Self {
        Self(OsRng)
    }

    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// - [`ParamsError::Entropy`] - The OS could not supply bytes; `dest` must not be used
    pub fn fill<T>(&mut self, dest: &mut T) -> Result<(), ParamsError>
    where
        T: AsMut<[u8]> + ?Sized,
    {
        fill_from(self, dest.as_mut())
    }
}

impl TryRngCore for SecureRng {
    type Error = <OsRng as TryRngCore>::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        self.0.try_next_u32()
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        self.0.try_next_u64()
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.0.try_fill_bytes(dst)
    }
}

/// Fill `dest` from any fallible generator, mapping its failure to [`ParamsError::Entropy`].
pub fn fill_from<R>(rng: &mut R, dest: &mut [u8]) -> Result<(), ParamsError>
where
    R: TryRngCore + ?Sized,
{
    rng.try_fill_bytes(dest)
        .map_err(|e| ParamsError::Entropy(e.to_string()))
}

/// A fresh 16-byte salt drawn from `rng`.
pub fn salt_from<R>(rng: &mut R) -> Result<[u8; SALT_LEN], ParamsError>
where
    R: TryRngCore + ?Sized,
{
    let mut salt = [0u8; SALT_LEN];
    fill_from(rng, &mut salt)?;
    Ok(salt)
}

/// A fresh 16-byte salt from the OS.
pub fn random_salt() -> Result<[u8; SALT_LEN], ParamsError> {
    salt_from(&mut SecureRng::new())
}
