//! Argon2 parameter builder: defaults, validation and a fresh salt in one call

use crate::consts::{DEFAULT_PARAMS, SALT_LEN};
use crate::crypto::rng::random_salt;
use crate::error::ParamsError;
use crate::params::Argon2Params;
use crate::variant::Variant;

/// Builder for [`Argon2Params`].
///
/// Starts from [`DEFAULT_PARAMS`]. Unless a salt is supplied with
/// [`with_salt`](Self::with_salt), [`build`](Self::build) draws a fresh one.
///
/// # Example
///
/// ```
/// use argon2_params::{ParamsBuilder, Variant};
///
/// let params = ParamsBuilder::new()
///     .with_variant(Variant::Argon2i)
///     .with_time_cost(4)
///     .build()?;
/// assert_eq!(params.variant, Variant::Argon2i);
/// assert_eq!(params.time_cost, 4);
/// # Ok::<(), argon2_params::ParamsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParamsBuilder {
    variant: Variant,
    time_cost: u32,
    memory_cost: u32,
    parallelism: u32,
    salt: Option<[u8; SALT_LEN]>,
}

impl ParamsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            variant: DEFAULT_PARAMS.variant,
            time_cost: DEFAULT_PARAMS.time_cost,
            memory_cost: DEFAULT_PARAMS.memory_cost,
            parallelism: DEFAULT_PARAMS.parallelism,
            salt: None,
        }
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_time_cost(mut self, time_cost: u32) -> Self {
        self.time_cost = time_cost;
        self
    }

    /// Memory cost in KiB.
    #[must_use]
    pub fn with_memory_cost(mut self, memory_cost: u32) -> Self {
        self.memory_cost = memory_cost;
        self
    }

    #[must_use]
    pub fn with_parallelism(mut self, parallelism: u32) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Use a fixed salt instead of generating one. Mostly useful for test vectors.
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<[u8; SALT_LEN]>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Validate and produce the parameters.
    ///
    /// Validation runs before any salt is drawn.
    ///
    /// # Errors
    ///
    /// - [`ParamsError::Validation`] - A field is out of range
    /// - [`ParamsError::Entropy`] - No salt was supplied and the OS could not provide one
    pub fn build(self) -> Result<Argon2Params, ParamsError> {
        let mut params = Argon2Params {
            variant: self.variant,
            time_cost: self.time_cost,
            memory_cost: self.memory_cost,
            parallelism: self.parallelism,
            salt: [0u8; SALT_LEN],
        };
        params.validate()?;
        params.salt = match self.salt {
            Some(salt) => salt,
            None => random_salt()?,
        };
        Ok(params)
    }
}

impl Default for ParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
