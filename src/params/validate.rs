//! Range validation and loose construction.

use crate::consts::{MAX_PARAMS, MIN_PARAMS, SALT_LEN};
use crate::error::ParamsError;
use crate::params::Argon2Params;
use crate::variant::Variant;

impl Argon2Params {
    /// Check every field against [`MIN_PARAMS`]`..=`[`MAX_PARAMS`].
    ///
    /// The variant is compared by ordinal. The salt is not checked.
    ///
    /// # Errors
    ///
    /// - [`ParamsError::Validation`] - Names the first field out of range
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_range(
            "variant",
            self.variant.ordinal().into(),
            MIN_PARAMS.variant.ordinal().into(),
            MAX_PARAMS.variant.ordinal().into(),
        )?;
        check_range(
            "time_cost",
            self.time_cost,
            MIN_PARAMS.time_cost,
            MAX_PARAMS.time_cost,
        )?;
        check_range(
            "memory_cost",
            self.memory_cost,
            MIN_PARAMS.memory_cost,
            MAX_PARAMS.memory_cost,
        )?;
        check_range(
            "parallelism",
            self.parallelism,
            MIN_PARAMS.parallelism,
            MAX_PARAMS.parallelism,
        )
    }

    /// Build parameters from loosely-typed caller input.
    ///
    /// `variant` may be a short form (`"d"`, `"i"`, `"id"`) or a full tag
    /// (`"argon2id"`). The salt is zeroed; call [`gensalt`](Self::gensalt) before encoding.
    ///
    /// # Errors
    ///
    /// - [`ParamsError::UnknownVariant`] - `variant` matches no known tag
    /// - [`ParamsError::Validation`] - A numeric field is out of range
    pub fn set(
        variant: &[u8],
        time_cost: u32,
        memory_cost: u32,
        parallelism: u32,
    ) -> Result<Self, ParamsError> {
        let params = Self {
            variant: Variant::parse_loose(variant)?,
            time_cost,
            memory_cost,
            parallelism,
            salt: [0u8; SALT_LEN],
        };
        params.validate()?;
        Ok(params)
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), ParamsError> {
    if !(min..=max).contains(&value) {
        return Err(ParamsError::Validation(format!(
            "{field} = {value} outside {min}..={max}"
        )));
    }
    Ok(())
}
