//! # Builders
//!
//! Fluent construction of validated [`Argon2Params`](crate::Argon2Params).
//!
//! ## Modules
//!
//! - [`params_builder`] - Builder starting from [`DEFAULT_PARAMS`](crate::consts::DEFAULT_PARAMS)

pub mod params_builder;
