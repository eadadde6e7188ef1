//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, ParamsError>`](ParamsError); no operation panics on
//! malformed input.

use thiserror::Error;

/// The error type for all parameter-string operations.
///
/// Every variant is a plain, retryable rejection of the supplied input. Output buffers
/// touched before the failure point are left in an unspecified state and must not be
/// trusted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// A destination buffer does not have the exactly-computed required length.
    ///
    /// The codec never truncates and never writes into slack space.
    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Encoded input is malformed.
    ///
    /// This variant covers:
    /// - Missing or surplus `$`-delimited fields
    /// - Unrecognized variant tags
    /// - A numeric segment other than `m=<uint>,t=<uint>,p=<uint>`
    /// - Base64 payloads that are invalid or decode to the wrong length
    #[error("Decode error: {0}")]
    Decode(String),

    /// A parameter lies outside its inclusive bound.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A loosely-typed variant name matched none of the known tags.
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// The embedded version field differs from [`ARGON2_VERSION`](crate::consts::ARGON2_VERSION).
    ///
    /// Only reported by [`Argon2Params::decode_strict`](crate::Argon2Params::decode_strict).
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u32),

    /// The operating system could not supply random bytes for a salt.
    #[error("Entropy error: {0}")]
    Entropy(String),

    /// The Argon2 primitive itself failed.
    #[error("Hash error: {0}")]
    Hash(String),
}

impl From<&'static str> for ParamsError {
    fn from(msg: &'static str) -> Self {
        ParamsError::Decode(msg.to_string())
    }
}

impl ParamsError {
    pub(crate) fn length_mismatch(expected: usize, actual: usize) -> Self {
        ParamsError::LengthMismatch { expected, actual }
    }
}
