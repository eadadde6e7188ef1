// src/lib.rs

//! Argon2 parameter strings: an exact-length codec, a strict range validator and a
//! hash-string extractor.
//!
//! ```text
//! $argon2id$v=19$m=65536,t=3,p=4$<salt-base64>[$<hash-base64>]
//! ```

pub mod aliases;
pub mod b64;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod hash;
#[cfg(feature = "hasher")]
pub mod hasher;
pub mod params;
pub mod utils;
pub mod variant;

// High-level API
pub use builders::params_builder::ParamsBuilder;
pub use consts::{
    ARGON2_VERSION, DEFAULT_PARAMS, HASH_LEN, MAX_ENCODED_HASH_LEN, MAX_ENCODED_PARAMS_LEN,
    MAX_PARAMS, MIN_PARAMS, SALT_LEN,
};
pub use error::ParamsError;
pub use hash::{decode_hash, extract_hash};
pub use params::Argon2Params;
pub use variant::Variant;

#[cfg(feature = "hasher")]
pub use hasher::{
    hash_encoded, hash_encoded_into, hash_password, hash_raw, verify_password, HashEncoding,
    StoredHash,
};
