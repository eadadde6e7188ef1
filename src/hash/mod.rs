//! # Hash-String Extraction
//!
//! Locates and decodes the trailing `$<hash-base64>` segment of a full Encoded Hash
//! String. The parameter prefix is handled by [`Argon2Params::from_encoded_hash`](crate::Argon2Params::from_encoded_hash).

pub mod extract;

pub use extract::{decode_hash, extract_hash};
