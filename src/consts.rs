//! # Constants
//!
//! This module defines the format constants, the system-wide parameter bounds and the
//! maximum encoded lengths derived from them.

use crate::params::Argon2Params;
use crate::variant::Variant;

/// Argon2 specification revision written into the `v=` field (`0x13`, printed as `19`).
pub const ARGON2_VERSION: u32 = 0x13;

/// Salt length in bytes. Every parameter string carries exactly this many salt bytes.
pub const SALT_LEN: usize = 16;

/// Raw hash length in bytes produced by [`hash_raw`](crate::hasher::hash_raw).
pub const HASH_LEN: usize = 32;

/// Field delimiter of the encoded formats.
pub const DELIMITER: u8 = b'$';

/// Common prefix of every variant tag.
pub const TAG_PREFIX: &str = "argon2";

/// Lower inclusive bound for every field.
pub const MIN_PARAMS: Argon2Params = Argon2Params {
    variant: Variant::Argon2d,
    time_cost: 3,
    memory_cost: 4096, // 4 MiB
    parallelism: 1,
    salt: [0u8; SALT_LEN],
};

/// Upper inclusive bound for every field.
pub const MAX_PARAMS: Argon2Params = Argon2Params {
    variant: Variant::Argon2id,
    time_cost: 10,
    memory_cost: u32::MAX,
    parallelism: 4,
    salt: [0u8; SALT_LEN],
};

/// Parameters used when the caller supplies none.
///
/// Argon2id, 3 passes over 64 MiB on 4 lanes.
pub const DEFAULT_PARAMS: Argon2Params = Argon2Params {
    variant: Variant::Argon2id,
    time_cost: 3,
    memory_cost: 1 << 16,
    parallelism: 4,
    salt: [0u8; SALT_LEN],
};

/// Longest possible Encoded Parameter String (all fields at [`MAX_PARAMS`]).
pub const MAX_ENCODED_PARAMS_LEN: usize = MAX_PARAMS.encoded_len();

/// Longest possible Encoded Hash String (all fields at [`MAX_PARAMS`]).
pub const MAX_ENCODED_HASH_LEN: usize = MAX_PARAMS.encoded_hash_len();
