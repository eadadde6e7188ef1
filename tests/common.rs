//! tests/common.rs
//! Common constants and helpers shared across test files

use argon2_params::{Argon2Params, Variant, MAX_PARAMS, MIN_PARAMS};

/// Salt whose bytes are 0x00..=0x0f; encodes to `AAECAwQFBgcICQoLDA0ODw`.
#[allow(dead_code)] // Used across multiple test files
pub const COUNTING_SALT: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

/// Standard test password
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"correct horse battery staple";

/// The literal hash string used by the extraction examples.
#[allow(dead_code)] // Used across multiple test files
pub const SAMPLE_HASH_STRING: &[u8] =
    b"$argon2id$v=19$m=65536,t=3,p=4$c29tZXNhbHQ$aGFzaGRhdGExMjM0NTY3ODkwMTIzNDU2";

/// Boundary and mid-range values for each numeric field.
#[allow(dead_code)] // Used across multiple test files
pub const TIME_COSTS: &[u32] = &[MIN_PARAMS.time_cost, 5, MAX_PARAMS.time_cost];
#[allow(dead_code)] // Used across multiple test files
pub const MEMORY_COSTS: &[u32] = &[MIN_PARAMS.memory_cost, 65_536, 1 << 20, MAX_PARAMS.memory_cost];
#[allow(dead_code)] // Used across multiple test files
pub const PARALLELISMS: &[u32] = &[MIN_PARAMS.parallelism, 2, MAX_PARAMS.parallelism];

/// Every valid combination of the sweep values above, each with a random salt.
#[allow(dead_code)] // Used across multiple test files
pub fn sweep() -> Vec<Argon2Params> {
    let mut all = Vec::new();
    for variant in Variant::ALL {
        for &time_cost in TIME_COSTS {
            for &memory_cost in MEMORY_COSTS {
                for &parallelism in PARALLELISMS {
                    all.push(Argon2Params {
                        variant,
                        time_cost,
                        memory_cost,
                        parallelism,
                        salt: rand::random(),
                    });
                }
            }
        }
    }
    all
}
