//! # Secure-Gate Type Aliases
//!
//! Fixed-size buffers for hash material, backed by [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! They are zeroized on drop and require an explicit `.expose_secret()` to read.
//!
//! Salts are deliberately *not* wrapped: they are public, stored in clear inside every
//! parameter string, and compared field-for-field.

use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Hash material
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub RawHash32, 32); // raw Argon2 output, stored or recomputed
