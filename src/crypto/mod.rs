//! Randomness for salts.
//!
//! The hashing primitive itself lives behind [`crate::hasher`].

pub mod rng;
