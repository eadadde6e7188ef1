//! # Argon2 Variants
//!
//! The closed set of hashing modes and their textual tags.

use crate::consts::TAG_PREFIX;
use crate::error::ParamsError;
use std::fmt;
use std::str::FromStr;

/// Argon2 hashing mode.
///
/// The discriminant is the ordinal used by range validation
/// (`Argon2d < Argon2i < Argon2id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Variant {
    /// Data-dependent memory access.
    Argon2d = 0,
    /// Data-independent memory access.
    Argon2i = 1,
    /// Hybrid of the two; the recommended default.
    Argon2id = 2,
}

impl Variant {
    /// Every variant, in ordinal order.
    pub const ALL: [Variant; 3] = [Variant::Argon2d, Variant::Argon2i, Variant::Argon2id];

    /// Tag as it appears in encoded strings (`"argon2d"`, `"argon2i"`, `"argon2id"`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Variant::Argon2d => "argon2d",
            Variant::Argon2i => "argon2i",
            Variant::Argon2id => "argon2id",
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Match a complete tag. Case-sensitive and length-exact.
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.tag().as_bytes() == tag)
    }

    /// Parse a loosely-typed variant name.
    ///
    /// Inputs no longer than [`TAG_PREFIX`] are treated as suffixes (`"d"`, `"i"`, `"id"`)
    /// and get the prefix prepended; longer inputs must already be a full tag.
    pub fn parse_loose(input: &[u8]) -> Result<Self, ParamsError> {
        let found = if input.len() <= TAG_PREFIX.len() {
            let mut tag = Vec::with_capacity(TAG_PREFIX.len() + input.len());
            tag.extend_from_slice(TAG_PREFIX.as_bytes());
            tag.extend_from_slice(input);
            Self::from_tag(&tag)
        } else {
            Self::from_tag(input)
        };

        found.ok_or_else(|| {
            ParamsError::UnknownVariant(String::from_utf8_lossy(input).into_owned())
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Variant {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_loose(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_full_forms() {
        let cases: &[(&str, Variant)] = &[
            ("d", Variant::Argon2d),
            ("i", Variant::Argon2i),
            ("id", Variant::Argon2id),
            ("argon2d", Variant::Argon2d),
            ("argon2i", Variant::Argon2i),
            ("argon2id", Variant::Argon2id),
        ];
        for &(input, expected) in cases {
            assert_eq!(input.parse::<Variant>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn case_and_length_are_exact() {
        for input in ["D", "ID", "Argon2id", "argon2", "", "argon2idx", "x", "argon2x"] {
            assert!(
                matches!(
                    Variant::parse_loose(input.as_bytes()),
                    Err(ParamsError::UnknownVariant(_))
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn ordinals_are_ordered() {
        assert!(Variant::Argon2d.ordinal() < Variant::Argon2i.ordinal());
        assert!(Variant::Argon2i.ordinal() < Variant::Argon2id.ordinal());
    }
}
