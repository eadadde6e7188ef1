//! Utility functions used across the library.

/// Number of decimal digits needed to print `value` (`0` takes one digit).
#[inline]
pub const fn decimal_len(value: u32) -> usize {
    match value.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Drop a single trailing NUL byte, if present.
///
/// Callers may hand over C-style buffers whose length includes the terminator.
#[inline]
pub fn strip_nul(input: &[u8]) -> &[u8] {
    match input.split_last() {
        Some((&0, rest)) => rest,
        _ => input,
    }
}

/// Parse an unsigned decimal made only of ASCII digits.
///
/// Rejects empty input, signs, whitespace and values above `u32::MAX`.
pub fn parse_u32(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}
