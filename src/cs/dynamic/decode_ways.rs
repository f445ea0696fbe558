use log::{debug, trace};

use super::rolling::RollingPair;
use crate::error::{Error, Result};

/// Counts the ways a digit string decodes into letters with `1 = A` .. `26 = Z`.
///
/// A lone `'0'` has no letter, so it can only appear as the second digit of
/// `10` or `20`. A string starting with `'0'` (and the empty string) has no
/// decoding.
///
/// # Errors
///
/// Returns [`Error::InvalidDigit`] if `s` contains anything but ASCII digits,
/// and [`Error::Overflow`] if the count does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use dp1d::dynamic::num_decodings;
///
/// // "AB" or "L"
/// assert_eq!(num_decodings("12").unwrap(), 2);
/// assert_eq!(num_decodings("226").unwrap(), 3);
/// assert_eq!(num_decodings("06").unwrap(), 0);
/// ```
pub fn num_decodings(s: &str) -> Result<u64> {
    if let Some((position, found)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(Error::InvalidDigit { position, found });
    }

    let digits = s.as_bytes();
    if digits.first().map_or(true, |&d| d == b'0') {
        return Ok(0);
    }

    // prev: ways to decode digits[..i - 1], curr: ways to decode digits[..i]
    let mut window = RollingPair::new(1_u64, 1_u64);

    for i in 1..digits.len() {
        let mut ways = 0_u64;

        let pair = (digits[i - 1] - b'0') * 10 + (digits[i] - b'0');
        if (10..=26).contains(&pair) {
            ways = window.prev();
        }
        if digits[i] != b'0' {
            ways = ways.checked_add(window.curr()).ok_or_else(|| {
                debug!("decoding count overflowed at position {}", i);
                Error::Overflow("decode ways")
            })?;
        }

        trace!("prefix of length {} decodes {} ways", i + 1, ways);
        window.advance(ways);
    }

    Ok(window.curr())
}
