//! Palindromic substrings via expansion around every center.
//!
//! A string of `n` characters has `2n - 1` possible centers: each character
//! (odd-length palindromes) and each adjacent pair (even-length ones). All
//! routines here work on Unicode scalar values, not bytes.

use log::trace;

/// Grows the window `chars[left..=right]` outward while it stays symmetric.
///
/// Returns the inclusive bounds of the widest palindrome sharing the seed's
/// center, or `None` when the seed itself is out of bounds or not a
/// palindrome. Seed with `left == right` for odd lengths and
/// `right == left + 1` for even ones.
///
/// # Examples
///
/// ```
/// use dp1d::string::expand_around_center;
///
/// let chars: Vec<char> = "xabbay".chars().collect();
/// assert_eq!(expand_around_center(&chars, 2, 3), Some((1, 4)));
/// assert_eq!(expand_around_center(&chars, 0, 1), None);
/// ```
pub fn expand_around_center(chars: &[char], left: usize, right: usize) -> Option<(usize, usize)> {
    if left > right || right >= chars.len() || chars[left] != chars[right] {
        return None;
    }

    let (mut left, mut right) = (left, right);
    while left > 0 && right + 1 < chars.len() && chars[left - 1] == chars[right + 1] {
        left -= 1;
        right += 1;
    }
    Some((left, right))
}

/// Visits the widest palindrome around every center, odd before even.
fn for_each_center<F>(chars: &[char], mut visit: F)
where
    F: FnMut(usize, (usize, usize)),
{
    for center in 0..chars.len() {
        if let Some(span) = expand_around_center(chars, center, center) {
            visit(center, span);
        }
        if let Some(span) = expand_around_center(chars, center, center + 1) {
            visit(center, span);
        }
    }
}

/// Returns the longest palindromic substring of `s`.
///
/// When several palindromes share the maximum length, the one found first
/// (leftmost center) wins. The result borrows from `s`; an empty input gives
/// an empty string.
///
/// # Examples
///
/// ```
/// use dp1d::string::longest_palindrome;
///
/// assert_eq!(longest_palindrome("babad"), "bab");
/// assert_eq!(longest_palindrome("cbbd"), "bb");
/// ```
pub fn longest_palindrome(s: &str) -> &str {
    let (offsets, chars): (Vec<usize>, Vec<char>) = s.char_indices().unzip();

    let mut best: Option<(usize, usize)> = None;
    for_each_center(&chars, |_, (left, right)| {
        let longer = best.map_or(true, |(l, r)| right - left > r - l);
        if longer {
            best = Some((left, right));
        }
    });

    match best {
        Some((left, right)) => {
            let end = offsets[right] + chars[right].len_utf8();
            trace!("longest palindrome spans chars {}..={}", left, right);
            &s[offsets[left]..end]
        }
        None => "",
    }
}

/// Counts the palindromic substrings of `s`, by position.
///
/// Equal substrings at different positions are counted separately, so `"aaa"`
/// has six: three `"a"`, two `"aa"` and one `"aaa"`.
///
/// # Examples
///
/// ```
/// use dp1d::string::count_palindromic_substrings;
///
/// assert_eq!(count_palindromic_substrings("abc"), 3);
/// assert_eq!(count_palindromic_substrings("aaa"), 6);
/// ```
pub fn count_palindromic_substrings(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();

    let mut count = 0;
    for_each_center(&chars, |center, (left, _)| {
        // Every step of the expansion added one more palindrome.
        count += center - left + 1;
    });
    count
}
