use bitvec::prelude::*;
use log::debug;

/// Returns `true` if `s` can be split into a sequence of words from `word_dict`.
///
/// Words may be reused any number of times. Empty dictionary entries are
/// ignored, and the empty string is trivially segmentable.
///
/// # Examples
///
/// ```
/// use dp1d::dynamic::word_break;
///
/// assert!(word_break("leetcode", &["leet", "code"]));
/// assert!(!word_break("catsandog", &["cats", "dog", "sand", "and", "cat"]));
/// ```
pub fn word_break<S: AsRef<str>>(s: &str, word_dict: &[S]) -> bool {
    let segmentable = segmentable_prefixes(s, word_dict);
    let result = segmentable[s.len()];
    if !result {
        debug!("{:?} has no segmentation into dictionary words", s);
    }
    result
}

/// Returns one segmentation of `s` into words from `word_dict`, or `None` if
/// none exists.
///
/// The split is rebuilt from the prefix table by walking back from the end of
/// `s`; at each step the first dictionary word that lands on a segmentable
/// prefix is taken.
///
/// # Examples
///
/// ```
/// use dp1d::dynamic::word_break_segmentation;
///
/// let words = word_break_segmentation("applepenapple", &["apple", "pen"]);
/// assert_eq!(words, Some(vec!["apple", "pen", "apple"]));
/// ```
pub fn word_break_segmentation<'a, S: AsRef<str>>(
    s: &'a str,
    word_dict: &[S],
) -> Option<Vec<&'a str>> {
    let segmentable = segmentable_prefixes(s, word_dict);
    if !segmentable[s.len()] {
        return None;
    }

    let mut words = Vec::new();
    let mut end = s.len();
    while end > 0 {
        let start = word_dict
            .iter()
            .map(|word| word.as_ref().as_bytes())
            .find(|word| ends_segmentable_at(s.as_bytes(), &segmentable, end, word))
            .map(|word| end - word.len())?;
        words.push(&s[start..end]);
        end = start;
    }

    words.reverse();
    Some(words)
}

/// Whether `word` ends exactly at `end` and starts on a segmentable prefix.
fn ends_segmentable_at(bytes: &[u8], segmentable: &BitSlice, end: usize, word: &[u8]) -> bool {
    !word.is_empty()
        && word.len() <= end
        && segmentable[end - word.len()]
        && bytes[end - word.len()..end] == *word
}

/// Bit `i` is set when the first `i` bytes of `s` split into dictionary words.
///
/// Matching is done on bytes: a complete UTF-8 word can only match at char
/// boundaries, so every set bit sits on one.
fn segmentable_prefixes<S: AsRef<str>>(s: &str, word_dict: &[S]) -> BitVec {
    let bytes = s.as_bytes();
    let mut segmentable = bitvec![0; bytes.len() + 1];
    segmentable.set(0, true); // base case

    for end in 1..=bytes.len() {
        let reachable = word_dict
            .iter()
            .any(|word| ends_segmentable_at(bytes, &segmentable, end, word.as_ref().as_bytes()));
        segmentable.set(end, reachable);
    }

    segmentable
}
