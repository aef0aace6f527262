//! Plain-text search over a document's characters.

use std::ops::Range;

use crate::util::is_word_char;

/// Search flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub forward: bool,
    pub case_sensitive: bool,
    pub whole_words: bool,
}

/// Find `needle` in `haystack` starting at char offset `from`.
///
/// Forward: the first match starting at or after `from`.
/// Backward: the last match starting before `from`.
pub fn find_in(haystack: &[char], needle: &str, from: usize, options: FindOptions) -> Option<Range<usize>> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    let matches_at = |start: usize| {
        let candidate = &haystack[start..start + needle.len()];
        let same = if options.case_sensitive {
            candidate == needle.as_slice()
        } else {
            candidate
                .iter()
                .zip(&needle)
                .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
        };
        same && (!options.whole_words || is_whole_word(haystack, start, start + needle.len()))
    };

    let found = if options.forward {
        (from.min(last_start + 1)..=last_start).find(|&start| matches_at(start))
    } else {
        (0..from.min(last_start + 1)).rev().find(|&start| matches_at(start))
    };
    found.map(|start| start..start + needle.len())
}

fn is_whole_word(haystack: &[char], start: usize, end: usize) -> bool {
    let before = start
        .checked_sub(1)
        .and_then(|i| haystack.get(i))
        .is_some_and(|&ch| is_word_char(ch));
    let after = haystack.get(end).is_some_and(|&ch| is_word_char(ch));
    !before && !after
}
