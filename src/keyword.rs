//! Word-boundary-aware keyword location and adjacent-token extraction.
//!
//! Searches are case-insensitive and only accept occurrences that stand as
//! whole words: the characters on both sides of the matched span (or the
//! string edges) must not be ASCII letters. This is what keeps "no" from
//! matching inside "know".

/// A located keyword: byte offset of the match plus the matched word's
/// length. Absence is expressed as `Option::None` by the search functions,
/// never as a reserved placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Length of the matched word in bytes.
    pub len: usize,
}

impl KeywordMatch {
    /// Byte offset one past the last matched character.
    pub fn end(self) -> usize {
        self.start + self.len
    }
}

/// Whether the byte at `index` counts as a word boundary.
///
/// Anything that is not an ASCII letter qualifies, as do the string edges.
fn is_boundary(text: &[u8], index: usize) -> bool {
    match text.get(index) {
        Some(byte) => !byte.is_ascii_alphabetic(),
        None => true,
    }
}

/// Find the first word-bounded, case-insensitive occurrence of `word` in
/// `text`, starting the scan at byte offset `from`.
///
/// Raw occurrences that sit inside a longer word are skipped and the scan
/// continues. Matches at offset 0 and at the very end of `text` are valid.
pub fn find_keyword_from(text: &str, word: &str, from: usize) -> Option<KeywordMatch> {
    if word.is_empty() {
        return None;
    }

    let haystack = text.as_bytes();
    let needle = word.as_bytes();
    let mut position = from;

    while position + needle.len() <= haystack.len() {
        let candidate = &haystack[position..position + needle.len()];

        if candidate.eq_ignore_ascii_case(needle)
            && (position == 0 || is_boundary(haystack, position - 1))
            && is_boundary(haystack, position + needle.len())
        {
            return Some(KeywordMatch {
                start: position,
                len: needle.len(),
            });
        }

        position += 1;
    }

    None
}

/// Find the first word-bounded, case-insensitive occurrence of `word` in
/// `text`, scanning from the beginning.
pub fn find_keyword(text: &str, word: &str) -> Option<KeywordMatch> {
    find_keyword_from(text, word, 0)
}

/// The token immediately after `word` in `text`: the maximal run of
/// non-space characters starting one character past the match, up to the
/// next space or end of string.
///
/// Returns `""` when `word` is absent or no token follows it.
pub fn word_after<'a>(text: &'a str, word: &str) -> &'a str {
    let Some(found) = find_keyword(text, word) else {
        return "";
    };

    // Skip the single separator character right after the match.
    let rest = &text[found.end()..];
    let mut chars = rest.chars();
    if chars.next().is_none() {
        return "";
    }
    let rest = chars.as_str();

    match rest.find(' ') {
        Some(space) => &rest[..space],
        None => rest,
    }
}

/// The token immediately before `word` in `text`: the maximal run of
/// non-space characters ending one character before the match, back to the
/// previous space or start of string.
///
/// Returns `""` when `word` is absent or starts at offset 0 or 1.
pub fn word_before<'a>(text: &'a str, word: &str) -> &'a str {
    let Some(found) = find_keyword(text, word) else {
        return "";
    };
    if found.start <= 1 {
        return "";
    }

    // Drop the single separator character right before the match.
    let head = &text[..found.start];
    let mut chars = head.chars();
    chars.next_back();
    let head = chars.as_str();

    match head.rfind(' ') {
        Some(space) => &head[space + 1..],
        None => head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_substring_occurrences() {
        assert_eq!(find_keyword("I know", "no"), None);
    }

    #[test]
    fn accepts_the_standalone_word_after_a_substring() {
        // "no" occurs inside "know" first; the scan must move on to the
        // standalone word.
        let found = find_keyword("I know no answer", "no").unwrap();
        assert_eq!(found.start, 7);
        assert_eq!(found.len, 2);
    }

    #[test]
    fn matches_at_string_edges() {
        assert_eq!(
            find_keyword("no way", "no"),
            Some(KeywordMatch { start: 0, len: 2 })
        );
        assert_eq!(
            find_keyword("i said no", "no"),
            Some(KeywordMatch { start: 7, len: 2 })
        );
        assert_eq!(find_keyword("no", "no"), Some(KeywordMatch { start: 0, len: 2 }));
    }

    #[test]
    fn search_is_case_insensitive() {
        assert_eq!(
            find_keyword("Would YOU say so", "you"),
            Some(KeywordMatch { start: 6, len: 3 })
        );
    }

    #[test]
    fn punctuation_counts_as_a_boundary() {
        assert!(find_keyword("happy, are you?", "are").is_some());
        assert!(find_keyword("(no)", "no").is_some());
    }

    #[test]
    fn from_offset_skips_earlier_occurrences() {
        let first = find_keyword("you like you", "you").unwrap();
        assert_eq!(first.start, 0);
        let second = find_keyword_from("you like you", "you", first.end()).unwrap();
        assert_eq!(second.start, 9);
    }

    #[test]
    fn empty_inputs_never_match() {
        assert_eq!(find_keyword("", "no"), None);
        assert_eq!(find_keyword("no", ""), None);
        assert_eq!(find_keyword_from("no", "no", 1), None);
    }

    #[test]
    fn word_after_returns_the_next_token() {
        assert_eq!(word_after("the cat sat on the mat", "cat"), "sat");
        assert_eq!(word_after("the cat", "cat"), "");
        assert_eq!(word_after("the cat sat", "dog"), "");
    }

    #[test]
    fn word_after_handles_a_trailing_single_token() {
        assert_eq!(word_after("a b", "a"), "b");
    }

    #[test]
    fn word_before_returns_the_previous_token() {
        assert_eq!(word_before("the cat sat on the mat", "sat"), "cat");
        assert_eq!(word_before("the cat", "cat"), "the");
        assert_eq!(word_before("the cat", "the"), "");
        assert_eq!(word_before("the cat", "dog"), "");
    }
}
