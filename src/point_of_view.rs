//! Point-of-view inversion: rewrite first/second-person references so a
//! statement about the speaker becomes a statement about the listener, and
//! vice versa.
//!
//! The rewrite works over two parallel strings. `output` accumulates the
//! real result. `scratch` exists only to find the next unprocessed token:
//! once a token is handled, its span in `scratch` is masked with a run of
//! `*` (never a letter, so never re-matched) of the same length as the
//! replacement spliced into `output`, which keeps byte positions aligned
//! between the two strings even when the replacement's length differs from
//! the original token's.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::keyword::{find_keyword, word_after, word_before};
use crate::lexicon::{find_be_verb, find_object_pronoun, find_subject_pronoun};
use crate::question::is_question;

/// Subject-pronoun perspective swaps. Pronouns outside the map keep their
/// form. Note the asymmetry: "we" inverts to "you", but nothing ever
/// reconstructs "we".
static SUBJECT_INVERSIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("i", "you"), ("we", "you"), ("you", "I")]));

/// Object-pronoun perspective swaps.
static OBJECT_INVERSIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("me", "you"), ("us", "you"), ("you", "me")]));

/// Invert first/second-person subject pronouns, object pronouns, and
/// agreeing be-verbs in `statement`, leaving every other token untouched
/// and rewriting each occurrence exactly once.
///
/// Three passes run in order: subject pronouns, object pronouns, be-verbs.
/// Be-verb agreement is resolved against the already-rewritten output: the
/// token adjacent to the verb there (the following token if the output reads
/// as a question, the preceding one otherwise) picks "am" after "I", "are"
/// after "you", and leaves the verb alone after anything else.
///
/// This transform is deliberately not an involution; see the module tests.
pub fn invert_point_of_view(statement: &str) -> String {
    let mut output = statement.to_string();
    let mut scratch = statement.to_string();

    while let Some(pronoun) = find_subject_pronoun(&scratch) {
        let Some(found) = find_keyword(&scratch, pronoun) else {
            break;
        };
        let inverted = SUBJECT_INVERSIONS.get(pronoun).copied().unwrap_or(pronoun);

        output.replace_range(found.start..found.end(), inverted);
        mask(&mut scratch, found.start, found.len, inverted.len());
    }

    while let Some(pronoun) = find_object_pronoun(&scratch) {
        let Some(found) = find_keyword(&scratch, pronoun) else {
            break;
        };
        let inverted = OBJECT_INVERSIONS.get(pronoun).copied().unwrap_or(pronoun);

        output.replace_range(found.start..found.end(), inverted);
        mask(&mut scratch, found.start, found.len, inverted.len());
    }

    while let Some(verb) = find_be_verb(&scratch) {
        let Some(found) = find_keyword(&scratch, verb) else {
            break;
        };

        let neighbor = if is_question(&output) {
            word_after(&output, verb)
        } else {
            word_before(&output, verb)
        };
        let inverted = match neighbor {
            "I" => "am",
            "you" => "are",
            _ => verb,
        };

        output.replace_range(found.start..found.end(), inverted);
        mask(&mut scratch, found.start, found.len, inverted.len());
    }

    output
}

/// Mask `len` bytes of `scratch` at `start` with `mask_len` stars, then trim
/// incidental whitespace at the ends.
fn mask(scratch: &mut String, start: usize, len: usize, mask_len: usize) {
    let stars = "*".repeat(mask_len);
    scratch.replace_range(start..start + len, &stars);

    let trimmed = scratch.trim();
    if trimmed.len() != scratch.len() {
        *scratch = trimmed.to_string();
    }
}
