//! Interrogative detection.

use crate::keyword::{find_keyword, word_after};
use crate::lexicon::{BE_VERBS, MODAL_AUXILIARIES, QUESTION_WORDS, SUBJECT_PRONOUNS};

/// Whether `text` reads as a question.
///
/// True if any of the following holds:
///
/// - a modal auxiliary is immediately followed by a subject pronoun
///   ("would you", "can we");
/// - a be-verb is immediately followed by a subject pronoun ("are you");
/// - a question word occurs word-bounded anywhere;
/// - a literal `?` occurs anywhere.
///
/// Pure predicate over the text; the checks short-circuit in this order but
/// the result is a plain logical OR.
pub fn is_question(text: &str) -> bool {
    MODAL_AUXILIARIES
        .iter()
        .chain(BE_VERBS)
        .any(|verb| SUBJECT_PRONOUNS.contains(&word_after(text, verb)))
        || QUESTION_WORDS
            .iter()
            .any(|word| find_keyword(text, word).is_some())
        || text.contains('?')
}
