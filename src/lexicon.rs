//! Static classified word tables and word-bounded lookups over them.
//!
//! Each category owns an ordered list of lowercase word forms. The subject
//! pronoun and be-verb tables are positionally paired: `BE_VERBS[i]` is the
//! form of "to be" that agrees with `SUBJECT_PRONOUNS[i]`. That pairing is
//! the single source of truth for agreement, shared by contraction expansion
//! and point-of-view inversion.

use crate::keyword::{find_keyword, find_keyword_from};

/// Helper verbs expressing necessity or possibility.
pub const MODAL_AUXILIARIES: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

/// Interrogative words.
pub const QUESTION_WORDS: &[&str] = &["who", "what", "when", "where", "how", "which"];

/// Pronouns used as a sentence subject.
pub const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "that", "we", "they"];

/// Pronouns used as a sentence object.
pub const OBJECT_PRONOUNS: &[&str] = &["me", "you", "him", "her", "it", "that", "us", "them"];

/// Forms of "to be", paired positionally with [`SUBJECT_PRONOUNS`].
pub const BE_VERBS: &[&str] = &["am", "are", "is", "is", "is", "is", "are", "are"];

// The pronoun↔be-verb pairing is positional; the tables must stay in step.
const _: () = assert!(SUBJECT_PRONOUNS.len() == BE_VERBS.len());

/// A grammatical word-class tracked by the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconCategory {
    ModalAuxiliary,
    QuestionWord,
    SubjectPronoun,
    ObjectPronoun,
    BeVerb,
}

impl LexiconCategory {
    /// The ordered word forms owned by this category.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            LexiconCategory::ModalAuxiliary => MODAL_AUXILIARIES,
            LexiconCategory::QuestionWord => QUESTION_WORDS,
            LexiconCategory::SubjectPronoun => SUBJECT_PRONOUNS,
            LexiconCategory::ObjectPronoun => OBJECT_PRONOUNS,
            LexiconCategory::BeVerb => BE_VERBS,
        }
    }

    /// The first word of this category (by table order, not by position in
    /// `text`) that occurs word-bounded anywhere in `text`.
    ///
    /// Object pronouns carry a positional gate: an object pronoun only
    /// counts at or after the first subject pronoun in the same statement
    /// (the "you … me" pattern). With no subject pronoun present, no object
    /// pronoun is reported either.
    pub fn find_first(self, text: &str) -> Option<&'static str> {
        match self {
            LexiconCategory::ObjectPronoun => {
                let subject = LexiconCategory::SubjectPronoun.find_first(text)?;
                let subject_position = find_keyword(text, subject)?;

                OBJECT_PRONOUNS
                    .iter()
                    .copied()
                    .find(|word| find_keyword_from(text, word, subject_position.start).is_some())
            }
            _ => self
                .words()
                .iter()
                .copied()
                .find(|word| find_keyword(text, word).is_some()),
        }
    }

    /// Whether any word of this category occurs word-bounded in `text`.
    pub fn contains(self, text: &str) -> bool {
        self.find_first(text).is_some()
    }
}

/// The be-verb that agrees with `subject`, if `subject` is a known subject
/// pronoun.
pub fn be_verb_for(subject: &str) -> Option<&'static str> {
    SUBJECT_PRONOUNS
        .iter()
        .position(|pronoun| *pronoun == subject)
        .map(|index| BE_VERBS[index])
}

/// First modal auxiliary occurring in `text`, by table order.
pub fn find_modal_auxiliary(text: &str) -> Option<&'static str> {
    LexiconCategory::ModalAuxiliary.find_first(text)
}

/// Whether `text` contains a modal auxiliary.
pub fn contains_modal_auxiliary(text: &str) -> bool {
    LexiconCategory::ModalAuxiliary.contains(text)
}

/// First question word occurring in `text`, by table order.
pub fn find_question_word(text: &str) -> Option<&'static str> {
    LexiconCategory::QuestionWord.find_first(text)
}

/// Whether `text` contains a question word.
pub fn contains_question_word(text: &str) -> bool {
    LexiconCategory::QuestionWord.contains(text)
}

/// First subject pronoun occurring in `text`, by table order.
pub fn find_subject_pronoun(text: &str) -> Option<&'static str> {
    LexiconCategory::SubjectPronoun.find_first(text)
}

/// Whether `text` contains a subject pronoun.
pub fn contains_subject_pronoun(text: &str) -> bool {
    LexiconCategory::SubjectPronoun.contains(text)
}

/// First object pronoun occurring at or after the first subject pronoun in
/// `text`, by table order. See [`LexiconCategory::find_first`].
pub fn find_object_pronoun(text: &str) -> Option<&'static str> {
    LexiconCategory::ObjectPronoun.find_first(text)
}

/// Whether `text` contains a (subject-gated) object pronoun.
pub fn contains_object_pronoun(text: &str) -> bool {
    LexiconCategory::ObjectPronoun.contains(text)
}

/// First be-verb occurring in `text`, by table order.
pub fn find_be_verb(text: &str) -> Option<&'static str> {
    LexiconCategory::BeVerb.find_first(text)
}

/// Whether `text` contains a be-verb.
pub fn contains_be_verb(text: &str) -> bool {
    LexiconCategory::BeVerb.contains(text)
}
