//! Rule-based grammar analysis for a reflective conversational responder.
//!
//! This crate is the linguistic substrate beneath a keyword-dispatch
//! responder: given a free-text statement (lowercased, trimmed, contractions
//! expanded), it classifies grammatical features and rewrites the statement
//! according to fixed transformation rules.
//!
//! ## Components
//!
//! - [`keyword`]: case-insensitive, word-boundary-respecting keyword search
//!   plus adjacent-token extraction
//! - [`lexicon`]: static classified word tables (modal auxiliaries, question
//!   words, subject/object pronouns, be-verbs) with positional
//!   pronoun↔be-verb agreement
//! - [`contraction`]: contraction expansion ("don't" → "do not")
//! - [`question`]: interrogative detection
//! - [`point_of_view`]: first/second-person perspective inversion
//!
//! ## Usage
//!
//! ```
//! use mockingbird_grammar::{expand_contractions, invert_point_of_view, is_question};
//!
//! let statement = expand_contractions("i'm happy");
//! assert_eq!(statement, "i am happy");
//! assert!(!is_question(&statement));
//! assert_eq!(invert_point_of_view(&statement), "you are happy");
//! ```
//!
//! Every operation is a pure function over immutable input text plus static
//! read-only lexicon tables: no I/O, no shared mutable state, no error kinds.
//! Absence of a match is an ordinary `Option::None`, never a sentinel string.

pub mod contraction;
pub mod keyword;
pub mod lexicon;
pub mod point_of_view;
pub mod question;

pub use contraction::expand_contractions;
pub use keyword::{find_keyword, find_keyword_from, word_after, word_before, KeywordMatch};
pub use lexicon::{
    be_verb_for, contains_be_verb, contains_modal_auxiliary, contains_object_pronoun,
    contains_question_word, contains_subject_pronoun, find_be_verb, find_modal_auxiliary,
    find_object_pronoun, find_question_word, find_subject_pronoun, LexiconCategory,
};
pub use point_of_view::invert_point_of_view;
pub use question::is_question;
