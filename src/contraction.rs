//! Contraction expansion: "don't" → "do not", "i'm" → "i am", "bob's" →
//! "bob is".
//!
//! Expansion runs as an iterative rewrite over a mutable buffer rather than
//! a recursive rebuild, bounded by the number of apostrophes: each pass
//! consumes exactly one contracted token and inserts no new apostrophe.

use crate::lexicon::be_verb_for;

/// Expand every contraction in `text` into its two-word form.
///
/// Per pass, the token immediately preceding the first apostrophe (back to
/// the previous space or the string start) is the contraction's subject.
/// Rules apply in priority order:
///
/// 1. `don` → "do not"
/// 2. `can` → "cannot"
/// 3. `aren` → "are not"
/// 4. a known subject pronoun → pronoun plus its paired be-verb
///    ("you're" → "you are")
/// 5. anything else → subject plus " is" ("bob's" → "bob is")
///
/// The consumed span runs from the subject's start through the contracted
/// suffix, ending at the next space after the apostrophe or at the end of
/// the string. Text on either side is preserved verbatim. The fixed point
/// is a string with no apostrophe left, so the operation is idempotent.
pub fn expand_contractions(text: &str) -> String {
    let mut text = text.to_string();

    while let Some(apostrophe) = text.find('\'') {
        let subject_start = text[..apostrophe].rfind(' ').map_or(0, |space| space + 1);
        let suffix_end = text[apostrophe..]
            .find(' ')
            .map_or(text.len(), |space| apostrophe + space);

        let subject = &text[subject_start..apostrophe];
        let replacement = match subject {
            "don" => "do not".to_string(),
            "can" => "cannot".to_string(),
            "aren" => "are not".to_string(),
            _ => match be_verb_for(subject) {
                Some(verb) => format!("{subject} {verb}"),
                None => format!("{subject} is"),
            },
        };

        text.replace_range(subject_start..suffix_end, &replacement);
    }

    text
}
