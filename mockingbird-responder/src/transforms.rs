//! Statement transformations: rewrite the user's own words into a reflective
//! reply.
//!
//! Every function here takes a normalized statement (lowercased, trimmed,
//! contractions expanded) and returns `None` when the statement does not
//! actually carry the shape the rule expects, so the dispatcher can fall
//! through to the next rule instead of producing a broken reply.

use mockingbird_grammar::{
    contains_be_verb, find_be_verb, find_keyword, find_keyword_from, find_modal_auxiliary,
    find_subject_pronoun, invert_point_of_view, word_after,
};

/// Drop a single trailing `.` or `?` so the transform can append its own.
fn strip_final_punctuation(statement: &str) -> &str {
    statement
        .strip_suffix(['?', '.'])
        .unwrap_or(statement)
}

/// `<subject> <be-verb> <rest>` → `Why <be-verb> <subject> <rest>?`, with
/// the perspective inverted.
pub fn subject_be_verb(statement: &str) -> Option<String> {
    let statement = strip_final_punctuation(statement);

    let subject = find_subject_pronoun(statement)?;
    let be_verb = find_be_verb(statement)?;
    let subject_at = find_keyword(statement, subject)?;
    let be_verb_at = find_keyword_from(statement, be_verb, subject_at.start)?;
    let rest = statement[be_verb_at.end()..].trim();

    Some(invert_point_of_view(&format!("Why {be_verb} {subject} {rest}?")))
}

/// `<be-verb> <subject> <rest>?` → `I don't know if <subject> <be-verb>
/// <rest>.`, with the perspective inverted.
pub fn be_verb_subject(statement: &str) -> Option<String> {
    let statement = strip_final_punctuation(statement);

    let be_verb = find_be_verb(statement)?;
    let subject = find_subject_pronoun(statement)?;
    let be_verb_at = find_keyword(statement, be_verb)?;
    let subject_at = find_keyword_from(statement, subject, be_verb_at.start)?;
    let rest = statement[subject_at.end()..].trim();

    Some(format!(
        "I don't know if {}",
        invert_point_of_view(&format!("{subject} {be_verb} {rest}."))
    ))
}

/// `<modal> <subject> <rest>?` → `I don't know, <modal> <subject'>
/// <rest>?`, with the perspective of the tail inverted.
pub fn modal_auxiliary(statement: &str) -> Option<String> {
    let statement = strip_final_punctuation(statement);

    let auxiliary = find_modal_auxiliary(statement)?;
    let subject = word_after(statement, auxiliary);
    if subject.is_empty() {
        return None;
    }
    let auxiliary_at = find_keyword(statement, auxiliary)?;
    let subject_at = find_keyword_from(statement, subject, auxiliary_at.end())?;
    let rest = statement[subject_at.end()..].trim();

    Some(format!(
        "I don't know, {auxiliary} {}",
        invert_point_of_view(&format!("{subject} {rest}?"))
    ))
}

/// `i want to <rest>` → `Why do you want to <rest'>?`.
pub fn i_want_to(statement: &str) -> Option<String> {
    let statement = strip_final_punctuation(statement);

    let found = find_keyword(statement, "i want to")?;
    let rest = statement[found.end()..].trim();

    Some(format!("Why do you want to {}?", invert_point_of_view(rest)))
}

/// `i want <rest>` → `Would you really be happy if you had <rest>?`.
pub fn i_want(statement: &str) -> Option<String> {
    let statement = strip_final_punctuation(statement);

    let found = find_keyword(statement, "i want")?;
    let rest = statement[found.end()..].trim();

    Some(format!("Would you really be happy if you had {rest}?"))
}

/// `you … like <rest>` → `I'm not sure if I like <rest>.`.
pub fn you_like(statement: &str) -> Option<String> {
    let statement = strip_final_punctuation(statement);

    let you_at = find_keyword(statement, "you")?;
    let like_at = find_keyword_from(statement, "like", you_at.end())?;
    let rest = statement[like_at.end()..].trim();

    Some(format!("I'm not sure if I like {rest}."))
}

/// `you <middle> me <ending>` → `What makes you think that I <middle> you
/// <ending>?`.
pub fn you_me(statement: &str) -> Option<String> {
    let statement = strip_final_punctuation(statement);

    let you_at = find_keyword(statement, "you")?;
    let me_at = find_keyword_from(statement, "me", you_at.end())?;
    let middle = statement[you_at.end()..me_at.start].trim();
    let ending = statement[me_at.end()..].trim();

    Some(if ending.is_empty() {
        format!("What makes you think that I {middle} you?")
    } else {
        format!("What makes you think that I {middle} you {ending}?")
    })
}

/// `i <middle> you` → `Why do you <middle> me?`, or the inverted
/// `Why <middle> me?` when a be-verb is in play.
pub fn i_you(statement: &str) -> Option<String> {
    let statement = strip_final_punctuation(statement);

    let i_at = find_keyword(statement, "i")?;
    let you_at = find_keyword_from(statement, "you", i_at.start)?;
    let middle = statement[i_at.end()..you_at.start].trim();

    Some(if contains_be_verb(statement) {
        invert_point_of_view(&format!("Why {middle} me?"))
    } else {
        format!("Why do you {middle} me?")
    })
}
