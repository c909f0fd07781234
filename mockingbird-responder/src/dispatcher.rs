//! The keyword-dispatch rule table: maps a normalized statement to a canned
//! reply, a transformation of the user's own words, or a multi-turn intent.

use mockingbird_grammar::{
    contains_be_verb, contains_modal_auxiliary, contains_subject_pronoun, expand_contractions,
    find_keyword, find_keyword_from, is_question,
};
use rand::seq::SliceRandom;

use crate::memory::MemoryStore;
use crate::transforms;

/// Noncommittal fallback lines, picked at random when nothing else fits.
const RANDOM_RESPONSES: &[&str] = &[
    "Interesting, tell me more.",
    "Hmmm.",
    "Do you really think so?",
    "You don't say.",
    "I didn't know that.",
    "That's cool.",
];

/// A multi-turn flow the front end must drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Ask for an item and its info, then store them.
    Remember,
    /// Ask for an item and read its info back.
    Recall,
    /// Ask for an item and forget it.
    Forget,
    /// Run the number-guessing game.
    PlayGame,
}

/// The responder's answer to one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A complete line to print.
    Text(String),
    /// A flow for the front end to drive before conversation resumes.
    Intent(Intent),
}

/// Rule-based responder. Owns the canned-response table and the memory
/// store; all grammar work is delegated to `mockingbird-grammar`.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    memory: MemoryStore,
}

impl Responder {
    /// Create a responder with an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a responder over a previously saved memory store.
    pub fn with_memory(memory: MemoryStore) -> Self {
        Self { memory }
    }

    /// The memory store behind the remember/recall/forget intents.
    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// Mutable access for the front end's memory flows.
    pub fn memory_mut(&mut self) -> &mut MemoryStore {
        &mut self.memory
    }

    /// The opening line.
    pub fn greeting(&self) -> &'static str {
        "Hello."
    }

    /// Produce a reply to one raw user statement.
    ///
    /// The statement is normalized first (lowercase, trim, expand
    /// contractions); rules are then tried in fixed priority order, ending
    /// in a question-aware fallback.
    pub fn respond(&self, raw: &str) -> Reply {
        let lowered = raw.to_lowercase();
        let statement = expand_contractions(lowered.trim());
        let statement = statement.as_str();

        let has = |word: &str| find_keyword(statement, word).is_some();
        // `second` occurring at or after the first `first`.
        let has_pair = |first: &str, second: &str| {
            find_keyword(statement, first)
                .and_then(|at| find_keyword_from(statement, second, at.start))
                .is_some()
        };

        if statement.is_empty() {
            return Reply::Text("Say something, please.".to_string());
        }

        if has("hi") || has("hello") || has("hey") {
            return Reply::Text("Hello there.".to_string());
        }
        if has("you") && has("how") {
            return Reply::Text("I'm doing well.".to_string());
        }
        if has("your") && has("name") {
            return Reply::Text("I'm Mockingbird.".to_string());
        }

        if has("remember") {
            return Reply::Intent(Intent::Remember);
        }
        if has("recall") {
            return Reply::Intent(Intent::Recall);
        }
        if has("forget") || has("delete") {
            return Reply::Intent(Intent::Forget);
        }

        if has("no") {
            return Reply::Text("Why so negative?".to_string());
        }
        if has("play") && has("game") {
            return Reply::Intent(Intent::PlayGame);
        }

        if has("mother") || has("father") || has("sister") || has("brother") || has("family") {
            return Reply::Text("Tell me more about your family.".to_string());
        }
        if has("dog") || has("cat") {
            return Reply::Text("Tell me more about your pets.".to_string());
        }
        if has("good") {
            return Reply::Text("That's good to hear.".to_string());
        }
        if has("favorite") {
            return Reply::Text(if is_question(statement) {
                "I'm not sure.".to_string()
            } else {
                "That's mine, too.".to_string()
            });
        }
        if has("birthday") {
            return Reply::Text("Happy birthday!".to_string());
        }

        // Replies that transform the user's own words.
        if contains_be_verb(statement) && contains_subject_pronoun(statement) {
            if let Some(reply) = transforms::subject_be_verb(statement)
                .or_else(|| transforms::be_verb_subject(statement))
            {
                return Reply::Text(reply);
            }
        }
        if has("i want") {
            if let Some(reply) =
                transforms::i_want_to(statement).or_else(|| transforms::i_want(statement))
            {
                return Reply::Text(reply);
            }
        }
        if contains_modal_auxiliary(statement) && is_question(statement) {
            if let Some(reply) = transforms::modal_auxiliary(statement) {
                return Reply::Text(reply);
            }
        }
        if has_pair("i", "you") {
            if let Some(reply) = transforms::i_you(statement) {
                return Reply::Text(reply);
            }
        }
        if has_pair("you", "me") {
            if let Some(reply) = transforms::you_me(statement) {
                return Reply::Text(reply);
            }
        }
        if has_pair("you", "like") {
            if let Some(reply) = transforms::you_like(statement) {
                return Reply::Text(reply);
            }
        }

        if is_question(statement) {
            return Reply::Text("I'm not sure.".to_string());
        }

        Reply::Text(
            RANDOM_RESPONSES
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or("Hmmm.")
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(responder: &Responder, statement: &str) -> String {
        match responder.respond(statement) {
            Reply::Text(text) => text,
            Reply::Intent(intent) => panic!("expected text, got intent {intent:?}"),
        }
    }

    #[test]
    fn empty_statements_get_prodded() {
        let responder = Responder::new();
        assert_eq!(text(&responder, ""), "Say something, please.");
        assert_eq!(text(&responder, "   "), "Say something, please.");
    }

    #[test]
    fn greetings_are_returned() {
        let responder = Responder::new();
        assert_eq!(text(&responder, "hello"), "Hello there.");
        assert_eq!(text(&responder, "Hey!"), "Hello there.");
        // "hi" inside "this" is not word-bounded.
        assert_ne!(text(&responder, "this is fine"), "Hello there.");
    }

    #[test]
    fn small_talk_rules_fire_in_order() {
        let responder = Responder::new();
        assert_eq!(text(&responder, "how are you"), "I'm doing well.");
        assert_eq!(text(&responder, "what is your name"), "I'm Mockingbird.");
        assert_eq!(text(&responder, "no way"), "Why so negative?");
        assert_eq!(
            text(&responder, "my sister is here"),
            "Tell me more about your family."
        );
        assert_eq!(text(&responder, "my dog barked"), "Tell me more about your pets.");
        assert_eq!(text(&responder, "today was good"), "That's good to hear.");
        assert_eq!(text(&responder, "it is my birthday"), "Happy birthday!");
    }

    #[test]
    fn favorite_depends_on_question_shape() {
        let responder = Responder::new();
        assert_eq!(text(&responder, "what is your favorite song?"), "I'm not sure.");
        assert_eq!(text(&responder, "blue is my favorite color"), "That's mine, too.");
    }

    #[test]
    fn memory_and_game_keywords_become_intents() {
        let responder = Responder::new();
        assert_eq!(
            responder.respond("remember this"),
            Reply::Intent(Intent::Remember)
        );
        assert_eq!(
            responder.respond("can you recall"),
            Reply::Intent(Intent::Recall)
        );
        assert_eq!(
            responder.respond("please forget it"),
            Reply::Intent(Intent::Forget)
        );
        assert_eq!(
            responder.respond("let's play a game"),
            Reply::Intent(Intent::PlayGame)
        );
    }

    #[test]
    fn contractions_are_expanded_before_dispatch() {
        let responder = Responder::new();
        // "i'm tired" → "i am tired" → subject/be-verb transformation.
        assert_eq!(text(&responder, "I'm tired"), "Why are you tired?");
    }

    #[test]
    fn transformation_rules_reflect_statements() {
        let responder = Responder::new();
        // The pet keyword outranks the "i want" transformation.
        assert_eq!(text(&responder, "I want a dog"), "Tell me more about your pets.");
        assert_eq!(
            text(&responder, "I want a pony"),
            "Would you really be happy if you had a pony?"
        );
        assert_eq!(
            text(&responder, "I want to travel"),
            "Why do you want to travel?"
        );
        assert_eq!(
            text(&responder, "would you like tea?"),
            "I don't know, would I like tea?"
        );
        assert_eq!(text(&responder, "I admire you"), "Why do you admire me?");
        assert_eq!(
            text(&responder, "you never listen to me"),
            "What makes you think that I never listen to you?"
        );
        assert_eq!(
            text(&responder, "you would like jazz"),
            "I'm not sure if I like jazz."
        );
    }

    #[test]
    fn be_verb_leading_questions_are_hedged() {
        let responder = Responder::new();
        insta::assert_snapshot!(
            text(&responder, "am I losing my mind?"),
            @"I don't know if you are losing my mind."
        );
    }

    #[test]
    fn unmatched_questions_admit_uncertainty() {
        let responder = Responder::new();
        assert_eq!(text(&responder, "where was the ball left?"), "I'm not sure.");
    }

    #[test]
    fn unmatched_statements_get_a_canned_response() {
        let responder = Responder::new();
        let reply = text(&responder, "the weather held up");
        assert!(
            RANDOM_RESPONSES.contains(&reply.as_str()),
            "unexpected fallback {reply:?}"
        );
    }
}
