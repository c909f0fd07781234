//! Keyword-dispatch conversational responder.
//!
//! This crate sits on top of `mockingbird-grammar`: it normalizes a raw user
//! statement (lowercase, trim, expand contractions), selects a response rule
//! by keyword and statement shape, and composes a reply — either a canned
//! line or a grammatical transformation of the user's own words.
//!
//! Multi-turn flows (the remember/recall/forget memory intents and the
//! number-guessing game) are surfaced as [`Intent`] values rather than
//! performed here; a front end owns all line I/O and drives them against
//! [`MemoryStore`] and [`GuessingGame`].

pub mod dispatcher;
pub mod game;
pub mod memory;
pub mod transforms;

pub use dispatcher::{Intent, Reply, Responder};
pub use game::{GuessOutcome, GuessingGame, MAX_GUESSES};
pub use memory::{MemoryError, MemoryStore};
