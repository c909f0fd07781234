//! The number-guessing mini-game.
//!
//! The game itself is pure state: it hands back an outcome per guess and
//! leaves prompting, input parsing, and validation to the front end.

use rand::Rng;

/// How many guesses a game allows.
pub const MAX_GUESSES: u32 = 5;

/// Result of submitting one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the secret number; the game is over.
    Correct,
    /// Too big. The count of remaining guesses follows.
    TooBig { remaining: u32 },
    /// Too small. The count of remaining guesses follows.
    TooSmall { remaining: u32 },
    /// That wrong guess was the last one; the secret is revealed.
    OutOfGuesses { answer: i64 },
}

/// A five-guess "guess my number" game over an inclusive range.
#[derive(Debug, Clone)]
pub struct GuessingGame {
    answer: i64,
    guesses_left: u32,
}

impl GuessingGame {
    /// Start a game with a secret picked uniformly from
    /// `lower..=upper`. Bounds are swapped if given in reverse.
    pub fn new(lower: i64, upper: i64) -> Self {
        let (lower, upper) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        Self::with_answer(rand::thread_rng().gen_range(lower..=upper))
    }

    /// Start a game with a known secret.
    pub fn with_answer(answer: i64) -> Self {
        Self {
            answer,
            guesses_left: MAX_GUESSES,
        }
    }

    /// Whether any guesses remain.
    pub fn in_progress(&self) -> bool {
        self.guesses_left > 0
    }

    /// Guesses remaining.
    pub fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    /// Submit a guess.
    pub fn guess(&mut self, number: i64) -> GuessOutcome {
        if number == self.answer {
            self.guesses_left = 0;
            return GuessOutcome::Correct;
        }

        self.guesses_left = self.guesses_left.saturating_sub(1);
        if self.guesses_left == 0 {
            return GuessOutcome::OutOfGuesses {
                answer: self.answer,
            };
        }

        if number > self.answer {
            GuessOutcome::TooBig {
                remaining: self.guesses_left,
            }
        } else {
            GuessOutcome::TooSmall {
                remaining: self.guesses_left,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_guess_ends_the_game() {
        let mut game = GuessingGame::with_answer(7);
        assert_eq!(game.guess(7), GuessOutcome::Correct);
        assert!(!game.in_progress());
    }

    #[test]
    fn wrong_guesses_report_direction_and_countdown() {
        let mut game = GuessingGame::with_answer(50);
        assert_eq!(game.guess(80), GuessOutcome::TooBig { remaining: 4 });
        assert_eq!(game.guess(10), GuessOutcome::TooSmall { remaining: 3 });
        assert_eq!(game.guess(60), GuessOutcome::TooBig { remaining: 2 });
        assert_eq!(game.guess(40), GuessOutcome::TooSmall { remaining: 1 });
        assert_eq!(game.guess(55), GuessOutcome::OutOfGuesses { answer: 50 });
        assert!(!game.in_progress());
    }

    #[test]
    fn winning_on_the_last_guess_still_counts() {
        let mut game = GuessingGame::with_answer(3);
        for wrong in [10, 11, 12, 13] {
            game.guess(wrong);
        }
        assert!(game.in_progress());
        assert_eq!(game.guess(3), GuessOutcome::Correct);
    }

    #[test]
    fn new_respects_the_inclusive_bounds() {
        for _ in 0..50 {
            let game = GuessingGame::new(1, 3);
            assert!((1..=3).contains(&game.answer));
        }
        // A reversed range is tolerated rather than panicking.
        let game = GuessingGame::new(5, 5);
        assert_eq!(game.answer, 5);
        let game = GuessingGame::new(9, 2);
        assert!((2..=9).contains(&game.answer));
    }
}
