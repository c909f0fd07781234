//! Line-based console front end.
//!
//! Owns every read and write on stdin/stdout: the responder only ever sees
//! statement text and hands back either a printable reply or an intent for
//! a multi-turn flow (memory or the guessing game) that this binary drives.

use std::io::{self, BufRead, Write};

use mockingbird_responder::{GuessOutcome, GuessingGame, Intent, Reply, Responder, MAX_GUESSES};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut responder = Responder::new();

    println!("{}", responder.greeting());

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let statement = line.trim();
        if statement.eq_ignore_ascii_case("bye") || statement.eq_ignore_ascii_case("goodbye") {
            println!("Goodbye.");
            break;
        }

        match responder.respond(statement) {
            Reply::Text(reply) => println!("{reply}"),
            Reply::Intent(Intent::Remember) => remember(&mut responder, &mut lines)?,
            Reply::Intent(Intent::Recall) => recall(&responder, &mut lines)?,
            Reply::Intent(Intent::Forget) => forget(&mut responder, &mut lines)?,
            Reply::Intent(Intent::PlayGame) => play_game(&mut lines)?,
        }
    }

    Ok(())
}

/// Prompt for one line of input. `None` means stdin closed.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    lines.next().transpose()
}

/// Prompt until the user types a valid integer. Invalid input is reported
/// locally and retried, never propagated.
fn prompt_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = prompt(lines, message)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(number) => return Ok(Some(number)),
            Err(_) => println!("That's not a valid number! Try again."),
        }
    }
}

fn remember(
    responder: &mut Responder,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<()> {
    let Some(item) = prompt(lines, "What's the item I should remember? ")? else {
        return Ok(());
    };
    let Some(info) = prompt(lines, "What's the information I should remember? ")? else {
        return Ok(());
    };

    responder.memory_mut().remember(item.trim(), info.trim());
    println!("You got it. I'll remember that.");
    Ok(())
}

fn recall(
    responder: &Responder,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<()> {
    let Some(item) = prompt(lines, "What's the item I should recall? ")? else {
        return Ok(());
    };
    let item = item.trim();

    match responder.memory().recall(item) {
        Some(info) => println!("\"{item}\" is {info}"),
        None => {
            print_known_items(responder);
            println!("Sorry. Please try again.");
        }
    }
    Ok(())
}

fn forget(
    responder: &mut Responder,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<()> {
    let Some(item) = prompt(lines, "What's the item I should forget? ")? else {
        return Ok(());
    };

    if responder.memory_mut().forget(item.trim()) {
        println!("You got it. I'll forget that.");
    } else {
        print_known_items(responder);
        println!("Sorry. Please try again.");
    }
    Ok(())
}

fn print_known_items(responder: &Responder) {
    println!("I'm not sure what that is. This is what I know:");
    for item in responder.memory().items() {
        println!("\t{item}");
    }
}

fn play_game(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<()> {
    println!("Ok. Let's play this game: I'll pick a number. You have {MAX_GUESSES} chances to guess it.");

    let Some(lower) = prompt_number(lines, "What should the lower bound be? ")? else {
        return Ok(());
    };
    let Some(upper) = prompt_number(lines, "What should the upper bound be? ")? else {
        return Ok(());
    };

    println!("Ok. I chose a number between {lower} and {upper}, inclusive.");
    let mut game = GuessingGame::new(lower, upper);

    while game.in_progress() {
        let attempt = MAX_GUESSES - game.guesses_left() + 1;
        let Some(number) = prompt_number(lines, &format!("Guess {attempt}: "))? else {
            return Ok(());
        };

        match game.guess(number) {
            GuessOutcome::Correct => {
                println!("Congrats! You won! Thanks for playing.");
            }
            GuessOutcome::TooBig { .. } => println!("Too big. Try again."),
            GuessOutcome::TooSmall { .. } => println!("Too small. Try again."),
            GuessOutcome::OutOfGuesses { answer } => {
                println!("Sorry, you're out of guesses. The number was {answer}. Thanks for playing.");
            }
        }
    }

    println!("So, now what?");
    Ok(())
}
