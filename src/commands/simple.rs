//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Whole-word input is fed through the same
//! session state machine the TUI uses, one key at a time.

use crate::core::{Clue, CluedLetter};
use crate::game::{InputGate, Key, Outcome, Session};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

const PLAYING: InputGate = InputGate {
    started: true,
    overlay: false,
};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut session: Session) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       seven wordles                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let total = session.config().total_rounds;
    let penalty = session.config().penalty_per_guess.as_secs_f64();
    println!("Guess {total} target words as fast as you can.");
    println!("Every wrong guess adds {penalty:.0} seconds to your time.\n");
    println!("Commands: 'giveup' reveals the word (costs a penalty), 'quit' exits\n");

    if let Some(seed) = session.seed() {
        println!("seed {seed}\n");
    }

    get_user_input("Press Enter to start the clock")?;
    session.start(Instant::now());

    loop {
        let word_number = session.rounds_won() + 1;
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Word {word_number}/{total}   {:.2}s",
            session.elapsed_seconds(Instant::now())
        );
        println!("────────────────────────────────────────────────────────────");

        // Play out one round
        while session.round().outcome() == Outcome::Playing {
            let input = get_user_input("Guess")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "giveup" => {
                    if session.can_give_up() {
                        session.give_up();
                        println!("\n{}\n", session.hint().red());
                    } else {
                        println!("Make at least one guess first!\n");
                    }
                    continue;
                }
                _ => {}
            }

            feed_word(&mut session, &input);
            print_rows(&session);
            if !session.hint().is_empty() {
                println!("{}\n", session.hint().magenta());
            }
        }

        if session.is_complete() {
            break;
        }

        get_user_input("Press Enter for the next word")?;
        session.handle_key(Key::Submit, Instant::now(), PLAYING);
    }

    let final_time = session.elapsed_seconds(Instant::now());
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("  All {total} wordles solved in {final_time:.2} seconds!")
            .bright_green()
            .bold()
    );
    println!(
        "  ({:.2}s of that was penalties)",
        session.penalty().as_secs_f64()
    );
    println!("{}\n", "═".repeat(60).bright_cyan());

    Ok(())
}

/// Type a whole word into the session and submit it
fn feed_word(session: &mut Session, word: &str) {
    let now = Instant::now();
    // Clear any leftover pending letters first
    while !session.round().pending().is_empty() {
        session.handle_key(Key::Delete, now, PLAYING);
    }
    for c in word.chars() {
        session.handle_key(Key::Letter(c), now, PLAYING);
    }
    session.handle_key(Key::Submit, now, PLAYING);
}

fn print_rows(session: &Session) {
    println!();
    for row in session.round().rows() {
        println!("  {}", format_row(row));
    }
    println!();
}

fn format_row(row: &[CluedLetter]) -> String {
    row.iter()
        .map(|clued| {
            let letter = format!(" {} ", clued.letter.to_ascii_uppercase());
            match clued.clue {
                Some(Clue::Correct) => letter.black().on_green().to_string(),
                Some(Clue::Elsewhere) => letter.black().on_yellow().to_string(),
                Some(Clue::Absent) => letter.white().on_bright_black().to_string(),
                None => letter,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::core::evaluate;

    #[test]
    fn format_row_keeps_letter_order() {
        let guess = Word::new("slate", 5).unwrap();
        let target = Word::new("crate", 5).unwrap();
        let row = evaluate(&guess, &target);

        let formatted = format_row(&row);
        for letter in ["S", "L", "A", "T", "E"] {
            assert!(formatted.contains(letter), "missing {letter}");
        }
    }
}
