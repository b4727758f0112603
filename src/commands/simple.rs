//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use super::GameConfig;
use crate::core::{Dictionary, NUMBER_OF_GUESSES};
use crate::game::{GameStatus, Session, Statistics};
use crate::output::{print_knowledge, print_progress, print_statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no game
/// can be started from the dictionary.
pub fn run_simple(dictionary: &Dictionary, config: &GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Console Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word in {NUMBER_OF_GUESSES} tries.");
    println!("After each guess you'll see:\n");
    println!("  - {} letter in the right spot", " A ".black().on_green());
    println!("  - {} letter in the word, wrong spot", " A ".black().on_yellow());
    println!("  - {} letter not in the word\n", " A ".black().on_bright_black());
    println!("Type 'quit' to exit.\n");

    let mut rng = config.rng();
    let mut stats = Statistics::default();

    loop {
        let mut session = Session::new(dictionary, &mut rng)
            .map_err(|e| e.to_string())?
            .with_policy(config.policy);

        while !session.is_terminal() {
            let prompt = format!(
                "Enter a guess ({}/{NUMBER_OF_GUESSES})",
                session.state().next_attempt_number()
            );
            let Some(input) = get_user_input(&prompt)? else {
                return Ok(());
            };

            if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                println!("\n👋 Thanks for playing! The word was {}\n", reveal(&session));
                return Ok(());
            }

            match session.submit_guess(&input) {
                Ok(outcome) => {
                    println!();
                    print_progress(session.state());
                    print_knowledge(&outcome.knowledge);
                }
                Err(err) => println!("❌ {err}\n"),
            }
        }

        stats.record(&session);
        print_result(&session);
        print_statistics(&stats);

        if !ask_play_again()? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        println!("\n🔄 New game started!\n");
    }
}

fn reveal(session: &Session<'_>) -> String {
    session.answer().to_uppercase().bright_yellow().bold().to_string()
}

/// Headline for a finished game; `None` while the game is still running
fn result_headline(session: &Session<'_>) -> Option<&'static str> {
    match session.status() {
        GameStatus::InProgress => None,
        GameStatus::Lost => Some("Out of guesses."),
        GameStatus::Won => Some(match session.attempts().len() {
            1 => "🏆 Hole in one!",
            2 => "⭐ Magnificent!",
            3 => "💫 Splendid!",
            4 => "✨ Great!",
            5 => "👍 Nice work!",
            _ => "😅 Phew!",
        }),
    }
}

fn print_result(session: &Session<'_>) {
    let Some(headline) = result_headline(session) else {
        return;
    };

    println!("{}", "═".repeat(70).bright_cyan());
    if session.status() == GameStatus::Won {
        let turns = session.attempts().len();
        println!("  {}", headline.bright_green().bold());
        println!(
            "  Solved in {} {}",
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("  {}", headline.red().bold());
    }
    println!("  Good game! The word was {}", reveal(session));
    println!("{}", "═".repeat(70).bright_cyan());
}

/// Keep asking until the answer is yes or no; end of input counts as no
fn ask_play_again() -> Result<bool, String> {
    loop {
        let Some(answer) = get_user_input("Would you like to play again? (yes/no)")? else {
            return Ok(false);
        };
        match parse_yes_no(&answer) {
            Some(choice) => return Ok(choice),
            None => println!("\nYou didn't answer with yes or no. Answer again.\n"),
        }
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
