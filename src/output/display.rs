//! Console rendering of game state

use super::formatters::{
    KNOWLEDGE_CATEGORIES, create_progress_bar, feedback_summary, feedback_to_emoji,
    letter_result_label,
};
use crate::core::{AlphabetKnowledge, Feedback, LetterResult, WORD_LENGTH, Word};
use crate::game::{Attempt, GameState, Statistics};
use colored::{ColoredString, Colorize};

/// One letter as a coloured tile
#[must_use]
pub fn render_tile(letter: char, result: LetterResult) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase()).black().bold();
    match result {
        LetterResult::ExactMatch => tile.on_green(),
        LetterResult::PresentWrongPosition => tile.on_yellow(),
        LetterResult::Absent => tile.on_bright_black(),
    }
}

/// One attempt as a row of tiles
#[must_use]
pub fn render_attempt(attempt: &Attempt) -> String {
    render_row(attempt.guess(), attempt.feedback())
}

fn render_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.results())
        .map(|(&letter, &result)| render_tile(char::from(letter), result).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the six-row progress grid; unplayed rows are underscores
pub fn print_progress(state: &GameState) {
    for slot in state.slots() {
        match slot {
            Some(attempt) => println!("  {}", render_attempt(attempt)),
            None => println!("  {}", vec![" _ "; WORD_LENGTH].join(" ").bright_black()),
        }
    }
    println!();
}

/// Print the alphabet grouped by what is known about each letter
pub fn print_knowledge(knowledge: &AlphabetKnowledge) {
    for category in KNOWLEDGE_CATEGORIES {
        let letters = knowledge.letters_with(category);
        if letters.is_empty() {
            continue;
        }

        let listed = letters
            .iter()
            .map(|&letter| match category {
                Some(result) => render_tile(letter, result).to_string(),
                None => letter.to_ascii_uppercase().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {:<10} {listed}", letter_result_label(category));
    }
    println!();
}

/// Print a one-off scoring of a guess against a word
pub fn print_score(guess: &Word, answer: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Scoring {} against {}",
        guess.text().to_uppercase().bright_white().bold(),
        answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}   {}", render_row(guess, feedback), feedback_to_emoji(feedback));

    for (i, (&letter, &result)) in guess.letters().iter().zip(feedback.results()).enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            char::from(letter).to_ascii_uppercase(),
            letter_result_label(Some(result))
        );
    }
    println!("\n  {}", feedback_summary(feedback).dimmed());

    if feedback.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
    println!();
}

/// Print per-process statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {}: {} {count:3}", i + 1, bar.green());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringPolicy;

    #[test]
    fn attempt_row_has_one_tile_per_letter() {
        colored::control::set_override(false);

        let guess = Word::new("react").unwrap();
        let answer = Word::new("crate").unwrap();
        let feedback = Feedback::calculate(&guess, &answer, ScoringPolicy::PerLetter);

        assert_eq!(render_row(&guess, &feedback), " R   E   A   C   T ");
    }

    #[test]
    fn tile_uppercases_letter() {
        colored::control::set_override(false);
        assert_eq!(render_tile('q', LetterResult::Absent).to_string(), " Q ");
    }
}
