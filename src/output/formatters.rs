//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .results()
        .iter()
        .map(|result| match result {
            LetterResult::Absent => '⬜',
            LetterResult::PresentWrongPosition => '🟨',
            LetterResult::ExactMatch => '🟩',
        })
        .collect()
}

/// One-line tally of the results in a guess, e.g. "1 exact, 4 present, 0 absent"
#[must_use]
pub fn feedback_summary(feedback: &Feedback) -> String {
    format!(
        "{} exact, {} present, {} absent",
        feedback.count(LetterResult::ExactMatch),
        feedback.count(LetterResult::PresentWrongPosition),
        feedback.count(LetterResult::Absent)
    )
}

/// Human label for a keyboard category
#[must_use]
pub const fn letter_result_label(result: Option<LetterResult>) -> &'static str {
    match result {
        None => "Unguessed",
        Some(LetterResult::Absent) => "Absent",
        Some(LetterResult::PresentWrongPosition) => "Present",
        Some(LetterResult::ExactMatch) => "Exact",
    }
}

/// Keyboard categories in display order
pub const KNOWLEDGE_CATEGORIES: [Option<LetterResult>; 4] = [
    None,
    Some(LetterResult::Absent),
    Some(LetterResult::PresentWrongPosition),
    Some(LetterResult::ExactMatch),
];

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
