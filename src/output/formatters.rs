//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::Colorize;

/// Letters separated by single spaces: `dream` -> `d r e a m`
#[must_use]
pub fn spaced(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Guess with each letter coloured by its mark (green exact, yellow misplaced)
#[must_use]
pub fn colored_guess(feedback: &Feedback) -> String {
    feedback
        .display_word()
        .chars()
        .zip(feedback.marks())
        .map(|(ch, mark)| {
            let letter = ch.to_string();
            match mark {
                Mark::Exact => letter.green().bold().to_string(),
                Mark::Misplaced => letter.yellow().to_string(),
                Mark::Absent | Mark::Unset => letter.normal().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
