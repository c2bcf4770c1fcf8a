//! Feedback filtering
//!
//! Removes every candidate that contradicts the feedback of one guess.
//! Three rules are read from the same feedback snapshot:
//! - an Absent letter may not sit at the position it was guessed at
//! - an Exact letter must sit at its position
//! - a Misplaced letter must appear somewhere in the word

use super::CandidateSet;
use crate::core::{Feedback, Word};

/// Check whether `word` could still be the target given `feedback`
///
/// # Examples
/// ```
/// use wordle_overlap::core::{Feedback, Word};
/// use wordle_overlap::solver::filter::is_consistent;
///
/// let guess = Word::new("amaze").unwrap();
/// let target = Word::new("dream").unwrap();
/// let feedback = Feedback::calculate(&guess, &target);
///
/// assert!(is_consistent(&target, &feedback));
/// assert!(!is_consistent(&Word::new("bread").unwrap(), &feedback)); // no m
/// ```
#[must_use]
pub fn is_consistent(word: &Word, feedback: &Feedback) -> bool {
    feedback
        .banned_at()
        .all(|(position, letter)| word.char_at(position) != letter)
        && feedback
            .exact_at()
            .all(|(position, letter)| word.char_at(position) == letter)
        && feedback
            .misplaced_letters()
            .all(|letter| word.has_letter(letter))
}

/// Eliminate every viable candidate inconsistent with `feedback`
///
/// The feedback carries the guessed letters, so no separate guess is
/// needed. Returns the number of candidates eliminated by this call.
pub fn apply_feedback(candidates: &mut CandidateSet, feedback: &Feedback) -> usize {
    candidates.eliminate_where(|word| !is_consistent(word, feedback))
}
