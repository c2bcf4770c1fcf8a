//! Word solving command
//!
//! Plays one round against a given target and returns the guess path.

use crate::core::Word;
use crate::solver::{CandidateSet, GuessStep, SolveError, solve};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub opener: Word,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, opener: Word) -> Self {
        Self { target, opener }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub dictionary_size: usize,
}

impl SolveResult {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Solve a specific word with the given candidate set
///
/// The set is left fully viable afterwards, whatever the outcome.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The candidates run out before the target is guessed
pub fn solve_word(
    config: &SolveConfig,
    candidates: &mut CandidateSet,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(&config.target)?;
    let steps = solve(candidates, &target, &config.opener)?;

    Ok(SolveResult {
        target,
        steps,
        dictionary_size: candidates.len(),
    })
}
