//! One round of play against a single target
//!
//! A round owns the candidate set while it runs and moves through
//! `AwaitingGuess → Scored → Guessed → Filtered` once per guess until a guess
//! matches the target (`Found`). The first guess is always the opener and
//! skips scoring. Handing the set back with [`Round::into_candidates`] resets
//! it, so the next round starts from the full dictionary.

use super::{CandidateSet, filter, scorer};
use crate::core::{Feedback, Word, WordError};
use std::fmt;

/// First guess of every round unless the driver picks another
pub const DEFAULT_OPENER: &str = "amaze";

/// [`DEFAULT_OPENER`] as a word
///
/// # Panics
/// Will not panic: the constant is a valid five-letter word.
#[must_use]
pub fn default_opener() -> Word {
    Word::new(DEFAULT_OPENER).expect("default opener is a valid word")
}

/// Where a round is in its guess cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    Scored,
    Guessed,
    Filtered,
    /// Terminal: the last guess equalled the target
    Found,
}

/// Errors that end a round without finding the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The supplied target is not a five-letter word
    InvalidTarget(WordError),
    /// There is no word to draw a random target from
    EmptyDictionary,
    /// Every candidate was eliminated before the target was guessed
    ///
    /// Happens when the target is not in the dictionary.
    Exhausted { guesses: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(err) => write!(f, "invalid target word: {err}"),
            Self::EmptyDictionary => write!(f, "the dictionary is empty"),
            Self::Exhausted { guesses } => write!(
                f,
                "no candidates left after {guesses} guesses; is the target in the dictionary?"
            ),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTarget(err) => Some(err),
            Self::EmptyDictionary | Self::Exhausted { .. } => None,
        }
    }
}

impl From<WordError> for SolveError {
    fn from(err: WordError) -> Self {
        Self::InvalidTarget(err)
    }
}

/// Everything the presentation layer needs about one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    /// 1-based guess number
    pub number: usize,
    pub guess: Word,
    pub feedback: Feedback,
    /// Viable candidates before this guess was chosen
    pub viable_before: usize,
    /// Viable candidates after the guess was eliminated and feedback applied
    pub viable_after: usize,
}

impl GuessStep {
    /// Guess text with exact letters upper-cased
    #[must_use]
    pub fn display(&self) -> String {
        self.feedback.display_word()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}

/// A round in progress
pub struct Round {
    candidates: CandidateSet,
    target: Word,
    opener: Word,
    guesses: usize,
    phase: Phase,
}

impl Round {
    /// Start a round; `candidates` should be fully viable
    #[must_use]
    pub fn new(candidates: CandidateSet, target: Word, opener: Word) -> Self {
        Self {
            candidates,
            target,
            opener,
            guesses: 0,
            phase: Phase::AwaitingGuess,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn opener(&self) -> &Word {
        &self.opener
    }

    /// Number of guesses made so far
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.phase == Phase::Found
    }

    /// Candidate state as of the last completed step
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Make one guess
    ///
    /// Returns `Ok(None)` once the target has been found.
    ///
    /// # Errors
    /// Returns [`SolveError::Exhausted`] if no viable candidate is left to guess.
    pub fn step(&mut self) -> Result<Option<GuessStep>, SolveError> {
        if self.phase == Phase::Found {
            return Ok(None);
        }
        self.phase = Phase::AwaitingGuess;

        let viable_before = self.candidates.viable_count();
        let guess = if self.guesses == 0 {
            self.opener.clone()
        } else {
            scorer::score_all(&mut self.candidates);
            self.phase = Phase::Scored;
            self.candidates
                .best()
                .and_then(|index| self.candidates.get(index))
                .map(|candidate| candidate.word().clone())
                .ok_or(SolveError::Exhausted {
                    guesses: self.guesses,
                })?
        };

        self.candidates.eliminate_word(&guess);
        self.guesses += 1;
        self.phase = Phase::Guessed;

        let feedback = Feedback::calculate(&guess, &self.target);
        if guess == self.target {
            self.phase = Phase::Found;
        } else {
            filter::apply_feedback(&mut self.candidates, &feedback);
            self.phase = Phase::Filtered;
        }

        Ok(Some(GuessStep {
            number: self.guesses,
            guess,
            feedback,
            viable_before,
            viable_after: self.candidates.viable_count(),
        }))
    }

    /// Guess until the target is found
    ///
    /// Each scored guess eliminates at least itself, so the loop ends within
    /// one guess per dictionary word plus the opener.
    ///
    /// # Errors
    /// Returns [`SolveError::Exhausted`] if the candidates run out first.
    pub fn run(&mut self) -> Result<Vec<GuessStep>, SolveError> {
        let mut steps = Vec::new();
        while let Some(step) = self.step()? {
            steps.push(step);
        }
        Ok(steps)
    }

    /// End the round and hand back the candidate set, fully viable again
    #[must_use]
    pub fn into_candidates(self) -> CandidateSet {
        let mut candidates = self.candidates;
        candidates.reset();
        candidates
    }
}

/// Play one full round on `candidates` and leave them reset afterwards
///
/// # Errors
/// Returns [`SolveError::Exhausted`] if the target cannot be reached.
///
/// # Examples
/// ```
/// use wordle_overlap::core::Word;
/// use wordle_overlap::solver::{CandidateSet, solve};
///
/// let mut set: CandidateSet = ["amaze", "dread", "dream", "bread"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let target = Word::new("dream").unwrap();
/// let opener = Word::new("amaze").unwrap();
///
/// let steps = solve(&mut set, &target, &opener).unwrap();
/// let guesses: Vec<&str> = steps.iter().map(|s| s.guess.text()).collect();
/// assert_eq!(guesses, ["amaze", "dream"]);
/// assert_eq!(set.viable_count(), 4);
/// ```
pub fn solve(
    candidates: &mut CandidateSet,
    target: &Word,
    opener: &Word,
) -> Result<Vec<GuessStep>, SolveError> {
    let mut round = Round::new(std::mem::take(candidates), target.clone(), opener.clone());
    let result = round.run();
    *candidates = round.into_candidates();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn set_of(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| word(w)).collect()
    }

    fn small_set() -> CandidateSet {
        set_of(&["amaze", "dread", "dream", "bread"])
    }

    fn dictionary() -> CandidateSet {
        crate::wordlists::DICTIONARY.iter().map(|w| word(w)).collect()
    }

    #[test]
    fn end_to_end_small_dictionary() {
        let mut round = Round::new(small_set(), word("dream"), word("amaze"));

        let first = round.step().unwrap().unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(first.guess.text(), "amaze");
        assert_eq!(first.display(), "amaze");
        assert_eq!(first.feedback.symbols(), "**  *");
        assert_eq!(first.viable_before, 4);
        assert_eq!(first.viable_after, 1);
        assert_eq!(round.phase(), Phase::Filtered);

        let second = round.step().unwrap().unwrap();
        assert_eq!(second.guess.text(), "dream");
        assert_eq!(second.display(), "DREAM");
        assert!(second.is_solved());
        assert_eq!(round.phase(), Phase::Found);

        assert_eq!(round.step().unwrap(), None);
        assert_eq!(round.guesses(), 2);
    }

    #[test]
    fn opener_is_always_first_guess() {
        for (target, opener) in [("bread", "amaze"), ("dread", "crane"), ("amaze", "zzzzz")] {
            let mut round = Round::new(small_set(), word(target), word(opener));
            let first = round.step().unwrap().unwrap();
            assert_eq!(first.guess.text(), opener);
        }
    }

    #[test]
    fn opener_equal_to_target_finds_immediately() {
        let mut set = small_set();
        let steps = solve(&mut set, &word("amaze"), &word("amaze")).unwrap();
        assert_eq!(steps.len(), 1);
        assert!(steps[0].is_solved());
    }

    #[test]
    fn opener_outside_dictionary_still_works() {
        let mut set = small_set();
        let steps = solve(&mut set, &word("bread"), &word("crane")).unwrap();
        assert_eq!(steps[0].guess.text(), "crane");
        assert_eq!(steps.last().unwrap().guess.text(), "bread");
    }

    #[test]
    fn guessed_words_are_never_repeated() {
        let mut set = dictionary();
        let steps = solve(&mut set, &word("fizzy"), &word("amaze"));
        // fizzy is not in the dictionary, so this ends in exhaustion
        assert!(matches!(steps, Err(SolveError::Exhausted { .. })));

        let steps = solve(&mut set, &word("jazzy"), &word("amaze")).unwrap();
        let mut seen: Vec<&str> = steps.iter().map(|s| s.guess.text()).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn viable_count_never_increases() {
        let mut set = dictionary();
        let steps = solve(&mut set, &word("shine"), &word("amaze")).unwrap();
        for pair in steps.windows(2) {
            assert!(pair[1].viable_before <= pair[0].viable_after);
        }
        for step in &steps {
            assert!(step.viable_after <= step.viable_before);
        }
    }

    #[test]
    fn terminates_within_word_count() {
        let mut set = dictionary();
        let word_count = set.len();
        for target in ["dream", "epees", "fuzzy", "aback", "zonal", "mamma"] {
            let steps = solve(&mut set, &word(target), &word(DEFAULT_OPENER)).unwrap();
            assert!(steps.len() <= word_count);
            assert_eq!(steps.last().unwrap().guess.text(), target);
        }
    }

    #[test]
    fn target_outside_dictionary_is_reported() {
        let mut set = small_set();
        let err = solve(&mut set, &word("qqqqq"), &word("amaze")).unwrap_err();
        assert!(matches!(err, SolveError::Exhausted { .. }));
        assert_eq!(set.viable_count(), 4);
    }

    #[test]
    fn reset_after_found_replays_identically() {
        let mut set = dictionary();
        let first = solve(&mut set, &word("dream"), &word(DEFAULT_OPENER)).unwrap();
        assert_eq!(set.viable_count(), set.len());
        assert!(set.iter().all(|c| c.score() == 0));

        let second = solve(&mut set, &word("dream"), &word(DEFAULT_OPENER)).unwrap();
        assert_eq!(first, second);
        assert_eq!(second[0].guess.text(), DEFAULT_OPENER);
    }

    #[test]
    fn into_candidates_resets_mid_round() {
        let mut round = Round::new(small_set(), word("dream"), word("amaze"));
        round.step().unwrap();
        assert_eq!(round.candidates().viable_count(), 1);

        let set = round.into_candidates();
        assert_eq!(set.viable_count(), 4);
    }

    #[test]
    fn default_opener_matches_constant() {
        assert_eq!(default_opener().text(), DEFAULT_OPENER);
    }

    #[test]
    fn solve_error_display() {
        let err = SolveError::from(WordError::InvalidLength(3));
        assert_eq!(
            err.to_string(),
            "invalid target word: word must be exactly 5 letters, got 3"
        );
        let err = SolveError::Exhausted { guesses: 4 };
        assert!(err.to_string().starts_with("no candidates left after 4 guesses"));
    }
}
