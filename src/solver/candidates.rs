//! Candidate arena
//!
//! Every dictionary word lives in one slot for the whole program run.
//! Elimination flips the slot's status instead of removing it, so updates
//! are O(1) and a reset only has to walk the arena once.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Whether a candidate can still be the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Viable,
    /// Ruled out by feedback or already guessed; never scored or guessed again
    Eliminated,
}

/// A dictionary word with its current overlap score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    word: Word,
    score: u32,
    status: Status,
}

impl Candidate {
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self {
            word,
            score: 0,
            status: Status::Viable,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Score from the most recent scoring pass (0 before any pass)
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_viable(&self) -> bool {
        self.status == Status::Viable
    }

    /// Ranking order: higher score first, then alphabetical
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// All candidates of one dictionary, unique by word
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Build the arena from dictionary words, dropping repeated entries
    ///
    /// # Examples
    /// ```
    /// use wordle_overlap::core::Word;
    /// use wordle_overlap::solver::CandidateSet;
    ///
    /// let words = ["dream", "bread", "dream"].map(|w| Word::new(w).unwrap());
    /// let set = CandidateSet::new(words);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.viable_count(), 2);
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let candidates = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .map(Candidate::new)
            .collect();

        Self { candidates }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn viable_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.is_viable()).count()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Arena slots of every viable candidate, in arena order
    pub fn viable_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_viable())
            .map(|(i, _)| i)
    }

    /// Find the arena slot holding `word`
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.candidates.iter().position(|c| c.word() == word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.position(word).is_some()
    }

    /// Mark a slot eliminated; returns true if it was viable before
    pub fn eliminate(&mut self, index: usize) -> bool {
        match self.candidates.get_mut(index) {
            Some(candidate) if candidate.is_viable() => {
                candidate.status = Status::Eliminated;
                true
            }
            _ => false,
        }
    }

    /// Eliminate `word` if the dictionary holds it; returns true if it was viable
    pub fn eliminate_word(&mut self, word: &Word) -> bool {
        self.position(word).is_some_and(|index| self.eliminate(index))
    }

    /// Eliminate every viable candidate for which `rejects` returns true
    ///
    /// Returns how many candidates were eliminated by this call.
    pub fn eliminate_where(&mut self, mut rejects: impl FnMut(&Word) -> bool) -> usize {
        let mut eliminated = 0;
        for candidate in &mut self.candidates {
            if candidate.is_viable() && rejects(&candidate.word) {
                candidate.status = Status::Eliminated;
                eliminated += 1;
            }
        }
        eliminated
    }

    pub(crate) fn set_score(&mut self, index: usize, score: u32) {
        if let Some(candidate) = self.candidates.get_mut(index) {
            candidate.score = score;
        }
    }

    /// Viable slots ordered best first: descending score, then ascending word
    #[must_use]
    pub fn ranked(&self) -> Vec<usize> {
        let mut order: Vec<usize> = self.viable_indices().collect();
        order.sort_by(|&a, &b| self.candidates[a].rank_cmp(&self.candidates[b]));
        order
    }

    /// The top-ranked viable slot, if any candidate is left
    #[must_use]
    pub fn best(&self) -> Option<usize> {
        self.viable_indices()
            .min_by(|&a, &b| self.candidates[a].rank_cmp(&self.candidates[b]))
    }

    /// Make every candidate viable again with a zero score
    pub fn reset(&mut self) {
        for candidate in &mut self.candidates {
            candidate.score = 0;
            candidate.status = Status::Viable;
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_drops_duplicates() {
        let set = set_of(&["dream", "bread", "DREAM", "dread"]);
        assert_eq!(set.len(), 3);
        assert!(set.iter().all(Candidate::is_viable));
        assert!(set.iter().all(|c| c.score() == 0));
    }

    #[test]
    fn eliminate_is_one_way() {
        let mut set = set_of(&["dream", "bread"]);
        assert!(set.eliminate(0));
        assert!(!set.eliminate(0));
        assert_eq!(set.get(0).unwrap().status(), Status::Eliminated);
        assert_eq!(set.viable_count(), 1);
        assert!(!set.eliminate(7));
    }

    #[test]
    fn eliminate_word_ignores_unknown_words() {
        let mut set = set_of(&["dream", "bread"]);
        assert!(!set.eliminate_word(&word("amaze")));
        assert!(set.eliminate_word(&word("bread")));
        assert_eq!(set.viable_count(), 1);
    }

    #[test]
    fn eliminate_where_counts_only_newly_eliminated() {
        let mut set = set_of(&["dream", "dread", "bread"]);
        set.eliminate_word(&word("dread"));
        let removed = set.eliminate_where(|w| w.char_at(0) == b'd');
        assert_eq!(removed, 1);
        assert_eq!(set.viable_count(), 1);
    }

    #[test]
    fn ranking_breaks_ties_alphabetically() {
        let mut set = set_of(&["dream", "bread", "dread", "amaze"]);
        set.set_score(0, 10);
        set.set_score(1, 12);
        set.set_score(2, 10);
        set.set_score(3, 10);

        let ranked: Vec<&str> = set
            .ranked()
            .into_iter()
            .map(|i| set.get(i).unwrap().word().text())
            .collect();
        assert_eq!(ranked, ["bread", "amaze", "dread", "dream"]);
        assert_eq!(set.best(), Some(1));
    }

    #[test]
    fn ranking_skips_eliminated() {
        let mut set = set_of(&["dream", "bread"]);
        set.set_score(1, 99);
        set.eliminate(1);
        assert_eq!(set.ranked(), [0]);
        assert_eq!(set.best(), Some(0));

        set.eliminate(0);
        assert!(set.ranked().is_empty());
        assert_eq!(set.best(), None);
    }

    #[test]
    fn reset_restores_everything() {
        let mut set = set_of(&["dream", "bread"]);
        set.set_score(0, 5);
        set.eliminate(1);
        set.reset();
        assert_eq!(set.viable_count(), 2);
        assert!(set.iter().all(|c| c.score() == 0));
    }
}
