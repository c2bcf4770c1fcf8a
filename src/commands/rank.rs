//! Ranking command
//!
//! Scores the whole dictionary and reports the best-ranked words.

use crate::core::Word;
use crate::solver::{CandidateSet, scorer};

/// One ranked word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    /// 1-based rank
    pub rank: usize,
    pub word: String,
    pub score: u32,
}

/// Result of ranking a dictionary
pub struct RankResult {
    pub total_candidates: usize,
    pub top: Vec<RankEntry>,
    /// Rank of a specific word, when one was asked for and is in the dictionary
    pub focus: Option<RankEntry>,
}

/// Score every candidate and return the `top` best, plus `focus` if given
///
/// Scores are cleared again before returning.
pub fn rank_words(candidates: &mut CandidateSet, top: usize, focus: Option<&Word>) -> RankResult {
    scorer::score_all(candidates);

    let entries: Vec<RankEntry> = candidates
        .ranked()
        .into_iter()
        .enumerate()
        .filter_map(|(position, index)| {
            candidates.get(index).map(|candidate| RankEntry {
                rank: position + 1,
                word: candidate.word().text().to_string(),
                score: candidate.score(),
            })
        })
        .collect();

    let focus = focus.and_then(|word| entries.iter().find(|e| e.word == word.text()).cloned());
    let total_candidates = entries.len();
    let top = entries.into_iter().take(top).collect();

    candidates.reset();

    RankResult {
        total_candidates,
        top,
        focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_set() -> CandidateSet {
        ["amaze", "dread", "dream", "bread"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    #[test]
    fn rank_small_dictionary() {
        let mut set = small_set();
        let result = rank_words(&mut set, 3, None);

        assert_eq!(result.total_candidates, 4);
        let words: Vec<(&str, u32)> = result
            .top
            .iter()
            .map(|e| (e.word.as_str(), e.score))
            .collect();
        assert_eq!(words, [("dread", 41), ("dream", 40), ("bread", 39)]);
        assert!(result.focus.is_none());
    }

    #[test]
    fn rank_reports_focus_word() {
        let mut set = small_set();
        let amaze = Word::new("amaze").unwrap();
        let result = rank_words(&mut set, 1, Some(&amaze));

        let focus = result.focus.unwrap();
        assert_eq!(focus.rank, 4);
        assert_eq!(focus.score, 22);
    }

    #[test]
    fn rank_unknown_focus_is_none() {
        let mut set = small_set();
        let crane = Word::new("crane").unwrap();
        assert!(rank_words(&mut set, 1, Some(&crane)).focus.is_none());
    }

    #[test]
    fn rank_leaves_scores_cleared() {
        let mut set = small_set();
        rank_words(&mut set, 10, None);
        assert!(set.iter().all(|c| c.score() == 0 && c.is_viable()));
    }
}
