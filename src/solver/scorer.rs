//! Letter-overlap scoring
//!
//! A candidate's score is the sum of its pairwise overlap with every viable
//! candidate (itself included). Words that share many letters and positions
//! with the rest of the viable set rank high, which makes them good probes:
//! whatever feedback they earn speaks to many other candidates at once.
//!
//! # Greedy matching
//! The displaced-letter pass is a greedy first-match scan, left to right over
//! `a`, and the metric is computed with `a` and `b` in fixed roles. It is not
//! rewritten as a multiset intersection: rankings are defined by this exact
//! scan, including its handling of repeated letters.

use super::CandidateSet;
use crate::core::{WORD_LENGTH, Word};

/// Points for a letter in the same position in both words
pub const EXACT_POINTS: u32 = 3;

/// Points for a letter of `a` found at a different, unclaimed position of `b`
pub const DISPLACED_POINTS: u32 = 1;

/// Overlap between `a` and `b`
///
/// # Algorithm
/// 1. Every position where the letters agree earns [`EXACT_POINTS`] and is
///    claimed in both words.
/// 2. Every unclaimed position of `a`, left to right, takes the first
///    position of `b` holding the same letter that is not yet claimed, earns
///    [`DISPLACED_POINTS`] and claims it.
///
/// # Examples
/// ```
/// use wordle_overlap::core::Word;
/// use wordle_overlap::solver::scorer::overlap;
///
/// let dream = Word::new("dream").unwrap();
/// let dread = Word::new("dread").unwrap();
/// // d, r, e, a exact (4 × 3) and the second d of DREAD matches nothing left
/// assert_eq!(overlap(&dream, &dread), 12);
/// assert_eq!(overlap(&dream, &dream), 15);
/// ```
#[must_use]
// Allow: positions index both words and both claim arrays
#[allow(clippy::needless_range_loop)]
pub fn overlap(a: &Word, b: &Word) -> u32 {
    let a = a.chars();
    let b = b.chars();
    let mut exact = [false; WORD_LENGTH];
    let mut displaced = [false; WORD_LENGTH];
    let mut points = 0;

    for k in 0..WORD_LENGTH {
        if a[k] == b[k] {
            exact[k] = true;
            points += EXACT_POINTS;
        }
    }

    for l in 0..WORD_LENGTH {
        if exact[l] {
            continue;
        }
        if let Some(m) = (0..WORD_LENGTH).find(|&m| a[l] == b[m] && !exact[m] && !displaced[m]) {
            displaced[m] = true;
            points += DISPLACED_POINTS;
        }
    }

    points
}

/// Score every viable candidate against all viable candidates
///
/// Eliminated candidates are neither scored nor counted against, and keep
/// whatever score they had.
pub fn score_all(candidates: &mut CandidateSet) {
    let viable: Vec<usize> = candidates.viable_indices().collect();

    let scores: Vec<(usize, u32)> = viable
        .iter()
        .filter_map(|&i| candidates.get(i).map(|c| (i, c.word())))
        .map(|(i, word)| {
            let total = viable
                .iter()
                .filter_map(|&j| candidates.get(j))
                .map(|other| overlap(word, other.word()))
                .sum();
            (i, total)
        })
        .collect();

    for (index, score) in scores {
        candidates.set_score(index, score);
    }
}
