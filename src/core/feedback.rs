//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified against the target:
//! - `Exact`: right letter, right position
//! - `Misplaced`: letter occurs elsewhere in the target
//! - `Absent`: letter cannot be used at this position
//!
//! Classification runs in three passes (exact, misplaced, absent) and
//! consumes target letters as it goes, so a letter is never marked more
//! often than it occurs in the target.

use super::{WORD_LENGTH, Word};

/// Classification of one letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    /// Not classified yet; never present in a finished feedback
    #[default]
    Unset,
    Exact,
    Misplaced,
    Absent,
}

impl Mark {
    /// Symbol shown under the guess: `*` for misplaced letters, blank otherwise
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Misplaced => '*',
            _ => ' ',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent | Self::Unset => '⬜',
        }
    }
}

/// Feedback earned by one guess against one target
///
/// Keeps the guessed letters next to their marks so the filter can read
/// every constraint from this single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    letters: [u8; WORD_LENGTH],
    marks: [Mark; WORD_LENGTH],
}

impl Feedback {
    /// Classify every position of `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_overlap::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("sheep").unwrap();
    /// let target = Word::new("epees").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.display_word(), "shEEp");
    /// assert_eq!(feedback.mark_at(0), Mark::Misplaced);
    /// assert_eq!(feedback.mark_at(1), Mark::Absent);
    /// assert_eq!(feedback.mark_at(4), Mark::Misplaced);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let letters = *guess.chars();
        let mut marks = [Mark::Unset; WORD_LENGTH];
        let mut available = target.letter_counts();

        for (i, mark) in marks.iter_mut().enumerate() {
            if letters[i] == target.char_at(i) {
                *mark = Mark::Exact;
                if let Some(count) = available.get_mut(&letters[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark != Mark::Unset {
                continue;
            }
            if let Some(count) = available.get_mut(&letters[i])
                && *count > 0
            {
                *mark = Mark::Misplaced;
                *count -= 1;
            }
        }

        for mark in &mut marks {
            if *mark == Mark::Unset {
                *mark = Mark::Absent;
            }
        }

        Self { letters, marks }
    }

    /// Guessed letters, lowercase
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.marks
    }

    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.marks[position]
    }

    /// True when every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Letters that may not appear at their guessed position
    ///
    /// Only Absent positions contribute. The ban is positional: the same
    /// letter may still be required elsewhere by an Exact or Misplaced mark.
    pub fn banned_at(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.positions_with(Mark::Absent)
    }

    /// Letters pinned to their position by an Exact mark
    pub fn exact_at(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.positions_with(Mark::Exact)
    }

    /// Letters the target contains somewhere other than where they were guessed
    pub fn misplaced_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.positions_with(Mark::Misplaced).map(|(_, letter)| letter)
    }

    fn positions_with(&self, mark: Mark) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.letters
            .iter()
            .zip(&self.marks)
            .enumerate()
            .filter(move |(_, (_, m))| **m == mark)
            .map(|(i, (&letter, _))| (i, letter))
    }

    /// The guess with exact letters upper-cased and all others lowercase
    #[must_use]
    pub fn display_word(&self) -> String {
        self.letters
            .iter()
            .zip(&self.marks)
            .map(|(&letter, &mark)| {
                if mark == Mark::Exact {
                    char::from(letter.to_ascii_uppercase())
                } else {
                    char::from(letter)
                }
            })
            .collect()
    }

    /// One symbol per position, `*` under misplaced letters
    #[must_use]
    pub fn symbols(&self) -> String {
        self.marks.iter().map(|m| m.symbol()).collect()
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Exact, Misplaced};

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    /// For every letter, exact + misplaced marks never exceed its count in the target
    fn assert_no_overcount(guess: &str, target: &str) {
        let fb = feedback(guess, target);
        let counts = Word::new(target).unwrap().letter_counts();
        for letter in b'a'..=b'z' {
            let marked = fb
                .letters()
                .iter()
                .zip(fb.marks())
                .filter(|(l, m)| **l == letter && matches!(m, Exact | Misplaced))
                .count();
            let available = usize::from(counts.get(&letter).copied().unwrap_or(0));
            assert!(
                marked <= available,
                "{guess} vs {target}: letter {} marked {marked} times, target has {available}",
                char::from(letter)
            );
        }
    }

    #[test]
    fn feedback_all_absent() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.marks(), &[Absent; 5]);
        assert_eq!(fb.display_word(), "abcde");
        assert_eq!(fb.symbols(), "     ");
    }

    #[test]
    fn feedback_solved() {
        let fb = feedback("dream", "dream");
        assert!(fb.is_solved());
        assert_eq!(fb.display_word(), "DREAM");
        assert_eq!(fb.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_sheep_against_epees() {
        let fb = feedback("sheep", "epees");
        assert_eq!(fb.marks(), &[Misplaced, Absent, Exact, Exact, Misplaced]);
        assert_eq!(fb.symbols(), "*   *");
        assert_no_overcount("sheep", "epees");
    }

    #[test]
    fn feedback_amaze_against_dream() {
        // Second 'a' finds no unconsumed 'a' left in the target
        let fb = feedback("amaze", "dream");
        assert_eq!(fb.marks(), &[Misplaced, Misplaced, Absent, Absent, Misplaced]);
        assert_eq!(fb.display_word(), "amaze");
        assert_eq!(fb.symbols(), "**  *");
    }

    #[test]
    fn feedback_exact_claims_letter_before_misplaced() {
        // The trailing 'e' is exact, so the earlier 'e' has nothing left to claim
        let fb = feedback("eerie", "crane");
        assert_eq!(fb.marks(), &[Absent, Absent, Misplaced, Absent, Exact]);
        assert_eq!(fb.display_word(), "eeriE");
    }

    #[test]
    fn feedback_never_overcounts_duplicates() {
        for (guess, target) in [
            ("sheep", "epees"),
            ("eerie", "crane"),
            ("llama", "label"),
            ("geese", "sheep"),
            ("error", "robot"),
            ("mamma", "amaze"),
        ] {
            assert_no_overcount(guess, target);
        }
    }

    #[test]
    fn feedback_constraint_views() {
        let fb = feedback("amaze", "dream");
        let banned: Vec<(usize, u8)> = fb.banned_at().collect();
        assert_eq!(banned, [(2, b'a'), (3, b'z')]);
        assert_eq!(fb.exact_at().count(), 0);
        let misplaced: Vec<u8> = fb.misplaced_letters().collect();
        assert_eq!(misplaced, b"ame");
        assert_eq!(fb.count(Misplaced), 3);
        assert_eq!(fb.count(Absent), 2);
    }
}
