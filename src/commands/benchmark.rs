//! Benchmark command
//!
//! Plays one round per target word and summarises guess counts. Rounds are
//! independent, so they run in parallel, each worker on its own copy of the
//! candidate set.

use crate::core::Word;
use crate::solver::{CandidateSet, solve};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Targets whose round ran out of candidates
    pub failures: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    /// Up to ten targets needing the most guesses, worst first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Choose benchmark targets from the dictionary
///
/// `None` for `count` takes every word. A seed makes the sample reproducible.
/// The sample is returned in dictionary order.
#[must_use]
pub fn sample_targets(
    candidates: &CandidateSet,
    count: Option<usize>,
    seed: Option<u64>,
) -> Vec<Word> {
    let words: Vec<&Word> = candidates.iter().map(|c| c.word()).collect();

    let Some(count) = count.filter(|&n| n < words.len()) else {
        return words.into_iter().cloned().collect();
    };

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut sample: Vec<Word> = words
        .choose_multiple(&mut rng, count)
        .map(|&word| word.clone())
        .collect();
    sample.sort();
    sample
}

/// Run one round per target, starting each with `opener`
pub fn run_benchmark(
    candidates: &CandidateSet,
    targets: &[Word],
    opener: &Word,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<(String, Option<usize>)> = targets
        .par_iter()
        .map_init(
            || candidates.clone(),
            |set, target| {
                let guesses = solve(set, target, opener).ok().map(|steps| steps.len());
                pb.inc(1);
                (target.text().to_string(), guesses)
            },
        )
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();
    let mut solved_counts = Vec::new();

    for (word, guesses) in &outcomes {
        match guesses {
            Some(n) => {
                *distribution.entry(*n).or_insert(0) += 1;
                solved_counts.push((word.clone(), *n));
            }
            None => failures.push(word.clone()),
        }
    }

    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest = solved_counts.clone();
    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(10);

    let total_words = targets.len();
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        failures,
        total_guesses,
        average_guesses,
        min_guesses: solved_counts.iter().map(|(_, n)| *n).min().unwrap_or(0),
        max_guesses: solved_counts.iter().map(|(_, n)| *n).max().unwrap_or(0),
        distribution,
        hardest,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::default_opener;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> CandidateSet {
        CandidateSet::new(words_from_slice(DICTIONARY))
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let set = dictionary();
        let a = sample_targets(&set, Some(20), Some(42));
        let b = sample_targets(&set, Some(20), Some(42));
        assert_eq!(a.len(), 20);
        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sample_without_count_takes_everything() {
        let set = dictionary();
        assert_eq!(sample_targets(&set, None, None).len(), set.len());
        assert_eq!(sample_targets(&set, Some(usize::MAX), None).len(), set.len());
    }

    #[test]
    fn benchmark_runs() {
        let set = dictionary();
        let targets = sample_targets(&set, Some(12), Some(1));
        let result = run_benchmark(&set, &targets, &default_opener(), false);

        assert_eq!(result.total_words, 12);
        assert_eq!(result.solved, 12);
        assert!(result.failures.is_empty());
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let set = dictionary();
        let targets = sample_targets(&set, Some(10), Some(9));
        let result = run_benchmark(&set, &targets, &default_opener(), false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn benchmark_reports_unreachable_targets() {
        let set: CandidateSet = ["amaze", "dread", "dream", "bread"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let targets = vec![Word::new("dream").unwrap(), Word::new("qqqqq").unwrap()];
        let result = run_benchmark(&set, &targets, &default_opener(), false);

        assert_eq!(result.solved, 1);
        assert_eq!(result.failures, ["qqqqq"]);
        assert_eq!(result.distribution.get(&2), Some(&1));
    }

    #[test]
    fn benchmark_empty_target_list() {
        let set = dictionary();
        let result = run_benchmark(&set, &[], &default_opener(), false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!((result.average_guesses - 0.0).abs() < f64::EPSILON);
    }
}
