//! Simple interactive CLI mode
//!
//! Runs a fixed number of rounds. Each round asks for a secret word (or `r`
//! for a random one) and then lets the guesser find it, printing every guess
//! as it goes.

use crate::core::Word;
use crate::output::display::{print_exhausted, print_round_header, print_step};
use crate::solver::{CandidateSet, Round, SolveError};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{BufRead, Write};

/// Turn user input into a target word
///
/// Input of at most one character (usually `r`, or just Enter) draws a word
/// uniformly at random from the dictionary; anything else must be a valid
/// five-letter word. The word does not have to be in the dictionary.
///
/// # Errors
///
/// Returns [`SolveError::InvalidTarget`] for malformed words and
/// [`SolveError::EmptyDictionary`] when a random pick has nothing to draw from.
pub fn pick_target<R: Rng + ?Sized>(
    input: &str,
    candidates: &CandidateSet,
    rng: &mut R,
) -> Result<Word, SolveError> {
    let input = input.trim();
    if input.chars().count() <= 1 {
        let words: Vec<&Word> = candidates.iter().map(|c| c.word()).collect();
        return words
            .choose(rng)
            .map(|&word| word.clone())
            .ok_or(SolveError::EmptyDictionary);
    }

    Ok(Word::new(input)?)
}

/// Run the simple CLI mode
///
/// Reads one line per round from `input`. Stops early if the input ends.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails. Invalid
/// targets and exhausted rounds are reported and the next round starts.
pub fn run_simple<B: BufRead>(
    candidates: &mut CandidateSet,
    opener: &Word,
    rounds: usize,
    input: &mut B,
) -> Result<()> {
    let mut rng = rand::rng();

    for _ in 0..rounds {
        println!("{}", "-".repeat(59));
        println!();
        print!("Enter a secret word or just r to choose one at random: ");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read secret word")? == 0 {
            println!();
            break;
        }

        let target = match pick_target(&line, candidates, &mut rng) {
            Ok(target) => target,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                continue;
            }
        };

        play_round(candidates, &target, opener);
    }

    println!("Done");
    println!();
    Ok(())
}

/// Play and print one round, leaving `candidates` reset afterwards
pub fn play_round(candidates: &mut CandidateSet, target: &Word, opener: &Word) {
    print_round_header(target);

    let mut round = Round::new(std::mem::take(candidates), target.clone(), opener.clone());
    loop {
        match round.step() {
            Ok(Some(step)) => print_step(&step),
            Ok(None) => {
                println!("{}", "Got it!".green().bold());
                break;
            }
            Err(err) => {
                print_exhausted(&err);
                break;
            }
        }
    }

    *candidates = round.into_candidates();
}
