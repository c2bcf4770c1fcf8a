//! Wordle Overlap Guesser
//!
//! An autonomous Wordle guesser. Every viable candidate is scored by how much
//! letter and position structure it shares with the other viable candidates;
//! the best one is guessed, and the feedback it earns prunes the rest.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_overlap::core::Word;
//! use wordle_overlap::solver::{CandidateSet, default_opener, solve};
//! use wordle_overlap::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let mut candidates = CandidateSet::new(words_from_slice(DICTIONARY));
//! let target = Word::new("dream").unwrap();
//!
//! let steps = solve(&mut candidates, &target, &default_opener()).unwrap();
//! for step in &steps {
//!     println!("{:5}. {} {}", step.number, step.display(), step.feedback.symbols());
//! }
//! assert!(steps.last().unwrap().is_solved());
//! ```

// Core domain types
pub mod core;

// Scoring, filtering and round orchestration
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
