//! Core domain types for the guesser
//!
//! Words and the feedback a guess earns against a target. Nothing in here
//! knows about candidate sets or rounds.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{WORD_LENGTH, Word, WordError};
