//! Dictionaries for the guesser
//!
//! The default dictionary is embedded in the binary; custom lists are read
//! from disk through [`loader`].

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
