//! Dictionary loading
//!
//! Reads a word list from disk or converts the embedded constant. Entries
//! that are not five letters are skipped; a list with no usable word at all
//! is an error because no round could be played from it.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from reading a dictionary file
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read dictionary {}: {source}", path.display())
            }
            Self::Empty { path } => {
                write!(f, "dictionary {} has no five-letter words", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Load words from a file, one per line (whitespace-separated also works)
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Empty`] if it contains no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_overlap::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordsLarge.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(words)
}

/// Parse every valid word out of free-form text
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_overlap::wordlists::loader::words_from_slice;
/// use wordle_overlap::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
