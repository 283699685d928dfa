//! `word_list` — Module to load and preprocess the word pool for square generation
//!
//! This module is responsible for reading a word list (either from a file, or from an
//! in-memory string) and normalizing it into the pool of equal-length words the search
//! operates on.
//!
//! The output is a `WordList` struct containing a flat `Vec<String>` of lowercase words
//! plus the word length shared by all of them.
//!
//! The parsing logic:
//! - Each line in the input holds one word; surrounding whitespace is trimmed.
//! - Blank lines are skipped silently.
//! - All words are normalized to lowercase.
//! - The target length is the character count of the first word, unless an explicit
//!   size override is given; words of any other length are discarded silently.
//! - Input order is preserved and duplicates are kept: the pool order defines the
//!   order in which squares are discovered, so reordering or deduplicating here would
//!   change the output.
//!
//! Lengths are measured in `char`s rather than bytes, so word lists containing
//! non-ASCII letters group correctly.

use crate::errors::WordListError;

/// Struct representing a processed, ready-to-search word pool.
///
/// The `words` vector contains all valid words (normalized, length-filtered),
/// in their original input order.
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of lowercase words, all of length `word_len`.
    /// Example: `["card", "area", "rear", "dart", ...]`
    pub words: Vec<String>,

    /// Shared character count of every word in `words` (the square size N).
    pub word_len: usize,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents` — The raw file contents as a `&str`. Each line should be one word.
    /// * `size` — Optional target word length. When `None`, the first word's length is used.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims each.
    /// 2. Skips blank lines.
    /// 3. Converts each word to lowercase.
    /// 4. Determines the target length (override, or first word's char count).
    /// 5. Discards words of any other length, keeping the rest in input order.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::EmptyInput`] if no words were present at all, and
    /// [`WordListError::NoUniformLengthWords`] if the length filter removed everything
    /// (only reachable with a `size` override, since otherwise the first word survives).
    pub fn parse_from_str(contents: &str, size: Option<usize>) -> Result<WordList, WordListError> {
        let raw: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        if raw.is_empty() {
            return Err(WordListError::EmptyInput);
        }

        let word_len = match size {
            Some(n) => n,
            None => raw[0].chars().count(),
        };

        // No sort, no dedup: pool order is the discovery order downstream.
        let words: Vec<String> = raw
            .into_iter()
            .filter(|w| w.chars().count() == word_len)
            .collect();

        if words.is_empty() {
            return Err(WordListError::NoUniformLengthWords { len: word_len });
        }

        Ok(WordList { words, word_len })
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Example:
    /// `let word_list = WordList::load_from_path("5.txt", None)?;`
    /// `println!("Loaded {} words", word_list.words.len());`
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Io`] (naming the path) if the file cannot be read,
    /// plus everything [`WordList::parse_from_str`] can return.
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        size: Option<usize>,
    ) -> Result<WordList, WordListError> {
        let path_ref = path.as_ref();

        // Read the entire file into a single string.
        // Using `read_to_string` ensures UTF-8 decoding.
        let data = std::fs::read_to_string(path_ref).map_err(|e| WordListError::Io {
            path: path_ref.display().to_string(),
            source: e,
        })?;

        Self::parse_from_str(&data, size)
    }
}
