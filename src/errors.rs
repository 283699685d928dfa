//! Error types for word-list loading with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W003) for documentation lookup:
//!
//! - W001: `EmptyInput` (Word list contains no words)
//! - W002: `NoUniformLengthWords` (No words of the target length remain)
//! - W003: `Io` (Word list file could not be read)
//!
//! # Examples
//!
//! ```
//! use magicsq::word_list::WordList;
//!
//! match WordList::parse_from_str("", None) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for word-list loading operations
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("word list is empty")]
    EmptyInput,

    #[error("no words of length {len} in the input")]
    NoUniformLengthWords { len: usize },

    #[error("failed to read word list from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl WordListError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordListError::EmptyInput => "W001",
            WordListError::NoUniformLengthWords { .. } => "W002",
            WordListError::Io { .. } => "W003",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordListError::EmptyInput => Some("The word list must contain at least one non-blank line (one word per line)"),
            WordListError::NoUniformLengthWords { .. } => Some("Words of other lengths are skipped; check the file contents or pass a different --size"),
            WordListError::Io { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

impl From<WordListError> for io::Error {
    fn from(e: WordListError) -> Self {
        let kind = match &e {
            WordListError::EmptyInput => io::ErrorKind::InvalidInput,
            WordListError::NoUniformLengthWords { .. } => io::ErrorKind::InvalidData,
            WordListError::Io { source, .. } => source.kind(),
        };
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(kind, e.to_string())
    }
}
