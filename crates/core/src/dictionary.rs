//! Dictionary - immutable, case-insensitive word membership
//!
//! Words are stored uppercased. Lookup is an exact match after the same
//! normalization; there is no prefix or fuzzy search.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Uppercase a word the way the dictionary and the formed-words set expect.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a newline-delimited word list (`\n` or `\r\n`).
    ///
    /// Blank lines are skipped.
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// Read a newline-delimited word list from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dictionary = Self::from_text(&text);
        tracing::info!(words = dictionary.len(), path = %path.display(), "dictionary loaded");
        Ok(dictionary)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize_word(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}
