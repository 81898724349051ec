//! Reference word lists for mistake detection.

use std::collections::HashSet;
use std::hash::BuildHasher;
use std::path::{Path, PathBuf};

/// The default dictionary file name.
pub const DICTIONARY_FILE_NAME: &str = "dict.txt";

/// Membership lookup for lowercase words.
///
/// Lookups are exact: the finder lowercases its tokens, the word list is
/// expected to hold lowercase entries already.
pub trait WordList {
    /// Check whether `word` is a known word.
    fn contains_word(&self, word: &str) -> bool;
}

/// An in-memory set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary from words, stored as given.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a word list separated by any whitespace.
    ///
    /// Entries are lowercased so that lookups of lowercased tokens match.
    pub fn parse(word_list: &str) -> Self {
        Self {
            words: word_list.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Load a word list from a file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DictionaryError::Io(path.to_path_buf(), e))?;
        let dictionary = Self::parse(&content);
        tracing::info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Load a word list, falling back to an empty dictionary.
    ///
    /// With an empty dictionary every word is reported as a mistake, which
    /// is the expected outcome of a missing word list rather than a failure.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                tracing::warn!("{}; every word will be reported", e);
                Self::new()
            }
        }
    }

    /// Check if a word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordList for Dictionary {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<S: BuildHasher> WordList for HashSet<String, S> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<S: BuildHasher> WordList for HashSet<&str, S> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Errors that can occur when loading a dictionary.
#[derive(Debug)]
pub enum DictionaryError {
    /// I/O error reading the word list.
    Io(PathBuf, std::io::Error),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::Io(path, err) => {
                write!(f, "failed to read dictionary {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io(_, err) => Some(err),
        }
    }
}
