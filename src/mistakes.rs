//! Detection of words missing from a reference dictionary.

use std::fmt;

use indexmap::IndexMap;

use crate::dictionary::WordList;

/// Characters replaced with spaces before the text is split into words.
///
/// Kept separate from [`crate::stats::STATS_SEPARATORS`]: the two sets
/// currently hold the same characters but belong to different counters.
pub const MISTAKE_SEPARATORS: &[char] = &[
    '"', '\\', '!', '?', '.', ',', '{', '}', ';', ':', '\'', '\n', '(', ')', '[', ']', '-',
    '\u{2013}', // en dash
    '|', '<', '>', '«', '»', '~', '%',
    '\u{201C}', // left double quotation mark
    '\u{201D}', // right double quotation mark
    '\u{201E}', // double low-9 quotation mark
    '_', '=', '*', '\u{00AF}', '#', '+', '/', '\u{000C}', '\t', '\r', '\u{000B}',
];

/// Words of a text that are not in the dictionary.
///
/// Words are lowercased and kept in text order, repeats included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MistakeReport {
    words: Vec<String>,
}

impl MistakeReport {
    /// Reported words in text order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of reported occurrences.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word was reported.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reported words with their occurrence counts, in first-occurrence order.
    pub fn distinct(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for word in &self.words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for MistakeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.words.is_empty() {
            return write!(f, "Mistakes were not found.");
        }
        write!(
            f,
            "These words aren't in the dictionary. Check them for mistakes: {:?}",
            self.words
        )
    }
}

/// Find the words of `text` that `dictionary` does not contain.
///
/// Every [`MISTAKE_SEPARATORS`] character splits words; the words are
/// lowercased before lookup. An empty dictionary reports every word.
pub fn find_mistakes<D>(text: &str, dictionary: &D) -> MistakeReport
where
    D: WordList + ?Sized,
{
    let cleaned: String = text
        .chars()
        .map(|c| if MISTAKE_SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();
    let words = cleaned
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !dictionary.contains_word(word))
        .map(str::to_string)
        .collect();
    MistakeReport { words }
}
