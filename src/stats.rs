//! Text statistics: spaces, lines, symbols and words.

use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Characters removed from the text before symbols and words are counted.
///
/// Kept separate from [`crate::mistakes::MISTAKE_SEPARATORS`]: the two sets
/// currently hold the same characters but belong to different counters.
pub const STATS_SEPARATORS: &[char] = &[
    '"', '\\', '!', '?', '.', ',', '{', '}', ';', ':', '\'', '\n', '(', ')', '[', ']', '-',
    '\u{2013}', // en dash
    '|', '<', '>', '«', '»', '~', '%',
    '\u{201C}', // left double quotation mark
    '\u{201D}', // right double quotation mark
    '\u{201E}', // double low-9 quotation mark
    '_', '=', '*', '\u{00AF}', '#', '+', '/', '\u{000C}', '\t', '\r', '\u{000B}',
];

/// Counts describing a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Space characters (U+0020) in the text as given.
    pub spaces: usize,
    /// Lines; zero for empty text.
    pub lines: usize,
    /// Characters that are neither spaces nor separators.
    pub symbols: usize,
    /// Words left after separators are stripped.
    pub words: usize,
}

/// Compute statistics of a text.
pub fn compute_stats(text: &str) -> Statistics {
    let spaces = text.chars().filter(|&c| c == ' ').count();
    let lines = if text.is_empty() {
        0
    } else {
        1 + text.matches('\n').count()
    };

    let stripped: String = text
        .chars()
        .filter(|c| !STATS_SEPARATORS.contains(c))
        .collect();
    let symbols = stripped.chars().count().saturating_sub(spaces);
    let words = stripped
        .replace('\n', " ")
        .trim()
        .split(' ')
        .filter(|piece| !piece.is_empty())
        .count();

    Statistics {
        spaces,
        lines,
        symbols,
        words,
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Spaces:", self.spaces),
            ("Lines:", self.lines),
            ("Symbols:", self.symbols),
            ("Words:", self.words),
        ];
        let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);

        for (i, (label, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let padding = " ".repeat(label_width - label.width() + 1);
            write!(f, "{}{}[{}]", label, padding, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_counted_on_original_text() {
        let stats = compute_stats("a b  c");
        assert_eq!(stats.spaces, 3);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.symbols, 3);
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(compute_stats(""), Statistics::default());
    }

    #[test]
    fn test_lines() {
        assert_eq!(compute_stats("one").lines, 1);
        assert_eq!(compute_stats("one\ntwo\nthree").lines, 3);
        assert_eq!(compute_stats("one\n").lines, 2);
        assert_eq!(compute_stats("\n").lines, 2);
    }

    #[test]
    fn test_separators_excluded_from_symbols() {
        let stats = compute_stats("Hello, world!");
        assert_eq!(stats.spaces, 1);
        assert_eq!(stats.symbols, 10);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_quotes_and_brackets_are_separators() {
        let stats = compute_stats("„cytat” (nawias) [x] {y} «z» a–b");
        assert_eq!(stats.symbols, "cytatnawiasxyzab".chars().count());
        assert_eq!(stats.words, 6);
    }

    #[test]
    fn test_line_breaks_are_stripped_before_word_count() {
        let stats = compute_stats("Hi.\nBye");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.symbols, 5);
        assert_eq!(stats.words, 1);
    }

    #[test]
    fn test_whitespace_only_has_no_words() {
        let stats = compute_stats("   ");
        assert_eq!(stats.spaces, 3);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.symbols, 0);
        assert_eq!(stats.words, 0);

        let stats = compute_stats("\t\r\n");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.symbols, 0);
    }

    #[test]
    fn test_punctuation_only() {
        let stats = compute_stats("?!...");
        assert_eq!(stats.symbols, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let stats = compute_stats("zażółć gęślą");
        assert_eq!(stats.symbols, 11);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_display_is_aligned_block() {
        let stats = compute_stats("a b  c");
        assert_eq!(
            stats.to_string(),
            "Spaces:  [3]\nLines:   [1]\nSymbols: [3]\nWords:   [3]"
        );
    }
}
