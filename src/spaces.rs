//! Space normalization around words and punctuation marks.
//!
//! This module collapses runs of spaces and moves spaces around punctuation
//! so that a mark sticks to the word before it and is followed by exactly
//! one space.

/// Marks that pull the preceding space in and push a space after them.
pub const PUNCTUATION: [char; 4] = [',', '.', '!', '?'];

/// The only character treated as a space by the normalizer (U+0020).
pub const SPACE: char = ' ';

/// Check whether a character is one of the [`PUNCTUATION`] marks.
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Normalize spaces in text.
///
/// The result satisfies, for every input:
/// - no two consecutive spaces;
/// - no space directly before a punctuation mark;
/// - a single space after a punctuation mark, unless the mark ends the text,
///   ends a line, or is followed by another mark (so `...` and `?!` stay
///   intact).
///
/// Only U+0020 spaces are touched; tabs and line breaks are kept verbatim.
/// Applying the function to its own output returns the output unchanged.
pub fn normalize_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == SPACE {
            if !result.ends_with(SPACE) {
                result.push(SPACE);
            }
            continue;
        }

        if is_punctuation(ch) {
            // At most one space can be pending since runs are collapsed
            if result.ends_with(SPACE) {
                result.pop();
            }
            result.push(ch);
            if chars.peek().is_some_and(|&next| needs_space_before(next)) {
                result.push(SPACE);
            }
            continue;
        }

        result.push(ch);
    }

    result
}

/// Whether a character following a punctuation mark must be separated from it.
fn needs_space_before(next: char) -> bool {
    !(next == SPACE || next == '\n' || next == '\r' || is_punctuation(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(output: &str) {
        assert!(!output.contains("  "), "double space in {:?}", output);

        let chars: Vec<char> = output.chars().collect();
        for (i, &ch) in chars.iter().enumerate() {
            if !is_punctuation(ch) {
                continue;
            }
            if i > 0 {
                assert_ne!(chars[i - 1], SPACE, "space before mark in {:?}", output);
            }
            if let Some(&next) = chars.get(i + 1) {
                assert!(
                    next == SPACE || next == '\n' || next == '\r' || is_punctuation(next),
                    "mark not followed by space in {:?}",
                    output
                );
            }
        }
    }

    #[test]
    fn test_collapses_double_spaces() {
        assert_eq!(normalize_spaces("a  b"), "a b");
        assert_eq!(normalize_spaces("a       b"), "a b");
    }

    #[test]
    fn test_removes_space_before_punctuation() {
        assert_eq!(normalize_spaces("Hello , world"), "Hello, world");
        assert_eq!(normalize_spaces("Really ?"), "Really?");
        assert_eq!(normalize_spaces("Stop   !"), "Stop!");
    }

    #[test]
    fn test_inserts_space_after_punctuation() {
        assert_eq!(normalize_spaces("one,two"), "one, two");
        assert_eq!(normalize_spaces("End.Start"), "End. Start");
        assert_eq!(normalize_spaces("Hi!How?Fine."), "Hi! How? Fine.");
    }

    #[test]
    fn test_moves_misplaced_space() {
        assert_eq!(normalize_spaces("word ,next"), "word, next");
        assert_eq!(normalize_spaces("a .b ,c"), "a. b, c");
    }

    #[test]
    fn test_keeps_newline_after_punctuation() {
        assert_eq!(normalize_spaces("First.\nSecond."), "First.\nSecond.");
        assert_eq!(normalize_spaces("First.\r\nSecond."), "First.\r\nSecond.");
        assert_eq!(normalize_spaces("First .\nSecond"), "First.\nSecond");
    }

    #[test]
    fn test_punctuation_at_edges() {
        assert_eq!(normalize_spaces(".start"), ". start");
        assert_eq!(normalize_spaces(" ,start"), ", start");
        assert_eq!(normalize_spaces("end ."), "end.");
        assert_eq!(normalize_spaces("end."), "end.");
    }

    #[test]
    fn test_punctuation_clusters_stay_together() {
        assert_eq!(normalize_spaces("Wait...what"), "Wait... what");
        assert_eq!(normalize_spaces("What?!No"), "What?! No");
        assert_eq!(normalize_spaces("a . . ."), "a...");
    }

    #[test]
    fn test_other_whitespace_untouched() {
        assert_eq!(normalize_spaces("a\t\tb"), "a\t\tb");
        assert_eq!(normalize_spaces("a\n\n  b"), "a\n\n b");
    }

    #[test]
    fn test_empty_and_tiny_inputs() {
        assert_eq!(normalize_spaces(""), "");
        assert_eq!(normalize_spaces(" "), " ");
        assert_eq!(normalize_spaces("   "), " ");
        assert_eq!(normalize_spaces("."), ".");
        assert_eq!(normalize_spaces("x"), "x");
        assert_eq!(normalize_spaces("?!.,"), "?!.,");
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(normalize_spaces("Zażółć  gęślą ,jaźń"), "Zażółć gęślą, jaźń");
        assert_eq!(normalize_spaces("Привет ,мир"), "Привет, мир");
    }

    #[test]
    fn test_long_space_run_does_not_overflow() {
        let input = format!("a{}b", " ".repeat(100_000));
        assert_eq!(normalize_spaces(&input), "a b");
    }

    #[test]
    fn test_idempotent_and_invariants() {
        let samples = [
            "",
            " ",
            "hello  world",
            "hello ,world .how are you ?fine!",
            "  leading and trailing  ",
            "a.b.c",
            "one , two , three",
            "line one .\nline two ,\n  line three",
            "Wait ... what?!really",
            ",,,",
            ". . .",
            "tabs\t,\tand more",
        ];
        for input in samples {
            let once = normalize_spaces(input);
            assert_invariants(&once);
            assert_eq!(normalize_spaces(&once), once, "not idempotent for {:?}", input);
        }
    }
}
