// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Sentence capitalization.

use crate::abbreviations::Abbreviations;

/// Marks that end a sentence.
pub const SENTENCE_END: [char; 3] = ['.', '!', '?'];

/// Capitalize sentence starts using the built-in abbreviations.
///
/// See [`capitalize_sentences_with`].
pub fn capitalize_sentences(text: &str) -> String {
    capitalize_sentences_with(text, &Abbreviations::builtin())
}

/// Capitalize the first token of the text and every token that follows a
/// sentence end.
///
/// Tokens are the pieces between single spaces; a line break closes its
/// token and stays attached to it. A token ends a sentence when it ends with
/// `.`, `!` or `?` (optionally followed by the line break) and is not one of
/// `abbreviations`. The abbreviation lookup uses the whole token, line break
/// included, and also tries the token with its first letter lowercased so
/// that an abbreviation opening a sentence (`Np.`) still counts.
///
/// Only the first character of a token is uppercased; the rest is kept as
/// written, and every separator is kept where it was.
pub fn capitalize_sentences_with(text: &str, abbreviations: &Abbreviations) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = true;

    for token in tokenize(text) {
        if capitalize_next {
            push_capitalized(&mut result, token.text);
        } else {
            result.push_str(token.text);
        }
        if token.space_after {
            result.push(' ');
        }
        capitalize_next = ends_sentence(token.text, abbreviations);
    }

    result
}

/// A piece of text between separators.
#[derive(Debug, PartialEq)]
struct Token<'a> {
    /// Token text, including a trailing line break if it has one.
    text: &'a str,
    /// Whether a space separator follows the token.
    space_after: bool,
}

/// Split text on single spaces and after line breaks.
///
/// Consecutive spaces produce empty tokens, so joining the tokens back gives
/// the original text.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            ' ' => {
                tokens.push(Token {
                    text: &text[start..i],
                    space_after: true,
                });
                start = i + 1;
            }
            '\n' => {
                tokens.push(Token {
                    text: &text[start..=i],
                    space_after: false,
                });
                start = i + 1;
            }
            _ => {}
        }
    }

    // Text ending with a separator leaves an empty last token
    tokens.push(Token {
        text: &text[start..],
        space_after: false,
    });
    tokens
}

/// Whether a token closes a sentence.
fn ends_sentence(token: &str, abbreviations: &Abbreviations) -> bool {
    let core = token.strip_suffix('\n').unwrap_or(token);
    let core = core.strip_suffix('\r').unwrap_or(core);
    core.ends_with(SENTENCE_END) && !is_abbreviation(token, abbreviations)
}

/// Look a token up as written and with its first letter lowercased.
fn is_abbreviation(token: &str, abbreviations: &Abbreviations) -> bool {
    if abbreviations.contains(token) {
        return true;
    }
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    let lower: String = first.to_lowercase().chain(rest.chars()).collect();
    abbreviations.contains(&lower)
}

/// Append a token with its first character uppercased.
fn push_capitalized(result: &mut String, token: &str) {
    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.push_str(chars.as_str());
    }
}
