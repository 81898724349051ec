//! Sted is a text beautifier that enforces printing conventions: single
//! spaces, punctuation spacing and sentence capitals, plus text statistics
//! and a dictionary check.
//!
//! # Example
//!
//! ```
//! use sted::{beautify, Dictionary, Options};
//!
//! let options = Options {
//!     spaces: true,
//!     capitals: true,
//!     ..Options::default()
//! };
//! let result = beautify("hello ,world.how are you ?", &options, &Dictionary::new());
//! assert_eq!(result.text, "Hello, world. How are you?");
//! ```

pub mod abbreviations;
pub mod capitals;
pub mod config;
pub mod dictionary;
pub mod mistakes;
pub mod prompt;
pub mod report;
pub mod sink;
pub mod source;
pub mod spaces;
pub mod stats;

pub use abbreviations::Abbreviations;
pub use capitals::{capitalize_sentences, capitalize_sentences_with};
pub use dictionary::{Dictionary, WordList};
pub use mistakes::{MistakeReport, find_mistakes};
pub use spaces::normalize_spaces;
pub use stats::{Statistics, compute_stats};

/// Which steps to run, and with which abbreviations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Normalize spaces around words and punctuation.
    pub spaces: bool,
    /// Capitalize sentence starts.
    pub capitals: bool,
    /// Report words missing from the dictionary.
    pub mistakes: bool,
    /// Report text statistics.
    pub stats: bool,
    /// Tokens that do not end a sentence. Default: built-in list.
    pub abbreviations: Abbreviations,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spaces: false,
            capitals: false,
            mistakes: false,
            stats: false,
            abbreviations: Abbreviations::builtin(),
        }
    }
}

/// The outcome of [`beautify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beautified {
    /// The text after the enabled transformations.
    pub text: String,
    /// Statistics of [`Self::text`], if requested.
    pub statistics: Option<Statistics>,
    /// Mistakes found in [`Self::text`], if requested.
    pub mistakes: Option<MistakeReport>,
}

/// Run the enabled steps over `input`.
///
/// Steps run in a fixed order: spaces, capitals, statistics, mistakes.
/// Statistics and mistakes see the text as left by the earlier steps.
/// `dictionary` is only consulted when mistakes are requested.
pub fn beautify<D>(input: &str, options: &Options, dictionary: &D) -> Beautified
where
    D: WordList + ?Sized,
{
    let mut text = input.to_string();

    if options.spaces {
        tracing::debug!("normalizing spaces");
        text = normalize_spaces(&text);
    }

    if options.capitals {
        tracing::debug!("capitalizing sentences");
        text = capitalize_sentences_with(&text, &options.abbreviations);
    }

    let statistics = options.stats.then(|| compute_stats(&text));
    let mistakes = options.mistakes.then(|| find_mistakes(&text, dictionary));
    if let Some(report) = &mistakes {
        tracing::debug!(
            count = report.len(),
            distinct = report.distinct().len(),
            "found mistakes"
        );
    }

    Beautified {
        text,
        statistics,
        mistakes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_options() -> Options {
        Options {
            spaces: true,
            capitals: true,
            mistakes: true,
            stats: true,
            ..Options::default()
        }
    }

    #[test]
    fn test_no_options_is_identity() {
        let result = beautify("hello  world .", &Options::default(), &Dictionary::new());
        assert_eq!(result.text, "hello  world .");
        assert!(result.statistics.is_none());
        assert!(result.mistakes.is_none());
    }

    #[test]
    fn test_steps_run_in_order() {
        // Capitals only see the sentence end once spaces are fixed
        let options = Options {
            spaces: true,
            capitals: true,
            ..Options::default()
        };
        let result = beautify("one.two", &options, &Dictionary::new());
        assert_eq!(result.text, "One. Two");
    }

    #[test]
    fn test_reports_use_transformed_text() {
        let dictionary = Dictionary::parse("one two");
        let result = beautify("one  ,two", &all_options(), &dictionary);
        assert_eq!(result.text, "One, two");
        assert_eq!(result.statistics.unwrap().spaces, 1);
        assert!(result.mistakes.unwrap().is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = beautify("", &all_options(), &Dictionary::new());
        assert_eq!(result.text, "");
        assert_eq!(result.statistics, Some(Statistics::default()));
        assert_eq!(result.mistakes, Some(MistakeReport::default()));
    }
}
