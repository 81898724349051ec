//! Interactive yes/no questions.
//!
//! The prompter reads answers from any [`BufRead`] and writes questions to
//! any [`Write`], so the same code drives a terminal and the tests.

use std::io::{self, BufRead, Write};

/// Answers accepted as "yes".
pub const POSITIVE_ANSWERS: &[&str] = &["Yes", "Y", "y", "yes"];

/// Answers accepted as "no".
pub const NEGATIVE_ANSWERS: &[&str] = &["No", "N", "n", "no"];

/// Question repeated after an unrecognized answer.
pub const INVALID_ANSWER: &str = "[*] Invalid answer. Please, try again (Y/n): ";

/// Asks questions and reads answers line by line.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answer every yes/no question with "yes" without reading input.
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }

    /// Ask a yes/no question until a recognized answer is given.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        if self.assume_yes {
            tracing::debug!(question, "assuming yes");
            return Ok(true);
        }

        let mut answer = self.ask(question)?;
        loop {
            if POSITIVE_ANSWERS.contains(&answer.as_str()) {
                return Ok(true);
            }
            if NEGATIVE_ANSWERS.contains(&answer.as_str()) {
                return Ok(false);
            }
            answer = self.ask(INVALID_ANSWER)?;
        }
    }

    /// Ask a question and return the answer without surrounding whitespace.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

/// Errors that can occur while asking a question.
#[derive(Debug)]
pub enum PromptError {
    /// I/O error reading the answer or writing the question.
    Io(io::Error),
    /// The input ended before an answer was given.
    Closed,
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        PromptError::Io(err)
    }
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(err) => write!(f, "failed to read answer: {}", err),
            PromptError::Closed => write!(f, "input closed before an answer was given"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Io(err) => Some(err),
            PromptError::Closed => None,
        }
    }
}
