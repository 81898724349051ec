//! Resolving the input argument into text.
//!
//! The input is either a path to a file or the text itself. When no file
//! exists at the given path, the user decides whether to use the argument
//! as text or to enter another path.

use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use crate::prompt::{PromptError, Prompter};

/// Input argument that means "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Question asked when the input is not an existing file.
pub const READ_AS_TEXT: &str = "[*] File was not found. Read as a text? (Y/n): ";

/// Question asked for a replacement path.
pub const ENTER_AGAIN: &str = "[*] Please, enter a path to your file again: ";

/// Text to beautify and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// The text itself.
    pub text: String,
    /// The file the text was read from, if any.
    pub path: Option<PathBuf>,
}

impl Source {
    /// Wrap text given directly on the command line.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    /// Read a file.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| SourceError::Io(path.to_path_buf(), e))?;
        tracing::info!(path = %path.display(), bytes = text.len(), "read input file");
        Ok(Self {
            text,
            path: Some(path.to_path_buf()),
        })
    }

    /// Read everything from a reader, such as standard input.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SourceError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(SourceError::Stdin)?;
        Ok(Self::literal(text))
    }
}

/// Resolve an input argument into a [`Source`].
///
/// An existing file is read. Otherwise the user is asked whether to treat
/// the argument as text; a "no" asks for another path and starts over.
pub fn read_text<R, W>(input: &str, prompter: &mut Prompter<R, W>) -> Result<Source, SourceError>
where
    R: BufRead,
    W: Write,
{
    let mut candidate = input.to_string();
    loop {
        let path = Path::new(&candidate);
        if path.is_file() {
            return Source::from_file(path);
        }

        tracing::debug!(input = %candidate, "no file at input path");
        if prompter.confirm(READ_AS_TEXT)? {
            return Ok(Source::literal(candidate));
        }
        candidate = prompter.ask(ENTER_AGAIN)?;
    }
}

/// Errors that can occur when reading the input.
#[derive(Debug)]
pub enum SourceError {
    /// I/O error reading the input file.
    Io(PathBuf, io::Error),
    /// I/O error reading standard input.
    Stdin(io::Error),
    /// The user could not be asked.
    Prompt(PromptError),
}

impl From<PromptError> for SourceError {
    fn from(err: PromptError) -> Self {
        SourceError::Prompt(err)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            SourceError::Stdin(err) => write!(f, "failed to read stdin: {}", err),
            SourceError::Prompt(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(_, err) => Some(err),
            SourceError::Stdin(err) => Some(err),
            SourceError::Prompt(err) => Some(err),
        }
    }
}
