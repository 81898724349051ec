//! Writing the beautified text to a file.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::prompt::{PromptError, Prompter};
use crate::source::ENTER_AGAIN;

/// Output file extensions the tool writes to.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "rtf", "docx", "doc", "pdf", "odt"];

/// Question asked before the input file is overwritten.
pub const REWRITE: &str = "[*] Are you sure you want to rewrite the file? (Y/n): ";

/// Check that a path ends with one of [`SUPPORTED_EXTENSIONS`].
///
/// The comparison ignores ASCII case.
pub fn check_extension(path: &Path) -> Result<(), SinkError> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        });
    if supported {
        Ok(())
    } else {
        Err(SinkError::UnsupportedExtension(path.to_path_buf()))
    }
}

/// Write `text` verbatim to `target`.
///
/// When `target` is the file the text was read from (`source_path`), the
/// user confirms the overwrite; a "no" asks for another path. Returns the
/// path actually written.
pub fn write_text<R, W>(
    target: &Path,
    text: &str,
    source_path: Option<&Path>,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf, SinkError>
where
    R: BufRead,
    W: Write,
{
    let mut target = target.to_path_buf();
    loop {
        check_extension(&target)?;

        let overwrites_source = source_path.is_some_and(|source| same_file(source, &target));
        if overwrites_source && !prompter.confirm(REWRITE)? {
            target = PathBuf::from(prompter.ask(ENTER_AGAIN)?);
            continue;
        }

        std::fs::write(&target, text).map_err(|e| SinkError::Io(target.clone(), e))?;
        tracing::info!(path = %target.display(), bytes = text.len(), "wrote output file");
        return Ok(target);
    }
}

/// Whether two paths name the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Errors that can occur when writing the output.
#[derive(Debug)]
pub enum SinkError {
    /// The output path does not end with a supported extension.
    UnsupportedExtension(PathBuf),
    /// I/O error writing the output file.
    Io(PathBuf, io::Error),
    /// The user could not be asked.
    Prompt(PromptError),
}

impl From<PromptError> for SinkError {
    fn from(err: PromptError) -> Self {
        SinkError::Prompt(err)
    }
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::UnsupportedExtension(path) => {
                let extensions: Vec<String> =
                    SUPPORTED_EXTENSIONS.iter().map(|ext| format!(".{}", ext)).collect();
                write!(
                    f,
                    "unsupported output file {}: extension must be {}",
                    path.display(),
                    extensions.join(", ")
                )
            }
            SinkError::Io(path, err) => {
                write!(f, "failed to write {}: {}", path.display(), err)
            }
            SinkError::Prompt(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::UnsupportedExtension(_) => None,
            SinkError::Io(_, err) => Some(err),
            SinkError::Prompt(err) => Some(err),
        }
    }
}
