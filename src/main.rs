//! Sted CLI - a text beautifier for printing conventions.

use std::io::{self, Stderr, StdinLock};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use sted::config::{Config, ConfigError};
use sted::prompt::Prompter;
use sted::sink::{self, SUPPORTED_EXTENSIONS, SinkError};
use sted::source::{self, STDIN_MARKER, Source};
use sted::{Dictionary, Options, beautify, report};
use tracing_subscriber::EnvFilter;

/// Formats texts or text files: spaces, capitals, statistics and mistakes.
#[derive(Parser, Debug)]
#[command(name = "sted")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file, the text itself, or - for stdin.
    #[arg(value_name = "PATH/TEXT")]
    input: String,

    /// Remove extra spaces and fix spaces around punctuation.
    #[arg(short, long)]
    spaces: bool,

    /// Capitalize letters that start a sentence.
    #[arg(short, long)]
    capitals: bool,

    /// Report words that are not in the dictionary.
    #[arg(short, long)]
    mistakes: bool,

    /// Report statistics of the text.
    #[arg(short = 't', long)]
    stats: bool,

    /// Write the formatted text to this file (.txt, .rtf, .docx, .doc, .pdf, .odt).
    #[arg(short, long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// Word list used to find mistakes.
    #[arg(short, long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Answer yes to every question.
    #[arg(short, long)]
    yes: bool,

    /// Print a unified diff instead of the formatted text.
    #[arg(long, conflicts_with = "path")]
    diff: bool,

    /// Configuration file to use instead of searching for .sted.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, base_dir) = match load_config(args.config.as_deref(), &cwd) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let cli_options = Options {
        spaces: args.spaces,
        capitals: args.capitals,
        mistakes: args.mistakes,
        stats: args.stats,
        ..Options::default()
    };
    let options = config.to_options(&cli_options);
    tracing::debug!(?options, "resolved options");

    let source = if args.input == STDIN_MARKER {
        Source::from_reader(io::stdin().lock())
    } else {
        source::read_text(&args.input, &mut terminal_prompter(args.yes))
    };
    let source = match source {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let dictionary = if options.mistakes {
        let path = args
            .dictionary
            .clone()
            .unwrap_or_else(|| config.dictionary_path(&base_dir));
        Dictionary::load_or_empty(&path)
    } else {
        Dictionary::new()
    };

    let result = beautify(&source.text, &options, &dictionary);

    if args.diff {
        print!("{}", report::render_diff(&source.text, &result.text));
        if let Some(info) = report::render_info(&result) {
            println!("{}", info);
        }
        return ExitCode::SUCCESS;
    }

    let Some(target) = &args.path else {
        println!("{}", report::render(&result, None));
        return ExitCode::SUCCESS;
    };

    let mut prompter = terminal_prompter(args.yes);
    match sink::write_text(target, &result.text, source.path.as_deref(), &mut prompter) {
        Ok(written) => {
            println!("{}", report::render(&result, Some(&written)));
            ExitCode::SUCCESS
        }
        Err(SinkError::UnsupportedExtension(path)) => {
            eprintln!(
                "Error: cannot write {}: file extension must be one of {}",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Ask questions on stderr and read answers from stdin.
///
/// Stdin stays locked while the prompter lives.
fn terminal_prompter(assume_yes: bool) -> Prompter<StdinLock<'static>, Stderr> {
    Prompter::new(io::stdin().lock(), io::stderr()).assume_yes(assume_yes)
}

/// Load the explicit configuration file, or discover one from `cwd`.
///
/// Returns the configuration and the directory relative paths in it are
/// resolved against.
fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, PathBuf), ConfigError> {
    if let Some(path) = explicit {
        let config = Config::from_file(path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        return Ok((config, base_dir));
    }

    match Config::discover(cwd)? {
        Some((path, config)) => {
            tracing::debug!(path = %path.display(), "using configuration file");
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            Ok((config, base_dir))
        }
        None => Ok((Config::default(), cwd.to_path_buf())),
    }
}
