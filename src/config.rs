// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration file support for Sted.
//!
//! This module provides functionality for loading and parsing configuration
//! files (`.sted.toml`) that set default steps, the dictionary location and
//! abbreviation overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Options;
use crate::abbreviations::Abbreviations;
use crate::dictionary::DICTIONARY_FILE_NAME;

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".sted.toml";

/// Configuration for the Sted beautifier.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Normalize spaces by default (default: false).
    pub spaces: bool,

    /// Capitalize sentences by default (default: false).
    pub capitals: bool,

    /// Report mistakes by default (default: false).
    pub mistakes: bool,

    /// Report statistics by default (default: false).
    pub stats: bool,

    /// Path to the word list. Relative paths are resolved against the
    /// directory of the configuration file (default: `dict.txt`).
    pub dictionary: Option<PathBuf>,

    /// Abbreviation overrides.
    pub abbreviations: AbbreviationsConfig,
}

/// Abbreviation overrides on top of the built-in list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AbbreviationsConfig {
    /// Entries added to the built-in list.
    pub extra: Vec<String>,

    /// Built-in entries to drop.
    pub exclude: Vec<String>,
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.sted.toml` in each parent
    /// directory until the filesystem root is reached. Returns `None` if no
    /// configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Build formatting options, turning on every step enabled either here
    /// or in `overrides`.
    pub fn to_options(&self, overrides: &Options) -> Options {
        Options {
            spaces: self.spaces || overrides.spaces,
            capitals: self.capitals || overrides.capitals,
            mistakes: self.mistakes || overrides.mistakes,
            stats: self.stats || overrides.stats,
            abbreviations: Abbreviations::with_overrides(
                &self.abbreviations.extra,
                &self.abbreviations.exclude,
            ),
        }
    }

    /// Resolve the dictionary path.
    ///
    /// `base_dir` is the directory of the configuration file, or the working
    /// directory when there is none.
    pub fn dictionary_path(&self, base_dir: &Path) -> PathBuf {
        match &self.dictionary {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base_dir.join(path),
            None => base_dir.join(DICTIONARY_FILE_NAME),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    Io(PathBuf, std::io::Error),
    /// Error parsing the TOML configuration.
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "failed to parse {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
        }
    }
}
