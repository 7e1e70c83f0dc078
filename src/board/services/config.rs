//! Board service configuration.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a move whose source and destination are the same column is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameColumnMove {
    /// Remove the task and append it to the end of the same column.
    #[default]
    Requeue,
    /// Leave the board untouched.
    Ignore,
}

/// Configuration for board service behaviour.
///
/// # Examples
///
/// ```
/// use kanban_board::board::services::{BoardConfig, SameColumnMove};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.same_column_move, SameColumnMove::Requeue);
/// assert!(!config.trim_titles);
///
/// let parsed = BoardConfig::from_json_str(r#"{"trim_titles": true}"#)
///     .expect("valid config");
/// assert!(parsed.trim_titles);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Behaviour of same-column moves.
    pub same_column_move: SameColumnMove,
    /// Whether surrounding whitespace is stripped from new task titles.
    pub trim_titles: bool,
}

/// Errors returned while loading a [`BoardConfig`].
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The configuration file could not be read.
    #[error("failed to read board config {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for [`BoardConfig`].
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BoardConfig {
    /// Creates a configuration that trims titles and ignores same-column
    /// moves.
    #[must_use]
    pub const fn tidy() -> Self {
        Self {
            same_column_move: SameColumnMove::Ignore,
            trim_titles: true,
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] for malformed JSON or unknown
    /// fields.
    pub fn from_json_str(json: &str) -> Result<Self, BoardConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Io`] when the file cannot be read and
    /// [`BoardConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, BoardConfigError> {
        let io_error = |source| BoardConfigError::Io {
            path: path.to_string(),
            source,
        };
        let parent = match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir,
            _ => Utf8Path::new("."),
        };
        let file_name = path.file_name().ok_or_else(|| {
            io_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "config path has no file name",
            ))
        })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let contents = dir.read_to_string(file_name).map_err(io_error)?;
        Self::from_json_str(&contents)
    }
}
