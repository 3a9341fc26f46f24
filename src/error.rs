use std::path::PathBuf;

use serde::Serialize;

/// A single rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub value: i64,
    pub message: String,
}

impl FieldViolation {
    pub fn not_positive(field: &str, value: i64) -> Self {
        FieldViolation {
            field: field.to_string(),
            value,
            message: "must be a positive integer".to_string(),
        }
    }

    /// The board as a whole has more cells than can be held in memory.
    pub fn board_too_large(height: usize, width: usize) -> Self {
        FieldViolation {
            field: "height".to_string(),
            value: i64::try_from(height).unwrap_or(i64::MAX),
            message: format!("is too large: board of {height} x {width} cells does not fit in memory"),
        }
    }
}

/// Errors that can occur when loading or validating game settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid game settings: {}", describe(.0))]
    Invalid(Vec<FieldViolation>),
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} = {} {}", v.field, v.value, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Machine-readable form of a [`ConfigError`].
#[derive(Debug, Serialize)]
struct ConfigReport<'a> {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "no_violations")]
    violations: &'a [FieldViolation],
}

fn no_violations(violations: &&[FieldViolation]) -> bool {
    violations.is_empty()
}

impl ConfigError {
    /// Render the error as a JSON object for the user.
    pub fn to_json(&self) -> String {
        let error = match self {
            ConfigError::FileRead { .. } => "file_read",
            ConfigError::TomlParse(_) => "toml_parse",
            ConfigError::Invalid(_) => "invalid_settings",
        };
        let violations: &[FieldViolation] = match self {
            ConfigError::Invalid(v) => v.as_slice(),
            _ => &[],
        };
        let report = ConfigReport {
            error,
            message: self.to_string(),
            violations,
        };
        // A struct of strings and integers always serializes
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| report.message.clone())
    }
}

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0-{})", .width.saturating_sub(1))]
    OutOfBounds { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    /// Out-of-range and full columns; the caller should ask again.
    pub fn is_invalid_column(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfBounds { .. } | MoveError::ColumnFull { .. }
        )
    }
}

/// Errors produced while turning raw console text into a column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("value must be a non-negative integer and not bigger than {max}")]
    OutOfRange { value: i64, max: usize },
}

/// Errors that end an interactive session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}
