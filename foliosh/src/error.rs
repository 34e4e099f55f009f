//! Error types for foliosh
//!
//! None of these ever end a session. Each variant's `Display` is the exact
//! line the terminal prints.

use folio_core::FsError;
use thiserror::Error;

/// Result type alias for command handlers
pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `ls` on a path that is missing or is not a directory
    #[error("ls: cannot access '{path}': {source}")]
    CannotAccess { path: String, source: FsError },

    /// Path failure reported as `<command>: <path>: <reason>`
    #[error("{command}: {path}: {source}")]
    Path {
        command: &'static str,
        path: String,
        source: FsError,
    },

    /// File operation aimed at a directory
    #[error("{command}: {path}: Is a directory")]
    IsADirectory { command: &'static str, path: String },

    /// Required argument absent
    #[error("{command}: missing file operand")]
    MissingOperand { command: &'static str },

    /// Unknown word shaped like `./program`
    #[error("bash: {0}: Permission denied")]
    PermissionDenied(String),

    /// Unknown word containing a separator
    #[error("bash: {0}: No such file or directory")]
    NoSuchFile(String),

    /// Unknown bare word
    #[error("Command not found. Type 'help' for available commands.")]
    CommandNotFound(String),
}

impl CommandError {
    /// Classify a word that names no builtin by its shape.
    #[must_use]
    pub fn unknown_command(name: &str) -> Self {
        if name.contains('/') && name.starts_with("./") {
            Self::PermissionDenied(name.to_string())
        } else if name.contains('/') {
            Self::NoSuchFile(name.to_string())
        } else {
            Self::CommandNotFound(name.to_string())
        }
    }
}
