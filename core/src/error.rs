use thiserror::Error;

pub type FsResult<T> = Result<T, FsError>;

/// Failure to walk the portfolio tree.
///
/// The display text is the errno-style reason only; the offending path is
/// carried separately so command handlers can quote the argument the user
/// actually typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// A segment does not exist under its parent. Holds the path up to and
    /// including the missing segment.
    #[error("No such file or directory")]
    NotFound(String),

    /// A segment that had to be traversed names a file. Holds the path of
    /// that file.
    #[error("Not a directory")]
    NotADirectory(String),
}

impl FsError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory(path.into())
    }

    /// Normalized path at which the walk stopped.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound(path) | Self::NotADirectory(path) => path,
        }
    }
}
