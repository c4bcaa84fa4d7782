use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The file operation that was being attempted when an I/O error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::Read => write!(f, "read"),
            FileOp::Write => write!(f, "write"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input: unknown config key, bad slug, bad scope pairing,
    /// or a store file that no longer parses.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    /// I/O failure, carrying the failing path and attempted operation.
    /// The store never retries; the caller decides.
    #[error("cannot {op} {}: {reason}", .path.display())]
    Permission {
        op: FileOp,
        path: PathBuf,
        reason: String,
    },
}

impl Error {
    pub fn io(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Permission {
            op,
            path: path.into(),
            reason: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
