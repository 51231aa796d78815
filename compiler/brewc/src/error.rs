//! Driver errors.
//!
//! Source problems are never errors here; they are diagnostics carried by
//! a `ParseResult`. These cover what stops the driver itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is larger than 4 GiB", path.display())]
    TooLarge { path: PathBuf },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Io { path, source },
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }

    /// True for argument errors, which are followed by the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, DriverError::Usage(_) | DriverError::UnknownCommand(_))
    }
}
