//! Error types for conversion runs

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting a document
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Input path does not point at a regular file
    MissingInput(PathBuf),
    /// Reading, writing or decoding failed
    Io(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MissingInput(path) => write!(f, "Missing {}", path.display()),
            ConvertError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::Io(err.to_string())
    }
}
