//! Crate-level error types.

use std::fmt;

/// Errors produced by the plico crate.
#[derive(Debug)]
pub enum PlicoError {
    /// The input buffer contains no recognizable structural records.
    UnrecognizedFormat,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PlicoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedFormat => {
                write!(
                    f,
                    "unrecognized format: no ATOM, HETATM, or HEADER records"
                )
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PlicoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlicoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
