//! Error types for swathfinder

use std::fmt;
use std::io;

/// Result type for swathfinder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in swathfinder operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// CSV parsing error while loading the corner-point table
    Csv(csv::Error),

    /// Corner-point table is missing a required column
    MissingColumn(String),

    /// Corner-point table row could not be parsed
    InvalidTableRow(String),

    /// Malformed or missing request parameter
    InvalidParams(String),

    /// Valid request, but no matching data
    NoMatch(String),

    /// Upstream service failure (transport, non-2xx, or bad payload)
    Upstream(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::MissingColumn(name) => write!(f, "Missing required column: {}", name),
            Error::InvalidTableRow(msg) => write!(f, "Invalid table row: {}", msg),
            Error::InvalidParams(msg) => write!(f, "Invalid parameters: {}", msg),
            Error::NoMatch(msg) => write!(f, "No match: {}", msg),
            Error::Upstream(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Upstream(error.to_string())
    }
}
