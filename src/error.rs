//! Error types.
//!
//! Load failures are fatal and bubble up to `main`; invalid prompt input is
//! recovered by the session loop, which shows the message and asks again.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading a city's trip file.
#[derive(Error, Debug)]
pub enum DataError {
    /// The file could not be opened.
    #[error("Cannot open trip data {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file.
    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column the city is known to carry is absent from the header.
    #[error("Column '{column}' is missing from {}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A start timestamp could not be parsed.
    #[error("Invalid timestamp '{value}' at line {line} of {}", path.display())]
    InvalidTimestamp {
        path: PathBuf,
        line: u64,
        value: String,
    },

    /// A numeric column held something that is not a number.
    #[error("Invalid {column} '{value}' at line {line} of {}", path.display())]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Rejected answer to one of the interactive prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("No input given.")]
    Empty,

    #[error("'{0}' is not one of the supported cities.")]
    UnknownCity(String),

    #[error("'{0}' is not a month between January and June, or 'all'.")]
    UnknownMonth(String),

    #[error("'{0}' is not a day of the week, or 'all'.")]
    UnknownDay(String),
}
