use std::path::PathBuf;

use thiserror::Error;

use crate::extract::Field;

/// A header field whose text could not be turned into a number.
///
/// Raised for records of known devices only; it aborts the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("The {field} field '{text}' does not match the expected pattern `{}`.", .field.pattern())]
    Mismatch { field: Field, text: String },
    #[error("The {field} value in '{text}' does not fit into 16 bits.")]
    OutOfRange { field: Field, text: String },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to read '{}'.", .path.display())]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Failed to parse the CSV file '{}'.", .path.display())]
    Csv {
        #[source]
        source: csv::Error,
        path: PathBuf,
    },
    #[error("Failed to extract the information memory layout of '{name}'.")]
    Extract {
        #[source]
        source: ExtractError,
        name: String,
    },
    #[error("Failed to write the generated table.")]
    Write(#[source] std::io::Error),
}
