use thiserror::Error;

use crate::header::Field;

/// Failure to turn one cell into its normalized value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("column {index} is out of bounds for a row of {len} cells")]
    MalformedRow { index: usize, len: usize },
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),
}

impl FieldError {
    /// Attach the data-row number and field at fault.
    pub fn at(self, row: usize, field: Field) -> ImportError {
        ImportError::Row {
            row,
            field,
            source: self,
        }
    }
}

/// Any of these aborts the file being imported; no row is ever skipped.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Row {row}, field {field}: {source}")]
    Row {
        row: usize,
        field: Field,
        #[source]
        source: FieldError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unknown character encoding: {0}")]
    UnknownEncoding(String),
    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
    #[error("Missing header row")]
    MissingHeader,
}

impl ImportError {
    /// The per-field cause, when the error belongs to a single row.
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            ImportError::Row { source, .. } => Some(source),
            _ => None,
        }
    }
}
