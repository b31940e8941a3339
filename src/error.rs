use thiserror::Error;

use crate::listing::Field;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BikeDashError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Listing data has no header line")]
    MissingHeader,

    #[error("Column '{0}' appears more than once in the header")]
    DuplicateColumn(String),

    #[error("Unknown field '{0}'. Expected one of: {fields}", fields = Field::names().join(", "))]
    UnknownField(String),

    #[error("Invalid filter '{0}'. Expected FIELD=VALUE")]
    InvalidFilter(String),
}

impl From<std::io::Error> for BikeDashError {
    fn from(err: std::io::Error) -> Self {
        BikeDashError::Io(err.to_string())
    }
}

/// A data line that does not fit the listing schema
///
/// Row errors never abort a parse. Depending on the row policy the offending
/// record is either kept (and the error reported as a warning) or rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {field} value '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        field: Field,
        value: String,
    },
}

impl RowError {
    /// 1-based source line the error was found on
    pub fn line(&self) -> usize {
        match self {
            RowError::ColumnCount { line, .. } | RowError::InvalidNumber { line, .. } => *line,
        }
    }
}
