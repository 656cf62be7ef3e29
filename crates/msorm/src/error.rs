//! Error types for msorm

use thiserror::Error;

/// Result type alias for msorm operations
pub type OrmResult<T> = Result<T, OrmError>;

/// Error types for statement construction and execution
#[derive(Debug, Clone, Error)]
pub enum OrmError {
    /// A fragment-adding call received zero fragments
    #[error("no fragments supplied")]
    EmptyInput,

    /// A required fragment field was empty
    #[error("empty string for required field '{field}'")]
    EmptyField { field: &'static str },

    /// The draft has no SELECT columns
    #[error("select list is empty")]
    SelectListEmpty,

    /// The draft has no FROM table
    #[error("from clause is empty")]
    FromClauseEmpty,

    /// A table after the first was added without a join condition
    #[error("table '{table}' requires a join condition")]
    MissingJoin { table: String },

    /// Placeholder count does not match bound argument count
    #[error("statement has {placeholders} placeholders but {args} bound arguments")]
    ArgCountMismatch { placeholders: usize, args: usize },

    /// Column count does not match destination count
    #[error("statement selects {columns} columns but has {dests} destinations")]
    DestCountMismatch { columns: usize, dests: usize },

    /// Argument extraction requested on a draft with no where fragments
    #[error("no where fragments to take arguments from")]
    WheresEmpty,

    /// Destination access requested on a draft with no destinations
    #[error("no destinations were set")]
    DestsEmpty,

    /// A statement affected a different number of rows than expected
    #[error("expected {expected} affected rows, got {actual}")]
    RowsAffectedMismatch { expected: u64, actual: u64 },

    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Datetime text did not match the DATETIME2 format
    #[error("Datetime parse error: {0}")]
    DateTime(#[from] chrono::ParseError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl OrmError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Check if this is a structural builder error (fixable by the caller
    /// changing the fragments, never by retrying)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::EmptyField { .. }
                | Self::SelectListEmpty
                | Self::FromClauseEmpty
                | Self::MissingJoin { .. }
                | Self::ArgCountMismatch { .. }
                | Self::DestCountMismatch { .. }
                | Self::WheresEmpty
                | Self::DestsEmpty
        )
    }

    /// Check if this is a rows-affected mismatch error
    pub fn is_rows_affected_mismatch(&self) -> bool {
        matches!(self, Self::RowsAffectedMismatch { .. })
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
