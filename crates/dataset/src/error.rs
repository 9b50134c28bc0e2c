//! Dataset Error Types

use thiserror::Error;

/// Errors while assembling a feature table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Column length differs from the first column
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Row width differs from the number of column names
    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Two columns share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
}
