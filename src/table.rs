use crate::column::{Column, ColumnError};

/// Convenience alias for table-oriented results.
pub type TableResult<T> = Result<T, TableError>;

/// Errors propagated by table operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("column error: {0}")]
    Column(#[from] ColumnError),
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
    #[error("row length mismatch: expected {expected}, found {found}")]
    RowLength { expected: usize, found: usize },
    #[error("row {index} out of bounds for length {len}")]
    RowOutOfBounds { index: usize, len: usize },
}

impl TableError {
    pub fn row_length(expected: usize, found: usize) -> Self {
        TableError::RowLength { expected, found }
    }

    pub fn row_out_of_bounds(index: usize, len: usize) -> Self {
        TableError::RowOutOfBounds { index, len }
    }
}

/// Read-only view of a tabular dataset: ordered, uniquely named columns.
///
/// The reporting helpers only depend on this capability, so any in-memory,
/// file-backed or columnar store can be plugged in.
pub trait Dataset {
    /// Column names in dataset order.
    fn column_names(&self) -> Vec<&str>;
    /// Looks a column up by name.
    fn column(&self, name: &str) -> Option<&dyn Column>;
}
