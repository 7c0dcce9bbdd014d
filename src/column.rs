use std::fmt;

use crate::value::{Value, ValueKind};

/// Convenience alias for operations on [`Column`] implementations.
pub type ColumnResult<T> = Result<T, ColumnError>;

/// Errors that can occur when manipulating columnar data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    #[error("column '{column}' expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("column '{column}' index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        column: String,
        index: usize,
        len: usize,
    },
}

impl ColumnError {
    pub fn type_mismatch(column: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected,
            found,
        }
    }

    pub fn index_out_of_bounds(column: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            column: column.into(),
            index,
            len,
        }
    }
}

/// A named sequence of cells where every cell is either present or missing.
pub trait Column: fmt::Debug {
    /// Returns the display name of the column.
    fn name(&self) -> &str;
    /// Reports the [`ValueKind`] stored by this column.
    fn kind(&self) -> ValueKind;
    /// Returns the number of cells, missing ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` to the column. A missing value (see [`Value::is_missing`]) appends a missing cell.
    fn push(&mut self, value: Value) -> ColumnResult<()>;
    /// Appends a missing cell.
    fn push_missing(&mut self);
    /// Replaces the value at `index`. [`Value::Null`] clears the cell.
    fn set(&mut self, index: usize, value: Value) -> ColumnResult<()>;
    /// Returns the value at `index`, [`Value::Null`] for a missing cell and
    /// `None` past the end.
    fn get(&self, index: usize) -> Option<Value>;
    /// Fails when `value` could not be stored in this column.
    fn check(&self, value: &Value) -> ColumnResult<()>;

    /// Returns `true` when the cell at `index` is missing.
    fn is_missing(&self, index: usize) -> bool {
        self.get(index).is_some_and(|value| value.is_missing())
    }

    /// Missing-state of every cell, in row order.
    fn missing_mask(&self) -> Vec<bool> {
        (0..self.len()).map(|idx| self.is_missing(idx)).collect()
    }
}

/// Trait implemented by types that can be stored inside [`TableColumn`].
pub trait ColumnType:
    Clone + fmt::Debug + fmt::Display + Into<Value> + TryFrom<Value, Error = Value>
{
    const KIND: ValueKind;

    /// Present values that still count as missing, such as a float NaN.
    fn is_missing_value(&self) -> bool {
        false
    }
}

macro_rules! impl_column_type {
    ($ty:ty, $kind:expr) => {
        impl ColumnType for $ty {
            const KIND: ValueKind = $kind;
        }
    };
    ($ty:ty, $kind:expr, nan) => {
        impl ColumnType for $ty {
            const KIND: ValueKind = $kind;

            fn is_missing_value(&self) -> bool {
                self.is_nan()
            }
        }
    };
}

impl_column_type!(i32, ValueKind::Int);
impl_column_type!(i64, ValueKind::Long);
impl_column_type!(u32, ValueKind::UInt);
impl_column_type!(f32, ValueKind::Float, nan);
impl_column_type!(f64, ValueKind::Double, nan);
impl_column_type!(bool, ValueKind::Bool);
impl_column_type!(String, ValueKind::Str);

/// Concrete [`Column`] implementation backed by a `Vec<Option<T>>`.
#[derive(Debug, Clone)]
pub struct TableColumn<T: ColumnType> {
    name: String,
    values: Vec<Option<T>>,
}

impl<T: ColumnType> TableColumn<T> {
    /// Creates an empty column with the given `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Creates a column from cells where `None` marks a missing value.
    pub fn with_values<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
        }
    }

    /// Returns the typed view of the underlying cells.
    pub fn values(&self) -> &[Option<T>] {
        &self.values
    }

    fn ensure_index(&self, index: usize) -> ColumnResult<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(ColumnError::index_out_of_bounds(
                self.name.clone(),
                index,
                self.values.len(),
            ))
        }
    }

    fn to_cell(&self, value: Value) -> ColumnResult<Option<T>> {
        if value.is_missing() {
            return Ok(None);
        }
        T::try_from(value)
            .map(Some)
            .map_err(|v| ColumnError::type_mismatch(self.name.clone(), T::KIND, v.kind()))
    }
}

impl<T: ColumnType> Column for TableColumn<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn push(&mut self, value: Value) -> ColumnResult<()> {
        let cell = self.to_cell(value)?;
        self.values.push(cell);
        Ok(())
    }

    fn push_missing(&mut self) {
        self.values.push(None);
    }

    fn set(&mut self, index: usize, value: Value) -> ColumnResult<()> {
        self.ensure_index(index)?;
        self.values[index] = self.to_cell(value)?;
        Ok(())
    }

    fn get(&self, index: usize) -> Option<Value> {
        self.values
            .get(index)
            .map(|cell| cell.clone().map_or(Value::Null, Into::into))
    }

    fn check(&self, value: &Value) -> ColumnResult<()> {
        if value.is_missing() || value.kind() == T::KIND {
            Ok(())
        } else {
            Err(ColumnError::type_mismatch(self.name.clone(), T::KIND, value.kind()))
        }
    }

    fn is_missing(&self, index: usize) -> bool {
        match self.values.get(index) {
            Some(Some(value)) => value.is_missing_value(),
            Some(None) => true,
            None => false,
        }
    }
}
