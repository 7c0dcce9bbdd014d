use std::fmt;

use crate::column::Column;
use crate::table::{Dataset, TableError, TableResult};
use crate::value::Value;

/// In-memory table of uniquely named columns in insertion order.
#[derive(Debug, Default)]
pub struct DataTable {
    columns: Vec<Box<dyn Column>>,
}

impl DataTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Adds a column and returns the table for chaining.
    pub fn with_column<C: Column + 'static>(mut self, column: C) -> TableResult<Self> {
        self.add_column(column)?;
        Ok(self)
    }

    /// Adds a column to the table. Rows it does not cover are filled with missing cells.
    pub fn add_column<C: Column + 'static>(&mut self, mut column: C) -> TableResult<&mut Self> {
        if self.position(column.name()).is_some() {
            return Err(TableError::DuplicateColumn(column.name().to_string()));
        }
        let target_len = self.row_count();
        while column.len() < target_len {
            column.push_missing();
        }
        self.columns.push(Box::new(column));
        Ok(self)
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows tracked by the table.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.len()).max().unwrap_or(0)
    }

    /// Returns `true` when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Appends a row of values. `Null` cells are stored as missing.
    pub fn append_row(&mut self, row: Vec<Value>) -> TableResult<()> {
        self.check_row(&row)?;
        let index = self.row_count();
        for (value, column) in row.into_iter().zip(self.columns.iter_mut()) {
            while column.len() < index {
                column.push_missing();
            }
            column.push(value)?;
        }
        Ok(())
    }

    /// Overwrites the row at `index`, extending the table with missing cells if required.
    pub fn update_row(&mut self, index: usize, row: Vec<Value>) -> TableResult<()> {
        self.check_row(&row)?;
        for (value, column) in row.into_iter().zip(self.columns.iter_mut()) {
            while column.len() <= index {
                column.push_missing();
            }
            column.set(index, value)?;
        }
        Ok(())
    }

    /// Returns a copy of the row at `index`.
    pub fn get_row(&self, index: usize) -> TableResult<Vec<Value>> {
        if index >= self.row_count() {
            return Err(TableError::row_out_of_bounds(index, self.row_count()));
        }
        Ok(self
            .columns
            .iter()
            .map(|column| column.get(index).unwrap_or(Value::Null))
            .collect())
    }

    /// Renders the table into a padded textual form.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    // Every cell is checked before any column is touched.
    fn check_row(&self, row: &[Value]) -> TableResult<()> {
        if self.column_count() != row.len() {
            return Err(TableError::row_length(self.column_count(), row.len()));
        }
        for (value, column) in row.iter().zip(&self.columns) {
            column.check(value)?;
        }
        Ok(())
    }
}

impl Dataset for DataTable {
    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    fn column(&self, name: &str) -> Option<&dyn Column> {
        self.position(name).map(|idx| self.columns[idx].as_ref())
    }
}

impl fmt::Display for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column_count() == 0 {
            return f.write_str("(empty table)");
        }
        let rows = self.row_count();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|column| {
                (0..rows)
                    .map(|idx| cell(column.as_ref(), idx).to_string().len())
                    .fold(column.name().len(), usize::max)
            })
            .collect();

        for (col_idx, (column, width)) in self.columns.iter().zip(&widths).enumerate() {
            if col_idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:<width$}", column.name(), width = *width)?;
        }
        f.write_str("\n")?;
        for (col_idx, width) in widths.iter().enumerate() {
            if col_idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&"-".repeat(*width))?;
        }
        for row_idx in 0..rows {
            f.write_str("\n")?;
            for (col_idx, (column, width)) in self.columns.iter().zip(&widths).enumerate() {
                if col_idx > 0 {
                    f.write_str(" ")?;
                }
                let value = cell(column.as_ref(), row_idx).to_string();
                write!(f, "{:<width$}", value, width = *width)?;
            }
        }
        Ok(())
    }
}

fn cell(column: &dyn Column, index: usize) -> Value {
    column.get(index).unwrap_or(Value::Null)
}
