//! Exploratory helpers for the King County surface water quality (`kc_swqi`) dataset.
//!
//! This crate provides:
//! - [`Dataset`]: the read-only column view the helpers work against, with
//!   [`DataTable`] as an in-memory implementation built from [`TableColumn`]s.
//! - [`find_missing`] / [`write_missing`]: per-column counts of missing and present cells.
//! - [`percentage`]: what percentage one number is of another.
//! - [`DataPaths`]: the locations of the original, modified and processed datasets.
//!
//! Loading the CSV files is left to the caller.

pub mod column;
pub mod config;
pub mod data_table;
pub mod missing;
pub mod percent;
pub mod table;
pub mod value;

pub use column::{Column, ColumnError, ColumnResult, ColumnType, TableColumn};
pub use config::{
    ConfigError, ConfigResult, DataPaths, MODIFIED_DATA_PATH, ORIGINAL_DATA_PATH,
    PROCESSED_DATA_PATH,
};
pub use data_table::DataTable;
pub use missing::{
    count_missing, find_missing, summarize_missing, write_missing, ColumnMissing, MissingCounts,
    ReportError, ReportResult,
};
pub use percent::{percentage, ToFloat};
pub use table::{Dataset, TableError, TableResult};
pub use value::{ConversionError, ConversionResult, Value, ValueKind};
