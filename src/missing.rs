//! Missing-value report.
//!
//! For each column the cells are classified as missing (`true`) or present
//! (`false`) and the two states are counted. The text report lists every
//! column as
//!
//! ```text
//! <column name>
//! <state> <count>
//! ...
//!
//! ```
//!
//! with the most frequent state first and states that never occur left out.

use std::io::{self, Write};

use crate::column::Column;
use crate::table::Dataset;

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while producing a missing-value report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("dataset lists column '{0}' but does not expose it")]
    UnknownColumn(String),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Distribution of missing-states for one column, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingCounts {
    entries: Vec<(bool, usize)>,
}

impl MissingCounts {
    /// `(is_missing, count)` pairs in report order. Zero counts are omitted.
    pub fn entries(&self) -> &[(bool, usize)] {
        &self.entries
    }

    pub fn missing(&self) -> usize {
        self.count_of(true)
    }

    pub fn present(&self) -> usize {
        self.count_of(false)
    }

    /// Number of cells counted; equals the column length.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    fn count_of(&self, state: bool) -> usize {
        self.entries
            .iter()
            .find(|(s, _)| *s == state)
            .map_or(0, |(_, count)| *count)
    }
}

/// Missing-state distribution of a named column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMissing {
    pub name: String,
    pub counts: MissingCounts,
}

/// Counts missing and present cells of `column`.
pub fn count_missing(column: &dyn Column) -> MissingCounts {
    MissingCounts {
        entries: value_counts(column.missing_mask()),
    }
}

/// Computes the missing-state distribution of every column in dataset order.
pub fn summarize_missing<D: Dataset + ?Sized>(dataset: &D) -> ReportResult<Vec<ColumnMissing>> {
    dataset
        .column_names()
        .into_iter()
        .map(|name| -> ReportResult<ColumnMissing> {
            let column = dataset
                .column(name)
                .ok_or_else(|| ReportError::UnknownColumn(name.to_string()))?;
            Ok(ColumnMissing {
                name: name.to_string(),
                counts: count_missing(column),
            })
        })
        .collect()
}

/// Writes the missing-value report of `dataset` to `out`.
pub fn write_missing<D, W>(dataset: &D, out: &mut W) -> ReportResult<()>
where
    D: Dataset + ?Sized,
    W: Write + ?Sized,
{
    for summary in summarize_missing(dataset)? {
        log::debug!(
            "column '{}': {} missing of {}",
            summary.name,
            summary.counts.missing(),
            summary.counts.total()
        );
        writeln!(out, "{}", summary.name)?;
        for (state, count) in summary.counts.entries() {
            writeln!(out, "{} {}", state, count)?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Prints the missing-value report of `dataset` to standard output.
pub fn find_missing<D: Dataset + ?Sized>(dataset: &D) -> ReportResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_missing(dataset, &mut handle)
}

// Stable sort keeps first-seen order between equal counts.
fn value_counts(states: impl IntoIterator<Item = bool>) -> Vec<(bool, usize)> {
    let mut counts: Vec<(bool, usize)> = Vec::with_capacity(2);
    for state in states {
        match counts.iter_mut().find(|(s, _)| *s == state) {
            Some((_, count)) => *count += 1,
            None => counts.push((state, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
