//! Row filters for structurally invalid listings.

use polars::prelude::{BooleanChunked, DataFrame, DataType, NewChunkedArray};
use tracing::debug;

use crate::error::{CleanError, Result, Stage};
use crate::values::{column_values, is_empty_string, is_zero};

/// Drop every row whose value is zero in any of `columns`.
///
/// Columns are checked in order against the rows that survived the previous
/// checks; the surviving rows are compacted once at the end. A listed column
/// that is absent from the table is an error.
pub fn drop_zero_rows<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];
    for name in columns {
        let name = name.as_ref();
        let column = df
            .column(name)
            .map_err(|_| CleanError::missing_column(Stage::RowFilter, name))?;
        let mut dropped = 0usize;
        for (idx, value) in column_values(column).enumerate() {
            if keep[idx] && is_zero(value) {
                keep[idx] = false;
                dropped += 1;
            }
        }
        debug!(column = name, dropped, "zero-valued rows");
    }
    retain_rows(df, &keep)
}

/// Drop every row holding an empty string in any column.
///
/// Nulls are not empty strings and are kept.
pub fn drop_empty_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];
    for column in df.get_columns() {
        if column.dtype() != &DataType::String {
            continue;
        }
        for (idx, value) in column_values(column).enumerate() {
            if is_empty_string(&value) {
                keep[idx] = false;
            }
        }
    }
    retain_rows(df, &keep)
}

fn retain_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    if keep.iter().all(|flag| *flag) {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}
