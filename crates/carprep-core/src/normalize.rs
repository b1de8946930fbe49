//! Integer coercion for price, registration year and mileage.

use polars::prelude::{Column, DataFrame};
use tracing::debug;

use crate::error::{CleanError, Result, Stage};
use crate::values::{any_to_i64, any_to_string, column_values};

/// Replace each of `columns` with an `Int64` column.
///
/// Row count and column order are unchanged. Any value that cannot be read
/// as an integer aborts with [`CleanError::NonNumericValue`]; nothing is
/// defaulted.
pub fn normalize_integer_columns<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
) -> Result<DataFrame> {
    let mut out = df.clone();
    for name in columns {
        let name = name.as_ref();
        let column = df
            .column(name)
            .map_err(|_| CleanError::missing_column(Stage::TypeNormalizer, name))?;
        let values = integer_values(column, name)?;
        out.with_column(Column::new(name.into(), values))?;
        debug!(column = name, dtype = %column.dtype(), "coerced to Int64");
    }
    Ok(out)
}

fn integer_values(column: &Column, name: &str) -> Result<Vec<i64>> {
    column_values(column)
        .enumerate()
        .map(|(row, value)| {
            any_to_i64(value.clone()).ok_or_else(|| CleanError::NonNumericValue {
                column: name.to_string(),
                row,
                value: any_to_string(value),
            })
        })
        .collect()
}
