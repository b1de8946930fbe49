//! CSV reading and writing for listing tables.
//!
//! Every column is read as text with empty fields kept as `""`, so the row
//! filters see exactly what was scraped. The extra column is the exception:
//! its "no extras" markers become nulls, the missing sentinel understood by
//! the cleaning stages.

use std::fs::File;
use std::path::Path;

use carprep_core::DEFAULT_EXTRA_COLUMN;
use polars::prelude::{Column, CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Options for reading a listings CSV.
#[derive(Debug, Clone)]
pub struct ListingCsvOptions {
    /// Free-text equipment column.
    pub extra_column: String,
    /// Extra-column values that mean "no extras".
    pub missing_extra_values: Vec<String>,
}

impl Default for ListingCsvOptions {
    fn default() -> Self {
        Self {
            extra_column: DEFAULT_EXTRA_COLUMN.to_string(),
            missing_extra_values: vec![String::new(), "0".to_string()],
        }
    }
}

impl ListingCsvOptions {
    pub fn new(extra_column: impl Into<String>) -> Self {
        Self {
            extra_column: extra_column.into(),
            ..Self::default()
        }
    }

    fn is_missing_extra(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.missing_extra_values
            .iter()
            .any(|marker| marker.as_str() == trimmed)
    }
}

/// Read a listings CSV into a frame of text columns.
pub fn read_listings_csv(path: &Path, options: &ListingCsvOptions) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let parse_error = |err: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse| parse.with_missing_is_null(false))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    mark_missing_extras(&mut df, options).map_err(|err| match err {
        IngestError::ColumnNotFound { column } => IngestError::MissingColumn {
            column,
            path: path.to_path_buf(),
        },
        other => other,
    })?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded listings"
    );
    Ok(df)
}

/// Replace "no extras" markers in the extra column with nulls.
pub fn mark_missing_extras(df: &mut DataFrame, options: &ListingCsvOptions) -> Result<()> {
    let name = options.extra_column.as_str();
    let column = df.column(name).map_err(|_| IngestError::ColumnNotFound {
        column: name.to_string(),
    })?;
    let values: Vec<Option<String>> = column
        .str()?
        .into_iter()
        .map(|value| {
            value
                .filter(|text| !options.is_missing_extra(text))
                .map(str::to_string)
        })
        .collect();
    let missing = values.iter().filter(|value| value.is_none()).count();
    debug!(column = name, missing, "extra cells without listing");
    df.with_column(Column::new(name.into(), values))?;
    Ok(())
}

/// Write a frame as CSV with a header row.
pub fn write_listings_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote listings"
    );
    Ok(())
}
