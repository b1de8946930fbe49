//! Configuration options for listing cleanup.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default name of the free-text equipment column.
pub const DEFAULT_EXTRA_COLUMN: &str = "extra";

/// A categorical column and how many of its most frequent values to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCategorySpec {
    /// Column to encode.
    pub column: String,
    /// Number of most frequent values that get their own dummy column.
    pub top_k: usize,
}

impl TopCategorySpec {
    pub fn new(column: impl Into<String>, top_k: usize) -> Self {
        Self {
            column: column.into(),
            top_k,
        }
    }
}

/// Options controlling the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// Free-text column holding comma-separated equipment names.
    pub extra_column: String,

    /// Drop rows where any string cell is empty.
    pub drop_empty_rows: bool,

    /// Columns whose zero-valued rows are dropped, checked in order.
    pub nonzero_columns: Vec<String>,

    /// Columns coerced to 64-bit integers.
    pub integer_columns: Vec<String>,

    /// Categorical columns to one-hot encode, applied in order.
    pub top_categories: Vec<TopCategorySpec>,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            extra_column: DEFAULT_EXTRA_COLUMN.to_string(),
            drop_empty_rows: true,
            nonzero_columns: to_strings(&["price", "model", "mileage"]),
            integer_columns: to_strings(&["price", "regdate", "mileage"]),
            top_categories: default_top_categories(),
        }
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn default_top_categories() -> Vec<TopCategorySpec> {
    [
        ("financial", 5),
        ("brand", 3),
        ("cartype", 6),
        ("model", 16),
        ("gearbox", 4),
        ("motorpower", 6),
        ("fuel", 3),
        ("car_steering", 4),
        ("carcolor", 11),
        ("exchange", 3),
    ]
    .into_iter()
    .map(|(column, top_k)| TopCategorySpec::new(column, top_k))
    .collect()
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text).map_err(io::Error::other)
    }

    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[must_use]
    pub fn with_extra_column(mut self, column: impl Into<String>) -> Self {
        self.extra_column = column.into();
        self
    }

    #[must_use]
    pub fn with_drop_empty_rows(mut self, enable: bool) -> Self {
        self.drop_empty_rows = enable;
        self
    }

    #[must_use]
    pub fn with_nonzero_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nonzero_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_integer_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.integer_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_top_categories(mut self, specs: Vec<TopCategorySpec>) -> Self {
        self.top_categories = specs;
        self
    }
}
