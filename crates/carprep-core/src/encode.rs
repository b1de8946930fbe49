//! Top-K one-hot encoding of categorical columns.
//!
//! Only the K most frequent values of a column get a dummy column named
//! `{column}_{value}`. Every other value falls in the "other" bucket, which
//! has no column of its own: its rows are 0 in every dummy.

use std::collections::HashMap;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{debug, info, info_span};

use crate::error::{CleanError, Result, Stage};
use crate::values::{any_to_string, column_values};

/// Category assignment of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryBucket {
    /// Index into [`TopCategories::retained`].
    Retained(usize),
    /// Value outside the top K, or null.
    Other,
}

/// A distinct column value and its frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Ranked categories of a column and the per-row bucket assignment.
#[derive(Debug, Clone)]
pub struct TopCategories {
    column: String,
    ranked: Vec<CategoryCount>,
    retained: usize,
    buckets: Vec<CategoryBucket>,
}

impl TopCategories {
    pub fn column(&self) -> &str {
        &self.column
    }

    /// All distinct non-null values by descending count.
    ///
    /// Equal counts keep first-seen order.
    pub fn ranked(&self) -> &[CategoryCount] {
        &self.ranked
    }

    /// The top-K values that get a dummy column.
    pub fn retained(&self) -> &[CategoryCount] {
        &self.ranked[..self.retained]
    }

    pub fn buckets(&self) -> &[CategoryBucket] {
        &self.buckets
    }

    /// Number of rows in the "other" bucket.
    pub fn other_rows(&self) -> usize {
        self.buckets
            .iter()
            .filter(|bucket| matches!(bucket, CategoryBucket::Other))
            .count()
    }

    /// Dummy column names in retained order.
    pub fn dummy_names(&self) -> Vec<String> {
        self.retained()
            .iter()
            .map(|category| format!("{}_{}", self.column, category.value))
            .collect()
    }

    /// Add the dummy columns to `df` and drop the source column.
    ///
    /// `df` must be the frame the categories were ranked from.
    pub fn project(&self, df: &mut DataFrame) -> Result<Vec<String>> {
        if df.column(&self.column).is_err() {
            return Err(CleanError::missing_column(Stage::TopCategory, &self.column));
        }
        if df.height() != self.buckets.len() {
            return Err(CleanError::DataFrame {
                message: format!(
                    "column '{}' was ranked over {} rows but the frame has {}",
                    self.column,
                    self.buckets.len(),
                    df.height()
                ),
            });
        }
        let names = self.dummy_names();
        for name in &names {
            if df.column(name).is_ok() {
                return Err(CleanError::DuplicateColumn {
                    stage: Stage::TopCategory,
                    column: name.clone(),
                });
            }
        }
        for (rank, name) in names.iter().enumerate() {
            let values: Vec<i64> = self
                .buckets
                .iter()
                .map(|bucket| i64::from(*bucket == CategoryBucket::Retained(rank)))
                .collect();
            df.with_column(Column::new(name.as_str().into(), values))?;
        }
        df.drop_in_place(&self.column)?;
        Ok(names)
    }
}

/// Text form of a category value used in dummy names.
///
/// Floats keep their fractional part, so 1.0 labels as `1.0`, not `1`.
fn category_label(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Float32(v) => format!("{v:?}"),
        AnyValue::Float64(v) => format!("{v:?}"),
        other => any_to_string(other),
    }
}

/// Count the values of `column` and keep the `top_k` most frequent.
pub fn rank_categories(df: &DataFrame, column: &str, top_k: usize) -> Result<TopCategories> {
    let source = df
        .column(column)
        .map_err(|_| CleanError::missing_column(Stage::TopCategory, column))?;

    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut row_keys: Vec<Option<usize>> = Vec::with_capacity(source.len());
    for value in column_values(source) {
        if value.is_null() {
            row_keys.push(None);
            continue;
        }
        let label = category_label(value);
        let position = *positions.entry(label.clone()).or_insert_with(|| {
            counts.push(CategoryCount {
                value: label,
                count: 0,
            });
            counts.len() - 1
        });
        counts[position].count += 1;
        row_keys.push(Some(position));
    }

    // stable: equal counts stay in first-seen order
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|a, b| counts[*b].count.cmp(&counts[*a].count));

    let mut rank_of = vec![None; counts.len()];
    for (rank, &position) in order.iter().take(top_k).enumerate() {
        rank_of[position] = Some(rank);
    }
    let buckets = row_keys
        .into_iter()
        .map(|key| match key.and_then(|position| rank_of[position]) {
            Some(rank) => CategoryBucket::Retained(rank),
            None => CategoryBucket::Other,
        })
        .collect();
    let ranked: Vec<CategoryCount> = order.into_iter().map(|idx| counts[idx].clone()).collect();
    let retained = top_k.min(ranked.len());

    Ok(TopCategories {
        column: column.to_string(),
        ranked,
        retained,
        buckets,
    })
}

/// Replace `column` with dummies for its `top_k` most frequent values.
pub fn one_hot_encode_top_k(
    df: &mut DataFrame,
    column: &str,
    top_k: usize,
) -> Result<TopCategories> {
    let span = info_span!("top_category", column, top_k);
    let _guard = span.enter();
    let categories = rank_categories(df, column, top_k)?;
    let names = categories.project(df)?;
    debug!(dummies = ?names, "dummy columns");
    info!(
        distinct = categories.ranked().len(),
        retained = names.len(),
        other_rows = categories.other_rows(),
        "encoded categorical column"
    );
    Ok(categories)
}
