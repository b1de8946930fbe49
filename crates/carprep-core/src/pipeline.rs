//! Pipeline driver for listing cleanup.
//!
//! Runs the stages in a fixed order over one owned frame:
//!
//! 1. drop rows with empty string cells
//! 2. drop rows with zero price, model or mileage
//! 3. coerce price, registration year and mileage to integers
//! 4. expand the extra column into feature indicators
//! 5. one-hot encode the top categories of each categorical column
//!
//! Any stage error aborts the run; there is no partial result.

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::encode::{CategoryCount, one_hot_encode_top_k};
use crate::error::Result;
use crate::extra::{Vocabulary, discover_vocabulary, expand_extra_features};
use crate::filter::{drop_empty_rows, drop_zero_rows};
use crate::normalize::normalize_integer_columns;
use crate::options::CleaningOptions;

/// Outcome of one encoded categorical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumn {
    pub column: String,
    pub top_k: usize,
    pub distinct: usize,
    pub retained: Vec<CategoryCount>,
    pub other_rows: usize,
}

/// Counts collected while cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanSummary {
    pub input_rows: usize,
    pub rows_after_empty_filter: usize,
    pub rows_after_zero_filter: usize,
    pub features: Vec<String>,
    pub feature_source_row: Option<usize>,
    pub encoded: Vec<EncodedColumn>,
    pub output_rows: usize,
    pub output_columns: usize,
}

impl CleanSummary {
    /// Rows removed by both filters.
    pub fn dropped_rows(&self) -> usize {
        self.input_rows.saturating_sub(self.rows_after_zero_filter)
    }
}

/// The cleaned frame plus its summary.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub data: DataFrame,
    pub summary: CleanSummary,
}

/// Configured cleaning pipeline.
#[derive(Debug, Clone, Default)]
pub struct CleaningPipeline {
    options: CleaningOptions,
}

impl CleaningPipeline {
    pub fn new(options: CleaningOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CleaningOptions {
        &self.options
    }

    /// Run the row filters only.
    pub fn filter_rows(&self, df: &DataFrame, summary: &mut CleanSummary) -> Result<DataFrame> {
        let span = info_span!("row_filter");
        let _guard = span.enter();
        summary.input_rows = df.height();
        let df = if self.options.drop_empty_rows {
            drop_empty_rows(df)?
        } else {
            df.clone()
        };
        summary.rows_after_empty_filter = df.height();
        let df = drop_zero_rows(&df, &self.options.nonzero_columns)?;
        summary.rows_after_zero_filter = df.height();
        info!(
            input = summary.input_rows,
            empty_dropped = summary.input_rows - summary.rows_after_empty_filter,
            zero_dropped = summary.rows_after_empty_filter - summary.rows_after_zero_filter,
            remaining = summary.rows_after_zero_filter,
            "filtered rows"
        );
        Ok(df)
    }

    /// Filter rows and discover the extra-feature vocabulary without
    /// changing any column.
    pub fn discover(&self, df: &DataFrame) -> Result<Vocabulary> {
        let mut summary = CleanSummary::default();
        let filtered = self.filter_rows(df, &mut summary)?;
        discover_vocabulary(&filtered, &self.options.extra_column)
    }

    /// Run every stage over `df`.
    pub fn run(&self, df: DataFrame) -> Result<CleanOutcome> {
        let mut summary = CleanSummary::default();

        // =====================================================================
        // Stage 1: Row filter
        // =====================================================================
        let df = self.filter_rows(&df, &mut summary)?;

        // =====================================================================
        // Stage 2: Integer coercion
        // =====================================================================
        let mut df = info_span!("type_normalizer")
            .in_scope(|| normalize_integer_columns(&df, &self.options.integer_columns))?;

        // =====================================================================
        // Stage 3: Extra-feature expansion
        // =====================================================================
        let vocabulary = expand_extra_features(&mut df, &self.options.extra_column)?;
        summary.features = vocabulary.names().to_vec();
        summary.feature_source_row = Some(vocabulary.source_row());

        // =====================================================================
        // Stage 4: Top-category encoding
        // =====================================================================
        for spec in &self.options.top_categories {
            let categories = one_hot_encode_top_k(&mut df, &spec.column, spec.top_k)?;
            summary.encoded.push(EncodedColumn {
                column: spec.column.clone(),
                top_k: spec.top_k,
                distinct: categories.ranked().len(),
                retained: categories.retained().to_vec(),
                other_rows: categories.other_rows(),
            });
        }

        summary.output_rows = df.height();
        summary.output_columns = df.width();
        info!(
            rows = summary.output_rows,
            columns = summary.output_columns,
            features = summary.features.len(),
            "cleaning complete"
        );
        Ok(CleanOutcome { data: df, summary })
    }
}

/// Run the default pipeline over `df`.
pub fn clean_listings(df: DataFrame) -> Result<CleanOutcome> {
    CleaningPipeline::default().run(df)
}
