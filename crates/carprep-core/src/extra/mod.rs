//! Expansion of the free-text extra column into indicator columns.
//!
//! The extra column carries a comma-separated list of equipment names per
//! listing, with no fixed schema. Expansion runs in two passes:
//!
//! 1. **Discovery** reads the densest listing (longest string, last one on
//!    ties) and takes its trimmed tokens as the feature vocabulary.
//! 2. **Fill** adds one `Float64` column per feature and marks 1.0 wherever the
//!    feature name occurs in a row's raw listing text. Rows holding the
//!    missing sentinel get 0.0 everywhere. The extra column is then dropped.

pub mod discover;
pub mod fill;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::error::Result;

pub use discover::{Vocabulary, densest_row, discover_vocabulary};
pub use fill::{add_feature_columns, feature_indicator, fill_feature_columns};

/// Discover the vocabulary of `extra_column`, expand it into indicator
/// columns and drop `extra_column`.
pub fn expand_extra_features(df: &mut DataFrame, extra_column: &str) -> Result<Vocabulary> {
    let span = info_span!("extra_features", column = extra_column);
    let _guard = span.enter();
    let vocabulary = discover_vocabulary(df, extra_column)?;
    add_feature_columns(df, &vocabulary)?;
    fill_feature_columns(df, extra_column, &vocabulary)?;
    info!(
        features = vocabulary.len(),
        source_row = vocabulary.source_row(),
        "expanded extra features"
    );
    Ok(vocabulary)
}
