//! Error types for the cleaning pipeline.

use std::fmt;

use thiserror::Error;

/// Pipeline stage that produced an error or a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Removal of rows with empty or zero-valued required cells.
    RowFilter,
    /// Integer coercion of numeric columns.
    TypeNormalizer,
    /// Vocabulary discovery over the extra column.
    ExtraDiscovery,
    /// Indicator filling from the extra column.
    ExtraFill,
    /// Top-K one-hot encoding of a categorical column.
    TopCategory,
}

impl Stage {
    /// Returns a human-readable name for the stage.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::RowFilter => "row filter",
            Self::TypeNormalizer => "type normalizer",
            Self::ExtraDiscovery => "extra-feature discovery",
            Self::ExtraFill => "extra-feature fill",
            Self::TopCategory => "top-category encoder",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Errors raised while cleaning a listings table.
///
/// Every failure is fatal to the run; no stage substitutes defaults.
#[derive(Debug, Error)]
pub enum CleanError {
    /// A column required by a stage is absent from the table.
    #[error("{stage}: column '{column}' not found")]
    MissingColumn { stage: Stage, column: String },

    /// A value could not be coerced to an integer.
    #[error("type normalizer: column '{column}' row {row} has non-numeric value '{value}'")]
    NonNumericValue {
        column: String,
        row: usize,
        value: String,
    },

    /// The extra column holds no listing string to derive features from.
    #[error("extra-feature discovery: column '{column}' has no feature vocabulary")]
    EmptyVocabulary { column: String },

    /// A derived column name collides with a column already in the table.
    #[error("{stage}: column '{column}' already exists")]
    DuplicateColumn { stage: Stage, column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl CleanError {
    /// Returns the stage that raised the error, when known.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::MissingColumn { stage, .. } | Self::DuplicateColumn { stage, .. } => {
                Some(*stage)
            }
            Self::NonNumericValue { .. } => Some(Stage::TypeNormalizer),
            Self::EmptyVocabulary { .. } => Some(Stage::ExtraDiscovery),
            Self::DataFrame { .. } => None,
        }
    }

    pub(crate) fn missing_column(stage: Stage, column: &str) -> Self {
        Self::MissingColumn {
            stage,
            column: column.to_string(),
        }
    }
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_stage_and_column() {
        let err = CleanError::missing_column(Stage::TopCategory, "brand");
        assert_eq!(
            err.to_string(),
            "top-category encoder: column 'brand' not found"
        );
        assert_eq!(err.stage(), Some(Stage::TopCategory));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("extra".into());
        let err: CleanError = polars_err.into();
        assert!(matches!(err, CleanError::DataFrame { .. }));
        assert_eq!(err.stage(), None);
    }
}
