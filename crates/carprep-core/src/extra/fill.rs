//! Indicator columns for discovered features.

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::debug;

use crate::error::{CleanError, Result, Stage};
use crate::extra::discover::Vocabulary;
use crate::values::{ExtraCell, any_to_f64, column_values};

/// Add one `Float64` column per vocabulary name, initialised to 0.0.
pub fn add_feature_columns(df: &mut DataFrame, vocabulary: &Vocabulary) -> Result<()> {
    let height = df.height();
    for name in vocabulary.names() {
        if df.column(name).is_ok() {
            return Err(CleanError::DuplicateColumn {
                stage: Stage::ExtraDiscovery,
                column: name.to_string(),
            });
        }
        df.with_column(Column::new(name.as_str().into(), vec![0.0f64; height]))?;
    }
    Ok(())
}

/// Indicator values for one feature over the extra cells.
///
/// Missing cells yield 0.0. Listed cells yield 1.0 when `feature` occurs
/// anywhere in the raw listing text (substring match, not token match) and
/// keep `current` otherwise.
pub fn feature_indicator(cells: &[ExtraCell<'_>], feature: &str, current: &[f64]) -> Vec<f64> {
    cells
        .iter()
        .zip(current)
        .map(|(cell, &value)| match cell {
            ExtraCell::Missing(_) => 0.0,
            ExtraCell::Listed(text) if text.contains(feature) => 1.0,
            ExtraCell::Listed(_) => value,
        })
        .collect()
}

/// Fill every vocabulary column from `extra_column`, then drop `extra_column`.
///
/// The feature columns must already exist (see [`add_feature_columns`]).
pub fn fill_feature_columns(
    df: &mut DataFrame,
    extra_column: &str,
    vocabulary: &Vocabulary,
) -> Result<()> {
    let filled = {
        let extra = df
            .column(extra_column)
            .map_err(|_| CleanError::missing_column(Stage::ExtraFill, extra_column))?;
        let raw: Vec<AnyValue<'_>> = column_values(extra).collect();
        let cells: Vec<ExtraCell<'_>> = raw.iter().map(ExtraCell::from_any).collect();
        let listed = cells.iter().filter(|cell| cell.text().is_some()).count();
        debug!(
            column = extra_column,
            listed,
            missing = cells.len() - listed,
            "extra cells"
        );

        let mut filled = Vec::with_capacity(vocabulary.len());
        for name in vocabulary.names() {
            let column = df
                .column(name)
                .map_err(|_| CleanError::missing_column(Stage::ExtraFill, name))?;
            let current: Vec<f64> = column_values(column)
                .map(|value| any_to_f64(value).unwrap_or(0.0))
                .collect();
            let values = feature_indicator(&cells, name, &current);
            filled.push(Column::new(name.as_str().into(), values));
        }
        filled
    };

    for column in filled {
        df.with_column(column)?;
    }
    df.drop_in_place(extra_column)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_indicator_uses_substring_match() {
        let cells = [
            ExtraCell::Listed("Ar condicionado, Alarme"),
            ExtraCell::Missing(0.0),
            ExtraCell::Listed("Trava elétrica"),
        ];
        let current = [0.0, 0.0, 0.0];
        assert_eq!(
            feature_indicator(&cells, "Ar", &current),
            vec![1.0, 0.0, 0.0]
        );
        // "Alarme" contains "Ala" even though no token equals it
        assert_eq!(
            feature_indicator(&cells, "Ala", &current),
            vec![1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_feature_indicator_resets_missing_and_keeps_unmatched() {
        let cells = [ExtraCell::Missing(0.0), ExtraCell::Listed("ABS")];
        let current = [1.0, 1.0];
        assert_eq!(
            feature_indicator(&cells, "Airbag", &current),
            vec![0.0, 1.0]
        );
    }
}
