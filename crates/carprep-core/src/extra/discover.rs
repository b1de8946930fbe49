//! Feature vocabulary discovery.

use std::collections::HashSet;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{debug, warn};

use crate::error::{CleanError, Result, Stage};
use crate::values::{ExtraCell, column_values};

/// Feature names discovered from the densest extra-column listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    source_row: usize,
    density: f64,
    tokens: Vec<String>,
    names: Vec<String>,
}

impl Vocabulary {
    /// Split a listing into its trimmed, non-empty comma-separated tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use carprep_core::extra::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_listing(3, " ABS ,Airbag,, Alarme");
    /// assert_eq!(vocabulary.names(), vec!["ABS", "Airbag", "Alarme"]);
    /// assert_eq!(vocabulary.source_row(), 3);
    /// ```
    pub fn from_listing(source_row: usize, listing: &str) -> Self {
        let tokens: Vec<String> = listing
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        let names = {
            let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
            tokens
                .iter()
                .filter(|token| seen.insert(token.as_str()))
                .cloned()
                .collect()
        };
        Self {
            source_row,
            density: listing.chars().count() as f64,
            tokens,
            names,
        }
    }

    /// Row index of the listing the vocabulary was read from.
    pub fn source_row(&self) -> usize {
        self.source_row
    }

    /// Density score of the winning row.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Tokens in listing order, duplicates included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Feature column names: tokens in first-seen order with repeats removed.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Tokens that appear more than once in the source listing.
    pub fn duplicate_tokens(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.tokens.len());
        let mut duplicates: Vec<&str> = Vec::new();
        for token in &self.tokens {
            if !seen.insert(token.as_str()) && !duplicates.contains(&token.as_str()) {
                duplicates.push(token);
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Pick the row whose extra cell has the highest density score.
///
/// Ties go to the later row. NaN scores never win.
pub fn densest_row(column: &Column) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, value) in column_values(column).enumerate() {
        let density = ExtraCell::from_any(&value).density();
        if density.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if density < current => {}
            _ => best = Some((idx, density)),
        }
    }
    best
}

/// Pick the densest listing that yields at least one token.
///
/// Ties go to the later row.
fn densest_listing(column: &Column) -> Option<Vocabulary> {
    let mut best: Option<Vocabulary> = None;
    for (idx, value) in column_values(column).enumerate() {
        let Some(listing) = ExtraCell::from_any(&value).text() else {
            continue;
        };
        let candidate = Vocabulary::from_listing(idx, listing);
        if candidate.is_empty() {
            continue;
        }
        match &best {
            Some(current) if candidate.density() < current.density() => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Discover the feature vocabulary of `extra_column`.
///
/// The vocabulary is the token list of the single densest listing, not the
/// union over all rows. When the densest cell is the missing sentinel or
/// lists no tokens, the densest listing that does list tokens is used.
/// Fails with [`CleanError::EmptyVocabulary`] when no row lists a token.
pub fn discover_vocabulary(df: &DataFrame, extra_column: &str) -> Result<Vocabulary> {
    let column = df
        .column(extra_column)
        .map_err(|_| CleanError::missing_column(Stage::ExtraDiscovery, extra_column))?;
    let empty = || CleanError::EmptyVocabulary {
        column: extra_column.to_string(),
    };
    let (row, density) = densest_row(column).ok_or_else(empty)?;
    let value = column.get(row).unwrap_or(AnyValue::Null);
    let densest = ExtraCell::from_any(&value)
        .text()
        .map(|listing| Vocabulary::from_listing(row, listing))
        .filter(|vocabulary| !vocabulary.is_empty());
    let vocabulary = match densest {
        Some(vocabulary) => vocabulary,
        None => {
            debug!(
                column = extra_column,
                row, density, "densest cell lists no features"
            );
            densest_listing(column).ok_or_else(empty)?
        }
    };
    debug!(
        column = extra_column,
        row = vocabulary.source_row(),
        density = vocabulary.density(),
        features = vocabulary.len(),
        "densest listing"
    );
    let duplicates = vocabulary.duplicate_tokens();
    if !duplicates.is_empty() {
        warn!(
            column = extra_column,
            duplicates = ?duplicates,
            "listing repeats feature names; one column per name"
        );
    }
    Ok(vocabulary)
}
