//! Cell-level helpers over Polars `AnyValue`s.
//!
//! Listing tables arrive with loosely typed columns: numbers stored as text,
//! text columns with empty cells, and an extra column mixing listing strings
//! with a numeric "no extras" sentinel. These helpers give every stage the
//! same reading of a cell.

use polars::prelude::{AnyValue, Column};

/// Iterates the cells of a column in row order.
pub fn column_values(column: &Column) -> impl Iterator<Item = AnyValue<'_>> + '_ {
    (0..column.len()).map(move |idx| column.get(idx).unwrap_or(AnyValue::Null))
}

/// Converts a cell to its label form, used for dummy column names and messages.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use carprep_core::values::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(16)), "16");
/// assert_eq!(any_to_string(AnyValue::Float64(2.50)), "2.5");
/// assert_eq!(any_to_string(AnyValue::String("Manual")), "Manual");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Formats a float without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Reads a cell as a number. Strings count when they parse; nulls never do.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Reads a cell as an integer.
///
/// Floats truncate toward zero; strings must hold an integer literal.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => truncate_float(f64::from(v)),
        AnyValue::Float64(v) => truncate_float(v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

fn truncate_float(v: f64) -> Option<i64> {
    if v.is_finite() && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
        Some(v.trunc() as i64)
    } else {
        None
    }
}

/// Parses a string as `f64`, returning `None` for invalid or blank strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as `i64`, returning `None` for invalid or blank strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// True when the cell is numerically zero. Null and `""` are not zero.
pub fn is_zero(value: AnyValue<'_>) -> bool {
    any_to_f64(value) == Some(0.0)
}

/// True when the cell is the empty string (not null).
pub fn is_empty_string(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::String(s) => s.is_empty(),
        AnyValue::StringOwned(s) => s.is_empty(),
        _ => false,
    }
}

/// A cell of the extra column.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraCell<'a> {
    /// Comma-separated feature names as scraped.
    Listed(&'a str),
    /// The "no extras" sentinel. Holds the sentinel's numeric value (0 for null).
    Missing(f64),
}

impl<'a> ExtraCell<'a> {
    /// Classifies a borrowed cell.
    pub fn from_any(value: &'a AnyValue<'_>) -> Self {
        match value {
            AnyValue::String(s) => Self::Listed(*s),
            AnyValue::StringOwned(s) => Self::Listed(s.as_str()),
            other => Self::Missing(any_to_f64(other.clone()).unwrap_or(0.0)),
        }
    }

    /// Density score: character count for listings, the sentinel value otherwise.
    pub fn density(&self) -> f64 {
        match self {
            Self::Listed(text) => text.chars().count() as f64,
            Self::Missing(value) => *value,
        }
    }

    /// The listing text, if any.
    pub fn text(&self) -> Option<&'a str> {
        match self {
            Self::Listed(text) => Some(*text),
            Self::Missing(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero_numeric_and_text() {
        assert!(is_zero(AnyValue::Int64(0)));
        assert!(is_zero(AnyValue::Float64(0.0)));
        assert!(is_zero(AnyValue::String("0")));
        assert!(!is_zero(AnyValue::String("")));
        assert!(!is_zero(AnyValue::Null));
        assert!(!is_zero(AnyValue::Int32(150)));
    }

    #[test]
    fn test_any_to_i64_truncates_floats_and_rejects_decimal_text() {
        assert_eq!(any_to_i64(AnyValue::Float64(2014.9)), Some(2014));
        assert_eq!(any_to_i64(AnyValue::String(" 42000 ")), Some(42000));
        assert_eq!(any_to_i64(AnyValue::String("1.5")), None);
        assert_eq!(any_to_i64(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(any_to_i64(AnyValue::Null), None);
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn test_extra_cell_density() {
        let listed = AnyValue::String("ABS, Airbag");
        let missing = AnyValue::Int64(0);
        let null = AnyValue::Null;
        assert_eq!(ExtraCell::from_any(&listed).density(), 11.0);
        assert_eq!(ExtraCell::from_any(&missing), ExtraCell::Missing(0.0));
        assert_eq!(ExtraCell::from_any(&null).density(), 0.0);
        assert_eq!(ExtraCell::from_any(&null).text(), None);
    }

    #[test]
    fn test_density_counts_characters_not_bytes() {
        let value = AnyValue::String("Direção");
        assert_eq!(ExtraCell::from_any(&value).density(), 7.0);
    }
}
