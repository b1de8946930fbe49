//! Tests for the summary tables.

use std::path::PathBuf;

use carprep_cli::summary::{encoding_table, stage_table, vocabulary_table};
use carprep_cli::types::VocabularyResult;
use carprep_core::{CategoryCount, CleanSummary, EncodedColumn};

fn sample_summary() -> CleanSummary {
    CleanSummary {
        input_rows: 6,
        rows_after_empty_filter: 5,
        rows_after_zero_filter: 3,
        features: vec!["ABS".to_string(), "Airbag".to_string()],
        feature_source_row: Some(1),
        encoded: vec![
            EncodedColumn {
                column: "fuel".to_string(),
                top_k: 3,
                distinct: 2,
                retained: vec![
                    CategoryCount {
                        value: "Flex".to_string(),
                        count: 2,
                    },
                    CategoryCount {
                        value: "Diesel".to_string(),
                        count: 1,
                    },
                ],
                other_rows: 0,
            },
            EncodedColumn {
                column: "exchange".to_string(),
                top_k: 0,
                distinct: 1,
                retained: Vec::new(),
                other_rows: 3,
            },
        ],
        output_rows: 3,
        output_columns: 9,
    }
}

#[test]
fn test_stage_table_rows() {
    let mut table = stage_table(&sample_summary());
    table.force_no_tty();
    assert_eq!(table.row_iter().count(), 4);
    let rendered = table.to_string();
    assert!(rendered.contains("Zero-value filter"));
    assert!(rendered.contains("OUTPUT"));
}

#[test]
fn test_encoding_table_lists_retained_categories() {
    let mut table = encoding_table(&sample_summary());
    table.force_no_tty();
    assert_eq!(table.row_iter().count(), 2);
    let rendered = table.to_string();
    assert!(rendered.contains("Flex (2), Diesel (1)"));
    assert!(rendered.contains("exchange"));
}

#[test]
fn test_vocabulary_table_numbers_features() {
    let result = VocabularyResult {
        input: PathBuf::from("listings.csv"),
        extra_column: "extra".to_string(),
        source_row: 4,
        density: 21.0,
        features: vec!["Alarme".to_string(), "Trava elétrica".to_string()],
        duplicates: Vec::new(),
    };
    let mut table = vocabulary_table(&result);
    table.force_no_tty();
    assert_eq!(table.row_iter().count(), 2);
    assert!(table.to_string().contains("Trava elétrica"));
}
