use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use carprep_core::CleanSummary;

use crate::types::{CleanResult, VocabularyResult};

pub fn print_clean_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    println!("{}", stage_table(&result.summary));
    println!("{}", encoding_table(&result.summary));
    println!(
        "Features ({}): {}",
        result.summary.features.len(),
        result.summary.features.join(", ")
    );
}

pub fn print_vocabulary(result: &VocabularyResult) {
    println!("Input: {}", result.input.display());
    println!(
        "Column '{}': row {} (density {})",
        result.extra_column, result.source_row, result.density
    );
    println!("{}", vocabulary_table(result));
    if !result.duplicates.is_empty() {
        eprintln!("Duplicate tokens (one column each):");
        for token in &result.duplicates {
            eprintln!("- {token}");
        }
    }
}

/// Row counts after each stage.
pub fn stage_table(summary: &CleanSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Dropped"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let empty_dropped = summary
        .input_rows
        .saturating_sub(summary.rows_after_empty_filter);
    let zero_dropped = summary
        .rows_after_empty_filter
        .saturating_sub(summary.rows_after_zero_filter);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(summary.input_rows),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Empty-cell filter"),
        Cell::new(summary.rows_after_empty_filter),
        count_cell(empty_dropped, Color::Yellow),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Zero-value filter"),
        Cell::new(summary.rows_after_zero_filter),
        count_cell(zero_dropped, Color::Yellow),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("OUTPUT")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.output_rows).add_attribute(Attribute::Bold),
        count_cell(summary.dropped_rows(), Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(summary.output_columns).add_attribute(Attribute::Bold),
    ]);
    table
}

/// One row per encoded categorical column.
pub fn encoding_table(summary: &CleanSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Top K"),
        header_cell("Distinct"),
        header_cell("Other rows"),
        header_cell("Retained"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for encoded in &summary.encoded {
        let retained = encoded
            .retained
            .iter()
            .map(|category| format!("{} ({})", category.value, category.count))
            .collect::<Vec<_>>()
            .join(", ");
        let retained_cell = if retained.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(retained)
        };
        table.add_row(vec![
            Cell::new(&encoded.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(encoded.top_k),
            Cell::new(encoded.distinct),
            count_cell(encoded.other_rows, Color::Yellow),
            retained_cell,
        ]);
    }
    table
}

/// Discovered feature names in column order.
pub fn vocabulary_table(result: &VocabularyResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Feature")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, feature) in result.features.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(feature)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
