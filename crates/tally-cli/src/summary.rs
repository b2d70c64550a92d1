use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tally_model::FileStatus;

use crate::commands::{FileOverview, ToolResult};

/// Prints the per-file processing table and collected diagnostics to stderr.
pub fn print_summary(result: &ToolResult) {
    eprintln!("Tool: {}", result.tool.name());
    eprintln!("{}", report_line(result));
    eprintln!("{}", build_summary_table(result));
    let errors: Vec<(&str, &str)> = result
        .files
        .iter()
        .flat_map(|file| {
            file.errors
                .iter()
                .map(move |error| (file.label.as_str(), error.as_str()))
        })
        .collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for (label, error) in errors {
            eprintln!("- {label}: {error}");
        }
    }
}

fn report_line(result: &ToolResult) -> String {
    format!(
        "Report: {} ({} lines)",
        result.report_path.display(),
        result.report_lines
    )
}

/// Builds the summary table: one row per file plus a total row.
pub fn build_summary_table(result: &ToolResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Valid"),
        header_cell("Errors"),
        header_cell("Time (ms)"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_valid = 0usize;
    let mut total_errors = 0usize;
    for file in &result.files {
        total_valid += file.valid_count;
        total_errors += file.errors.len();
        table.add_row(vec![
            Cell::new(&file.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            status_cell(file.status),
            Cell::new(file.valid_count),
            count_cell(file.errors.len(), Color::Yellow),
            millis_cell(file),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_valid).add_attribute(Attribute::Bold),
        count_cell(total_errors, Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", result.elapsed.as_secs_f64() * 1000.0))
            .add_attribute(Attribute::Bold),
    ]);
    table
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

fn status_cell(status: FileStatus) -> Cell {
    match status {
        FileStatus::Processed => Cell::new("OK").fg(Color::Green),
        FileStatus::Missing => Cell::new("MISSING")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        FileStatus::Unreadable => Cell::new("UNREADABLE")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn millis_cell(file: &FileOverview) -> Cell {
    if file.status.is_processed() {
        Cell::new(format!("{:.3}", file.elapsed.as_secs_f64() * 1000.0))
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::commands::Tool;

    fn file(label: &str, status: FileStatus, valid_count: usize, errors: &[&str]) -> FileOverview {
        FileOverview {
            label: label.to_string(),
            status,
            valid_count,
            errors: errors.iter().map(|e| (*e).to_string()).collect(),
            elapsed: Duration::from_micros(250),
        }
    }

    fn statistics_result() -> ToolResult {
        ToolResult {
            tool: Tool::Statistics,
            report_path: PathBuf::from("StatisticsResults.txt"),
            report_lines: 7,
            files: vec![
                file("TC1", FileStatus::Processed, 4, &[]),
                file("TC2", FileStatus::Missing, 0, &["file not found: TC2.txt"]),
            ],
            elapsed: Duration::from_millis(1),
        }
    }

    #[test]
    fn table_has_a_row_per_file_plus_total() {
        let result = statistics_result();

        let table = build_summary_table(&result);
        let rendered = table.to_string();

        assert_eq!(table.row_iter().count(), 3);
        assert!(rendered.contains("TC1"));
        assert!(rendered.contains("MISSING"));
        assert!(rendered.contains("TOTAL"));
    }

    #[test]
    fn report_line_names_path_and_line_count() {
        assert_eq!(
            report_line(&statistics_result()),
            "Report: StatisticsResults.txt (7 lines)"
        );
    }
}
