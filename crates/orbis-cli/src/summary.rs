use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use orbis_cli::pipeline::RunSummary;
use orbis_model::{Issue, IssueType};

pub fn print_summary(summary: &RunSummary) {
    println!("Run: {}", summary.run_id);
    println!("Source: {}", summary.source_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Path"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let outputs = &summary.outputs;
    table.add_row(vec![
        Cell::new("Merged"),
        path_cell(&outputs.merged),
        Cell::new(summary.merged_rows),
        Cell::new(summary.merged_columns),
    ]);
    table.add_row(vec![
        Cell::new("Cleaned"),
        path_cell(&outputs.cleaned),
        Cell::new(summary.cleaned_rows),
        Cell::new(summary.cleaned_columns),
    ]);
    table.add_row(vec![
        Cell::new("Column profile"),
        path_cell(&outputs.profile),
        Cell::new(summary.profiles.len()),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Validation issues"),
        path_cell(&outputs.issues),
        count_cell(summary.issues.len(), Color::Yellow),
        dim_cell("-"),
    ]);
    println!("{table}");

    print_issue_table(&summary.issues);

    match summary.store {
        Some(counts) => println!(
            "Analytical store: {} cleaned rows, {} issue rows",
            counts.cleaned, counts.issues
        ),
        None => println!("Analytical store: skipped"),
    }
    println!(
        "Elapsed: {:.2}s",
        summary.timings.total.as_secs_f64()
    );
}

fn print_issue_table(issues: &[Issue]) {
    if issues.is_empty() {
        println!("No data-quality issues found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Issue"),
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Pct"),
        header_cell("Details"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for issue in issues {
        let column = if issue.column.is_empty() {
            dim_cell("(rows)")
        } else {
            Cell::new(&issue.column)
        };
        table.add_row(vec![
            issue_type_cell(issue.issue_type),
            column,
            Cell::new(issue.count).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}%", issue.pct * 100.0)),
            dim_cell(&issue.details),
        ]);
    }
    println!("{table}");
}

/// Table listing eligible source files.
pub fn source_table(files: &[(String, u64)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Bytes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, size) in files {
        table.add_row(vec![Cell::new(name), Cell::new(size)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
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
        .set_width(140);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn issue_type_cell(issue_type: IssueType) -> Cell {
    let color = match issue_type {
        IssueType::SourceFileMissing | IssueType::SourceFileInvalid => Color::Red,
        IssueType::NegativeValues | IssueType::SourceFileNull | IssueType::SourceFileEmpty => {
            Color::Yellow
        }
        IssueType::MissingValues | IssueType::DuplicateRows => Color::Blue,
    };
    Cell::new(issue_type.as_str()).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn path_cell(path: &Path) -> Cell {
    Cell::new(path.display())
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: std::fmt::Display>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
