use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rigscript_cli::pipeline::TranslateOutcome;
use rigscript_split::SplitReport;
use rigscript_translate::RunReport;

pub fn print_translate_summary(outcome: &TranslateOutcome) {
    let report = &outcome.report;
    println!("Workbook: {}", outcome.outfile.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Translator"),
        header_cell("Rows written"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total = 0usize;
    for (translator, count) in &report.outputs {
        total += count;
        table.add_row(vec![Cell::new(translator), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "{} of {} row(s) translated, {} alert(s)",
        report.translated_rows,
        report.rows,
        report.alert_count()
    );
    print_alert_table(report);
}

fn print_alert_table(report: &RunReport) {
    if report.alerts.is_empty() {
        return;
    }
    println!();
    println!("Alerts:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Translator"),
        header_cell("Alert"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for alert in &report.alerts {
        table.add_row(vec![
            Cell::new(alert.row),
            dim_cell(alert.translator),
            Cell::new(&alert.alert).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

pub fn print_split_summary(report: &SplitReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Module"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for file in &report.files {
        table.add_row(vec![
            Cell::new(&file.file_name),
            Cell::new(&file.module),
            Cell::new(file.rows),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("{} file(s) written", report.file_count());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
