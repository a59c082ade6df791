use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mokup_core::GenerationReport;
use mokup_model::Configuration;

pub fn print_generation(report: &GenerationReport) {
    println!("Output: {}", report.output_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Seed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    let seed = match report.seed {
        Some(seed) => Cell::new(seed),
        None => dim_cell("random"),
    };
    table.add_row(vec![Cell::new(report.rows), Cell::new(report.columns), seed]);
    println!("{table}");
}

pub fn print_saved(config: &Configuration, location: &str) {
    println!("Saved {} column(s) to {location}", config.len());
    println!("{}", configuration_table(config));
}

pub fn print_configuration(config: &Configuration, location: &str) {
    if config.is_empty() {
        println!("No saved configuration at {location}");
        return;
    }
    println!("Configuration: {location}");
    println!("{}", configuration_table(config));
}

fn configuration_table(config: &Configuration) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Values"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, (header, values)) in config.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(header).add_attribute(Attribute::Bold),
            Cell::new(values.join(", ")),
            Cell::new(values.len()),
        ]);
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
