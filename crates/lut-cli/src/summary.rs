use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lut_core::GeneratorConfig;
use lut_model::TableKind;

/// Print every supported table with its grammar and resolved paths.
pub fn print_tables(config: &GeneratorConfig) {
    println!("{}", tables_table(config));
}

fn tables_table(config: &GeneratorConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Description"),
        header_cell("Fields"),
        header_cell("Domain"),
        header_cell("Input"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for kind in TableKind::ALL {
        table.add_row(vec![
            Cell::new(kind.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(kind.description()),
            optional_cell(kind.fields_per_entry(), "varies"),
            optional_cell(kind.domain_size(), "-"),
            Cell::new(config.input_for(kind).display()),
            Cell::new(config.output_for(kind).display()),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<usize>, missing: &str) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new(missing).fg(Color::DarkGrey),
    }
}
